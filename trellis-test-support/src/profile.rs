//! Property-test run profile driven by the environment.
//!
//! Suites share one policy: a per-suite default case count, overridable for
//! the whole run through `PROPTEST_CASES`.

use std::env;

use proptest::test_runner::Config;

/// Environment variable overriding proptest case counts.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ProptestRunProfile {
    cases: u32,
}

impl ProptestRunProfile {
    /// Loads the profile, falling back to `default_cases` when the override is
    /// absent or invalid.
    ///
    /// # Examples
    /// ```
    /// use trellis_test_support::profile::ProptestRunProfile;
    ///
    /// assert!(ProptestRunProfile::load(64).cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32) -> Self {
        let cases = match env::var(PROPTEST_CASES_ENV_KEY) {
            Ok(raw) => parse_cases(&raw).unwrap_or_else(|reason| {
                tracing::warn!(
                    env = PROPTEST_CASES_ENV_KEY,
                    raw = %raw,
                    reason = %reason,
                    "invalid property-test case override; using default",
                );
                default_cases
            }),
            Err(_) => default_cases,
        };
        Self { cases }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Proptest configuration for this profile.
    #[must_use]
    pub fn config(&self) -> Config {
        Config {
            cases: self.cases,
            ..Config::default()
        }
    }
}

/// Shorthand for `ProptestRunProfile::load(default_cases).config()`.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> Config {
    ProptestRunProfile::load(default_cases).config()
}

fn parse_cases(raw: &str) -> Result<u32, String> {
    let parsed = raw
        .trim()
        .parse::<u32>()
        .map_err(|error| format!("parse error: {error}"))?;
    if parsed == 0 {
        return Err("cases must be > 0".to_owned());
    }
    Ok(parsed)
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("1", Ok(1))]
    #[case(" 250 ", Ok(250))]
    #[case("0", Err(()))]
    #[case("-1", Err(()))]
    #[case("many", Err(()))]
    fn case_overrides_are_validated(#[case] raw: &str, #[case] expected: Result<u32, ()>) {
        assert_eq!(parse_cases(raw).map_err(drop), expected);
    }

    #[test]
    fn config_carries_case_count() {
        let profile = ProptestRunProfile { cases: 12 };
        assert_eq!(profile.config().cases, 12);
    }
}

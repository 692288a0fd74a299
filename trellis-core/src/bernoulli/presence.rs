//! Bitset recording which ordered vertex pairs are present.

/// `order * order` presence bits indexed by `u * order + v`.
#[derive(Clone, Debug, Default)]
pub(crate) struct PresenceMatrix {
    order: usize,
    words: Vec<u64>,
    len: usize,
}

impl PresenceMatrix {
    pub(crate) fn new(order: usize) -> Self {
        let bits = order.saturating_mul(order);
        Self {
            order,
            words: vec![0; bits.div_ceil(64)],
            len: 0,
        }
    }

    /// Marks `(u, v)` present. Returns `false` when it already was or when
    /// either endpoint is out of range.
    pub(crate) fn insert(&mut self, u: usize, v: usize) -> bool {
        let Some((word, mask)) = self.locate(u, v) else {
            return false;
        };
        let Some(slot) = self.words.get_mut(word) else {
            return false;
        };
        if *slot & mask != 0 {
            return false;
        }
        *slot |= mask;
        self.len += 1;
        true
    }

    pub(crate) fn contains(&self, u: usize, v: usize) -> bool {
        self.locate(u, v)
            .and_then(|(word, mask)| self.words.get(word).map(|bits| bits & mask != 0))
            .unwrap_or(false)
    }

    #[rustfmt::skip]
    pub(crate) const fn len(&self) -> usize { self.len }

    /// Present pairs in row-major order.
    pub(crate) fn iter(&self) -> PresentPairs<'_> {
        PresentPairs {
            order: self.order,
            words: &self.words,
            base: 0,
            current: 0,
        }
    }

    fn locate(&self, u: usize, v: usize) -> Option<(usize, u64)> {
        if u >= self.order || v >= self.order {
            return None;
        }
        let index = u * self.order + v;
        Some((index >> 6, 1_u64 << (index & 63)))
    }
}

/// Iterator over the present pairs of a [`PresenceMatrix`].
#[derive(Clone, Debug)]
pub(crate) struct PresentPairs<'a> {
    order: usize,
    words: &'a [u64],
    base: usize,
    current: u64,
}

impl Iterator for PresentPairs<'_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while self.current == 0 {
            let (&word, rest) = self.words.split_first()?;
            self.words = rest;
            self.current = word;
            self.base += 64;
        }
        let offset = self.current.trailing_zeros() as usize;
        self.current &= self.current - 1;
        let index = self.base - 64 + offset;
        Some((index / self.order, index % self.order))
    }
}

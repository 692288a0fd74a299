use std::cell::Cell;

use trellis_core::{Edge, GraphSource};

/// Cycle over `0..order` that counts how often its edges are enumerated.
#[derive(Debug, Default)]
pub struct CountingRing {
    order: u32,
    enumerations: Cell<usize>,
}

impl CountingRing {
    #[must_use]
    pub fn new(order: u32) -> Self {
        Self {
            order,
            enumerations: Cell::new(0),
        }
    }

    #[must_use]
    pub fn enumerations(&self) -> usize {
        self.enumerations.get()
    }
}

impl GraphSource<u32> for CountingRing {
    fn vertices(&self) -> impl Iterator<Item = u32> + '_ {
        0..self.order
    }

    fn edges(&self) -> impl Iterator<Item = Edge<u32>> + '_ {
        self.enumerations.set(self.enumerations.get() + 1);
        (0..self.order).map(|u| Edge::new(u, (u + 1) % self.order))
    }
}

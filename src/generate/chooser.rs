use rand::Rng as _;

/// Uniform random source threaded through segment placement.
///
/// Any `rand` generator works out of the box; seed it (for example with
/// `StdRng::seed_from_u64`) to get reproducible grids.
pub trait Chooser {
    /// Return an index uniformly distributed over `0..len`. Never called with `len == 0`.
    fn choose_index(&mut self, len: usize) -> usize;
}

impl<R: rand::RngCore> Chooser for R {
    fn choose_index(&mut self, len: usize) -> usize {
        self.random_range(0..len)
    }
}

/// Pick one of `items`, or `None` for the extra "no item" slot at index 0.
pub(crate) fn choose_or_none<'a, T, C: Chooser + ?Sized>(
    chooser: &mut C,
    items: &'a [T],
) -> Option<&'a T> {
    match chooser.choose_index(items.len() + 1) {
        0 => None,
        i => items.get(i - 1),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/generate/chooser.rs"]
mod tests;

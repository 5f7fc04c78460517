//! Fixed-capacity, newest-first history buffer.
//!
//! Backing store is a flat `[T; N]` that is never resized. Inserting shifts
//! every element one slot toward the tail, dropping the oldest. The shift is
//! O(N), which is fine because N is bounded by the chart width (tens of bars).

/// Newest-first buffer of exactly `N` values.
///
/// Slot 0 always holds the most recently pushed value. Slots that were never
/// written hold `T::default()`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryBuffer<T, const N: usize> {
    slots: [T; N],
}

impl<T: Copy + Default, const N: usize> HistoryBuffer<T, N> {
    /// Create a buffer with every slot set to `T::default()`.
    pub fn new() -> Self {
        const { assert!(N > 0, "history buffer needs at least one slot") };
        Self { slots: [T::default(); N] }
    }

    /// Insert `value` at slot 0, evicting the value in the last slot.
    pub fn push_front_evict(
        &mut self,
        value: T,
    ) {
        self.slots.copy_within(0..N - 1, 1);
        self.slots[0] = value;
    }

    /// Value at `index` (0 = most recent).
    ///
    /// # Panics
    ///
    /// Panics if `index >= N`. Callers always iterate within the capacity, so
    /// an out-of-range index is a programming error.
    pub fn at(
        &self,
        index: usize,
    ) -> T {
        assert!(index < N, "history index {index} out of range (capacity {N})");
        self.slots[index]
    }
}

impl<T, const N: usize> HistoryBuffer<T, N> {
    /// Number of slots. Always `N`.
    #[inline]
    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize { N }

    /// All slots, most recent first.
    #[inline]
    pub fn as_slice(&self) -> &[T] { &self.slots }

    /// Iterate over all slots, most recent first.
    pub fn iter(&self) -> core::slice::Iter<'_, T> { self.slots.iter() }
}

impl<T: Copy + Default, const N: usize> Default for HistoryBuffer<T, N> {
    fn default() -> Self { Self::new() }
}

impl<'a, T, const N: usize> IntoIterator for &'a HistoryBuffer<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter { self.slots.iter() }
}

// =============================================================================
// Tests
// =============================================================================

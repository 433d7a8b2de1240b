use log::debug;

/// Owned optional storage for a single scalar.
///
/// A cell starts out absent and owns no storage. Admitting a value
/// acquires a heap slot and writes the value into it; from then on the
/// cell is present. The slot is released exactly once, when the cell is
/// dropped, on every path. Dropping an absent cell is a no-op.
///
/// The stored value can only be observed through [`ScalarCell::value`],
/// which surfaces absence as `None`. There is no way to read storage
/// that was never acquired.
#[derive(Debug)]
pub struct ScalarCell<T> {
    slot: Option<Box<T>>,
}

impl<T> ScalarCell<T> {
    /// A cell in the initial state, with no storage acquired.
    #[must_use]
    pub fn absent() -> Self {
        Self { slot: None }
    }

    /// Acquires the heap slot and stores `value` in it.
    pub fn admit(&mut self, value: T) {
        debug!("acquiring storage for one scalar");
        self.slot = Some(Box::new(value));
    }

    /// The stored value, or `None` if nothing was ever admitted.
    #[must_use]
    pub fn value(&self) -> Option<&T> {
        self.slot.as_deref()
    }

    #[must_use]
    pub fn is_present(&self) -> bool {
        self.slot.is_some()
    }
}

impl<T> Default for ScalarCell<T> {
    fn default() -> Self {
        Self::absent()
    }
}

impl<T> Drop for ScalarCell<T> {
    fn drop(&mut self) {
        if self.slot.is_some() {
            debug!("releasing scalar storage");
        }
    }
}

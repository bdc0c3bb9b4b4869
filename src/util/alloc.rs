#![cfg(test)]

use std::cell::Cell;
use std::rc::Rc;

/// A shared counter that is incremented every time one of its clones is dropped. Used to check
/// that containers release exactly the elements they own.
#[derive(Debug, Clone, Default)]
pub struct CountedDrop(Rc<Cell<usize>>);

impl CountedDrop {
    /// Creates a counter which hasn't seen any drops yet.
    pub fn new() -> CountedDrop {
        CountedDrop::default()
    }

    /// Returns the number of drops so far, without resetting it.
    pub fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for CountedDrop {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

#[test]
fn test_counts_every_clone() {
    let counter = CountedDrop::new();
    assert_eq!(counter.count(), 0, "A new counter shouldn't have seen any drops.");

    let clones = [counter.clone(), counter.clone(), counter.clone()];
    drop(clones);
    assert_eq!(counter.count(), 3);
}

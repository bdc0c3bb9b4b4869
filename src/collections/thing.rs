use derive_more::{Display, From};

/// The value stored by the exercises in this crate. It is a plain integer wrapper whose default
/// is the sentinel `-1`, so a default-constructed Thing is recognisable as "never written".
///
/// # Examples
/// ```
/// # use teaching_collections::collections::Thing;
/// assert_eq!(Thing::default(), Thing(-1));
/// assert_eq!(Thing::from(42).to_string(), "42");
/// ```
#[derive(Debug, Display, From, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Thing(pub i32);

impl Thing {
    /// The value held by a default Thing.
    pub const SENTINEL: i32 = -1;

    pub const fn value(self) -> i32 {
        self.0
    }
}

impl Default for Thing {
    fn default() -> Self {
        Thing(Thing::SENTINEL)
    }
}

impl From<Thing> for i32 {
    fn from(value: Thing) -> Self {
        value.0
    }
}

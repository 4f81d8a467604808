use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// Wraps customer-identifying text (emails) so it never lands in logs verbatim.
///
/// `Debug` hides the value entirely. `Display` keeps just enough to correlate log
/// lines (`a***@example.com`). Serialization still emits the real value, since API
/// responses need it.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Masked<T>(pub T);

impl<T> Masked<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "********")
    }
}

impl<T: AsRef<str>> fmt::Display for Masked<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0.as_ref();
        match value.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => write!(f, "{}***@{}", first, domain),
                None => write!(f, "***@{}", domain),
            },
            None => write!(f, "********"),
        }
    }
}

impl<T: Serialize> Serialize for Masked<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

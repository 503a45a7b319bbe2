//! Top-level guard configuration: a default guard set plus labeled groups.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::model::GuardSet;

/// A group label.
///
/// On the wire a label occupies a fixed 6-byte slot, zero padded. Decoding
/// keeps the padding in the text, so `"VIP"` comes back as `"VIP\0\0\0"`.
/// Equality and hashing ignore trailing NUL padding, so both forms compare
/// equal and a decoded configuration equals the one that was encoded.
#[derive(Debug, Clone, Default)]
pub struct GroupLabel(String);

impl GroupLabel {
    /// Creates a label. Length is only checked at encode time.
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label text as stored, including any padding.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The label text with trailing NUL padding removed.
    pub fn trimmed(&self) -> &str {
        self.0.trim_end_matches('\0')
    }

    /// Encoded length of the label text in bytes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the label has no text besides padding.
    pub fn is_empty(&self) -> bool {
        self.trimmed().is_empty()
    }
}

impl PartialEq for GroupLabel {
    fn eq(&self, other: &Self) -> bool {
        self.trimmed() == other.trimmed()
    }
}

impl Eq for GroupLabel {}

impl Hash for GroupLabel {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.trimmed().hash(state);
    }
}

impl PartialEq<str> for GroupLabel {
    fn eq(&self, other: &str) -> bool {
        self.trimmed() == other.trim_end_matches('\0')
    }
}

impl PartialEq<&str> for GroupLabel {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl fmt::Display for GroupLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trimmed())
    }
}

impl From<&str> for GroupLabel {
    fn from(label: &str) -> Self {
        Self(label.to_string())
    }
}

impl From<String> for GroupLabel {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// A labeled guard set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Group {
    pub label: GroupLabel,
    pub guards: GuardSet,
}

impl Group {
    pub fn new(label: impl Into<GroupLabel>, guards: GuardSet) -> Self {
        Self {
            label: label.into(),
            guards,
        }
    }
}

/// The complete guard configuration stored on chain.
///
/// `groups: Some(vec![])` and `groups: None` encode identically; decoding
/// always yields `None` when there are no groups.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GuardConfiguration {
    pub default: GuardSet,
    pub groups: Option<Vec<Group>>,
}

impl GuardConfiguration {
    /// Creates a configuration with only a default guard set.
    pub fn new(default: GuardSet) -> Self {
        Self {
            default,
            groups: None,
        }
    }

    /// Returns the groups in order; empty when there are none.
    pub fn groups(&self) -> &[Group] {
        self.groups.as_deref().unwrap_or(&[])
    }

    /// Finds a group by label, ignoring trailing NUL padding.
    pub fn group(&self, label: &str) -> Option<&Group> {
        self.groups().iter().find(|group| group.label == label)
    }

    /// Maps `Some(vec![])` to `None`, matching what decoding produces.
    pub fn normalized(mut self) -> Self {
        if self.groups.as_ref().is_some_and(|groups| groups.is_empty()) {
            self.groups = None;
        }
        self
    }
}

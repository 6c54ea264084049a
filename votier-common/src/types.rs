use serde::{Deserialize, Serialize};
use std::fmt;

/// Milliseconds since the Unix epoch, supplied by the caller on every call.
pub type Timestamp = u64;

/// Stable 0-based position of a candidate in the roster.
pub type CandidateIndex = u32;

pub type VoteCount = u64;

/// Position of an entry in the event log. The first entry is 1.
pub type SequenceNumber = u64;

#[derive(Copy, Clone, Ord, Hash, PartialOrd, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct ElectionId(u64);

impl Default for ElectionId {
    fn default() -> Self {
        ElectionId(1)
    }
}

impl From<u64> for ElectionId {
    fn from(id: u64) -> Self {
        ElectionId(id)
    }
}

impl From<ElectionId> for u64 {
    fn from(id: ElectionId) -> Self {
        id.0
    }
}

impl ElectionId {
    pub fn get(&self) -> u64 {
        self.0
    }

    pub fn succ(&self) -> ElectionId {
        ElectionId(self.0 + 1)
    }
}

impl fmt::Display for ElectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// An already-authenticated caller, such as an account address.
/// The core never inspects its contents.
#[derive(Clone, Ord, Hash, PartialOrd, Eq, PartialEq, Debug, Serialize, Deserialize)]
pub struct Identity(String);

impl From<String> for Identity {
    fn from(id: String) -> Self {
        Identity(id)
    }
}

impl From<&str> for Identity {
    fn from(id: &str) -> Self {
        Identity(id.to_owned())
    }
}

impl Identity {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<Identity> for String {
    fn from(id: Identity) -> Self {
        id.0
    }
}

impl AsRef<str> for Identity {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl fmt::Display for Identity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

use crate::configuration::ElectionConfig;
use serde::{Deserialize, Serialize};
use votier_common::types::{CandidateIndex, ElectionId, Identity, SequenceNumber, Timestamp};

pub mod in_memory;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub enum Event {
    ContractDeployed {
        creator: Identity,
        election: ElectionId,
        config: ElectionConfig,
    },
    CandidateAdded {
        index: CandidateIndex,
        name: String,
        at: Timestamp,
    },
    VotingStarted {
        at: Timestamp,
    },
    Voted {
        identity: Identity,
        candidate: CandidateIndex,
        timestamp: Timestamp,
    },
    TieBreakerStarted {
        at: Timestamp,
    },
    VotingEnded {
        at: Timestamp,
    },
}

impl Event {
    pub fn kind(&self) -> &'static str {
        match self {
            Event::ContractDeployed { .. } => "ContractDeployed",
            Event::CandidateAdded { .. } => "CandidateAdded",
            Event::VotingStarted { .. } => "VotingStarted",
            Event::Voted { .. } => "Voted",
            Event::TieBreakerStarted { .. } => "TieBreakerStarted",
            Event::VotingEnded { .. } => "VotingEnded",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct EventLogEntry {
    sequence: SequenceNumber,
    event: Event,
}

impl EventLogEntry {
    pub fn new(sequence: SequenceNumber, event: Event) -> Self {
        EventLogEntry { sequence, event }
    }

    pub fn sequence(&self) -> SequenceNumber {
        self.sequence
    }

    pub fn event(&self) -> &Event {
        &self.event
    }

    pub fn into_event(self) -> Event {
        self.event
    }
}

/// Append-only, totally ordered record of committed election events.
pub trait EventLog {
    /// Appends `event` with the next sequence number and returns the stored entry.
    fn append(&mut self, event: Event) -> &EventLogEntry;
    fn get(&self, sequence: SequenceNumber) -> Option<&EventLogEntry>;
    /// Returns the entries from `from` to `to`, both inclusive.
    fn range(&self, from: SequenceNumber, to: SequenceNumber) -> &[EventLogEntry];
    fn entries(&self) -> &[EventLogEntry];

    /// Returns the sequence number of the last appended entry, or 0 if empty.
    fn last_sequence(&self) -> SequenceNumber;
}

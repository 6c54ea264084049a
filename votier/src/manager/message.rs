use crate::event::EventLogEntry;
use tokio::sync::oneshot;
use votier_common::error::ElectionError;
use votier_common::types::{CandidateIndex, Identity, SequenceNumber, Timestamp, VoteCount};

pub type Callback<T> = oneshot::Sender<Result<T, ElectionError>>;

pub enum Message {
    AddCandidate {
        caller: Identity,
        name: String,
        now: Timestamp,
        tx: Callback<CandidateIndex>,
    },

    Vote {
        identity: Identity,
        candidate: CandidateIndex,
        now: Timestamp,
        tx: Callback<VoteCount>,
    },

    StartVoting {
        caller: Identity,
        now: Timestamp,
        tx: Callback<()>,
    },

    StartTieBreaker {
        caller: Identity,
        now: Timestamp,
        tx: Callback<()>,
    },

    EndVoting {
        caller: Identity,
        now: Timestamp,
        tx: Callback<bool>,
    },

    Events {
        from: SequenceNumber,
        to: SequenceNumber,
        tx: oneshot::Sender<Vec<EventLogEntry>>,
    },
}

impl Message {
    pub fn to_ident(&self) -> &'static str {
        match self {
            Message::AddCandidate { .. } => "add_candidate",
            Message::Vote { .. } => "vote",
            Message::StartVoting { .. } => "start_voting",
            Message::StartTieBreaker { .. } => "start_tie_breaker",
            Message::EndVoting { .. } => "end_voting",
            Message::Events { .. } => "events",
        }
    }
}

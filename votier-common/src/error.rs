use crate::types::{CandidateIndex, ElectionId, Identity, VoteCount};
use std::error;
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ElectionError {
    InvalidConfig(&'static str),
    CapacityExceeded {
        max: u32,
    },
    InvalidName,
    UnknownCandidate(CandidateIndex),
    VotingClosed,
    AlreadyVoted(Identity),
    AlreadyStarted,
    AlreadyActive,
    NoTieToBreak,
    UnresolvedTie {
        leaders: Vec<CandidateIndex>,
        votes: VoteCount,
    },
    NoCandidates,
    Unauthorized(Identity),
    ElectionEnded,
    UnknownElection(ElectionId),
}

impl fmt::Display for ElectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ElectionError::*;
        match self {
            InvalidConfig(reason) => write!(f, "invalid election configuration: {}", reason),
            CapacityExceeded { max } => {
                write!(f, "candidate roster is full: max_candidates_count={}", max)
            }
            InvalidName => write!(f, "candidate name is empty"),
            UnknownCandidate(index) => write!(f, "unknown candidate: index={}", index),
            VotingClosed => write!(f, "voting is not open"),
            AlreadyVoted(identity) => write!(f, "identity has already voted: {}", identity),
            AlreadyStarted => write!(f, "voting has already been started"),
            AlreadyActive => write!(f, "tie-breaker is already active"),
            NoTieToBreak => write!(f, "there is no tie among the leading candidates"),
            UnresolvedTie { leaders, votes } => write!(
                f,
                "leading candidates are tied and tie-breaker is inactive: leaders={:?}, votes={}",
                leaders, votes
            ),
            NoCandidates => write!(f, "no candidates have been registered"),
            Unauthorized(identity) => {
                write!(f, "identity is not allowed to administer: {}", identity)
            }
            ElectionEnded => write!(f, "the election has ended"),
            UnknownElection(id) => write!(f, "unknown election: id={}", id),
        }
    }
}

impl error::Error for ElectionError {}

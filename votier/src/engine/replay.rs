use super::Engine;
use crate::event::{Event, EventLog, EventLogEntry};
use std::fmt;
use votier_common::error::ElectionError;
use votier_common::types::SequenceNumber;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ReplayError {
    Empty,
    NotDeployed,
    SequenceGap {
        expected: SequenceNumber,
        actual: SequenceNumber,
    },
    Rejected {
        sequence: SequenceNumber,
        error: ElectionError,
    },
}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ReplayError::*;
        match self {
            Empty => write!(f, "event log is empty"),
            NotDeployed => write!(f, "event log does not start with ContractDeployed"),
            SequenceGap { expected, actual } => write!(
                f,
                "event log is not contiguous. expected: {}, actual: {}",
                expected, actual
            ),
            Rejected { sequence, error } => {
                write!(f, "failed to replay the event at {}: ", sequence)?;
                error.fmt(f)
            }
        }
    }
}

impl std::error::Error for ReplayError {}

impl<L> Engine<L>
where
    L: EventLog + Default,
{
    /// Rebuilds an election from its event log. Every event is validated
    /// again as it is applied. The admin policy recorded at deploy time is
    /// restored; an authorizer injected with `Engine::authorizer` is not.
    pub fn replay<I>(entries: I) -> Result<Self, ReplayError>
    where
        I: IntoIterator<Item = EventLogEntry>,
    {
        let mut entries = entries.into_iter();
        let first = entries.next().ok_or(ReplayError::Empty)?;
        if first.sequence() != 1 {
            return Err(ReplayError::SequenceGap {
                expected: 1,
                actual: first.sequence(),
            });
        }
        let mut engine = match first.event() {
            Event::ContractDeployed {
                creator,
                election,
                config,
            } => Self::with_config(*election, creator.clone(), config.clone()),
            _ => return Err(ReplayError::NotDeployed),
        };
        engine.log.append(first.into_event());

        for entry in entries {
            let expected = engine.log.last_sequence() + 1;
            if entry.sequence() != expected {
                return Err(ReplayError::SequenceGap {
                    expected,
                    actual: entry.sequence(),
                });
            }
            let sequence = entry.sequence();
            engine
                .commit(entry.into_event())
                .map_err(|error| ReplayError::Rejected { sequence, error })?;
        }

        tracing::debug!(
            election = %engine.id,
            last_sequence = engine.log.last_sequence(),
            "replay an election"
        );
        Ok(engine)
    }
}

use crate::configuration::ElectionConfig;
use crate::ledger::VoterRecord;
use crate::phase::Phase;
use crate::registry::Candidate;
use crate::resolver::{self, WinnerResult};
use std::collections::BTreeMap;
use votier_common::error::ElectionError;
use votier_common::types::{ElectionId, Identity, SequenceNumber, Timestamp};

/// Committed state of an election at one point of its event log.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ElectionSnapshot {
    election: ElectionId,
    creator: Identity,
    config: ElectionConfig,
    candidates: Vec<Candidate>,
    voters: BTreeMap<Identity, VoterRecord>,
    phase: Phase,
    last_sequence: SequenceNumber,
}

impl ElectionSnapshot {
    pub(crate) fn new(
        election: ElectionId,
        creator: Identity,
        config: ElectionConfig,
        candidates: Vec<Candidate>,
        voters: BTreeMap<Identity, VoterRecord>,
        phase: Phase,
        last_sequence: SequenceNumber,
    ) -> Self {
        Self {
            election,
            creator,
            config,
            candidates,
            voters,
            phase,
            last_sequence,
        }
    }

    pub fn election(&self) -> ElectionId {
        self.election
    }

    pub fn creator(&self) -> &Identity {
        &self.creator
    }

    pub fn config(&self) -> &ElectionConfig {
        &self.config
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn voters(&self) -> &BTreeMap<Identity, VoterRecord> {
        &self.voters
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn last_sequence(&self) -> SequenceNumber {
        self.last_sequence
    }

    pub fn max_candidates_count(&self) -> u32 {
        self.config.max_candidates_count
    }

    pub fn creation_time(&self) -> Timestamp {
        self.config.creation_time
    }

    pub fn is_tie_breaker_active(&self) -> bool {
        self.phase.is_tie_breaker_active()
    }

    pub fn is_voting_open(&self, now: Timestamp) -> bool {
        self.phase.is_voting_open(now)
    }

    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.voters
            .get(identity)
            .map(VoterRecord::has_voted)
            .unwrap_or(false)
    }

    pub fn winner(&self) -> Result<WinnerResult, ElectionError> {
        resolver::resolve(&self.candidates, self.phase.state())
    }
}

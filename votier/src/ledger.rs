use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use votier_common::error::ElectionError;
use votier_common::types::{Identity, Timestamp};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct VoterRecord {
    has_voted: bool,
    voted_at: Timestamp,
}

impl VoterRecord {
    pub fn has_voted(&self) -> bool {
        self.has_voted
    }

    pub fn voted_at(&self) -> Timestamp {
        self.voted_at
    }
}

/// Remembers every identity that has voted. Records are never removed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Ledger {
    voters: BTreeMap<Identity, VoterRecord>,
}

impl Ledger {
    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.voters
            .get(identity)
            .map(VoterRecord::has_voted)
            .unwrap_or(false)
    }

    pub fn check_cast(&self, identity: &Identity) -> Result<(), ElectionError> {
        if self.has_voted(identity) {
            Err(ElectionError::AlreadyVoted(identity.clone()))
        } else {
            Ok(())
        }
    }

    pub fn cast_vote(&mut self, identity: Identity, now: Timestamp) -> Result<(), ElectionError> {
        self.check_cast(&identity)?;
        self.voters.insert(
            identity,
            VoterRecord {
                has_voted: true,
                voted_at: now,
            },
        );
        Ok(())
    }

    pub fn get(&self, identity: &Identity) -> Option<&VoterRecord> {
        self.voters.get(identity)
    }

    pub fn voters(&self) -> &BTreeMap<Identity, VoterRecord> {
        &self.voters
    }

    pub fn len(&self) -> usize {
        self.voters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.voters.is_empty()
    }
}

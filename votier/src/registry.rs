use serde::{Deserialize, Serialize};
use votier_common::error::ElectionError;
use votier_common::types::{CandidateIndex, VoteCount};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Candidate {
    index: CandidateIndex,
    name: String,
    vote_count: VoteCount,
}

impl Candidate {
    pub fn index(&self) -> CandidateIndex {
        self.index
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn vote_count(&self) -> VoteCount {
        self.vote_count
    }
}

/// Bounded roster of candidates, in registration order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Registry {
    candidates: Vec<Candidate>,
    max_candidates_count: u32,
}

impl Registry {
    pub fn new(max_candidates_count: u32) -> Self {
        Registry {
            candidates: Vec::new(),
            max_candidates_count,
        }
    }

    pub fn max_candidates_count(&self) -> u32 {
        self.max_candidates_count
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Checks whether `name` would be accepted, without adding it.
    pub fn check_add(&self, name: &str) -> Result<(), ElectionError> {
        if name.trim().is_empty() {
            return Err(ElectionError::InvalidName);
        }
        if self.candidates.len() >= self.max_candidates_count as usize {
            return Err(ElectionError::CapacityExceeded {
                max: self.max_candidates_count,
            });
        }
        Ok(())
    }

    pub fn add(&mut self, name: String) -> Result<CandidateIndex, ElectionError> {
        self.check_add(&name)?;
        let index = self.candidates.len() as CandidateIndex;
        self.candidates.push(Candidate {
            index,
            name,
            vote_count: 0,
        });
        Ok(index)
    }

    pub fn get(&self, index: CandidateIndex) -> Option<&Candidate> {
        self.candidates.get(index as usize)
    }

    /// Checks whether a vote for `index` would be accepted, without recording it.
    pub fn check_vote(&self, index: CandidateIndex) -> Result<(), ElectionError> {
        self.get(index)
            .map(|_| ())
            .ok_or(ElectionError::UnknownCandidate(index))
    }

    pub fn record_vote(&mut self, index: CandidateIndex) -> Result<VoteCount, ElectionError> {
        let candidate = self
            .candidates
            .get_mut(index as usize)
            .ok_or(ElectionError::UnknownCandidate(index))?;
        candidate.vote_count += 1;
        Ok(candidate.vote_count)
    }

    pub fn list(&self) -> &[Candidate] {
        &self.candidates
    }
}

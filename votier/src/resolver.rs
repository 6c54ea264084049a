use crate::phase::PhaseState;
use crate::registry::Candidate;
use serde::{Deserialize, Serialize};
use votier_common::error::ElectionError;
use votier_common::types::{CandidateIndex, VoteCount};

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct WinnerResult {
    pub index: CandidateIndex,
    pub name: String,
    pub votes: VoteCount,
}

impl From<&Candidate> for WinnerResult {
    fn from(candidate: &Candidate) -> Self {
        WinnerResult {
            index: candidate.index(),
            name: candidate.name().to_string(),
            votes: candidate.vote_count(),
        }
    }
}

/// Returns the candidates sharing the highest vote count, in index order,
/// together with that count.
pub fn leaders(candidates: &[Candidate]) -> Option<(Vec<&Candidate>, VoteCount)> {
    let max_votes = candidates.iter().map(Candidate::vote_count).max()?;
    let leaders = candidates
        .iter()
        .filter(|c| c.vote_count() == max_votes)
        .collect();
    Some((leaders, max_votes))
}

/// Returns true if more than one candidate holds the highest vote count.
pub fn is_tied(candidates: &[Candidate]) -> bool {
    leaders(candidates)
        .map(|(leaders, _)| leaders.len() > 1)
        .unwrap_or(false)
}

/// Picks the single winner. Tied leaders are only separated once the
/// tie-breaker is active, in which case the earliest registered wins.
pub fn resolve(candidates: &[Candidate], phase: &PhaseState) -> Result<WinnerResult, ElectionError> {
    let (leaders, votes) = leaders(candidates).ok_or(ElectionError::NoCandidates)?;
    if leaders.len() > 1 && !phase.tie_breaker_active {
        return Err(ElectionError::UnresolvedTie {
            leaders: leaders.iter().map(|c| c.index()).collect(),
            votes,
        });
    }
    leaders
        .into_iter()
        .min_by_key(|c| c.index())
        .map(WinnerResult::from)
        .ok_or(ElectionError::NoCandidates)
}

use votier::configuration::*;
use votier::AdminPolicy;
use votier_common::types::Timestamp;

/// Returns a configuration accepting at most `max_candidates_count` candidates.
pub fn capped(max_candidates_count: u32) -> Configuration {
    Configuration {
        election: ElectionConfiguration {
            max_candidates_count,
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Returns a configuration whose voting window closes at `end`.
pub fn scheduled(max_candidates_count: u32, end: Timestamp) -> Configuration {
    Configuration {
        election: ElectionConfiguration {
            max_candidates_count,
            scheduled_end_timestamp: Some(end),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Returns a configuration that only lets the creator administer the election.
pub fn creator_only(max_candidates_count: u32) -> Configuration {
    Configuration {
        election: ElectionConfiguration {
            max_candidates_count,
            admin_policy: AdminPolicy::CreatorOnly,
            ..Default::default()
        },
        ..Default::default()
    }
}

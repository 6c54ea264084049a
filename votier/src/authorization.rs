use serde::{Deserialize, Serialize};
use votier_common::types::Identity;

/// Decides whether `caller` may administer an election deployed by `creator`.
/// Administration covers adding candidates and every phase transition;
/// voting is never subject to it.
pub trait Authorize {
    fn authorized(&self, creator: &Identity, caller: &Identity) -> bool;
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminPolicy {
    Anyone,
    CreatorOnly,
}

impl Default for AdminPolicy {
    fn default() -> Self {
        AdminPolicy::Anyone
    }
}

impl Authorize for AdminPolicy {
    fn authorized(&self, creator: &Identity, caller: &Identity) -> bool {
        match self {
            AdminPolicy::Anyone => true,
            AdminPolicy::CreatorOnly => creator == caller,
        }
    }
}

impl<F> Authorize for F
where
    F: Fn(&Identity, &Identity) -> bool,
{
    fn authorized(&self, creator: &Identity, caller: &Identity) -> bool {
        self(creator, caller)
    }
}

use crate::configuration::{Configuration, ConfigurationError};
use crate::engine::Engine;
use crate::event::in_memory::InMemoryEventLog;
use crate::manager::{ElectionHandle, ElectionManager};
use std::collections::{BTreeMap, HashMap};
use tokio::sync::RwLock;
use votier_common::error::ElectionError;
use votier_common::types::{ElectionId, Identity, Timestamp};

struct Deployment {
    creator: Identity,
    handle: ElectionHandle,
}

#[derive(Default)]
struct Deployments {
    next_id: ElectionId,
    elections: BTreeMap<ElectionId, Deployment>,
    by_creator: HashMap<Identity, Vec<ElectionId>>,
}

/// Every election deployed in this process, indexed by id and by creator.
#[derive(Default)]
pub struct ElectionDirectory {
    deployments: RwLock<Deployments>,
}

impl ElectionDirectory {
    pub async fn deploy(
        &self,
        creator: Identity,
        conf: &Configuration,
        now: Timestamp,
    ) -> Result<ElectionHandle, ConfigurationError> {
        conf.validate()?;

        let mut deployments = self.deployments.write().await;
        let id = deployments.next_id;
        let engine: Engine<InMemoryEventLog> =
            Engine::deploy(id, creator.clone(), &conf.election, now)?;
        let handle = ElectionManager::spawn(engine, &conf.manager);

        deployments.next_id = id.succ();
        deployments
            .by_creator
            .entry(creator.clone())
            .or_default()
            .push(id);
        deployments.elections.insert(
            id,
            Deployment {
                creator: creator.clone(),
                handle: handle.clone(),
            },
        );
        tracing::info!(election = %id, creator = %creator, "election is deployed");

        Ok(handle)
    }

    pub async fn get(&self, id: ElectionId) -> Result<ElectionHandle, ElectionError> {
        let deployments = self.deployments.read().await;
        deployments
            .elections
            .get(&id)
            .map(|d| d.handle.clone())
            .ok_or(ElectionError::UnknownElection(id))
    }

    /// Returns the ids of the elections deployed by `creator`, oldest first.
    pub async fn created_by(&self, creator: &Identity) -> Vec<ElectionId> {
        let deployments = self.deployments.read().await;
        deployments
            .by_creator
            .get(creator)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn deployments(&self) -> Vec<(ElectionId, Identity)> {
        let deployments = self.deployments.read().await;
        deployments
            .elections
            .iter()
            .map(|(&id, d)| (id, d.creator.clone()))
            .collect()
    }
}

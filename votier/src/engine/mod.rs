pub mod replay;
pub mod snapshot;

use crate::authorization::Authorize;
use crate::configuration::{ElectionConfig, ElectionConfiguration};
use crate::event::in_memory::InMemoryEventLog;
use crate::event::{Event, EventLog, EventLogEntry};
use crate::ledger::Ledger;
use crate::phase::{Phase, Stage};
use crate::registry::{Candidate, Registry};
use crate::resolver::{self, WinnerResult};
use snapshot::ElectionSnapshot;
use votier_common::error::ElectionError;
use votier_common::types::{
    CandidateIndex, ElectionId, Identity, SequenceNumber, Timestamp, VoteCount,
};

/// A single election. Owns the roster, the voters, the phase and the event
/// log; every change to any of them goes through `commit`, which validates
/// the whole event before touching anything.
pub struct Engine<L = InMemoryEventLog> {
    id: ElectionId,
    creator: Identity,
    config: ElectionConfig,
    registry: Registry,
    ledger: Ledger,
    phase: Phase,
    log: L,
    authorizer: Box<dyn Authorize + Send + Sync>,
}

impl<L> Engine<L>
where
    L: EventLog + Default,
{
    pub fn deploy(
        id: ElectionId,
        creator: Identity,
        conf: &ElectionConfiguration,
        now: Timestamp,
    ) -> Result<Self, ElectionError> {
        let config = ElectionConfig::new(conf, now)?;
        let mut engine = Self::with_config(id, creator.clone(), config.clone());
        let entry = engine.log.append(Event::ContractDeployed {
            creator,
            election: id,
            config,
        });
        tracing::debug!(
            election = %id,
            sequence = entry.sequence(),
            "deploy an election"
        );
        Ok(engine)
    }

    fn with_config(id: ElectionId, creator: Identity, config: ElectionConfig) -> Self {
        let authorizer: Box<dyn Authorize + Send + Sync> = Box::new(config.admin_policy);
        Engine {
            id,
            creator,
            registry: Registry::new(config.max_candidates_count),
            ledger: Ledger::default(),
            phase: Phase::new(config.scheduled_end_timestamp),
            config,
            log: L::default(),
            authorizer,
        }
    }
}

impl<L> Engine<L>
where
    L: EventLog,
{
    pub fn authorizer<A>(mut self, authorizer: A) -> Self
    where
        A: Authorize + Send + Sync + 'static,
    {
        self.authorizer = Box::new(authorizer);
        self
    }

    fn authorize(&self, caller: &Identity) -> Result<(), ElectionError> {
        if self.authorizer.authorized(&self.creator, caller) {
            Ok(())
        } else {
            Err(ElectionError::Unauthorized(caller.clone()))
        }
    }

    // Applies the event to the components. Either every component is
    // updated or, on error, none is.
    fn apply(&mut self, event: &Event) -> Result<(), ElectionError> {
        match event {
            Event::ContractDeployed { .. } => Err(ElectionError::InvalidConfig(
                "election has already been deployed",
            )),
            Event::CandidateAdded { index, name, at } => {
                if self.phase.is_closed(*at) {
                    return Err(ElectionError::ElectionEnded);
                }
                self.registry.check_add(name)?;
                if *index as usize != self.registry.len() {
                    return Err(ElectionError::UnknownCandidate(*index));
                }
                self.registry.add(name.clone()).map(|_| ())
            }
            Event::VotingStarted { at } => self.phase.start_voting(*at),
            Event::Voted {
                identity,
                candidate,
                timestamp,
            } => {
                if !self.phase.accepts_votes(*timestamp) {
                    return Err(ElectionError::VotingClosed);
                }
                self.ledger.check_cast(identity)?;
                self.registry.check_vote(*candidate)?;
                self.ledger.cast_vote(identity.clone(), *timestamp)?;
                self.registry.record_vote(*candidate).map(|_| ())
            }
            Event::TieBreakerStarted { .. } => {
                let tied = resolver::is_tied(self.registry.list());
                self.phase.start_tie_breaker(tied)
            }
            Event::VotingEnded { .. } => {
                if self.phase.close() {
                    Ok(())
                } else {
                    Err(ElectionError::ElectionEnded)
                }
            }
        }
    }

    fn commit(&mut self, event: Event) -> Result<SequenceNumber, ElectionError> {
        self.apply(&event)?;
        let entry = self.log.append(event);
        tracing::debug!(
            election = %self.id,
            sequence = entry.sequence(),
            kind = entry.event().kind(),
            "commit an event"
        );
        Ok(entry.sequence())
    }

    pub fn add_candidate<N: Into<String>>(
        &mut self,
        caller: &Identity,
        name: N,
        now: Timestamp,
    ) -> Result<CandidateIndex, ElectionError> {
        self.authorize(caller)?;
        let index = self.registry.len() as CandidateIndex;
        self.commit(Event::CandidateAdded {
            index,
            name: name.into(),
            at: now,
        })?;
        Ok(index)
    }

    pub fn vote(
        &mut self,
        identity: &Identity,
        candidate: CandidateIndex,
        now: Timestamp,
    ) -> Result<VoteCount, ElectionError> {
        self.commit(Event::Voted {
            identity: identity.clone(),
            candidate,
            timestamp: now,
        })?;
        self.registry
            .get(candidate)
            .map(Candidate::vote_count)
            .ok_or(ElectionError::UnknownCandidate(candidate))
    }

    pub fn start_voting(&mut self, caller: &Identity, now: Timestamp) -> Result<(), ElectionError> {
        self.authorize(caller)?;
        self.commit(Event::VotingStarted { at: now }).map(|_| ())
    }

    pub fn start_tie_breaker(
        &mut self,
        caller: &Identity,
        now: Timestamp,
    ) -> Result<(), ElectionError> {
        self.authorize(caller)?;
        self.commit(Event::TieBreakerStarted { at: now }).map(|_| ())
    }

    /// Ends the election. Returns false if it had already ended.
    pub fn end_voting(&mut self, caller: &Identity, now: Timestamp) -> Result<bool, ElectionError> {
        self.authorize(caller)?;
        if self.phase.is_ended() {
            return Ok(false);
        }
        self.commit(Event::VotingEnded { at: now })?;
        Ok(true)
    }

    pub fn id(&self) -> ElectionId {
        self.id
    }

    pub fn creator(&self) -> &Identity {
        &self.creator
    }

    pub fn config(&self) -> &ElectionConfig {
        &self.config
    }

    pub fn candidates(&self) -> &[Candidate] {
        self.registry.list()
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

    pub fn stage(&self, now: Timestamp) -> Stage {
        self.phase.stage(now)
    }

    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.ledger.has_voted(identity)
    }

    pub fn winner(&self) -> Result<WinnerResult, ElectionError> {
        resolver::resolve(self.registry.list(), self.phase.state())
    }

    pub fn log(&self) -> &L {
        &self.log
    }

    pub fn events(&self, from: SequenceNumber, to: SequenceNumber) -> &[EventLogEntry] {
        self.log.range(from, to)
    }

    pub fn snapshot(&self) -> ElectionSnapshot {
        ElectionSnapshot::new(
            self.id,
            self.creator.clone(),
            self.config.clone(),
            self.registry.list().to_vec(),
            self.ledger.voters().clone(),
            self.phase.clone(),
            self.log.last_sequence(),
        )
    }
}

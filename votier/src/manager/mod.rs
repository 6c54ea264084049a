pub mod error;
mod message;

use crate::configuration::ManagerConfiguration;
use crate::engine::snapshot::ElectionSnapshot;
use crate::engine::Engine;
use crate::event::{EventLog, EventLogEntry};
use crate::registry::Candidate;
use crate::resolver::WinnerResult;
use error::CommandError;
use futures::{future, Stream, StreamExt};
use message::{Callback, Message};
use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, oneshot, watch};
use tokio_stream::wrappers::{errors::BroadcastStreamRecvError, BroadcastStream};
use tracing::Instrument;
use votier_common::error::ElectionError;
use votier_common::types::{
    CandidateIndex, ElectionId, Identity, SequenceNumber, Timestamp, VoteCount,
};

/// Runs an election on its own task so that commands are applied one at a
/// time, in arrival order.
pub struct ElectionManager;

impl ElectionManager {
    pub fn spawn<L>(engine: Engine<L>, conf: &ManagerConfiguration) -> ElectionHandle
    where
        L: EventLog + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(conf.command_buffer);
        let (tx_snapshot, rx_snapshot) = watch::channel(Arc::new(engine.snapshot()));
        let (tx_events, _) = broadcast::channel(conf.event_buffer);

        let process = ElectionManagerProcess {
            engine,
            rx,
            tx_snapshot,
            tx_events: tx_events.clone(),
        };
        tokio::spawn(process.run());

        ElectionHandle {
            tx,
            rx_snapshot,
            tx_events,
        }
    }
}

/// Cheap to clone. Commands are queued to the manager task; queries read
/// the latest published snapshot and never wait for commands.
#[derive(Clone)]
pub struct ElectionHandle {
    tx: mpsc::Sender<Message>,
    rx_snapshot: watch::Receiver<Arc<ElectionSnapshot>>,
    tx_events: broadcast::Sender<EventLogEntry>,
}

impl ElectionHandle {
    async fn request<T, F>(&self, make: F) -> Result<T, CommandError>
    where
        F: FnOnce(Callback<T>) -> Message,
    {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(make(tx))
            .await
            .map_err(|_| CommandError::ManagerTerminated)?;
        rx.await
            .map_err(|_| CommandError::ManagerCrashed)?
            .map_err(CommandError::Election)
    }

    pub async fn add_candidate<N: Into<String>>(
        &self,
        caller: Identity,
        name: N,
        now: Timestamp,
    ) -> Result<CandidateIndex, CommandError> {
        let name = name.into();
        self.request(|tx| Message::AddCandidate {
            caller,
            name,
            now,
            tx,
        })
        .await
    }

    pub async fn vote(
        &self,
        identity: Identity,
        candidate: CandidateIndex,
        now: Timestamp,
    ) -> Result<VoteCount, CommandError> {
        self.request(|tx| Message::Vote {
            identity,
            candidate,
            now,
            tx,
        })
        .await
    }

    pub async fn start_voting(&self, caller: Identity, now: Timestamp) -> Result<(), CommandError> {
        self.request(|tx| Message::StartVoting { caller, now, tx })
            .await
    }

    pub async fn start_tie_breaker(
        &self,
        caller: Identity,
        now: Timestamp,
    ) -> Result<(), CommandError> {
        self.request(|tx| Message::StartTieBreaker { caller, now, tx })
            .await
    }

    pub async fn end_voting(&self, caller: Identity, now: Timestamp) -> Result<bool, CommandError> {
        self.request(|tx| Message::EndVoting { caller, now, tx })
            .await
    }

    /// Returns the committed events from `from` to `to`, both inclusive.
    pub async fn events(
        &self,
        from: SequenceNumber,
        to: SequenceNumber,
    ) -> Result<Vec<EventLogEntry>, CommandError> {
        let (tx, rx) = oneshot::channel();
        self.tx
            .send(Message::Events { from, to, tx })
            .await
            .map_err(|_| CommandError::ManagerTerminated)?;
        rx.await.map_err(|_| CommandError::ManagerCrashed)
    }

    /// Streams every event committed after this call.
    pub fn subscribe(&self) -> impl Stream<Item = EventLogEntry> + Send + 'static {
        BroadcastStream::new(self.tx_events.subscribe()).filter_map(|entry| {
            future::ready(match entry {
                Ok(entry) => Some(entry),
                Err(BroadcastStreamRecvError::Lagged(n)) => {
                    tracing::warn!("event subscription is lagging: {}", n);
                    None
                }
            })
        })
    }

    pub fn snapshot(&self) -> Arc<ElectionSnapshot> {
        self.rx_snapshot.borrow().clone()
    }

    pub fn id(&self) -> ElectionId {
        self.snapshot().election()
    }

    pub fn candidates(&self) -> Vec<Candidate> {
        self.snapshot().candidates().to_vec()
    }

    pub fn max_candidates_count(&self) -> u32 {
        self.snapshot().max_candidates_count()
    }

    pub fn creation_time(&self) -> Timestamp {
        self.snapshot().creation_time()
    }

    pub fn is_tie_breaker_active(&self) -> bool {
        self.snapshot().is_tie_breaker_active()
    }

    pub fn is_voting_open(&self, now: Timestamp) -> bool {
        self.snapshot().is_voting_open(now)
    }

    pub fn has_voted(&self, identity: &Identity) -> bool {
        self.snapshot().has_voted(identity)
    }

    pub fn winner(&self) -> Result<WinnerResult, ElectionError> {
        self.snapshot().winner()
    }
}

struct ElectionManagerProcess<L> {
    engine: Engine<L>,
    rx: mpsc::Receiver<Message>,
    tx_snapshot: watch::Sender<Arc<ElectionSnapshot>>,
    tx_events: broadcast::Sender<EventLogEntry>,
}

impl<L> ElectionManagerProcess<L>
where
    L: EventLog,
{
    async fn run(mut self) {
        while let Some(msg) = self.rx.recv().await {
            let span = tracing::trace_span!(
                target: "election",
                "handle_message",
                election = %self.engine.id(),
                message = msg.to_ident(),
            );
            self.handle_message(msg).instrument(span).await;
        }
        tracing::debug!(
            election = %self.engine.id(),
            "election manager is terminated since every handle is dropped"
        );
    }

    async fn handle_message(&mut self, msg: Message) {
        let last_sequence = self.engine.log().last_sequence();

        match msg {
            Message::AddCandidate {
                caller,
                name,
                now,
                tx,
            } => {
                let res = self.engine.add_candidate(&caller, name, now);
                self.publish(last_sequence);
                reply(tx, res);
            }
            Message::Vote {
                identity,
                candidate,
                now,
                tx,
            } => {
                let res = self.engine.vote(&identity, candidate, now);
                self.publish(last_sequence);
                reply(tx, res);
            }
            Message::StartVoting { caller, now, tx } => {
                let res = self.engine.start_voting(&caller, now);
                self.publish(last_sequence);
                reply(tx, res);
            }
            Message::StartTieBreaker { caller, now, tx } => {
                let res = self.engine.start_tie_breaker(&caller, now);
                self.publish(last_sequence);
                reply(tx, res);
            }
            Message::EndVoting { caller, now, tx } => {
                let res = self.engine.end_voting(&caller, now);
                self.publish(last_sequence);
                reply(tx, res);
            }
            Message::Events { from, to, tx } => {
                if tx.send(self.engine.events(from, to).to_vec()).is_err() {
                    tracing::warn!("couldn't send the requested events");
                }
            }
        }
    }

    // Publishes everything committed after `last_sequence`. Runs before the
    // reply so that a caller sees its own command in the next query.
    fn publish(&self, last_sequence: SequenceNumber) {
        let log = self.engine.log();
        if log.last_sequence() == last_sequence {
            return;
        }
        for entry in log.range(last_sequence + 1, log.last_sequence()) {
            // no subscribers is not an error
            let _ = self.tx_events.send(entry.clone());
        }
        if self
            .tx_snapshot
            .send(Arc::new(self.engine.snapshot()))
            .is_err()
        {
            tracing::warn!("couldn't publish the snapshot since every handle is dropped");
        }
    }
}

fn reply<T>(tx: Callback<T>, res: Result<T, ElectionError>) {
    if let Err(e) = &res {
        tracing::debug!("reject a command: {}", e);
    }
    if tx.send(res).is_err() {
        tracing::warn!("couldn't notify the command sender of the result");
    }
}

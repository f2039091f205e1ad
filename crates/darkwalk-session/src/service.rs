//! The session loop: one engine, one command channel, one consumer.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};
use uuid::Uuid;

use darkwalk_core::audio::AudioSink;
use darkwalk_core::clock::Clock;
use darkwalk_core::error::DomainError;
use darkwalk_core::progress::{ProgressRecord, ProgressRepository};
use darkwalk_core::role::Role;
use darkwalk_engine::{Effect, SessionView, TriggerEngine, project};
use darkwalk_geo::Coordinate;
use darkwalk_story::StoryCatalog;

/// Commands the session loop processes, strictly one at a time.
#[derive(Debug)]
enum SessionCommand {
    SelectRole {
        role: Role,
    },
    Position {
        generation: u64,
        sample: Coordinate,
    },
    Choice {
        choice_id: String,
        reply: oneshot::Sender<Result<(), DomainError>>,
    },
    View {
        reply: oneshot::Sender<SessionView>,
    },
}

/// Collaborators and identity for one hosted session.
pub struct SessionConfig {
    /// Opaque player identifier stamped onto progress snapshots.
    pub user_id: String,
    /// The shared, read-only story catalog.
    pub catalog: Arc<StoryCatalog>,
    /// Audio playback collaborator.
    pub audio: Arc<dyn AudioSink>,
    /// Progress persistence collaborator.
    pub progress: Arc<dyn ProgressRepository>,
    /// Time source for progress timestamps.
    pub clock: Arc<dyn Clock>,
}

/// Front door to a running session.
///
/// Cloneable; all mutating calls funnel through the loop's channel, so the
/// engine's read-then-write transitions are never interleaved. Dropping
/// every handle (and subscription) closes the channel and ends the loop.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionCommand>,
    generation: Arc<AtomicU64>,
}

/// A generation-tagged position feed.
///
/// Each new subscription — and each role change — invalidates all earlier
/// ones: the loop discards any sample carrying a stale generation, so a
/// sample queued by a released watch can never reach the session that
/// replaced it.
pub struct PositionSubscription {
    commands: mpsc::Sender<SessionCommand>,
    generation: u64,
}

impl SessionHandle {
    /// Spawns the session loop and returns its handle.
    #[must_use]
    pub fn spawn(config: SessionConfig) -> Self {
        let (commands, receiver) = mpsc::channel(32);
        let generation = Arc::new(AtomicU64::new(0));
        let engine = TriggerEngine::new(Arc::clone(&config.catalog));

        tokio::spawn(run_session(
            engine,
            receiver,
            config,
            Arc::clone(&generation),
        ));

        Self {
            commands,
            generation,
        }
    }

    /// Selects (or changes) the role. Any live position subscription is
    /// invalidated; subscribe again to resume tracking.
    pub async fn select_role(&self, role: Role) {
        self.generation.fetch_add(1, Ordering::SeqCst);
        self.send(SessionCommand::SelectRole { role }).await;
    }

    /// Opens a fresh position feed, invalidating all earlier ones.
    #[must_use]
    pub fn subscribe_positions(&self) -> PositionSubscription {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        PositionSubscription {
            commands: self.commands.clone(),
            generation,
        }
    }

    /// Applies a branch choice, returning the engine's verdict.
    ///
    /// # Errors
    ///
    /// `DomainError::InvalidChoice` from the engine for an unknown or
    /// inapplicable id; `DomainError::Infrastructure` when the session
    /// loop has already shut down.
    pub async fn select_choice(&self, choice_id: &str) -> Result<(), DomainError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::Choice {
            choice_id: choice_id.to_owned(),
            reply,
        })
        .await;
        response
            .await
            .map_err(|_| DomainError::Infrastructure("session loop closed".to_owned()))?
    }

    /// Returns the current projected view of the session.
    ///
    /// # Errors
    ///
    /// `DomainError::Infrastructure` when the session loop has shut down.
    pub async fn view(&self) -> Result<SessionView, DomainError> {
        let (reply, response) = oneshot::channel();
        self.send(SessionCommand::View { reply }).await;
        response
            .await
            .map_err(|_| DomainError::Infrastructure("session loop closed".to_owned()))
    }

    async fn send(&self, command: SessionCommand) {
        if self.commands.send(command).await.is_err() {
            debug!("session loop is gone, command dropped");
        }
    }
}

impl PositionSubscription {
    /// Pushes one raw position sample into the session.
    ///
    /// Samples from a superseded subscription are silently discarded by
    /// the loop.
    pub async fn push(&self, sample: Coordinate) {
        let command = SessionCommand::Position {
            generation: self.generation,
            sample,
        };
        if self.commands.send(command).await.is_err() {
            debug!("session loop is gone, sample dropped");
        }
    }
}

/// The run-to-completion loop. Ends when every sender is dropped.
async fn run_session(
    mut engine: TriggerEngine,
    mut receiver: mpsc::Receiver<SessionCommand>,
    config: SessionConfig,
    generation: Arc<AtomicU64>,
) {
    info!(user_id = %config.user_id, "session loop started");
    while let Some(command) = receiver.recv().await {
        match command {
            SessionCommand::SelectRole { role } => {
                let effects = engine.select_role(role);
                dispatch(&config, effects);
            }
            SessionCommand::Position {
                generation: sample_generation,
                sample,
            } => {
                if sample_generation != generation.load(Ordering::SeqCst) {
                    debug!(%sample, "discarding stale position sample");
                    continue;
                }
                let effects = engine.observe_position(sample);
                dispatch(&config, effects);
            }
            SessionCommand::Choice { choice_id, reply } => {
                let result = engine.select_choice(&choice_id).map(|effects| {
                    dispatch(&config, effects);
                });
                let _ = reply.send(result);
            }
            SessionCommand::View { reply } => {
                let _ = reply.send(project(&engine));
            }
        }
    }
    info!(user_id = %config.user_id, "session loop ended");
}

/// Dispatches effects fire-and-forget: the loop never awaits a sink, and a
/// sink failure never rolls back the transition that emitted the effect.
fn dispatch(config: &SessionConfig, effects: Vec<Effect>) {
    for effect in effects {
        match effect {
            Effect::PlayAudio { audio_ref } => {
                let audio = Arc::clone(&config.audio);
                tokio::spawn(async move {
                    audio.play(&audio_ref).await;
                });
            }
            Effect::PresentChoices { choices } => {
                // Presentation pulls choices through `view`; nothing to
                // push here beyond a trace for observability.
                debug!(count = choices.len(), "choices updated");
            }
            Effect::PersistProgress {
                role,
                segment_index,
                selected_choice,
            } => {
                #[allow(clippy::cast_possible_wrap)]
                let story_segment = segment_index as i64;
                let record = ProgressRecord {
                    user_id: config.user_id.clone(),
                    role,
                    story_segment,
                    selected_choice,
                    recorded_at: config.clock.now(),
                };
                let progress = Arc::clone(&config.progress);
                let correlation_id = Uuid::new_v4();
                tokio::spawn(async move {
                    if let Err(err) = progress.save(&record).await {
                        warn!(%correlation_id, %err, "progress snapshot dropped");
                    }
                });
            }
            Effect::Status { message } => {
                info!(%message, "session status");
            }
        }
    }
}

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::{Stream, StreamExt};
use tokio::sync::RwLock;
use tracing::{debug, info, instrument};

use crate::config::PlaybackConfig;
use crate::services::common::Property;

use super::types::{BindOptions, PlaybackStatus, PlayerId, TrackSource, Volume};
use super::{MediaResource, PlaybackError, Player};

const DEFAULT_SKIP_STEP: Duration = Duration::from_secs(10);

/// Runtime settings for the playback service
#[derive(Debug, Clone)]
pub struct Config {
    /// Volume applied to newly bound tracks
    pub default_volume: Volume,

    /// Fixed jump size for skip forward/backward
    pub skip_step: Duration,

    /// Whether starting one track pauses every other playing track
    pub exclusive: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_volume: Volume::default(),
            skip_step: DEFAULT_SKIP_STEP,
            exclusive: false,
        }
    }
}

impl From<PlaybackConfig> for Config {
    fn from(config: PlaybackConfig) -> Self {
        Self {
            default_volume: Volume::new(config.default_volume),
            skip_step: Duration::try_from_secs_f64(config.skip_step_secs)
                .unwrap_or(DEFAULT_SKIP_STEP),
            exclusive: config.exclusive,
        }
    }
}

/// Playback service with reactive property-based architecture.
///
/// Owns every live player on a page, one per rendered track. Players are
/// fully independent unless exclusive mode is enabled, in which case
/// starting one pauses the others.
#[derive(Clone)]
pub struct PlaybackService {
    players: Arc<RwLock<HashMap<PlayerId, Arc<Player>>>>,
    player_list: Property<Vec<Arc<Player>>>,
    next_player: Arc<AtomicU64>,
    config: Config,
}

impl PlaybackService {
    /// Create a new playback service with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            players: Arc::new(RwLock::new(HashMap::new())),
            player_list: Property::new(Vec::new()),
            next_player: Arc::new(AtomicU64::new(0)),
            config,
        }
    }

    /// Bind a track to its media resource and register the player.
    ///
    /// The returned player is live: its properties update as the resource
    /// reports lifecycle events. Release it with [`PlaybackService::release`]
    /// when the owning view unmounts.
    ///
    /// # Errors
    /// Returns `PlaybackError::InitializationFailed` if the track url is
    /// empty.
    #[instrument(skip(self, resource, options), fields(url = %source.url))]
    pub async fn bind(
        &self,
        source: TrackSource,
        resource: Arc<dyn MediaResource>,
        options: BindOptions,
    ) -> Result<Arc<Player>, PlaybackError> {
        if source.url.trim().is_empty() {
            return Err(PlaybackError::InitializationFailed(
                "track url is empty".to_string(),
            ));
        }

        let id = PlayerId::new(self.next_player.fetch_add(1, Ordering::Relaxed));
        info!(player = %id, "binding track for preview playback");

        let player = Player::bind(id, source, resource, options, &self.config).await;

        if self.config.exclusive {
            self.enforce_exclusivity(&player);
        }

        let mut players = self.players.write().await;
        players.insert(id, Arc::clone(&player));
        self.player_list.set(Self::sorted(&players));

        Ok(player)
    }

    /// Release a player when its owning view unmounts.
    ///
    /// Pauses playback and drops the service's reference. Monitoring ends
    /// once the last caller-held reference is gone; any resource event
    /// arriving after that is discarded.
    ///
    /// # Errors
    /// Returns `PlaybackError::PlayerNotFound` if the player doesn't exist.
    #[instrument(skip(self))]
    pub async fn release(&self, player_id: &PlayerId) -> Result<(), PlaybackError> {
        let removed = {
            let mut players = self.players.write().await;
            let removed = players.remove(player_id);
            if removed.is_some() {
                self.player_list.set(Self::sorted(&players));
            }
            removed
        };

        let Some(player) = removed else {
            return Err(PlaybackError::PlayerNotFound(*player_id));
        };

        player.pause().await;
        info!(player = %player_id, "released player");

        Ok(())
    }

    /// Get a specific live player.
    ///
    /// # Errors
    /// Returns `PlaybackError::PlayerNotFound` if the player doesn't exist.
    pub async fn player(&self, player_id: &PlayerId) -> Result<Arc<Player>, PlaybackError> {
        self.players
            .read()
            .await
            .get(player_id)
            .cloned()
            .ok_or(PlaybackError::PlayerNotFound(*player_id))
    }

    /// Get the current list of live players, ordered by bind time.
    pub fn players(&self) -> Vec<Arc<Player>> {
        self.player_list.get()
    }

    /// Get a stream that emits the player list whenever tracks are bound
    /// or released.
    pub fn players_monitored(&self) -> impl Stream<Item = Vec<Arc<Player>>> + Send {
        self.player_list.watch()
    }

    /// Pause every other player whenever this one starts playing.
    ///
    /// The watcher task holds only weak references and ends when the player
    /// is dropped. A wakeup is re-checked against the player's current
    /// status so a start that was itself preempted pauses nobody.
    fn enforce_exclusivity(&self, player: &Arc<Player>) {
        let this = Arc::downgrade(player);
        let registry = Arc::downgrade(&self.players);
        let mut status_changes = player.status.watch_owned();

        tokio::spawn(async move {
            while let Some(status) = status_changes.next().await {
                if status != PlaybackStatus::Playing {
                    continue;
                }

                let Some(started) = this.upgrade() else {
                    return;
                };
                if !started.status.get().is_playing() {
                    continue;
                }

                let Some(registry) = registry.upgrade() else {
                    return;
                };

                let others: Vec<Arc<Player>> = {
                    let players = registry.read().await;
                    players
                        .values()
                        .filter(|other| other.id != started.id)
                        .cloned()
                        .collect()
                };

                for other in others {
                    if other.status.get().is_playing() {
                        debug!(paused = %other.id, started = %started.id, "exclusive mode pausing player");
                        other.pause().await;
                    }
                }
            }
        });
    }

    fn sorted(players: &HashMap<PlayerId, Arc<Player>>) -> Vec<Arc<Player>> {
        let mut list: Vec<Arc<Player>> = players.values().cloned().collect();
        list.sort_by_key(|player| player.id);
        list
    }
}

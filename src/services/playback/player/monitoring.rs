use std::pin::Pin;
use std::sync::{Arc, Weak};
use std::time::Duration;

use futures::{Stream, StreamExt};
use tracing::{debug, instrument, warn};

use crate::services::playback::types::{PlaybackStatus, PlayerNotice};
use crate::services::playback::ResourceEvent;

use super::Player;

/// How close a position report must land to a pending seek target before
/// the resource is considered to have honored the seek.
pub(crate) const SEEK_ACK_TOLERANCE: Duration = Duration::from_millis(500);

/// Applies resource lifecycle events to the reactive Player model.
pub(crate) struct PlayerMonitor;

impl PlayerMonitor {
    /// Start monitoring a player's resource events.
    ///
    /// Monitoring stops automatically when the Player is dropped.
    #[instrument(skip(player, events), fields(player = %player.id))]
    pub(crate) fn start(
        player: &Arc<Player>,
        events: Pin<Box<dyn Stream<Item = ResourceEvent> + Send>>,
    ) {
        debug!("starting resource monitoring for {}", player.id);

        let weak = Arc::downgrade(player);
        tokio::spawn(async move {
            Self::monitor_events(weak, events).await;
        });
    }

    async fn monitor_events(
        player: Weak<Player>,
        mut events: Pin<Box<dyn Stream<Item = ResourceEvent> + Send>>,
    ) {
        while let Some(event) = events.next().await {
            let Some(player) = player.upgrade() else {
                debug!("player dropped, stopping monitor");
                return;
            };

            Self::apply(&player, event).await;

            drop(player);
        }

        debug!("resource event stream ended");
    }

    async fn apply(player: &Arc<Player>, event: ResourceEvent) {
        match event {
            ResourceEvent::MetadataLoaded { duration } => {
                Self::handle_metadata(player, duration).await;
            }

            ResourceEvent::PositionTick { position } => {
                Self::handle_tick(player, position);
            }

            ResourceEvent::Ended => {
                Self::handle_ended(player);
            }

            ResourceEvent::Failed { reason } => {
                warn!(player = %player.id, "media resource failed: {reason}");
                player.pending_seek.set(None);
                player.status.set(PlaybackStatus::Errored);
                player
                    .notice
                    .set(Some(PlayerNotice::LoadFailed { reason }));
            }
        }
    }

    async fn handle_metadata(player: &Arc<Player>, duration: Duration) {
        // The length is set exactly once; later metadata reports for the
        // same track must not move it.
        if player.duration.get().is_none() {
            player.duration.set(Some(duration));
        }

        if matches!(
            player.status.get(),
            PlaybackStatus::Idle | PlaybackStatus::Loading
        ) {
            player.status.set(PlaybackStatus::Ready);

            if player.autoplay {
                player.play().await;
            }
        }
    }

    fn handle_tick(player: &Arc<Player>, position: Duration) {
        let position = match player.duration.get() {
            Some(total) => position.min(total),
            None => position,
        };

        match player.pending_seek.get() {
            Some(target) => {
                if position.abs_diff(target) <= SEEK_ACK_TOLERANCE {
                    player.pending_seek.set(None);
                    player.position.set(position);
                }
                // Otherwise this report predates the seek landing; the
                // user's target stays authoritative.
            }
            None => player.position.set(position),
        }
    }

    fn handle_ended(player: &Arc<Player>) {
        // Duplicate end reports must not re-fire the completion callback.
        if player.status.get() == PlaybackStatus::Ended {
            return;
        }

        player.pending_seek.set(None);
        player.status.set(PlaybackStatus::Ended);
        player.position.set(Duration::ZERO);

        if let Some(on_ended) = player.on_ended.as_ref() {
            on_ended();
        }
    }
}

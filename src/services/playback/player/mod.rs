pub(crate) mod monitoring;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use futures::Stream;
use serde::Serialize;
use tracing::{debug, warn};

use crate::services::common::Property;
use crate::watch_all;

use super::service::Config;
use super::types::{
    BindOptions, EndedCallback, PlaybackStatus, PlayerId, PlayerNotice, TrackSource, Volume,
};
use super::utils::format_timestamp;
use super::MediaResource;

/// Reactive playback controller for one bound track.
///
/// Each property can be watched independently for efficient UI updates.
/// Transport calls mutate state synchronously on the calling task; resource
/// lifecycle events are applied by the monitoring layer. All mutation funnels
/// through this type - the rendering layer only ever reads.
#[derive(Clone)]
pub struct Player {
    resource: Arc<dyn MediaResource>,

    /// Seek issued by the user that the resource has not yet honored.
    /// While set, resource position reports are not authoritative.
    pending_seek: Property<Option<Duration>>,

    on_ended: Option<EndedCallback>,
    autoplay: bool,
    skip_step: Duration,

    /// Unique identifier for this player instance
    pub id: PlayerId,
    /// Track descriptor supplied at bind time
    pub source: TrackSource,

    /// Current transport state
    pub status: Property<PlaybackStatus>,
    /// Current playhead position
    pub position: Property<Duration>,
    /// Total track length, set exactly once when metadata arrives
    pub duration: Property<Option<Duration>>,
    /// Chosen volume level, preserved across mute
    pub volume: Property<Volume>,
    /// Whether audible output is suppressed
    pub muted: Property<bool>,
    /// Latest non-fatal condition surfaced to the caller
    pub notice: Property<Option<PlayerNotice>>,
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Player")
            .field("id", &self.id)
            .field("url", &self.source.url)
            .field("status", &self.status.get())
            .finish_non_exhaustive()
    }
}

impl Player {
    /// Bind a track to its media resource and start event monitoring.
    ///
    /// Subscribes to the resource event stream before issuing any command so
    /// no lifecycle event is missed, applies the initial volume, and marks
    /// the host fetch as in flight. Monitoring stops automatically when the
    /// returned player is dropped.
    pub(crate) async fn bind(
        id: PlayerId,
        source: TrackSource,
        resource: Arc<dyn MediaResource>,
        options: BindOptions,
        config: &Config,
    ) -> Arc<Self> {
        let player = Arc::new(Self {
            resource,
            pending_seek: Property::new(None),
            on_ended: options.on_ended,
            autoplay: options.autoplay,
            skip_step: config.skip_step,
            id,
            source,
            status: Property::new(PlaybackStatus::Idle),
            position: Property::new(Duration::ZERO),
            duration: Property::new(None),
            volume: Property::new(config.default_volume),
            muted: Property::new(false),
            notice: Property::new(None),
        });

        let events = player.resource.events();
        player.resource.set_gain(player.volume.get()).await;
        player.status.set(PlaybackStatus::Loading);

        monitoring::PlayerMonitor::start(&player, events);

        player
    }

    /// Start or resume playback.
    ///
    /// Accepted from `Ready`, `Paused` and `Ended`; ignored otherwise. From
    /// `Ended` the track restarts at the beginning. The status switches to
    /// `Playing` optimistically; if the host rejects the start, the status
    /// reverts to its pre-call value and a [`PlayerNotice::PlaybackRejected`]
    /// is surfaced instead of an error.
    pub async fn play(&self) {
        let previous = self.status.get();
        if !previous.accepts_play() {
            debug!(player = %self.id, status = %previous, "ignoring play request");
            return;
        }

        if previous == PlaybackStatus::Ended {
            self.resource.set_position(Duration::ZERO).await;
            self.position.set(Duration::ZERO);
        }

        self.status.set(PlaybackStatus::Playing);

        match self.resource.play().await {
            Ok(()) => {
                self.notice.set(None);
            }
            Err(err) => {
                warn!(player = %self.id, "playback start rejected: {err}");
                // Only roll back our own optimistic transition; a lifecycle
                // event may have moved the status while the start was in
                // flight, and that event wins.
                if self.status.get() == PlaybackStatus::Playing {
                    self.status.set(previous);
                }
                self.notice.set(Some(PlayerNotice::PlaybackRejected {
                    reason: err.to_string(),
                }));
            }
        }
    }

    /// Pause playback, retaining the current position.
    ///
    /// Idempotent: pausing a player that is not playing changes nothing.
    pub async fn pause(&self) {
        if self.status.get() != PlaybackStatus::Playing {
            return;
        }

        self.resource.pause().await;
        self.status.set(PlaybackStatus::Paused);
    }

    /// Move the playhead to an absolute position in seconds.
    ///
    /// Out-of-range input is clamped, never rejected: the upper bound is the
    /// track length once known, else the furthest position reported so far.
    /// The new position is visible immediately for responsive scrubbing; the
    /// resource's own position reports are ignored until one acknowledges
    /// the requested target. The transport status is unchanged.
    pub async fn seek(&self, seconds: f64) {
        if self.status.get() == PlaybackStatus::Errored {
            debug!(player = %self.id, "ignoring seek on errored player");
            return;
        }

        let target = self.clamp_target(seconds);
        self.pending_seek.set(Some(target));
        self.position.set(target);
        self.resource.set_position(target).await;
    }

    /// Move the playhead relative to the current position.
    pub async fn skip_by(&self, delta_seconds: f64) {
        let current = self.position.get().as_secs_f64();
        self.seek(current + delta_seconds).await;
    }

    /// Jump forward by the configured skip step.
    pub async fn skip_forward(&self) {
        self.skip_by(self.skip_step.as_secs_f64()).await;
    }

    /// Jump backward by the configured skip step.
    pub async fn skip_backward(&self) {
        self.skip_by(-self.skip_step.as_secs_f64()).await;
    }

    /// Set the volume level.
    ///
    /// Input is clamped to `[0, 1]`. Setting zero mutes; setting any audible
    /// level unmutes. The numeric volume is preserved across mute so
    /// unmuting restores exactly the last chosen level.
    pub async fn set_volume(&self, level: f64) {
        let volume = Volume::new(level);
        self.volume.set(volume);
        self.muted.set(volume.is_silent());
        self.apply_gain().await;
    }

    /// Flip audibility without altering the chosen volume.
    pub async fn toggle_mute(&self) {
        self.muted.set(!self.muted.get());
        self.apply_gain().await;
    }

    /// Point-in-time view of the full playback state for rendering.
    pub fn snapshot(&self) -> PlaybackSnapshot {
        PlaybackSnapshot {
            status: self.status.get(),
            position: self.position.get(),
            duration: self.duration.get(),
            volume: self.volume.get(),
            muted: self.muted.get(),
            notice: self.notice.get(),
        }
    }

    /// Watch all state fields, yielding the player on any change.
    pub fn watch(&self) -> impl Stream<Item = Player> + Send {
        watch_all!(self, status, position, duration, volume, muted, notice)
    }

    async fn apply_gain(&self) {
        let gain = if self.muted.get() {
            Volume::silent()
        } else {
            self.volume.get()
        };
        self.resource.set_gain(gain).await;
    }

    fn clamp_target(&self, seconds: f64) -> Duration {
        let ceiling = self.duration.get().unwrap_or_else(|| self.position.get());

        if !seconds.is_finite() || seconds <= 0.0 {
            return Duration::ZERO;
        }

        Duration::try_from_secs_f64(seconds)
            .unwrap_or(ceiling)
            .min(ceiling)
    }
}

/// Point-in-time view of a player's state for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackSnapshot {
    /// Transport state
    pub status: PlaybackStatus,
    /// Current playhead position
    pub position: Duration,
    /// Total track length, once known
    pub duration: Option<Duration>,
    /// Chosen volume, preserved across mute
    pub volume: Volume,
    /// Whether audible output is suppressed
    pub muted: bool,
    /// Latest non-fatal condition, if any
    pub notice: Option<PlayerNotice>,
}

impl PlaybackSnapshot {
    /// Playhead formatted for the transport readout
    pub fn position_display(&self) -> String {
        format_timestamp(Some(self.position))
    }

    /// Track length formatted for the transport readout
    pub fn duration_display(&self) -> String {
        format_timestamp(self.duration)
    }
}

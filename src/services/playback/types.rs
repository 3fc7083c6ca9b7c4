use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Unique identifier for a bound player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct PlayerId(u64);

impl PlayerId {
    pub(crate) fn new(value: u64) -> Self {
        Self(value)
    }

    /// Numeric value of this identifier
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player-{}", self.0)
    }
}

/// Immutable descriptor of a single audio track.
///
/// Supplied by the page layer when a preview widget mounts; never mutated
/// by the playback layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSource {
    /// Network-resolvable audio resource
    pub url: String,

    /// Display title
    #[serde(default)]
    pub title: Option<String>,

    /// Display artist
    #[serde(default)]
    pub artist: Option<String>,

    /// Cover image shown next to the transport controls
    #[serde(default)]
    pub cover_image_url: Option<String>,
}

impl TrackSource {
    /// Create a source with no display metadata
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            title: None,
            artist: None,
            cover_image_url: None,
        }
    }
}

/// Current transport state of a player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackStatus {
    /// Bound, resource has not signaled anything yet
    Idle,

    /// Host fetch in flight, metadata not yet reported
    Loading,

    /// Metadata known, playback not started
    Ready,

    /// Audio is advancing
    Playing,

    /// Stopped at the current position
    Paused,

    /// Reached the natural end of the track
    Ended,

    /// Resource failed; the player is permanently unusable
    Errored,
}

impl PlaybackStatus {
    /// Whether audio is currently advancing
    pub fn is_playing(&self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Whether a play request can start or resume playback from this state
    pub(crate) fn accepts_play(&self) -> bool {
        matches!(self, Self::Ready | Self::Paused | Self::Ended)
    }
}

impl fmt::Display for PlaybackStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackStatus::Idle => write!(f, "idle"),
            PlaybackStatus::Loading => write!(f, "loading"),
            PlaybackStatus::Ready => write!(f, "ready"),
            PlaybackStatus::Playing => write!(f, "playing"),
            PlaybackStatus::Paused => write!(f, "paused"),
            PlaybackStatus::Ended => write!(f, "ended"),
            PlaybackStatus::Errored => write!(f, "errored"),
        }
    }
}

const DEFAULT_VOLUME: f64 = 0.7;

/// Output level of a player
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Volume(f64);

impl Volume {
    /// Create a new instance of a volume with safeguarded values
    pub fn new(value: f64) -> Self {
        if value.is_finite() {
            Self(value.clamp(0.0, 1.0))
        } else {
            Self(0.0)
        }
    }

    /// Fully attenuated output, applied while muted
    pub fn silent() -> Self {
        Self(0.0)
    }

    /// Whether this level produces no audible output
    pub fn is_silent(&self) -> bool {
        self.0 == 0.0
    }

    /// Get the volume as a percentage
    pub fn as_percentage(&self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(DEFAULT_VOLUME)
    }
}

impl Deref for Volume {
    type Target = f64;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<f64> for Volume {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

/// Non-fatal conditions surfaced to the rendering layer alongside state
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlayerNotice {
    /// The host environment refused a playback start (e.g. blocked
    /// autoplay); retrying on a later user gesture may succeed
    PlaybackRejected {
        /// Host-supplied refusal reason
        reason: String,
    },

    /// The resource cannot be fetched or decoded
    LoadFailed {
        /// Host-supplied failure reason
        reason: String,
    },
}

/// Callback invoked when a track reaches its natural end
pub type EndedCallback = Arc<dyn Fn() + Send + Sync>;

/// Caller-supplied options for binding a track
#[derive(Clone, Default)]
pub struct BindOptions {
    /// Attempt to start playback as soon as the resource is ready
    pub autoplay: bool,

    /// Invoked exactly once per playback-to-completion
    pub on_ended: Option<EndedCallback>,
}

impl fmt::Debug for BindOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BindOptions")
            .field("autoplay", &self.autoplay)
            .field("on_ended", &self.on_ended.is_some())
            .finish()
    }
}

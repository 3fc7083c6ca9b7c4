use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;
use futures::Stream;

use super::{PlaybackError, Volume};

/// Events emitted by an underlying media resource
#[derive(Debug, Clone, PartialEq)]
pub enum ResourceEvent {
    /// Metadata became available; the total track length is now known
    MetadataLoaded {
        /// Reported track length
        duration: Duration,
    },

    /// Periodic playhead report while the resource advances
    PositionTick {
        /// Reported playhead position
        position: Duration,
    },

    /// Playback reached the natural end of the track
    Ended,

    /// The resource can no longer be fetched or decoded
    Failed {
        /// Host-supplied failure reason
        reason: String,
    },
}

/// Streaming media handle behind a playback controller.
///
/// Commands flow toward the host environment; lifecycle events flow back
/// through [`MediaResource::events`]. The handle is opaque: fetching,
/// buffering and decoding are entirely the host's concern. A resource
/// instance is exclusively owned by a single player and must never be
/// shared between two controllers.
#[async_trait]
pub trait MediaResource: Send + Sync + 'static {
    /// Request playback start or resume.
    ///
    /// # Errors
    /// Returns `PlaybackError::PlaybackRejected` if the host environment
    /// refuses to start (e.g. policy-blocked autoplay). Rejection is
    /// non-fatal; a later user gesture may succeed.
    async fn play(&self) -> Result<(), PlaybackError>;

    /// Request pause, retaining the current position. Pause cannot fail.
    async fn pause(&self);

    /// Move the playhead to an absolute position.
    async fn set_position(&self, position: Duration);

    /// Apply the effective output level, with mute already folded in.
    async fn set_gain(&self, gain: Volume);

    /// Subscribe to lifecycle events from this resource.
    ///
    /// Events are delivered from subscription time onward; the stream ends
    /// when the resource is released.
    fn events(&self) -> Pin<Box<dyn Stream<Item = ResourceEvent> + Send>>;
}

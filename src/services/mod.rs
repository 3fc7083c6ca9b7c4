//! Reactive services for playback control

/// Common utilities and abstractions for services
pub mod common;
/// Embedded track preview playback service
pub mod playback;

pub use playback::{
    BindOptions, EndedCallback, MediaResource, PlaybackError, PlaybackService, PlaybackSnapshot,
    PlaybackStatus, Player, PlayerId, PlayerNotice, ResourceEvent, TrackSource, Volume,
};

use super::PlayerId;

/// Errors that can occur during playback operations
#[derive(thiserror::Error, Debug)]
pub enum PlaybackError {
    /// Player with the given ID was not found
    #[error("Player {0} not found")]
    PlayerNotFound(PlayerId),

    /// The host environment refused to start playback
    #[error("Playback start rejected: {reason}")]
    PlaybackRejected {
        /// Host-supplied refusal reason
        reason: String,
    },

    /// A track could not be bound
    #[error("Failed to bind track: {0}")]
    InitializationFailed(String),
}

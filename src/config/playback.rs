use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Playback service configuration
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume applied to newly bound tracks, in `[0, 1]`.
    pub default_volume: f64,

    /// Fixed jump size in seconds for skip forward/backward.
    pub skip_step_secs: f64,

    /// Whether starting one track pauses every other playing track.
    pub exclusive: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.7,
            skip_step_secs: 10.0,
            exclusive: false,
        }
    }
}

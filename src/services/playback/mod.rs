/// Playback error types
pub mod error;
/// Playback controller with reactive properties
pub mod player;
/// Media resource abstraction and lifecycle events
pub mod resource;
/// Playback service owning the live player set
pub mod service;
/// Track, status, volume and notice types
pub mod types;
/// Display formatting helpers
pub mod utils;

#[cfg(test)]
mod tests;

pub use error::*;
pub use player::*;
pub use resource::*;
pub use service::*;
pub use types::*;

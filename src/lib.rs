//! Voxcue - Embedded voice-sample preview playback.
//!
//! Voxcue provides the playback control layer behind embedded audio preview
//! widgets: one reactive controller per rendered track, coordinating transport
//! state against a streaming media resource whose events arrive
//! asynchronously. The main features include:
//!
//! - Per-track playback controllers with play/pause/seek/skip/volume/mute
//! - Reactive state properties for fine-grained UI updates
//! - Pluggable media resources behind a single async trait
//! - Optional cross-player exclusivity on multi-track pages
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use voxcue::config::PlaybackConfig;
//! use voxcue::services::playback::PlaybackService;
//!
//! // Create the playback service with default settings
//! let service = PlaybackService::new(PlaybackConfig::default().into());
//!
//! // No tracks bound yet
//! assert!(service.players().is_empty());
//! ```

/// Configuration schema definitions and loading.
pub mod config;

/// Core error types and result aliases.
pub mod core;

/// Reactive services for playback control.
pub mod services;

/// Tracing and log output setup.
pub mod tracing_config;

/// Re-exported core types for convenience.
pub use crate::core::{Result, VoxcueError};

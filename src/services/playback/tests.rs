//! Unit tests for playback types and display formatting
//!
//! Pure state and formatting rules - no runtime or media resource needed.

#![allow(clippy::panic)]
#![allow(clippy::unwrap_used)]

use std::time::Duration;

use crate::services::playback::utils::format_timestamp;
use crate::services::playback::{PlaybackStatus, Volume};

#[test]
fn volume_clamps_above_range() {
    assert_eq!(*Volume::new(1.4), 1.0);
}

#[test]
fn volume_clamps_below_range() {
    assert_eq!(*Volume::new(-0.3), 0.0);
}

#[test]
fn volume_rejects_non_finite_input() {
    assert_eq!(*Volume::new(f64::NAN), 0.0);
    assert_eq!(*Volume::new(f64::INFINITY), 0.0);
}

#[test]
fn volume_default_level() {
    assert_eq!(*Volume::default(), 0.7);
}

#[test]
fn volume_percentage() {
    assert_eq!(Volume::new(0.25).as_percentage(), 25.0);
}

#[test]
fn volume_silence() {
    assert!(Volume::silent().is_silent());
    assert!(Volume::new(0.0).is_silent());
    assert!(!Volume::new(0.01).is_silent());
}

#[test]
fn only_playing_status_is_playing() {
    assert!(PlaybackStatus::Playing.is_playing());

    for status in [
        PlaybackStatus::Idle,
        PlaybackStatus::Loading,
        PlaybackStatus::Ready,
        PlaybackStatus::Paused,
        PlaybackStatus::Ended,
        PlaybackStatus::Errored,
    ] {
        assert!(!status.is_playing(), "{status} must not report playing");
    }
}

#[test]
fn format_unknown_length() {
    assert_eq!(format_timestamp(None), "0:00");
}

#[test]
fn format_zero() {
    assert_eq!(format_timestamp(Some(Duration::ZERO)), "0:00");
}

#[test]
fn format_pads_seconds() {
    let position = Duration::from_secs_f64(3.2);
    assert_eq!(format_timestamp(Some(position)), "0:03");
}

#[test]
fn format_fractional_length() {
    let length = Duration::from_secs_f64(95.4);
    assert_eq!(format_timestamp(Some(length)), "1:35");
}

#[test]
fn format_exact_minute() {
    assert_eq!(format_timestamp(Some(Duration::from_secs(60))), "1:00");
}

#[test]
fn format_does_not_suppress_minutes() {
    assert_eq!(format_timestamp(Some(Duration::from_secs(605))), "10:05");
}

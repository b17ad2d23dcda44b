//! Shared helpers for the weft-layout integration tests.
//!
//! - `Recorder`: an element that counts the layout calls it receives
//! - assertions with float tolerance for computed geometry

#![allow(dead_code)]

mod assertions;
mod recorder;

pub use assertions::*;
pub use recorder::{Calls, Recorder};

use std::sync::Arc;

use weft_layout::{Element, Placeholder, Size, ThemeConfig, ThemeSettings};

/// Padding used across the integration tests.
pub const PAD: f32 = 4.0;

/// Install a test-friendly subscriber once; later calls are ignored.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn theme(padding: f32) -> Arc<ThemeSettings> {
    let config = ThemeConfig {
        padding,
        ..ThemeConfig::default()
    };
    Arc::new(ThemeSettings::new(config).expect("valid test theme"))
}

pub fn rect(width: f32, height: f32) -> Box<dyn Element> {
    Box::new(Placeholder::new(Size::new(width, height)))
}

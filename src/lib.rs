//! Scroll and hover effects for the marketing page.
//!
//! Every effect is generic over [`host::Host`]; the `web` module provides the
//! browser implementation and the wasm entry points `start` / `startWithConfig`.

pub mod config;
pub mod effects;
pub mod error;
pub mod geometry;
pub mod host;
pub mod latch;
pub mod platform;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::EffectsConfig;
pub use effects::install_all;
pub use error::EffectsError;

//! Core types: site configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::SiteConfig;
pub use rng::SampleRng;

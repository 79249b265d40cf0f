//! Configuration module

mod build;

pub use build::BuildConfig;
pub use build::Integration;

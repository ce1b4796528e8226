//! Tailmatch - nearest Tailwind color lookup
//!
//! Maps arbitrary hex colors onto the closest entries of the Tailwind CSS
//! palette using perceptual (CIEDE2000) distance.
//! This library exposes modules for the CLI and for integration testing.

pub mod assets;
pub mod error;
pub mod models;
pub mod services;
pub mod validation;

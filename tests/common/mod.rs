//! Common test utilities for sifctl CLI tests.
//!
//! Provides `TestEnv`: an isolated containers directory plus helpers to
//! create artifact fixtures and run the compiled binary against it.

pub mod env;

pub use env::*;

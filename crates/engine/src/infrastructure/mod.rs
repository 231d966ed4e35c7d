//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies.

pub mod clock;
pub mod document_store;
pub mod notifier;
pub mod ports;
pub mod settings;
pub mod world;

//! Port traits for external dependencies.
//!
//! Use cases depend on these traits, never on concrete adapters.
//! Implementations live in the sibling `infrastructure` modules;
//! mocks are generated per trait for use-case tests.

mod notifier;
mod testing;
mod world;

pub use notifier::*;
pub use testing::*;
pub use world::*;

//! Use case layer
//!
//! One struct per operation, grouped by area. Use cases hold only their
//! ports; registries are borrowed per call from the running app, which
//! keeps every transition single-writer without locks.

pub mod catalog;
pub mod kingdom;
pub mod lifecycle;

pub use catalog::CatalogUseCases;
pub use kingdom::KingdomUseCases;
pub use lifecycle::LifecycleUseCases;

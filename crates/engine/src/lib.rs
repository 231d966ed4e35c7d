//! Realmkeeper Engine library.
//!
//! This crate contains all server-side code for the Realmkeeper engine.
//!
//! ## Structure
//!
//! - `registry/` - Persistent collections backing the world state
//! - `use_cases/` - Lifecycle, governance, and catalog operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - Command dispatch entry point
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod infrastructure;
pub mod registry;
pub mod use_cases;

pub use app::App;

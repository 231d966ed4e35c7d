//! Command surface
//!
//! The engine speaks one protocol: tagged JSON commands in, tagged JSON
//! replies out. The host transport (stdin loop in the binary) stays dumb;
//! everything interesting happens in [`dispatch`].

pub mod dispatch;

pub use dispatch::dispatch;

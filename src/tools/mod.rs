//! Typed argument structs for the external tools the bootstrap invokes.
//!
//! One struct per invocation, each implementing `ToolArgs` so flag names are
//! checked by the compiler rather than discovered at runtime.

pub mod pip;
pub mod venv;

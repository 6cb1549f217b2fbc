// ABOUTME: Root module for tether - a tool-using agent loop library.
// ABOUTME: Re-exports all public types from submodules.

pub mod agent;
pub mod error;
pub mod hook;
pub mod prelude;
pub mod tool;

pub use error::AgentError;

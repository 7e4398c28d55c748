//! Client library modules.

pub mod config;
pub mod domain;
pub mod outbound;
pub mod session;
pub mod view;

/// Session probe reused by the shell and the smoke binary.
pub use session::SessionProbe;

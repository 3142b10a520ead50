//! Library components for the claims CLI: logging setup and the pipeline
//! session state machine.

pub mod logging;
pub mod session;

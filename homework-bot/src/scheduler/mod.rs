//! Scheduler layer
//!
//! Runs the poll-evaluate-notify cycle on a fixed period and decides which
//! failures are worth telling the user about.

pub mod error;
pub mod poller;

pub use poller::{LoopState, StatusPoller};

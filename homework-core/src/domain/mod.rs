//! Core domain types
//!
//! Homework records as the review API reports them, and the fixed table of
//! verdicts the bot sends for each status.

pub mod homework;

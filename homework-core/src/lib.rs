//! Homework Core
//!
//! Core types for the homework status bot.
//!
//! This crate contains:
//! - Domain types: homework statuses, their verdicts and the status parser
//! - DTOs: the shape of the review API response and its validator

pub mod domain;
pub mod dto;

pub use domain::homework::{Homework, HomeworkError, HomeworkStatus, parse_status};
pub use dto::statuses::{HomeworkStatuses, ResponseError, check_response};

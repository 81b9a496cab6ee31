//! Response DTOs
//!
//! The review API answers with loosely typed JSON. These types check its
//! shape before any record is looked at.

pub mod statuses;

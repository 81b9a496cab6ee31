//! Service layer
//!
//! Services hold the bot's business rules on top of the repositories.

mod notifier;

pub use notifier::Notifier;

//! Repository layer
//!
//! Repositories are stateless wrappers around the HTTP clients. They give
//! the poll loop narrow, trait-based interfaces so it can be exercised
//! against in-memory fakes.

mod homeworks;
mod messages;

#[cfg(test)]
pub mod fakes;

// Re-export traits
pub use homeworks::HomeworkRepository;
pub use messages::MessageRepository;

// Re-export implementations
pub use homeworks::HttpHomeworkRepository;
pub use messages::TelegramMessageRepository;

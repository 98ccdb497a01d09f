//! Row models and DTOs for the trivia tables.

pub mod category;
pub mod question;

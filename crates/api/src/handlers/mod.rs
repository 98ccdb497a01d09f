//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers go through the injected [`TriviaStore`](trivia_db::TriviaStore)
//! and map errors via [`AppError`](crate::error::AppError).

pub mod category;
pub mod fallback;
pub mod question;
pub mod quiz;

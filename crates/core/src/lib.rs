//! Domain logic for the trivia service.
//!
//! Nothing in this crate performs I/O: pagination, quiz draws, search-term
//! handling and question validation are plain functions so the storage and
//! HTTP layers can share them.

pub mod error;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod search;
pub mod types;

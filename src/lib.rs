//! Review collection service: keyword-based sentiment classification of
//! free-text feedback, backed by an append-only SQLite store.

pub mod api;
pub mod classifier;
pub mod config;
pub mod db;
pub mod error;
pub mod models;

//! quizforge-core — Quiz session engine, generator registry, and data model.
//!
//! This crate defines the fundamental data model, the question generator
//! contract, and the session state machine that the entire quizforge system
//! builds on.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod registry;

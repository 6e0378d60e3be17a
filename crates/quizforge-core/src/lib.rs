//! quizforge-core — Adaptive decision engine, data model, and session statistics.
//!
//! This crate defines the fundamental data model and the pure computations
//! that the entire quizforge system builds on: learner state classification,
//! adaptive question selection, hint policy, feedback generation, and profile
//! aggregation. Every operation is a total function of its explicit arguments;
//! nothing here holds mutable state or performs I/O besides catalog and
//! snapshot (de)serialization.

pub mod catalog;
pub mod engine;
pub mod error;
pub mod feedback;
pub mod insights;
pub mod model;
pub mod snapshot;

// src/core/mod.rs

// The `core` module holds everything that does not touch the terminal:
// the rule catalogs, the evaluator, and the HTTP fetch that feeds it.

/// Report, finding, and grade types shared by the evaluator and the app.
pub mod models;

/// Case-insensitive header map and the input validation boundary.
pub mod header_map;

/// Error types for invalid input and failed fetches.
pub mod error;

/// The static security and disclosure header catalogs.
pub mod knowledge_base;

/// Per-header value checks for known anti-patterns.
pub mod inspector;

/// Scoring, grading, and report assembly.
pub mod evaluator;

/// Retrieves response headers from a remote server.
pub mod scanner;

pub mod export;

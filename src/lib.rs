//! Morphonyms
//!
//! A word-ladder puzzle engine: transform a start word into a target word one
//! move at a time, where a move changes, adds, drops, or swaps letters and
//! every step must be a dictionary word.
//!
//! # Quick Start
//!
//! ```rust
//! use morphonyms::core::{MorphKind, classify, is_one_morph};
//!
//! assert!(is_one_morph("cold", "gold"));
//! assert_eq!(classify("COLD", "CLOD"), Some(MorphKind::Transposition));
//! assert!(!is_one_morph("COLD", "WARM"));
//! ```

// Core domain types
pub mod core;

// Recoverable-failure result type
pub mod outcome;

// Word lists and the length-partitioned cache
pub mod dictionary;

// Puzzle list, daily selection and random ladders
pub mod puzzle;

// Key-value persistence
pub mod storage;

// Streaks and personal bests
pub mod stats;

// Timed-mode countdown and scoring
pub mod timed;

// Game session and mode rules
pub mod game;

// Shortest-ladder search
pub mod solver;

// Configuration file handling
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

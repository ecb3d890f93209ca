//! # Mind Trainer Bot
//!
//! A Telegram bot for a creative-thinking course.
//!
//! ## Features
//! - Multiple-choice quizzes per course module
//! - Attention and timed speed tests
//! - Brain games with generated number sequences, logic and pattern tasks
//! - A GigaChat-backed assistant that answers course questions
//! - Scheduled training reminders
//! - Persistent results and AI history in SQLite

/// GigaChat client and course assistant
pub mod ai;
/// Bot commands, inline buttons and update handlers
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Question bank and canned texts
pub mod content;
/// Database models, connections, and migrations
pub mod database;
/// Background services: reminder triggers and health endpoint
pub mod services;
/// Per-user conversation state and the quiz/test/game engine
pub mod session;
/// Utility functions for formatting, logging, and validation
pub mod utils;

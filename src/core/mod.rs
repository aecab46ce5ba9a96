//! # Core Application Logic
//!
//! This module contains the featured view's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Book (display data)  │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`book`]: `BookSummary` and its value types
//! - [`catalog`]: the built-in featured list and JSON catalog loading
//! - [`state`]: the `App` struct, all view state in one place
//! - [`action`]: the `Action` enum and `update()`
//! - [`navigation`]: routes and the `Navigator` seam
//! - [`config`]: layered configuration

pub mod action;
pub mod book;
pub mod catalog;
pub mod config;
pub mod navigation;
pub mod state;

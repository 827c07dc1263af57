//! Todolist - an in-memory todo list
//!
//! This library provides todo items with a completion flag and a titled,
//! ordered list of them with index- and title-based access, bulk completion,
//! filtering and plain-text rendering.
//!
//! # Modules
//!
//! * [`item`] - A single todo entry
//! * [`list`] - The ordered item collection
//! * [`error`] - Errors raised by list operations
//! * [`config`] - Rendering and logging configuration
//! * [`logger`] - Logging setup

/// Configuration module for rendering and logging settings
pub mod config;

/// Shared constants and default values
pub mod constants;

/// Error types for list operations
pub mod error;

/// Status marker themes used by rendering
pub mod icons;

/// Todo item model
pub mod item;

/// Ordered, titled list of items
pub mod list;

/// Logging utilities
pub mod logger;

pub use error::ListError;
pub use item::Item;
pub use list::ItemList;

//! # filed-recipes - a flat-file recipe box
//!
//! Recipes are kept in a single plain-text file split into marker-delimited
//! sections. The library parses and writes that format and keeps the loaded
//! recipes in an in-memory store that hands out copies, tracks unsaved
//! changes and notifies subscribers when its contents change.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create .recipes.toml and an empty recipes.txt
//! recipes init
//!
//! # List recipes by number
//! recipes list
//!
//! # Show the second recipe
//! recipes show 2
//!
//! # Delete it and save the file
//! recipes delete 2 --force
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading and project discovery
//! - [`error`]: Error types and result aliases
//! - [`model`]: Data models (Recipe, Ingredient)
//! - [`storage`]: File format codec and the recipe store
//! - [`view`]: Console rendering

/// Command-line interface definitions using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.recipes.toml` configuration files and project discovery.
pub mod config;

/// Error types and result aliases.
///
/// Defines `RecipeError` enum and `Result<T>` type alias.
pub mod error;

pub mod logging;

/// Data models for recipes.
pub mod model;

/// File-based storage layer.
///
/// Parses and writes the sectioned recipes file and holds the loaded recipes.
pub mod storage;

pub mod view;

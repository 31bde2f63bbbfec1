//! Input/output operations and the ambient stack around the mosaic core
//!
//! This module contains:
//! - Command-line interface and batch runner
//! - Configuration constants and defaults
//! - Error types shared across the crate
//! - The three-way image input union
//! - Progress observation and terminal rendering

/// Command-line interface for building mosaics from files on disk
pub mod cli;
/// Named constants and runtime configuration defaults
pub mod configuration;
/// Error types for all mosaic operations
pub mod error;
/// Image input union resolved through a single materialization step
pub mod input;
/// Progress observation interface and terminal progress rendering
pub mod progress;

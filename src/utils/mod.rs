//! # Utility Modules
//!
//! This module contains utility functions and constants used throughout the
//! Portrait application.
//!
//! ## Available Utilities
//!
//! - **Constants** (`constant`) - Application-wide configuration constants
//! - **File** (`file`) - MIME allow-list, image name generation, file management
//! - **Public Path** (`public_path`) - Stored URL to on-disk path resolution

pub mod constant;
pub mod file;
pub mod public_path;

//! # HTTP Request Handlers
//!
//! This module contains all HTTP request handlers for the Portrait
//! application.
//!
//! ## Available Handlers
//!
//! - **Upload** (`upload_image`) - Store a new profile image and record its URL
//! - **Clear** (`clear_image`) - Remove the stored image and null the URL
//! - **Preflight** (`preflight`) - CORS preflight on the image endpoint
//! - **Health Check** (`health_check`) - Application health monitoring

mod clear_image;
mod health_check;
mod preflight;
mod upload_image;

pub use clear_image::*;
pub use health_check::*;
pub use preflight::*;
pub use upload_image::*;

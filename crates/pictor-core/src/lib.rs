//! Pictor Core Library
//!
//! This crate provides the domain types shared across all Pictor components:
//! the transform options accepted from the CMS, the CDN transform-operation
//! descriptors, the builder that maps one to the other, and configuration.

pub mod config;
pub mod transform;

// Re-export commonly used types
pub use config::Config;
pub use transform::{build_transformations, CropMode, CropOp, ResizeOp, TransformOp, TransformOptions};

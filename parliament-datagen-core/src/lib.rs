//! This crate provides the core logic for parliament-datagen:
//! - Typed model of scraped AWS IAM permission metadata
//! - Recursive serialization of that model into Go composite literals
//! - Assembly and formatting of the generated `parliament.go` file
//!

mod emission;
mod error;
mod model;

// Re-exports for a small, focused public API
pub use emission::{render_permissions_file, write_permissions_file, GoLiteral};
pub use error::{DatagenError, DatagenResult};
pub use model::{load_services, Condition, Privilege, Resource, ResourceTypeRef, Service};

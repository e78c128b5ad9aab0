//! Go literal emission (deterministic source generation)

pub mod go_literal;
pub mod output;

pub use go_literal::GoLiteral;
pub use output::{render_permissions_file, write_permissions_file};

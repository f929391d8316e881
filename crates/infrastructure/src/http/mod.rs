//! HTTP infrastructure utilities.

mod body_builder;

pub use body_builder::attach_body;

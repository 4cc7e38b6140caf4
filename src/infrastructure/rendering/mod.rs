//! Rendering of the canonical parameter list
//!
//! A payment request is rendered either as a GET link or as a POST form.
//! Both renderers receive the same ordered `(name, value)` pairs.

pub mod form;
pub mod query;

pub use form::FormRenderer;
pub use query::QueryRenderer;

/// Ordered `(wire name, value)` pairs
pub type Parameters = Vec<(&'static str, String)>;

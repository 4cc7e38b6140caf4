//! Infrastructure layer - output formats
//!
//! Query string and HTML form rendering, and the redirect handed to the host.

pub mod redirect;
pub mod rendering;

pub use redirect::Redirect;
pub use rendering::{FormRenderer, Parameters, QueryRenderer};

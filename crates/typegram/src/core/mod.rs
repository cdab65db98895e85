//! Core abstractions for type analysis
//!
//! The descriptor trait every introspection source implements, the type
//! signature model, shared configuration, errors and text utilities.

mod box_drawing;
mod descriptor;
mod error;
pub mod logging;
mod text;
mod type_ref;
mod types;

pub use box_drawing::*;
pub use descriptor::*;
pub use error::*;
pub use logging::*;
pub use text::*;
pub use type_ref::*;
pub use types::*;

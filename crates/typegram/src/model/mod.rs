//! Renderer-agnostic class diagram model

mod diagram;
mod member;

pub use diagram::{ClassDiagram, DisplayList};
pub use member::{ClassMember, ClassMethod, MethodParameter};

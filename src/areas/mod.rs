//! Viewer components
//!
//! - `viewer`: Output writer, settings and loading of both diff sides
//! - `workspace`: Reading documents from disk or stdin

pub mod viewer;
pub mod workspace;

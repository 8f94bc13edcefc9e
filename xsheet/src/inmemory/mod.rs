//!
//! A document that keeps its layers in memory
//!
//! This is a complete host for an exposure sheet, used by the tests and the command line tools.
//! Each layer is an RGBA image the size of the document.
//!

mod layer;
mod layers;
mod document;

pub use self::layer::*;
pub use self::layers::*;
pub use self::document::*;

//!
//! The contracts between the exposure sheet and the document that hosts it
//!

mod layer_id;
mod bounding_box;
mod export_options;
mod layer_stack;
mod document;

pub use self::layer_id::*;
pub use self::bounding_box::*;
pub use self::export_options::*;
pub use self::layer_stack::*;
pub use self::document::*;

//!
//! # The xsheet sidecar file
//!
//! An exposure sheet is stored next to the document it belongs to, in a file with the same name
//! and the extension `.xsheet`. The file holds a JSON array with one entry per frame, each entry
//! being the array `[is_key, description, layer_index]`. `layer_index` is the position of the
//! frame's layer in the document's layer list at the time the file was written, or `null` if the
//! frame has no layer.
//!

mod xsheet_entry;
mod xsheet_file;

pub use self::xsheet_entry::*;
pub use self::xsheet_file::*;

//!
//! # Exposure sheets
//!
//! An exposure sheet (or 'xsheet') is the ordered list of frames that make up a frame-by-frame
//! animation. Each frame can have a description, can be marked as a key frame and can be
//! attached to a drawing layer (a 'cel') in the host document.
//!
//! The `Animation` type is the entry point: it owns the frame list, stores it next to the
//! document as a `.xsheet` sidecar file and exports the frames as numbered PNG files. It never
//! edits the frame list itself: every change is packaged up as an `XsheetCommand` and handed to
//! the host document, which performs it and records it so it can be undone.
//!

#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;

mod error;
mod settings;
mod cel;
mod frame_list;
mod onion_skin;
mod export;
mod animation;
pub mod traits;
pub mod undo;
pub mod serializer;
pub mod inmemory;

#[cfg(test)] mod tests;

pub use self::error::*;
pub use self::settings::*;
pub use self::cel::*;
pub use self::frame_list::*;
pub use self::onion_skin::*;
pub use self::export::*;
pub use self::animation::*;
pub use self::traits::*;
pub use self::undo::*;
pub use self::serializer::*;
pub use self::inmemory::*;

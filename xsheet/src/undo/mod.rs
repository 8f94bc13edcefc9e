//!
//! # Undoable xsheet commands
//!
//! Nothing edits a frame list directly. The `Animation` facade describes each change as an
//! `XsheetEdit`, pairs it with the frame list it applies to and hands the resulting
//! `XsheetCommand` to the host document. The host performs it and keeps it in its undo history
//! (`UndoLog` is a ready-made history for hosts that don't have their own).
//!

mod xsheet_edit;
mod xsheet_command;
mod undo_log;

pub use self::xsheet_edit::*;
pub use self::xsheet_command::*;
pub use self::undo_log::*;

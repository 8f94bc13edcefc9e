use super::xsheet_command::*;
use crate::error::*;
use crate::traits::*;

///
/// The undo history for a document
///
#[derive(Clone, Debug, Default)]
pub struct UndoLog {
    /// Commands that can be undone, with the latest at the end
    undo: Vec<XsheetCommand>,

    /// Commands that have been undone and which can be re-done
    redo: Vec<XsheetCommand>,
}

impl UndoLog {
    ///
    /// Creates a new empty undo log
    ///
    pub fn new() -> UndoLog {
        UndoLog {
            undo: vec![],
            redo: vec![],
        }
    }

    ///
    /// Performs a command and adds it to the log
    ///
    /// Performing a new command discards anything that could have been re-done.
    ///
    pub fn perform(&mut self, command: XsheetCommand, layers: &mut dyn LayerStack) -> Result<(), XsheetError> {
        command.redo(layers)?;

        self.undo.push(command);
        self.redo.clear();

        Ok(())
    }

    ///
    /// Undoes the most recent command, returning false if there was nothing to undo
    ///
    pub fn undo(&mut self, layers: &mut dyn LayerStack) -> Result<bool, XsheetError> {
        let command = match self.undo.pop() {
            Some(command)   => command,
            None            => { return Ok(false); }
        };

        match command.undo(layers) {
            Ok(())  => { self.redo.push(command); Ok(true) }
            Err(e)  => { self.undo.push(command); Err(e) }
        }
    }

    ///
    /// Re-does the most recently undone command, returning false if there was nothing to redo
    ///
    pub fn redo(&mut self, layers: &mut dyn LayerStack) -> Result<bool, XsheetError> {
        let command = match self.redo.pop() {
            Some(command)   => command,
            None            => { return Ok(false); }
        };

        match command.redo(layers) {
            Ok(())  => { self.undo.push(command); Ok(true) }
            Err(e)  => { self.redo.push(command); Err(e) }
        }
    }

    #[inline] pub fn can_undo(&self) -> bool { !self.undo.is_empty() }
    #[inline] pub fn can_redo(&self) -> bool { !self.redo.is_empty() }

    ///
    /// The command that `undo()` would reverse
    ///
    pub fn next_undo(&self) -> Option<&XsheetCommand> {
        self.undo.last()
    }

    ///
    /// Forgets the entire history
    ///
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

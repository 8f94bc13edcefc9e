use super::xsheet_edit::*;
use crate::error::*;
use crate::frame_list::*;
use crate::traits::*;

///
/// An edit bound to the frame list it applies to, ready to be performed by the host document
///
#[derive(Clone, Debug)]
pub struct XsheetCommand {
    /// The frame list that this command edits
    frames: SharedFrameList,

    /// The edit to perform
    edit: XsheetEdit,
}

impl XsheetCommand {
    ///
    /// Creates a command that performs an edit on a frame list
    ///
    pub fn new(frames: SharedFrameList, edit: XsheetEdit) -> XsheetCommand {
        XsheetCommand { frames, edit }
    }

    #[inline]
    pub fn edit(&self) -> &XsheetEdit {
        &self.edit
    }

    #[inline]
    pub fn frames(&self) -> &SharedFrameList {
        &self.frames
    }

    ///
    /// Performs (or re-performs) this command
    ///
    /// If this returns an error, neither the frame list nor the layers have been changed.
    ///
    pub fn redo(&self, layers: &mut dyn LayerStack) -> Result<(), XsheetError> {
        use self::XsheetEdit::*;

        trace!("Redo {:?}", self.edit);

        self.frames.sync(|frames| -> Result<(), XsheetError> {
            match &self.edit {
                ToggleKey { frame } => {
                    frame_mut(frames, *frame)?.toggle_key();
                }

                GoToPrevious { from, .. } => {
                    frames.select(*from)?;
                    frames.goto_previous();
                    follow_selected_cel(frames, layers);
                }

                GoToNext { from, .. } => {
                    frames.select(*from)?;
                    frames.goto_next();
                    follow_selected_cel(frames, layers);
                }

                ChangeDescription { frame, new_description, .. } => {
                    frame_mut(frames, *frame)?.set_description(new_description);
                }

                AddCel { frame, layer, index, name, .. } => {
                    let frame = frame_mut(frames, *frame)?;

                    let index = (*index).min(layers.layer_ids().len());
                    layers.insert_layer(index, *layer, name);
                    layers.set_current_layer(Some(*layer));
                    frame.add_cel(*layer);
                }

                SelectFrame { to, .. } => {
                    frames.select(*to)?;
                    follow_selected_cel(frames, layers);
                }
            }

            Ok(())
        })
    }

    ///
    /// Reverses the effect of this command
    ///
    pub fn undo(&self, layers: &mut dyn LayerStack) -> Result<(), XsheetError> {
        use self::XsheetEdit::*;

        trace!("Undo {:?}", self.edit);

        self.frames.sync(|frames| -> Result<(), XsheetError> {
            match &self.edit {
                ToggleKey { frame } => {
                    frame_mut(frames, *frame)?.toggle_key();
                }

                GoToPrevious { from, previous_layer }   |
                GoToNext { from, previous_layer }       |
                SelectFrame { from, previous_layer, .. } => {
                    frames.select(*from)?;
                    layers.set_current_layer(*previous_layer);
                }

                ChangeDescription { frame, old_description, .. } => {
                    frame_mut(frames, *frame)?.set_description(old_description);
                }

                AddCel { frame, layer, previous_cel, previous_layer, .. } => {
                    let frame = frame_mut(frames, *frame)?;

                    frame.remove_cel();
                    if let Some(previous_cel) = previous_cel {
                        frame.add_cel(*previous_cel);
                    }

                    layers.remove_layer(*layer);
                    layers.set_current_layer(*previous_layer);
                }
            }

            Ok(())
        })
    }
}

///
/// Retrieves a frame, or an error if it's not in the list
///
fn frame_mut(frames: &mut FrameList, index: usize) -> Result<&mut Frame, XsheetError> {
    frames.frame_mut(index).ok_or(XsheetError::FrameOutOfRange(index))
}

///
/// Makes the layer shown at the selected frame the one that's drawn on
///
fn follow_selected_cel(frames: &FrameList, layers: &mut dyn LayerStack) {
    if let Some(cel) = frames.cel_at(frames.selected_index()) {
        layers.set_current_layer(Some(cel));
    }
}

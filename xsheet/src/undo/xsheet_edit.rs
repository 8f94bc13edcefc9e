use crate::traits::*;

///
/// An edit to an exposure sheet
///
/// Each edit carries the state it needs to be applied and to be reversed: this is captured when
/// the edit is created, so the edit can be undone and redone any number of times.
///
#[derive(Clone, Debug, PartialEq)]
pub enum XsheetEdit {
    /// Marks or unmarks a frame as a key frame
    ToggleKey { frame: usize },

    /// Moves the selection from the frame `from` to the one before it
    GoToPrevious { from: usize, previous_layer: Option<LayerId> },

    /// Moves the selection from the frame `from` to the one after it
    GoToNext { from: usize, previous_layer: Option<LayerId> },

    /// Replaces the description of a frame
    ChangeDescription { frame: usize, old_description: String, new_description: String },

    /// Creates a new layer at position `index` in the document and attaches it to a frame
    AddCel { frame: usize, layer: LayerId, index: usize, name: String, previous_cel: Option<LayerId>, previous_layer: Option<LayerId> },

    /// Moves the selection from the frame `from` to the frame `to`
    SelectFrame { from: usize, to: usize, previous_layer: Option<LayerId> },
}

impl XsheetEdit {
    ///
    /// A short name for this edit, as it might appear in an 'Undo' menu item
    ///
    pub fn name(&self) -> &'static str {
        use self::XsheetEdit::*;

        match self {
            ToggleKey { .. }            => "Toggle key frame",
            GoToPrevious { .. }         => "Previous frame",
            GoToNext { .. }             => "Next frame",
            ChangeDescription { .. }    => "Change description",
            AddCel { .. }               => "Add cel",
            SelectFrame { .. }          => "Select frame",
        }
    }
}

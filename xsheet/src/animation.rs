use super::cel::*;
use super::error::*;
use super::export::*;
use super::frame_list::*;
use super::settings::*;
use super::traits::*;
use super::undo::*;
use super::serializer::*;

use std::path::{Path, PathBuf};

///
/// The exposure sheet for a document
///
/// The animation owns the frame list, but never changes it directly: the editing methods
/// describe what should change and send it to the document as an `XsheetCommand`, so every
/// change goes through the document's undo history.
///
pub struct Animation {
    /// The settings used when creating new frame lists
    settings: XsheetSettings,

    /// The frames in this animation
    frames: SharedFrameList,

    /// Set once `clear_xsheet()` has created a fresh frame list
    cleared: bool,
}

impl Default for Animation {
    fn default() -> Animation {
        Animation::new(XsheetSettings::default())
    }
}

impl Animation {
    ///
    /// Creates a new animation with a default-length frame list
    ///
    pub fn new(settings: XsheetSettings) -> Animation {
        let frames = SharedFrameList::new(Self::new_frame_list(&settings));

        Animation {
            settings:   settings,
            frames:     frames,
            cleared:    false,
        }
    }

    fn new_frame_list(settings: &XsheetSettings) -> FrameList {
        FrameList::new(settings.frame_count, settings.opacities)
    }

    #[inline]
    pub fn settings(&self) -> &XsheetSettings {
        &self.settings
    }

    ///
    /// The frame list for this animation
    ///
    pub fn frames(&self) -> SharedFrameList {
        self.frames.clone()
    }

    ///
    /// True once `clear_xsheet()` has been called (this never goes back to false)
    ///
    #[inline]
    pub fn is_cleared(&self) -> bool {
        self.cleared
    }

    ///
    /// Replaces the frame list with a new empty one
    ///
    /// Commands that were created for the old frame list still refer to it, so undoing them after
    /// clearing has no effect on the new list.
    ///
    pub fn clear_xsheet(&mut self) {
        self.frames     = SharedFrameList::new(Self::new_frame_list(&self.settings));
        self.cleared    = true;

        debug!("Cleared xsheet ({} frames)", self.settings.frame_count);
    }

    ///
    /// Writes the frame list to the sidecar file for the document at `path`
    ///
    pub fn save_xsheet<Doc: ?Sized+XsheetDocument, P: AsRef<Path>>(&self, doc: &Doc, path: P) -> Result<PathBuf, XsheetError> {
        let layers = doc.layer_ids();

        self.frames.sync(|frames| save_xsheet_file(path, frames, &layers))
    }

    ///
    /// Reads the frame list from the sidecar file for the document at `path`, or starts a new
    /// frame list if the document doesn't have a sidecar file yet
    ///
    pub fn load_xsheet<Doc: ?Sized+XsheetDocument, P: AsRef<Path>>(&mut self, doc: &Doc, path: P) -> Result<XsheetLoad, XsheetError> {
        let layers  = doc.layer_ids();
        let load    = self.frames.sync(|frames| load_xsheet_file(path, frames, &layers))?;

        if let XsheetLoad::Missing(sidecar) = &load {
            warn!("No xsheet at {}: starting a new one", sidecar.display());
            self.clear_xsheet();
        }

        Ok(load)
    }

    ///
    /// Exports every frame as a numbered PNG file
    ///
    /// The files are named after `path` with the frame number (starting at 1) added: exporting to
    /// `anim.png` creates `anim-001.png`, `anim-002.png` and so on. Every frame must have a drawing
    /// to show, otherwise this stops with `NoCelAtFrame` at the first frame without one.
    ///
    pub fn save_png<Doc: ?Sized+XsheetDocument, P: AsRef<Path>>(&self, doc: &Doc, path: P, options: &PngExportOptions) -> Result<Vec<PathBuf>, XsheetError> {
        let frames      = self.frames.snapshot();
        let doc_bbox    = doc.effective_bbox();
        let mut written = vec![];

        for (index, filename) in numbered_frame_paths(path, frames.len()).into_iter().enumerate() {
            let cel = frames.cel_at(index).ok_or(XsheetError::NoCelAtFrame(index))?;

            doc.save_layer_png(cel, &filename, doc_bbox, options)?;
            written.push(filename);
        }

        info!("Exported {} frames", written.len());

        Ok(written)
    }

    ///
    /// Lists the frames along with their positions in the frame list
    ///
    pub fn get_xsheet_list(&self) -> Vec<(usize, AnimationCel)> {
        self.frames.sync(|frames| {
            (0..frames.len())
                .filter_map(|index| frames.cel(index).map(|cel| (index, cel)))
                .collect::<Vec<_>>()
        })
    }

    ///
    /// Marks or unmarks the selected frame as a key frame
    ///
    pub fn toggle_key<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc) -> Result<(), XsheetError> {
        let frame = self.selected_index();

        self.dispatch(doc, XsheetEdit::ToggleKey { frame })
    }

    ///
    /// Selects the frame before the current one
    ///
    pub fn previous_frame<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc) -> Result<(), XsheetError> {
        let from            = self.selected_index();
        let previous_layer  = doc.current_layer();

        self.dispatch(doc, XsheetEdit::GoToPrevious { from, previous_layer })
    }

    ///
    /// Selects the frame after the current one
    ///
    pub fn next_frame<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc) -> Result<(), XsheetError> {
        let from            = self.selected_index();
        let previous_layer  = doc.current_layer();

        self.dispatch(doc, XsheetEdit::GoToNext { from, previous_layer })
    }

    ///
    /// Changes the description of the selected frame
    ///
    pub fn change_description<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc, new_description: &str) -> Result<(), XsheetError> {
        let (frame, old_description) = self.frames.sync(|frames| {
            let frame = frames.selected_index();
            (frame, frames.frame(frame).map(|frame| frame.description.clone()).unwrap_or_default())
        });

        self.dispatch(doc, XsheetEdit::ChangeDescription { frame, old_description, new_description: new_description.to_string() })
    }

    ///
    /// Adds a new layer to the document and attaches it to the selected frame
    ///
    /// Does nothing (returning false) if the selected frame already has a layer.
    ///
    pub fn add_cel<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc) -> Result<bool, XsheetError> {
        // TODO: the UI should stop the user from adding a cel to a frame that has one, rather than this call ignoring the request
        let (frame, previous_cel) = self.frames.sync(|frames| (frames.selected_index(), frames.get_selected().and_then(|frame| frame.cel)));
        if let Some(existing) = previous_cel {
            warn!("Frame {} already has cel {}: not adding another", frame+1, existing);
            return Ok(false);
        }

        let layer           = doc.new_layer_id();
        let index           = doc.layer_ids().len();
        let previous_layer  = doc.current_layer();
        let name            = format!("CEL {}", frame+1);

        self.dispatch(doc, XsheetEdit::AddCel { frame, layer, index, name, previous_cel, previous_layer })?;

        Ok(true)
    }

    ///
    /// Selects a frame
    ///
    pub fn select_frame<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc, index: usize) -> Result<(), XsheetError> {
        let from            = self.selected_index();
        let previous_layer  = doc.current_layer();

        self.dispatch(doc, XsheetEdit::SelectFrame { from, to: index, previous_layer })
    }

    #[inline]
    fn selected_index(&self) -> usize {
        self.frames.sync(|frames| frames.selected_index())
    }

    ///
    /// Sends an edit to the document
    ///
    fn dispatch<Doc: ?Sized+XsheetDocument>(&self, doc: &mut Doc, edit: XsheetEdit) -> Result<(), XsheetError> {
        debug!("{}: {:?}", edit.name(), edit);

        doc.do_command(XsheetCommand::new(self.frames.clone(), edit))
    }
}

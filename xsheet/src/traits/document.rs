use super::layer_id::*;
use super::layer_stack::*;
use super::bounding_box::*;
use super::export_options::*;
use crate::error::*;
use crate::undo::*;

use std::path::Path;

///
/// The document that hosts an exposure sheet
///
/// The document owns the layers and the undo history: the xsheet only refers to layers by ID and
/// sends all of its changes to the document as commands.
///
pub trait XsheetDocument : LayerStack {
    ///
    /// Allocates an ID for a layer that has not been added to the document yet
    ///
    fn new_layer_id(&mut self) -> LayerId;

    ///
    /// Performs a command and records it in the document's undo history
    ///
    fn do_command(&mut self, command: XsheetCommand) -> Result<(), XsheetError>;

    ///
    /// The region of the document that should be exported
    ///
    fn effective_bbox(&self) -> BoundingBox;

    ///
    /// Saves the region `bbox` of a layer as a PNG file
    ///
    fn save_layer_png(&self, layer: LayerId, path: &Path, bbox: BoundingBox, options: &PngExportOptions) -> Result<(), XsheetError>;
}

use super::layers::*;
use super::layer::*;
use crate::error::*;
use crate::traits::*;
use crate::undo::*;

use image::ImageFormat;

use std::path::Path;

///
/// A document whose layers are stored in memory, with its own undo history
///
#[derive(Clone, Debug)]
pub struct InMemoryDocument {
    /// The layers in this document
    layers: InMemoryLayers,

    /// The commands that can be undone or redone
    undo_log: UndoLog,

    /// The ID to give the next new layer
    next_layer_id: u64,
}

impl InMemoryDocument {
    ///
    /// Creates a document with no layers
    ///
    pub fn new(width: u32, height: u32) -> InMemoryDocument {
        InMemoryDocument {
            layers:         InMemoryLayers::new(width, height),
            undo_log:       UndoLog::new(),
            next_layer_id:  0,
        }
    }

    ///
    /// Adds a layer to the top of the document (outside of the undo history) and makes it the current layer
    ///
    pub fn add_layer(&mut self, name: &str) -> LayerId {
        let layer = self.new_layer_id();
        let index = self.layers.len();

        self.layers.insert_layer(index, layer, name);
        self.layers.set_current_layer(Some(layer));

        layer
    }

    #[inline] pub fn layers(&self) -> &InMemoryLayers { &self.layers }
    #[inline] pub fn undo_log(&self) -> &UndoLog { &self.undo_log }

    pub fn layer(&self, id: LayerId) -> Option<&InMemoryLayer> {
        self.layers.layer(id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut InMemoryLayer> {
        self.layers.layer_mut(id)
    }

    ///
    /// Undoes the last command, returning false if there was nothing to undo
    ///
    pub fn undo(&mut self) -> Result<bool, XsheetError> {
        self.undo_log.undo(&mut self.layers)
    }

    ///
    /// Re-does the last command that was undone, returning false if there was nothing to redo
    ///
    pub fn redo(&mut self) -> Result<bool, XsheetError> {
        self.undo_log.redo(&mut self.layers)
    }
}

impl LayerStack for InMemoryDocument {
    fn layer_ids(&self) -> Vec<LayerId> { self.layers.layer_ids() }
    fn current_layer(&self) -> Option<LayerId> { self.layers.current_layer() }
    fn set_current_layer(&mut self, layer: Option<LayerId>) { self.layers.set_current_layer(layer) }
    fn insert_layer(&mut self, index: usize, layer: LayerId, name: &str) { self.layers.insert_layer(index, layer, name) }
    fn remove_layer(&mut self, layer: LayerId) -> Option<usize> { self.layers.remove_layer(layer) }
}

impl XsheetDocument for InMemoryDocument {
    fn new_layer_id(&mut self) -> LayerId {
        let id = self.next_layer_id;
        self.next_layer_id += 1;

        LayerId(id)
    }

    fn do_command(&mut self, command: XsheetCommand) -> Result<(), XsheetError> {
        self.undo_log.perform(command, &mut self.layers)
    }

    fn effective_bbox(&self) -> BoundingBox {
        let drawn = self.layers.iter()
            .filter_map(|layer| layer.pixel_bounds())
            .fold(BoundingBox::new(0, 0, 0, 0), |bounds, layer_bounds| bounds.union(&layer_bounds));

        if drawn.is_empty() {
            let (width, height) = self.layers.size();
            BoundingBox::new(0, 0, width, height)
        } else {
            drawn
        }
    }

    fn save_layer_png(&self, layer: LayerId, path: &Path, bbox: BoundingBox, options: &PngExportOptions) -> Result<(), XsheetError> {
        let layer   = self.layers.layer(layer).ok_or(XsheetError::LayerNotFound(layer))?;
        let region  = layer.render_region(bbox, options.alpha);

        region.save_with_format(path, ImageFormat::Png)?;
        debug!("Wrote layer {} to {}", layer.id(), path.display());

        Ok(())
    }
}

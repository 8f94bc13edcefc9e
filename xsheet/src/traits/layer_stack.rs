use super::layer_id::*;

///
/// The layer operations that undoable xsheet commands perform on the host document
///
pub trait LayerStack {
    ///
    /// The layers in this document, from the bottom of the stack to the top
    ///
    fn layer_ids(&self) -> Vec<LayerId>;

    ///
    /// The layer that drawing operations currently go to
    ///
    fn current_layer(&self) -> Option<LayerId>;

    ///
    /// Changes the layer that drawing operations go to
    ///
    fn set_current_layer(&mut self, layer: Option<LayerId>);

    ///
    /// Inserts a layer with a particular ID at the specified position in the stack
    ///
    /// If a layer with this ID was removed earlier, it should be restored along with its content.
    ///
    fn insert_layer(&mut self, index: usize, layer: LayerId, name: &str);

    ///
    /// Removes a layer from the stack, returning the position it had
    ///
    fn remove_layer(&mut self, layer: LayerId) -> Option<usize>;

    ///
    /// Finds the position of a layer in the stack
    ///
    fn index_of_layer(&self, layer: LayerId) -> Option<usize> {
        self.layer_ids().into_iter().position(|id| id == layer)
    }

    ///
    /// Finds the layer at a position in the stack
    ///
    fn layer_at_index(&self, index: usize) -> Option<LayerId> {
        self.layer_ids().get(index).copied()
    }
}

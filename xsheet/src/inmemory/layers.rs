use super::layer::*;
use crate::traits::*;

use std::collections::HashMap;

///
/// The stack of layers in an in-memory document
///
#[derive(Clone, Debug)]
pub struct InMemoryLayers {
    /// The size of every layer
    size: (u32, u32),

    /// The layers, from the bottom of the stack to the top
    layers: Vec<InMemoryLayer>,

    /// Layers that have been removed from the stack, kept so they can be restored with their content
    detached: HashMap<LayerId, InMemoryLayer>,

    /// The layer that is being drawn on
    current: Option<LayerId>,
}

impl InMemoryLayers {
    ///
    /// Creates an empty layer stack
    ///
    pub fn new(width: u32, height: u32) -> InMemoryLayers {
        InMemoryLayers {
            size:       (width, height),
            layers:     vec![],
            detached:   HashMap::new(),
            current:    None,
        }
    }

    #[inline] pub fn size(&self) -> (u32, u32) { self.size }
    #[inline] pub fn len(&self) -> usize { self.layers.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.layers.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item=&InMemoryLayer> {
        self.layers.iter()
    }

    pub fn layer(&self, id: LayerId) -> Option<&InMemoryLayer> {
        self.layers.iter().find(|layer| layer.id() == id)
    }

    pub fn layer_mut(&mut self, id: LayerId) -> Option<&mut InMemoryLayer> {
        self.layers.iter_mut().find(|layer| layer.id() == id)
    }
}

impl LayerStack for InMemoryLayers {
    fn layer_ids(&self) -> Vec<LayerId> {
        self.layers.iter().map(|layer| layer.id()).collect()
    }

    fn current_layer(&self) -> Option<LayerId> {
        self.current
    }

    fn set_current_layer(&mut self, layer: Option<LayerId>) {
        self.current = layer;
    }

    fn insert_layer(&mut self, index: usize, layer: LayerId, name: &str) {
        if self.layer(layer).is_some() {
            warn!("Layer {} is already in the document", layer);
            return;
        }

        let (width, height) = self.size;
        let new_layer       = self.detached.remove(&layer).unwrap_or_else(|| InMemoryLayer::new(layer, name, width, height));
        let index           = index.min(self.layers.len());

        self.layers.insert(index, new_layer);
    }

    fn remove_layer(&mut self, layer: LayerId) -> Option<usize> {
        let index   = self.layers.iter().position(|existing| existing.id() == layer)?;
        let removed = self.layers.remove(index);

        self.detached.insert(layer, removed);
        if self.current == Some(layer) {
            self.current = None;
        }

        Some(index)
    }

    fn index_of_layer(&self, layer: LayerId) -> Option<usize> {
        self.layers.iter().position(|existing| existing.id() == layer)
    }
}

use crate::*;

mod serializer;
mod inmemory;
mod bounding_box;

///
/// Creates an in-memory document with some layers for the tests
///
pub fn create_document(num_layers: usize) -> (InMemoryDocument, Vec<LayerId>) {
    let mut doc = InMemoryDocument::new(16, 16);
    let layers  = (0..num_layers)
        .map(|idx| doc.add_layer(&format!("Layer {}", idx)))
        .collect();

    (doc, layers)
}

///
/// Creates a frame list where the specified frames are attached to layers
///
pub fn create_frames(length: usize, cels: &[(usize, LayerId)]) -> FrameList {
    let mut frames = FrameList::new(length, OnionSkinOpacities::default());

    for (frame, layer) in cels.iter() {
        frames.frame_mut(*frame).unwrap().add_cel(*layer);
    }

    frames
}

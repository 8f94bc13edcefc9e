use super::*;

#[test]
fn empty_document_exports_whole_canvas() {
    let (doc, _) = create_document(2);

    assert!(doc.effective_bbox() == BoundingBox::new(0, 0, 16, 16));
}

#[test]
fn bounding_box_covers_all_layers() {
    let (mut doc, layers) = create_document(2);

    doc.layer_mut(layers[0]).unwrap().paint(3, 9, [0, 0, 0, 255]);
    doc.layer_mut(layers[1]).unwrap().paint(10, 2, [0, 0, 0, 40]);

    assert!(doc.effective_bbox() == BoundingBox::new(3, 2, 8, 8));
}

#[test]
fn painting_outside_layer_is_ignored() {
    let (mut doc, layers) = create_document(1);

    doc.layer_mut(layers[0]).unwrap().paint(16, 0, [0, 0, 0, 255]);

    assert!(doc.layer(layers[0]).unwrap().pixel_bounds() == None);
}

#[test]
fn render_region_outside_layer() {
    let mut layer   = InMemoryLayer::new(LayerId(0), "Ink", 4, 4);
    layer.paint(0, 0, [200, 100, 0, 255]);

    let region      = layer.render_region(BoundingBox::new(-1, -1, 2, 2), true);
    let flattened   = layer.render_region(BoundingBox::new(-1, -1, 2, 2), false);

    assert!(region.get_pixel(0, 0).0 == [0, 0, 0, 0]);
    assert!(region.get_pixel(1, 1).0 == [200, 100, 0, 255]);
    assert!(flattened.get_pixel(0, 0).0 == [255, 255, 255, 255]);
}

#[test]
fn flatten_half_transparent_pixel() {
    let mut layer   = InMemoryLayer::new(LayerId(0), "Wash", 1, 1);
    layer.paint(0, 0, [0, 0, 0, 51]);

    let flattened   = layer.render_region(BoundingBox::new(0, 0, 1, 1), false);

    assert!(flattened.get_pixel(0, 0).0 == [204, 204, 204, 255]);
}

#[test]
fn layer_ids_are_unique() {
    let (mut doc, layers) = create_document(3);

    let next = doc.new_layer_id();

    assert!(layers == vec![LayerId(0), LayerId(1), LayerId(2)]);
    assert!(next == LayerId(3));
}

#[test]
fn remove_and_restore_layer() {
    let mut layers = InMemoryLayers::new(4, 4);
    layers.insert_layer(0, LayerId(1), "Bottom");
    layers.insert_layer(1, LayerId(2), "Top");
    layers.layer_mut(LayerId(1)).unwrap().paint(1, 1, [1, 2, 3, 255]);
    layers.set_current_layer(Some(LayerId(1)));

    assert!(layers.remove_layer(LayerId(1)) == Some(0));
    assert!(layers.layer_ids() == vec![LayerId(2)]);
    assert!(layers.current_layer() == None);
    assert!(layers.remove_layer(LayerId(1)) == None);

    layers.insert_layer(0, LayerId(1), "Renamed");
    assert!(layers.layer_ids() == vec![LayerId(1), LayerId(2)]);
    assert!(layers.layer(LayerId(1)).unwrap().name() == "Bottom");
    assert!(layers.layer(LayerId(1)).unwrap().surface().get_pixel(1, 1).0 == [1, 2, 3, 255]);
    assert!(layers.index_of_layer(LayerId(2)) == Some(1));
    assert!(layers.layer_at_index(0) == Some(LayerId(1)));
}

#[test]
fn insert_existing_layer_is_ignored() {
    let mut layers = InMemoryLayers::new(4, 4);
    layers.insert_layer(0, LayerId(1), "Only");
    layers.insert_layer(0, LayerId(1), "Again");

    assert!(layers.len() == 1);
}

#[test]
fn save_missing_layer() {
    let folder      = tempfile::tempdir().unwrap();
    let (doc, _)    = create_document(0);

    let result      = doc.save_layer_png(LayerId(5), &folder.path().join("missing.png"), doc.effective_bbox(), &PngExportOptions::default());

    assert!(result == Err(XsheetError::LayerNotFound(LayerId(5))));
}

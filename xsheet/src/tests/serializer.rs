use super::*;

use std::fs;
use std::path::PathBuf;

fn described_frames(layers: &[LayerId]) -> FrameList {
    let mut frames = create_frames(5, &[(0, layers[2]), (2, layers[0]), (3, layers[1]), (4, layers[2])]);

    frames.frame_mut(0).unwrap().toggle_key();
    frames.frame_mut(0).unwrap().set_description("Start");
    frames.frame_mut(2).unwrap().set_description("Middle");
    frames.frame_mut(3).unwrap().toggle_key();
    frames.frame_mut(4).unwrap().set_description("End ✓");

    frames
}

#[test]
fn write_then_read_restores_frames() {
    let layers      = vec![LayerId(10), LayerId(11), LayerId(12)];
    let original    = described_frames(&layers);

    let xsheet      = write_xsheet(&original, &layers).unwrap();
    let mut read    = FrameList::new(5, OnionSkinOpacities::default());
    read_xsheet(&xsheet, &mut read, &layers).unwrap();

    assert!(read == original);
}

#[test]
fn write_format() {
    let layers      = vec![LayerId(0), LayerId(1)];
    let mut frames  = create_frames(2, &[(0, layers[1])]);
    frames.frame_mut(0).unwrap().toggle_key();
    frames.frame_mut(0).unwrap().set_description("Walk");

    let xsheet      = write_xsheet(&frames, &layers).unwrap();

    assert!(xsheet == "[\n    [\n        true,\n        \"Walk\",\n        1\n    ],\n    [\n        false,\n        \"\",\n        null\n    ]\n]");
}

#[test]
fn write_empty_frame_list() {
    let frames = FrameList::new(0, OnionSkinOpacities::default());

    assert!(write_xsheet(&frames, &[]).unwrap() == "[]");
}

#[test]
fn write_layer_not_in_document() {
    let frames = create_frames(3, &[(1, LayerId(99))]);

    assert!(write_xsheet(&frames, &[LayerId(0), LayerId(1)]) == Err(XsheetError::LayerNotFound(LayerId(99))));
}

#[test]
fn read_layer_indices_by_position() {
    let layers      = vec![LayerId(4), LayerId(8), LayerId(15)];
    let mut frames  = FrameList::new(3, OnionSkinOpacities::default());

    read_xsheet("[[false, \"a\", 2], [true, \"b\", null], [false, \"c\", 0]]", &mut frames, &layers).unwrap();

    assert!(frames.frame(0).unwrap().cel == Some(LayerId(15)));
    assert!(frames.frame(1).unwrap().cel == None);
    assert!(frames.frame(1).unwrap().is_key);
    assert!(frames.frame(2).unwrap().cel == Some(LayerId(4)));
    assert!(frames.frame(2).unwrap().description == "c");
}

#[test]
fn read_malformed_xsheet() {
    let mut frames  = create_frames(3, &[(0, LayerId(0))]);
    let before      = frames.clone();

    let result      = read_xsheet("[[false, \"a\", 0], [true", &mut frames, &[LayerId(0)]);

    assert!(match result { Err(XsheetError::Parse(_)) => true, _ => false });
    assert!(frames == before);
}

#[test]
fn read_entry_with_wrong_number_of_fields() {
    let mut frames  = FrameList::new(3, OnionSkinOpacities::default());

    let too_few     = read_xsheet("[[false, \"a\"]]", &mut frames, &[]);
    let too_many    = read_xsheet("[[false, \"a\", null, 4]]", &mut frames, &[]);

    assert!(match too_few { Err(XsheetError::Parse(_)) => true, _ => false });
    assert!(match too_many { Err(XsheetError::Parse(_)) => true, _ => false });
}

#[test]
fn read_layer_index_out_of_range() {
    let mut frames  = FrameList::new(2, OnionSkinOpacities::default());
    let before      = frames.clone();

    let result      = read_xsheet("[[true, \"a\", null], [false, \"b\", 3]]", &mut frames, &[LayerId(0)]);

    assert!(result == Err(XsheetError::LayerIndexOutOfRange(3)));
    assert!(frames == before);
}

#[test]
fn read_fewer_entries_than_frames() {
    let mut frames = FrameList::new(3, OnionSkinOpacities::default());
    frames.frame_mut(2).unwrap().set_description("Untouched");

    read_xsheet("[[true, \"First\", null]]", &mut frames, &[]).unwrap();

    assert!(frames.frame(0).unwrap().description == "First");
    assert!(frames.frame(0).unwrap().is_key);
    assert!(frames.frame(2).unwrap().description == "Untouched");
}

#[test]
fn read_more_entries_than_frames() {
    let mut frames  = FrameList::new(1, OnionSkinOpacities::default());
    let before      = frames.clone();

    let result      = read_xsheet("[[true, \"a\", null], [true, \"b\", null]]", &mut frames, &[]);

    assert!(result == Err(XsheetError::FrameOutOfRange(1)));
    assert!(frames == before);
}

#[test]
fn sidecar_replaces_extension() {
    assert!(sidecar_path("/home/artist/walk.ora") == PathBuf::from("/home/artist/walk.xsheet"));
    assert!(sidecar_path("walk") == PathBuf::from("walk.xsheet"));
}

#[test]
fn save_and_load_sidecar() {
    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("walk.ora");
    let layers      = vec![LayerId(1), LayerId(2), LayerId(3)];
    let frames      = described_frames(&layers);

    let saved       = save_xsheet_file(&document, &frames, &layers).unwrap();
    assert!(saved == folder.path().join("walk.xsheet"));
    assert!(fs::read_to_string(&saved).unwrap() == write_xsheet(&frames, &layers).unwrap());

    let mut loaded  = FrameList::new(5, OnionSkinOpacities::default());
    let load        = load_xsheet_file(&document, &mut loaded, &layers).unwrap();

    assert!(load == XsheetLoad::Loaded(saved));
    assert!(loaded == frames);
}

#[test]
fn load_missing_sidecar() {
    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("new.ora");
    let mut frames  = FrameList::new(3, OnionSkinOpacities::default());

    let load        = load_xsheet_file(&document, &mut frames, &[]).unwrap();

    assert!(load == XsheetLoad::Missing(folder.path().join("new.xsheet")));
}

#[test]
fn failed_save_leaves_existing_sidecar() {
    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("walk.ora");
    let layers      = vec![LayerId(1)];
    let mut frames  = create_frames(2, &[(0, layers[0])]);

    let saved       = save_xsheet_file(&document, &frames, &layers).unwrap();
    let original    = fs::read_to_string(&saved).unwrap();

    frames.frame_mut(1).unwrap().add_cel(LayerId(42));
    let result      = save_xsheet_file(&document, &frames, &layers);

    assert!(result == Err(XsheetError::LayerNotFound(LayerId(42))));
    assert!(fs::read_to_string(&saved).unwrap() == original);
    assert!(fs::read_dir(folder.path()).unwrap().count() == 1);
}

#[cfg(unix)]
#[test]
fn new_sidecar_has_default_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("walk.ora");
    let ordinary    = folder.path().join("notes.txt");
    let frames      = create_frames(2, &[]);

    fs::write(&ordinary, "notes").unwrap();
    let saved       = save_xsheet_file(&document, &frames, &[]).unwrap();

    let sidecar_mode    = fs::metadata(&saved).unwrap().permissions().mode() & 0o777;
    let ordinary_mode   = fs::metadata(&ordinary).unwrap().permissions().mode() & 0o777;

    assert!(sidecar_mode == ordinary_mode);
}

#[cfg(unix)]
#[test]
fn resave_keeps_sidecar_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("walk.ora");
    let frames      = create_frames(2, &[]);

    let saved       = save_xsheet_file(&document, &frames, &[]).unwrap();
    fs::set_permissions(&saved, fs::Permissions::from_mode(0o640)).unwrap();

    save_xsheet_file(&document, &frames, &[]).unwrap();

    assert!(fs::metadata(&saved).unwrap().permissions().mode() & 0o777 == 0o640);
}

#[test]
fn failed_save_creates_no_sidecar() {
    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("walk.ora");
    let frames      = create_frames(2, &[(0, LayerId(5))]);

    let result      = save_xsheet_file(&document, &frames, &[]);

    assert!(result == Err(XsheetError::LayerNotFound(LayerId(5))));
    assert!(!sidecar_path(&document).exists());
    assert!(fs::read_dir(folder.path()).unwrap().count() == 0);
}

#[test]
fn layers_needed_for_entries() {
    let entries = parse_xsheet("[[true, \"\", 2], [false, \"\", null], [false, \"\", 0]]").unwrap();

    assert!(layers_needed(&entries) == 3);
    assert!(layers_needed(&[]) == 0);
}

#[test]
fn layers_needed_to_load_sidecar() {
    let folder      = tempfile::tempdir().unwrap();
    let document    = folder.path().join("walk.ora");
    let layers      = vec![LayerId(1), LayerId(2), LayerId(3)];

    assert!(sidecar_layers_needed(&document) == Ok(0));

    save_xsheet_file(&document, &create_frames(4, &[(1, layers[1])]), &layers).unwrap();
    let needed      = sidecar_layers_needed(&document).unwrap();

    // Any document with that many layers can load the sidecar
    let stand_in    = (0..needed as u64).map(|id| LayerId(100+id)).collect::<Vec<_>>();
    let mut frames  = FrameList::new(4, OnionSkinOpacities::default());

    assert!(needed == 2);
    assert!(load_xsheet_file(&document, &mut frames, &stand_in).is_ok());
    assert!(frames.frame(1).unwrap().cel == Some(LayerId(101)));
}

use super::xsheet_entry::*;
use crate::error::*;
use crate::frame_list::*;
use crate::traits::*;

use tempfile::{Builder, NamedTempFile};

use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The extension used for xsheet sidecar files
pub const XSHEET_EXTENSION: &str = "xsheet";

///
/// The result of trying to load an xsheet file
///
#[derive(Clone, Debug, PartialEq)]
pub enum XsheetLoad {
    /// The frame list was updated from the file at this path
    Loaded(PathBuf),

    /// There is no xsheet file at this path yet
    Missing(PathBuf),
}

///
/// Returns the path of the xsheet sidecar file for a document
///
pub fn sidecar_path<P: AsRef<Path>>(document_path: P) -> PathBuf {
    document_path.as_ref().with_extension(XSHEET_EXTENSION)
}

///
/// Creates the temporary file that a new sidecar is written to
///
/// The file gets the same permissions as any other newly created file (0666 less the umask) rather
/// than the owner-only permissions that temporary files usually have.
///
#[cfg(unix)]
fn new_sidecar_file(folder: &Path) -> Result<NamedTempFile, XsheetError> {
    use std::os::unix::fs::PermissionsExt;

    Ok(Builder::new()
        .permissions(fs::Permissions::from_mode(0o666))
        .tempfile_in(folder)?)
}

#[cfg(not(unix))]
fn new_sidecar_file(folder: &Path) -> Result<NamedTempFile, XsheetError> {
    Ok(Builder::new().tempfile_in(folder)?)
}

///
/// Writes the xsheet sidecar file for a document, replacing any existing file
///
/// The file is written to a temporary file first and then moved into place, so a failed save never
/// leaves a partly-written sidecar behind. Returns the path of the sidecar file.
///
pub fn save_xsheet_file<P: AsRef<Path>>(document_path: P, frames: &FrameList, layers: &[LayerId]) -> Result<PathBuf, XsheetError> {
    let path    = sidecar_path(document_path);
    let xsheet  = write_xsheet(frames, layers)?;

    let folder  = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty()  => parent.to_path_buf(),
        _                                               => PathBuf::from(".")
    };

    let mut file = new_sidecar_file(&folder)?;

    // Replacing a sidecar keeps its permissions
    match fs::metadata(&path) {
        Ok(existing)                                        => { file.as_file().set_permissions(existing.permissions())?; }
        Err(err) if err.kind() == io::ErrorKind::NotFound   => { }
        Err(err)                                            => { return Err(err.into()); }
    }

    file.write_all(xsheet.as_bytes())?;
    file.as_file().sync_all()?;
    file.persist(&path)?;

    info!("Saved {} frames to {}", frames.len(), path.display());

    Ok(path)
}

///
/// Updates a frame list from the xsheet sidecar file for a document
///
/// A missing sidecar file isn't an error: the result is `XsheetLoad::Missing` and the frame list is
/// left untouched so the caller can start a new exposure sheet.
///
pub fn load_xsheet_file<P: AsRef<Path>>(document_path: P, frames: &mut FrameList, layers: &[LayerId]) -> Result<XsheetLoad, XsheetError> {
    let path = sidecar_path(document_path);

    let xsheet = match read_sidecar(&path)? {
        Some(xsheet)    => xsheet,
        None            => { return Ok(XsheetLoad::Missing(path)); }
    };

    read_xsheet(&xsheet, frames, layers)?;
    info!("Loaded {}", path.display());

    Ok(XsheetLoad::Loaded(path))
}

///
/// The number of layers a document needs to load its sidecar file (0 if there's no sidecar yet)
///
pub fn sidecar_layers_needed<P: AsRef<Path>>(document_path: P) -> Result<usize, XsheetError> {
    match read_sidecar(&sidecar_path(document_path))? {
        Some(xsheet)    => Ok(layers_needed(&parse_xsheet(&xsheet)?)),
        None            => Ok(0)
    }
}

///
/// Reads a sidecar file, returning `None` if it doesn't exist
///
fn read_sidecar(path: &Path) -> Result<Option<String>, XsheetError> {
    match fs::read_to_string(path) {
        Ok(xsheet)                                          => Ok(Some(xsheet)),
        Err(err) if err.kind() == io::ErrorKind::NotFound   => Ok(None),
        Err(err)                                            => Err(err.into())
    }
}

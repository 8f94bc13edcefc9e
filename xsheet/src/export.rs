use std::ffi::OsStr;
use std::path::{Path, PathBuf};

///
/// The part of an export filename that's shared by every frame
///
/// A trailing `-<digits>` is removed from the file stem, so exporting to a file that was itself
/// produced by an earlier export doesn't keep adding numbers. Only that ASCII suffix is inspected:
/// the rest of the stem is kept byte for byte, whatever its encoding.
///
fn export_prefix(path: &Path) -> &OsStr {
    let stem    = path.file_stem().unwrap_or_default();
    let bytes   = stem.as_encoded_bytes();

    match bytes.iter().rposition(|byte| *byte == b'-') {
        Some(dash) if dash+1 < bytes.len() && bytes[(dash+1)..].iter().all(u8::is_ascii_digit) => {
            // SAFETY: the split is immediately before an ASCII '-', so the prefix is still a valid encoded OsStr
            unsafe { OsStr::from_encoded_bytes_unchecked(&bytes[..dash]) }
        }

        _ => stem
    }
}

///
/// The filename used when exporting a frame (`index` counts from 0, but the files are numbered from 1)
///
/// For example, frame 0 of `anim.png` or of `anim-007.png` is exported as `anim-001.png`.
///
pub fn numbered_frame_path<P: AsRef<Path>>(path: P, index: usize) -> PathBuf {
    let path            = path.as_ref();
    let mut filename    = export_prefix(path).to_os_string();

    filename.push(format!("-{:03}", index+1));
    if let Some(extension) = path.extension() {
        filename.push(".");
        filename.push(extension);
    }

    match path.parent() {
        Some(folder)    => folder.join(filename),
        None            => PathBuf::from(filename)
    }
}

///
/// The filenames for exporting `frame_count` frames
///
pub fn numbered_frame_paths<P: AsRef<Path>>(path: P, frame_count: usize) -> Vec<PathBuf> {
    (0..frame_count)
        .map(|index| numbered_frame_path(path.as_ref(), index))
        .collect()
}

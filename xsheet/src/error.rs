use crate::traits::*;

use std::io;
use std::fmt;
use std::error::Error;

///
/// Errors that can occur while working with an exposure sheet
///
#[derive(Clone, Debug, PartialEq)]
pub enum XsheetError {
    /// A file could not be read or written
    Io(String),

    /// The xsheet file (or a settings file) does not contain the expected JSON
    Parse(String),

    /// A frame refers to a layer that is not in the document
    LayerNotFound(LayerId),

    /// An xsheet file refers to a layer position that is past the end of the document's layer list
    LayerIndexOutOfRange(usize),

    /// A frame index is past the end of the frame list
    FrameOutOfRange(usize),

    /// There is no drawing to show at the specified frame (neither the frame nor any earlier frame has a cel)
    NoCelAtFrame(usize),

    /// A layer image could not be encoded
    Image(String),
}

impl fmt::Display for XsheetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use self::XsheetError::*;

        match self {
            Io(msg)                         => write!(f, "I/O error: {}", msg),
            Parse(msg)                      => write!(f, "Could not parse xsheet data: {}", msg),
            LayerNotFound(layer)            => write!(f, "Layer {} is not in the document", layer),
            LayerIndexOutOfRange(index)     => write!(f, "There is no layer at position {}", index),
            FrameOutOfRange(index)          => write!(f, "There is no frame at position {}", index),
            NoCelAtFrame(index)             => write!(f, "Frame {} has no cel to export", index+1),
            Image(msg)                      => write!(f, "Could not write image: {}", msg),
        }
    }
}

impl Error for XsheetError { }

impl From<io::Error> for XsheetError {
    fn from(err: io::Error) -> XsheetError {
        XsheetError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for XsheetError {
    fn from(err: serde_json::Error) -> XsheetError {
        if err.is_io() {
            XsheetError::Io(err.to_string())
        } else {
            XsheetError::Parse(err.to_string())
        }
    }
}

impl From<image::ImageError> for XsheetError {
    fn from(err: image::ImageError) -> XsheetError {
        match err {
            image::ImageError::IoError(err) => XsheetError::Io(err.to_string()),
            other                           => XsheetError::Image(other.to_string())
        }
    }
}

impl From<tempfile::PersistError> for XsheetError {
    fn from(err: tempfile::PersistError) -> XsheetError {
        XsheetError::Io(err.error.to_string())
    }
}

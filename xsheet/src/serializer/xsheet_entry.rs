use crate::error::*;
use crate::frame_list::*;
use crate::traits::*;

use serde::*;
use serde_json::ser::{Serializer, PrettyFormatter};

///
/// A single frame as it's stored in an xsheet file: `[is_key, description, layer_index]`
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct XsheetEntry(pub bool, pub String, pub Option<usize>);

impl XsheetEntry {
    ///
    /// Creates the entry for a frame, looking up its layer in the document's layer list
    ///
    pub fn from_frame(frame: &Frame, layers: &[LayerId]) -> Result<XsheetEntry, XsheetError> {
        let layer_index = match frame.cel {
            Some(cel)   => Some(layers.iter().position(|layer| *layer == cel).ok_or(XsheetError::LayerNotFound(cel))?),
            None        => None
        };

        Ok(XsheetEntry(frame.is_key, frame.description.clone(), layer_index))
    }

    ///
    /// Finds the layer this entry refers to in the document's layer list
    ///
    pub fn layer(&self, layers: &[LayerId]) -> Result<Option<LayerId>, XsheetError> {
        match self.2 {
            Some(index) => Ok(Some(*layers.get(index).ok_or(XsheetError::LayerIndexOutOfRange(index))?)),
            None        => Ok(None)
        }
    }
}

///
/// Generates the contents of an xsheet file for a frame list
///
/// Fails with `LayerNotFound` if a frame is attached to a layer that isn't in `layers`.
///
pub fn write_xsheet(frames: &FrameList, layers: &[LayerId]) -> Result<String, XsheetError> {
    let entries = frames.iter()
        .map(|frame| XsheetEntry::from_frame(frame, layers))
        .collect::<Result<Vec<_>, _>>()?;

    // Four space indentation keeps the files readable and easy to diff
    let mut json        = vec![];
    let mut serializer  = Serializer::with_formatter(&mut json, PrettyFormatter::with_indent(b"    "));
    entries.serialize(&mut serializer)?;

    String::from_utf8(json).map_err(|err| XsheetError::Parse(err.to_string()))
}

///
/// Parses the entries in an xsheet file without resolving their layers
///
pub fn parse_xsheet(xsheet: &str) -> Result<Vec<XsheetEntry>, XsheetError> {
    Ok(serde_json::from_str(xsheet)?)
}

///
/// The number of layers a document needs for every layer index in a set of entries to be valid
///
pub fn layers_needed(entries: &[XsheetEntry]) -> usize {
    entries.iter()
        .filter_map(|entry| entry.2)
        .map(|index| index+1)
        .max()
        .unwrap_or(0)
}

///
/// Updates a frame list from the contents of an xsheet file
///
/// Entries are applied to the frames in order. Frames past the last entry are left alone. Nothing
/// is changed if the file can't be parsed, refers to a layer that isn't in `layers`, or has more
/// entries than there are frames.
///
pub fn read_xsheet(xsheet: &str, frames: &mut FrameList, layers: &[LayerId]) -> Result<(), XsheetError> {
    let entries = parse_xsheet(xsheet)?;

    if entries.len() > frames.len() {
        return Err(XsheetError::FrameOutOfRange(frames.len()));
    }

    let cels = entries.iter()
        .map(|entry| entry.layer(layers))
        .collect::<Result<Vec<_>, _>>()?;

    for (index, (XsheetEntry(is_key, description, _), cel)) in entries.into_iter().zip(cels).enumerate() {
        if let Some(frame) = frames.frame_mut(index) {
            frame.is_key        = is_key;
            frame.description   = description;
            frame.cel           = cel;
        }
    }

    Ok(())
}

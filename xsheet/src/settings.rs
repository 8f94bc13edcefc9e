use super::error::*;
use super::onion_skin::*;

use serde::*;

use std::fs;
use std::path::Path;

/// The number of frames in a new exposure sheet
pub const DEFAULT_FRAME_COUNT: usize = 24;

///
/// Configures how new exposure sheets are created and displayed
///
/// Settings files are JSON; any field that is left out keeps its default value.
///
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct XsheetSettings {
    /// The number of frames created by `clear_xsheet()`
    pub frame_count: usize,

    /// The onion skin opacities for new frame lists
    pub opacities: OnionSkinOpacities,
}

impl Default for XsheetSettings {
    fn default() -> XsheetSettings {
        XsheetSettings {
            frame_count:    DEFAULT_FRAME_COUNT,
            opacities:      OnionSkinOpacities::default(),
        }
    }
}

impl XsheetSettings {
    ///
    /// Reads the settings from a JSON file
    ///
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<XsheetSettings, XsheetError> {
        let path        = path.as_ref();
        let json        = fs::read_to_string(path)?;
        let settings    = serde_json::from_str(&json)?;

        debug!("Read xsheet settings from {}", path.display());

        Ok(settings)
    }

    ///
    /// Returns these settings with a different frame count
    ///
    pub fn with_frame_count(mut self, frame_count: usize) -> XsheetSettings {
        self.frame_count = frame_count;
        self
    }
}

use serde::*;

///
/// Options passed through to the host document when a layer is saved as a PNG file
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PngExportOptions {
    /// True to keep the transparency of the layer, false to flatten it onto a white background
    pub alpha: bool,
}

impl Default for PngExportOptions {
    fn default() -> PngExportOptions {
        PngExportOptions {
            alpha: false
        }
    }
}

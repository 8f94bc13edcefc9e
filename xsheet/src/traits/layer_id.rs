use serde::*;

use std::fmt;

///
/// Identifies a drawing layer in the host document
///
/// Frames never own their layers: they refer to them by ID, so the host document's layer list
/// remains the only place where layers are created, removed or reordered.
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LayerId(pub u64);

impl LayerId {
    ///
    /// Returns the numeric value of this ID
    ///
    #[inline]
    pub fn id(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for LayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

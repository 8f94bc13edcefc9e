use super::traits::*;

use std::fmt;

///
/// The description of a single frame of an exposure sheet, as it is shown to the user
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct AnimationCel {
    /// The text describing this frame
    pub description: String,

    /// The layer containing the drawing for this frame
    pub drawing: Option<LayerId>,

    /// True if this is a key frame
    pub is_key: bool,

    /// The number shown next to this frame (assigned by the frame list that contains it)
    pub frame_number: Option<usize>,
}

impl AnimationCel {
    ///
    /// Creates a new cel with no frame number
    ///
    pub fn new(description: Option<String>, drawing: Option<LayerId>, is_key: bool) -> AnimationCel {
        AnimationCel {
            description:    description.unwrap_or_default(),
            drawing:        drawing,
            is_key:         is_key,
            frame_number:   None,
        }
    }
}

impl fmt::Display for AnimationCel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Cels that have not been placed in a list yet show as frame 0
        let frame_number = self.frame_number.unwrap_or(0);

        if self.is_key {
            write!(f, "{}. * {}", frame_number, self.description)
        } else {
            write!(f, "{}. {}", frame_number, self.description)
        }
    }
}

use serde::*;

///
/// How opaque each layer should be drawn relative to the selected frame
///
/// Opacities are in the range 0.0 to 1.0. They only affect how the host displays the layers:
/// nothing in the exposure sheet itself depends on them.
///
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnionSkinOpacities {
    /// The cel shown at the selected frame
    pub current: f64,

    /// The nearest different cels before and after the selected frame
    pub nextprev: f64,

    /// The cels of the key frames either side of the selected frame
    pub key: f64,

    /// Cels between the key frames either side of the selected frame
    pub inbetweens: f64,

    /// Cels on any other key frame
    #[serde(rename = "other keys")]
    pub other_keys: f64,

    /// All other cels
    pub other: f64,
}

impl Default for OnionSkinOpacities {
    fn default() -> OnionSkinOpacities {
        OnionSkinOpacities {
            current:    1.0,
            nextprev:   0.5,
            key:        0.4,
            inbetweens: 0.2,
            other_keys: 0.3,
            other:      0.0,
        }
    }
}

///
/// The classes of onion skin, from the highest priority to the lowest
///
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum OnionSkinClass {
    Current,
    NextPrev,
    Key,
    Inbetween,
    OtherKey,
    Other,
}

impl OnionSkinOpacities {
    ///
    /// Retrieves the opacity for a class of cel
    ///
    pub fn opacity(&self, class: OnionSkinClass) -> f64 {
        use self::OnionSkinClass::*;

        let opacity = match class {
            Current     => self.current,
            NextPrev    => self.nextprev,
            Key         => self.key,
            Inbetween   => self.inbetweens,
            OtherKey    => self.other_keys,
            Other       => self.other,
        };

        opacity.max(0.0).min(1.0)
    }
}

use super::cel::*;
use super::error::*;
use super::onion_skin::*;
use super::traits::*;

use std::sync::*;
use std::collections::HashMap;

///
/// A single frame in an exposure sheet
///
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Frame {
    /// True if this frame is a key frame
    pub is_key: bool,

    /// The text describing this frame
    pub description: String,

    /// The layer containing the drawing that starts at this frame
    pub cel: Option<LayerId>,
}

impl Frame {
    ///
    /// Creates an empty in-between frame
    ///
    pub fn new() -> Frame {
        Frame::default()
    }

    pub fn toggle_key(&mut self) {
        self.is_key = !self.is_key;
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.to_string();
    }

    ///
    /// Attaches a layer to this frame
    ///
    pub fn add_cel(&mut self, layer: LayerId) {
        self.cel = Some(layer);
    }

    ///
    /// Detaches the layer from this frame, returning it
    ///
    pub fn remove_cel(&mut self) -> Option<LayerId> {
        self.cel.take()
    }
}

///
/// The ordered list of frames in an exposure sheet, along with the frame that's currently selected
///
#[derive(Clone, Debug, PartialEq)]
pub struct FrameList {
    /// The frames, in order
    frames: Vec<Frame>,

    /// The index of the selected frame
    idx: usize,

    /// The opacities used for onion skinning
    opacities: OnionSkinOpacities,
}

impl FrameList {
    ///
    /// Creates a frame list containing `length` empty frames, with the first frame selected
    ///
    pub fn new(length: usize, opacities: OnionSkinOpacities) -> FrameList {
        FrameList {
            frames:     (0..length).map(|_| Frame::new()).collect(),
            idx:        0,
            opacities:  opacities,
        }
    }

    #[inline] pub fn len(&self) -> usize { self.frames.len() }
    #[inline] pub fn is_empty(&self) -> bool { self.frames.is_empty() }
    #[inline] pub fn opacities(&self) -> &OnionSkinOpacities { &self.opacities }

    ///
    /// Iterates over the frames in order
    ///
    pub fn iter(&self) -> impl Iterator<Item=&Frame> {
        self.frames.iter()
    }

    pub fn frame(&self, index: usize) -> Option<&Frame> {
        self.frames.get(index)
    }

    pub fn frame_mut(&mut self, index: usize) -> Option<&mut Frame> {
        self.frames.get_mut(index)
    }

    ///
    /// Returns the display version of a frame, numbered from 1
    ///
    pub fn cel(&self, index: usize) -> Option<AnimationCel> {
        self.frames.get(index).map(|frame| AnimationCel {
            description:    frame.description.clone(),
            drawing:        frame.cel,
            is_key:         frame.is_key,
            frame_number:   Some(index+1),
        })
    }

    ///
    /// The index of the selected frame
    ///
    #[inline]
    pub fn selected_index(&self) -> usize {
        self.idx
    }

    ///
    /// The selected frame (`None` only when the list has no frames at all)
    ///
    pub fn get_selected(&self) -> Option<&Frame> {
        self.frames.get(self.idx)
    }

    ///
    /// Selects the frame with the specified index
    ///
    pub fn select(&mut self, index: usize) -> Result<(), XsheetError> {
        if index >= self.frames.len() {
            return Err(XsheetError::FrameOutOfRange(index));
        }

        self.idx = index;
        Ok(())
    }

    pub fn has_previous(&self) -> bool {
        self.idx > 0
    }

    pub fn has_next(&self) -> bool {
        self.idx+1 < self.frames.len()
    }

    ///
    /// Moves the selection back by one frame (stays on the first frame)
    ///
    pub fn goto_previous(&mut self) {
        if self.has_previous() {
            self.idx -= 1;
        }
    }

    ///
    /// Moves the selection forward by one frame (stays on the last frame)
    ///
    pub fn goto_next(&mut self) {
        if self.has_next() {
            self.idx += 1;
        }
    }

    ///
    /// Finds the nearest key frame before the specified frame
    ///
    pub fn previous_key(&self, index: usize) -> Option<usize> {
        let end = index.min(self.frames.len());

        (0..end).rev().find(|idx| self.frames[*idx].is_key)
    }

    ///
    /// Finds the nearest key frame after the specified frame
    ///
    pub fn next_key(&self, index: usize) -> Option<usize> {
        ((index+1)..self.frames.len()).find(|idx| self.frames[*idx].is_key)
    }

    ///
    /// Returns the layer that is displayed at a particular frame
    ///
    /// A drawing is held until a later frame attaches a new one, so this is the cel attached to
    /// the frame itself or, failing that, the nearest earlier frame with a cel.
    ///
    pub fn cel_at(&self, index: usize) -> Option<LayerId> {
        if index >= self.frames.len() {
            return None;
        }

        self.frames[0..=index].iter()
            .rev()
            .filter_map(|frame| frame.cel)
            .next()
    }

    ///
    /// Every layer attached to this frame list, in frame order and without duplicates
    ///
    pub fn cels(&self) -> Vec<LayerId> {
        let mut cels = vec![];

        for cel in self.frames.iter().filter_map(|frame| frame.cel) {
            if !cels.contains(&cel) {
                cels.push(cel);
            }
        }

        cels
    }

    ///
    /// Works out how each attached layer should be classified for onion skinning around the selected frame
    ///
    pub fn onion_skin_classes(&self) -> Vec<(LayerId, OnionSkinClass)> {
        use self::OnionSkinClass::*;

        if self.frames.is_empty() {
            return vec![];
        }

        let mut classes: HashMap<LayerId, OnionSkinClass> = HashMap::new();
        let mut classify = |layer: Option<LayerId>, class: OnionSkinClass| {
            if let Some(layer) = layer {
                classes.entry(layer).or_insert(class);
            }
        };

        let idx     = self.idx;
        let current = self.cel_at(idx);
        classify(current, Current);

        // The nearest drawings either side of the one being shown
        let previous    = self.frames[0..idx].iter().rev().filter_map(|frame| frame.cel).find(|cel| Some(*cel) != current);
        let next        = self.frames[(idx+1)..].iter().filter_map(|frame| frame.cel).find(|cel| Some(*cel) != current);
        classify(previous, NextPrev);
        classify(next, NextPrev);

        // The key frames that surround the selected frame
        let previous_key    = if self.frames[idx].is_key { Some(idx) } else { self.previous_key(idx) };
        let next_key        = self.next_key(idx);
        classify(previous_key.and_then(|key| self.cel_at(key)), Key);
        classify(next_key.and_then(|key| self.cel_at(key)), Key);

        // Everything attached between those key frames
        let first_inbetween = previous_key.map(|key| key+1).unwrap_or(0);
        let end_inbetween   = next_key.unwrap_or(self.frames.len());
        for frame in self.frames[first_inbetween..end_inbetween].iter() {
            classify(frame.cel, Inbetween);
        }

        // The remaining key frames, then everything else
        for key in (0..self.frames.len()).filter(|idx| self.frames[*idx].is_key) {
            classify(self.cel_at(key), OtherKey);
        }

        for cel in self.cels() {
            classify(Some(cel), Other);
        }

        self.cels().into_iter()
            .map(|cel| (cel, classes.get(&cel).copied().unwrap_or(Other)))
            .collect()
    }

    ///
    /// The opacity that each attached layer should be displayed with, given the selected frame
    ///
    pub fn get_opacities(&self) -> Vec<(LayerId, f64)> {
        self.onion_skin_classes().into_iter()
            .map(|(cel, class)| (cel, self.opacities.opacity(class)))
            .collect()
    }
}

///
/// A frame list shared between the animation that owns it and the commands that edit it
///
#[derive(Clone, Debug)]
pub struct SharedFrameList(Arc<Mutex<FrameList>>);

impl SharedFrameList {
    pub fn new(frames: FrameList) -> SharedFrameList {
        SharedFrameList(Arc::new(Mutex::new(frames)))
    }

    ///
    /// Performs an action on the frame list, returning its result
    ///
    pub fn sync<TFn, TResult>(&self, action: TFn) -> TResult
    where TFn: FnOnce(&mut FrameList) -> TResult {
        // Commands validate before changing the list, so a poisoned list is still consistent
        let mut frames = self.0.lock().unwrap_or_else(PoisonError::into_inner);

        action(&mut frames)
    }

    ///
    /// Returns a copy of the frame list as it is right now
    ///
    pub fn snapshot(&self) -> FrameList {
        self.sync(|frames| frames.clone())
    }

    ///
    /// True if both handles refer to the same frame list
    ///
    pub fn is_same_list(&self, other: &SharedFrameList) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

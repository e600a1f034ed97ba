use crate::frame_ingestion::frame::Frame;

/// The recorded frame collection as loaded, before weapon-class derivation.
///
/// Frames are kept in recording order. The only way to reach the analysis
/// stage is through [`RawFrameSet::augment`], so no query can observe a frame
/// whose weapon classes have not been derived yet.
#[derive(Debug, Clone, PartialEq)]
pub struct RawFrameSet {
    frames: Vec<Frame>,
}

impl RawFrameSet {
    /// Wraps an ordered frame collection.
    pub fn new(frames: Vec<Frame>) -> Self {
        Self { frames }
    }

    /// The number of frames in the set.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the set holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Derives the weapon-class label sequence for every frame.
    ///
    /// Each frame gets one label per inventory item, preserving item order;
    /// a frame without an inventory gets an empty sequence. The derivation is
    /// total and consumes the raw set, so augmentation happens exactly once.
    ///
    /// # Returns
    ///
    /// An `AugmentedFrameSet` with the same frames in the same order.
    pub fn augment(self) -> AugmentedFrameSet {
        let frames = self
            .frames
            .into_iter()
            .map(|frame| {
                let weapon_classes = extract_weapon_classes(&frame);
                AugmentedFrame {
                    frame,
                    weapon_classes,
                }
            })
            .collect();

        AugmentedFrameSet { frames }
    }
}

/// Collects the weapon-class label of every item the frame's player carries.
fn extract_weapon_classes(frame: &Frame) -> Vec<String> {
    match &frame.inventory {
        Some(items) => items.iter().map(|item| item.weapon_class.clone()).collect(),
        None => Vec::new(),
    }
}

/// A frame together with its derived weapon-class labels.
///
/// # Fields
///
/// * `frame` - The recorded snapshot.
/// * `weapon_classes` - One label per inventory item, in item order; empty
///   when the frame has no inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedFrame {
    pub frame: Frame,
    pub weapon_classes: Vec<String>,
}

/// The frame collection after weapon-class derivation.
///
/// Immutable and ordered; every analysis query borrows it read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedFrameSet {
    frames: Vec<AugmentedFrame>,
}

impl AugmentedFrameSet {
    /// The frames in recording order.
    pub fn frames(&self) -> &[AugmentedFrame] {
        &self.frames
    }

    /// The number of frames in the set.
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether the set holds no frames.
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

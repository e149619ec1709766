//! Frame cadence (tick scheduler)
//!
//! Turns a stream of rendered frames into discrete simulation steps. No wall
//! clock is involved: with one call per frame, step N lands on a computable
//! frame number.

/// Fires one simulation step every `threshold` frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCadence {
    frames: u32,
    threshold: u32,
    floor: u32,
}

impl FrameCadence {
    /// `threshold` frames per step, never dropping below `floor`.
    ///
    /// Callers pass validated settings; both values are forced to at least 1.
    pub fn new(threshold: u32, floor: u32) -> Self {
        let floor = floor.max(1);
        Self {
            frames: 0,
            threshold: threshold.max(floor),
            floor,
        }
    }

    /// Continuous simulation: a step on every frame
    pub fn every_frame() -> Self {
        Self::new(1, 1)
    }

    /// Count one frame. Returns true when a step fires on this frame.
    pub fn tick(&mut self) -> bool {
        self.frames += 1;
        if self.frames >= self.threshold {
            self.frames = 0;
            true
        } else {
            false
        }
    }

    /// Shorten the interval by one frame, holding at the floor
    pub fn quicken(&mut self) {
        if self.threshold > self.floor {
            self.threshold -= 1;
        }
    }

    /// Current frames-per-step (lower is faster)
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Frames counted since the last step
    pub fn pending_frames(&self) -> u32 {
        self.frames
    }
}

//! Camera-control surface for an external hand-gesture classifier.
//!
//! The mapping engine itself has no gesture-dependent behavior; a
//! classifier only drives the rendering side's camera toggles through
//! this state.

/// Discrete gesture labels a classifier can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    HandOpen,
    HandClosed,
}

/// One classifier result: the best-scoring gesture and its confidence.
#[derive(Debug, Clone, Copy)]
pub struct GestureReading {
    pub gesture: Gesture,
    pub score: f64,
}

/// Minimum estimator confidence before a reading drives the camera.
pub const SCORE_THRESHOLD: f64 = 5.0;

const AUTO_ROTATE_SPEED: f64 = 2.0;

/// Camera toggles owned by the rendering collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CameraControls {
    pub auto_rotate: bool,
    pub auto_rotate_speed: f64,
}

impl CameraControls {
    /// An open hand engages auto-rotation, a fist stops it. Readings at or
    /// below the confidence threshold are ignored.
    pub fn apply(&mut self, reading: GestureReading) {
        if reading.score <= SCORE_THRESHOLD {
            return;
        }
        match reading.gesture {
            Gesture::HandOpen => {
                self.auto_rotate = true;
                self.auto_rotate_speed = AUTO_ROTATE_SPEED;
            }
            Gesture::HandClosed => self.auto_rotate = false,
        }
    }

    /// Gesture control switched off; rotation always stops.
    pub fn disengage(&mut self) {
        self.auto_rotate = false;
    }
}

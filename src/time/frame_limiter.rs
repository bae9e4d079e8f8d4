/// Caps the frame rate by sleeping away whatever is left of the frame budget.
#[derive(Debug, Clone, Copy)]
pub struct FrameLimiter {
    frame_target_ms: i64,
}

impl FrameLimiter {
    pub fn new(frame_target_ms: i64) -> Self {
        Self { frame_target_ms }
    }

    pub fn frame_target_ms(&self) -> i64 {
        self.frame_target_ms
    }

    /// Time to wait after a frame that took `elapsed_ms`, or `None` when the
    /// frame already used up its budget.
    pub fn remaining(&self, elapsed_ms: i64) -> Option<i64> {
        if elapsed_ms < self.frame_target_ms {
            Some(self.frame_target_ms - elapsed_ms)
        } else {
            None
        }
    }
}

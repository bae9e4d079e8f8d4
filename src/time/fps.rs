/// Counts presented frames and reports the rate once per interval.
#[derive(Debug, Clone)]
pub struct FpsCounter {
    interval_ms: i64,
    window_start: Option<i64>,
    frames: u32,
}

impl FpsCounter {
    pub fn new() -> Self {
        Self::with_interval(1000)
    }

    pub fn with_interval(interval_ms: i64) -> Self {
        debug_assert!(interval_ms > 0);
        Self {
            interval_ms,
            window_start: None,
            frames: 0,
        }
    }

    /// Records a frame presented at `now_ms`. Returns the frames per second
    /// over the last interval once the interval has elapsed.
    pub fn frame(&mut self, now_ms: i64) -> Option<f32> {
        let start = *self.window_start.get_or_insert(now_ms);
        self.frames += 1;

        let elapsed = now_ms - start;
        if elapsed < self.interval_ms {
            return None;
        }

        let fps = self.frames as f32 * 1000.0 / elapsed as f32;
        self.window_start = Some(now_ms);
        self.frames = 0;
        Some(fps)
    }
}

impl Default for FpsCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_reports_once_per_interval() {
        let mut counter = FpsCounter::new();
        let mut reports = Vec::new();
        for frame in 0..=126 {
            if let Some(fps) = counter.frame(frame * 16) {
                reports.push(fps);
            }
        }
        // 64 frames by 1008 ms, then 63 more by 2016 ms
        assert_eq!(reports.len(), 2);
        assert_relative_eq!(reports[0], 64.0 * 1000.0 / 1008.0, epsilon = 1e-3);
        assert_relative_eq!(reports[1], 62.5, epsilon = 1e-3);
    }

    #[test]
    fn test_steady_rate() {
        let mut counter = FpsCounter::with_interval(500);
        let mut last = None;
        for frame in 0..=100 {
            if let Some(fps) = counter.frame(frame * 10) {
                last = Some(fps);
            }
        }
        assert_relative_eq!(last.unwrap(), 100.0, epsilon = 1.0);
    }
}

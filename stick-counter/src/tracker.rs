use opencv::core::Mat;
use vision::{DetectionResult, StickDetector, Sticks};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickStatus {
    Fresh,
    NoFrame,
    Failed,
}

/// Holds the latest counts between ticks.
///
/// A tick without a frame, or one whose frame fails to process, keeps the
/// previous result so a dropped frame does not flash the counts to zero.
pub struct CountTracker {
    detector: StickDetector,
    max_units: u32,
    current: DetectionResult,
    sticks: Sticks,
    stale_ticks: u32,
}

impl CountTracker {
    pub fn new(detector: StickDetector, max_units: u32) -> Self {
        Self {
            detector,
            max_units,
            current: DetectionResult::default(),
            sticks: Sticks::default(),
            stale_ticks: 0,
        }
    }

    pub fn tick(&mut self, frame: Option<&Mat>) -> TickStatus {
        let Some(frame) = frame else {
            self.stale_ticks += 1;
            log::debug!("No frame this tick, keeping counts from {} tick(s) ago", self.stale_ticks);
            return TickStatus::NoFrame;
        };

        match self.detector.find_sticks(frame) {
            Ok(sticks) => {
                self.current = DetectionResult::from_sticks(&sticks, self.max_units);
                self.sticks = sticks;
                self.stale_ticks = 0;
                TickStatus::Fresh
            }
            Err(e) => {
                self.stale_ticks += 1;
                log::error!("Failed to detect sticks: {e:#}");
                TickStatus::Failed
            }
        }
    }

    pub fn current(&self) -> DetectionResult {
        self.current
    }

    /// Regions behind the current counts
    pub fn sticks(&self) -> &Sticks {
        &self.sticks
    }

    pub fn stale_ticks(&self) -> u32 {
        self.stale_ticks
    }
}

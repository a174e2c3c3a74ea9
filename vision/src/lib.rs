mod config;
mod preprocess;
mod quantize;
mod sticks;

use opencv::core::Mat;
use preprocess::preprocess_image;
use sticks::find_sticks;

pub use config::{DetectorConfig, HsvRange, BLUE, RED_HIGH_HUE, RED_LOW_HUE};
pub use quantize::quantize;
pub use sticks::{candidate_region::CandidateRegion, StickColor, Sticks};

/// Even stick counts seen in one frame, each capped at the unit limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DetectionResult {
    pub red: u32,
    pub blue: u32,
}

impl DetectionResult {
    pub fn from_sticks(sticks: &Sticks, max_units: u32) -> Self {
        Self {
            red: quantize(sticks.red.len(), max_units),
            blue: quantize(sticks.blue.len(), max_units),
        }
    }
}

pub struct StickDetector {
    config: DetectorConfig,
}

impl StickDetector {
    pub fn new(config: DetectorConfig) -> anyhow::Result<Self> {
        config.validate()?;

        Ok(Self { config })
    }

    /// Accepted stick regions in a BGR frame, before counting.
    pub fn find_sticks(&self, frame: &Mat) -> anyhow::Result<Sticks> {
        let img_hsv = preprocess_image(frame, self.config.blur_kernel)?;
        find_sticks(&img_hsv, &self.config)
    }

    pub fn detect(&self, frame: &Mat, max_units: u32) -> anyhow::Result<DetectionResult> {
        let sticks = self.find_sticks(frame)?;
        let result = DetectionResult::from_sticks(&sticks, max_units);
        log::debug!(
            "Raw sticks red={} blue={}, counted red={} blue={}",
            sticks.red.len(), sticks.blue.len(), result.red, result.blue
        );

        Ok(result)
    }
}

impl Default for StickDetector {
    fn default() -> Self {
        Self { config: DetectorConfig::default() }
    }
}

#[cfg(test)]
mod tests {
    use opencv::{
        core::{Rect, Scalar, Size, CV_8UC1, CV_8UC3},
        imgproc::{rectangle, FILLED, LINE_8},
        prelude::*,
    };

    use super::*;

    fn red() -> Scalar {
        Scalar::new(0.0, 0.0, 255.0, 0.0)
    }

    fn blue() -> Scalar {
        Scalar::new(255.0, 0.0, 0.0, 0.0)
    }

    fn blank_frame() -> anyhow::Result<Mat> {
        Ok(Mat::new_size_with_default(Size::new(640, 480), CV_8UC3, Scalar::all(0.0))?)
    }

    fn draw(frame: &mut Mat, rect: Rect, color: Scalar) -> anyhow::Result<()> {
        rectangle(frame, rect, color, FILLED, LINE_8, 0)?;
        Ok(())
    }

    // 60x12 bars stacked 40px apart, starting at column x
    fn draw_horizontal(frame: &mut Mat, count: i32, x: i32, color: Scalar) -> anyhow::Result<()> {
        for i in 0..count {
            draw(frame, Rect::new(x, 20 + i * 40, 60, 12), color)?;
        }
        Ok(())
    }

    #[test]
    fn counts_pairs_of_each_color() -> anyhow::Result<()> {
        let mut frame = blank_frame()?;
        draw_horizontal(&mut frame, 4, 20, red())?;
        draw_horizontal(&mut frame, 2, 200, blue())?;

        let result = StickDetector::default().detect(&frame, 10)?;
        assert_eq!(result, DetectionResult { red: 4, blue: 2 });

        Ok(())
    }

    #[test]
    fn odd_count_drops_the_lone_stick() -> anyhow::Result<()> {
        let mut frame = blank_frame()?;
        draw_horizontal(&mut frame, 3, 20, red())?;
        draw_horizontal(&mut frame, 1, 200, blue())?;

        let detector = StickDetector::default();
        let sticks = detector.find_sticks(&frame)?;
        assert_eq!(sticks.of(StickColor::Red).len(), 3);
        assert_eq!(sticks.of(StickColor::Blue).len(), 1);

        let result = detector.detect(&frame, 10)?;
        assert_eq!(result, DetectionResult { red: 2, blue: 0 });

        Ok(())
    }

    #[test]
    fn vertical_sticks_count_too() -> anyhow::Result<()> {
        let mut frame = blank_frame()?;
        for i in 0..2 {
            draw(&mut frame, Rect::new(300 + i * 50, 100, 12, 80), blue())?;
        }

        let result = StickDetector::default().detect(&frame, 10)?;
        assert_eq!(result, DetectionResult { red: 0, blue: 2 });

        Ok(())
    }

    #[test]
    fn squares_specks_and_other_colors_are_ignored() -> anyhow::Result<()> {
        let mut frame = blank_frame()?;
        draw(&mut frame, Rect::new(50, 50, 40, 40), red())?;
        draw(&mut frame, Rect::new(150, 50, 3, 3), red())?;
        draw(&mut frame, Rect::new(250, 50, 12, 12), blue())?;
        draw(&mut frame, Rect::new(350, 50, 80, 12), Scalar::new(0.0, 255.0, 0.0, 0.0))?;

        let result = StickDetector::default().detect(&frame, 10)?;
        assert_eq!(result, DetectionResult { red: 0, blue: 0 });

        Ok(())
    }

    #[test]
    fn counts_are_capped_at_max_units() -> anyhow::Result<()> {
        let mut frame = blank_frame()?;
        draw_horizontal(&mut frame, 11, 20, red())?;
        draw_horizontal(&mut frame, 11, 200, blue())?;

        let detector = StickDetector::default();
        assert_eq!(detector.find_sticks(&frame)?.red.len(), 11);
        assert_eq!(detector.detect(&frame, 10)?, DetectionResult { red: 10, blue: 10 });
        assert_eq!(detector.detect(&frame, 4)?, DetectionResult { red: 4, blue: 4 });

        Ok(())
    }

    #[test]
    fn empty_scene_is_zero_not_error() -> anyhow::Result<()> {
        let result = StickDetector::default().detect(&blank_frame()?, 10)?;
        assert_eq!(result, DetectionResult::default());

        Ok(())
    }

    #[test]
    fn same_frame_same_result() -> anyhow::Result<()> {
        let mut frame = blank_frame()?;
        draw_horizontal(&mut frame, 5, 20, red())?;

        let detector = StickDetector::default();
        assert_eq!(detector.detect(&frame, 10)?, detector.detect(&frame, 10)?);

        Ok(())
    }

    #[test]
    fn gray_frame_is_an_error() -> anyhow::Result<()> {
        let gray = Mat::new_size_with_default(Size::new(64, 64), CV_8UC1, Scalar::all(0.0))?;
        assert!(StickDetector::default().detect(&gray, 10).is_err());

        Ok(())
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = DetectorConfig { morph_kernel: 0, ..Default::default() };
        assert!(StickDetector::new(config).is_err());
    }
}

use anyhow::bail;
use opencv::core::Scalar;
use serde::Deserialize;

/// Inclusive HSV bounds in OpenCV's 8-bit convention (hue 0..=180).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct HsvRange {
    pub low: [u8; 3],
    pub high: [u8; 3],
}

impl HsvRange {
    pub const fn new(low: [u8; 3], high: [u8; 3]) -> Self {
        Self { low, high }
    }

    pub fn lower_bound(&self) -> Scalar {
        to_scalar(&self.low)
    }

    pub fn upper_bound(&self) -> Scalar {
        to_scalar(&self.high)
    }

    #[cfg(test)]
    pub fn contains(&self, hsv: [u8; 3]) -> bool {
        (0..3).all(|i| self.low[i] <= hsv[i] && hsv[i] <= self.high[i])
    }

    fn validate(&self, name: &str) -> anyhow::Result<()> {
        for (i, channel) in ["hue", "saturation", "value"].iter().enumerate() {
            if self.low[i] > self.high[i] {
                bail!("{name}: low {channel} {} is above high {channel} {}", self.low[i], self.high[i]);
            }
        }
        if self.high[0] > 180 {
            bail!("{name}: hue {} is outside 0..=180", self.high[0]);
        }

        Ok(())
    }
}

fn to_scalar(v: &[u8; 3]) -> Scalar {
    Scalar::new(v[0] as f64, v[1] as f64, v[2] as f64, 0.0)
}

// Red wraps around hue 0, so it needs two ranges
pub const RED_LOW_HUE: HsvRange = HsvRange::new([0, 120, 70], [10, 255, 255]);
pub const RED_HIGH_HUE: HsvRange = HsvRange::new([170, 120, 70], [180, 255, 255]);
pub const BLUE: HsvRange = HsvRange::new([100, 150, 50], [140, 255, 255]);

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DetectorConfig {
    /// Gaussian kernel side, must be odd
    pub blur_kernel: i32,
    /// Side of the square element used for opening
    pub morph_kernel: i32,
    pub red_ranges: [HsvRange; 2],
    pub blue_range: HsvRange,
    /// Contour area a region must exceed to be considered
    pub min_area: f64,
    /// Long side over short side must exceed this
    pub min_aspect_ratio: f64,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            blur_kernel: 5,
            morph_kernel: 5,
            red_ranges: [RED_LOW_HUE, RED_HIGH_HUE],
            blue_range: BLUE,
            min_area: 200.0,
            min_aspect_ratio: 2.0,
        }
    }
}

impl DetectorConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.blur_kernel <= 0 || self.blur_kernel % 2 == 0 {
            bail!("blur_kernel must be a positive odd number, got {}", self.blur_kernel);
        }
        if self.morph_kernel <= 0 {
            bail!("morph_kernel must be positive, got {}", self.morph_kernel);
        }
        if !(self.min_area >= 0.0) {
            bail!("min_area must not be negative, got {}", self.min_area);
        }
        if !(self.min_aspect_ratio >= 1.0) {
            bail!("min_aspect_ratio must be at least 1.0, got {}", self.min_aspect_ratio);
        }
        self.red_ranges[0].validate("red_ranges[0]")?;
        self.red_ranges[1].validate("red_ranges[1]")?;
        self.blue_range.validate("blue_range")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        DetectorConfig::default().validate().unwrap();
    }

    #[test]
    fn red_ranges_cover_both_ends_of_hue_circle() {
        let config = DetectorConfig::default();
        let is_red = |hsv: [u8; 3]| config.red_ranges.iter().any(|r| r.contains(hsv));

        assert!(is_red([0, 255, 255]));
        assert!(is_red([178, 200, 200]));
        assert!(!is_red([90, 255, 255]));
        assert!(!is_red([0, 50, 255]));
        assert!(config.blue_range.contains([120, 255, 255]));
        assert!(!config.blue_range.contains([120, 100, 255]));
    }

    #[test]
    fn rejects_even_blur_kernel() {
        let config = DetectorConfig { blur_kernel: 4, ..Default::default() };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("blur_kernel"));
    }

    #[test]
    fn rejects_inverted_range() {
        let config = DetectorConfig {
            blue_range: HsvRange::new([140, 150, 50], [100, 255, 255]),
            ..Default::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("blue_range"));
    }

    #[test]
    fn rejects_flat_aspect_limit() {
        let config = DetectorConfig { min_aspect_ratio: 0.5, ..Default::default() };
        assert!(config.validate().is_err());

        let config = DetectorConfig { min_area: -1.0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}

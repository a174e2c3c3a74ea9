pub mod candidate_region;
pub mod color_mask;
pub mod filter;

use opencv::core::Mat;

use crate::config::DetectorConfig;
use candidate_region::CandidateRegion;
use color_mask::{color_mask, extract_regions, open_mask};
use filter::filter_sticks;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StickColor {
    Red,
    Blue,
}

/// Accepted stick regions of one frame, per color.
#[derive(Debug, Clone, Default)]
pub struct Sticks {
    pub red: Vec<CandidateRegion>,
    pub blue: Vec<CandidateRegion>,
}

impl Sticks {
    pub fn of(&self, color: StickColor) -> &[CandidateRegion] {
        match color {
            StickColor::Red => &self.red,
            StickColor::Blue => &self.blue,
        }
    }
}

pub fn find_sticks(img_hsv: &Mat, config: &DetectorConfig) -> anyhow::Result<Sticks> {
    Ok(Sticks {
        red: find_color(img_hsv, config, StickColor::Red)?,
        blue: find_color(img_hsv, config, StickColor::Blue)?,
    })
}

fn find_color(img_hsv: &Mat, config: &DetectorConfig, color: StickColor) -> anyhow::Result<Vec<CandidateRegion>> {
    let mask = match color {
        StickColor::Red => color_mask(img_hsv, &config.red_ranges)?,
        StickColor::Blue => color_mask(img_hsv, &[config.blue_range])?,
    };
    let mask = open_mask(&mask, config.morph_kernel)?;

    let regions = extract_regions(&mask)?;
    let region_count = regions.len();
    let sticks = filter_sticks(regions, config.min_area, config.min_aspect_ratio);
    log::debug!("{color:?}: {} of {region_count} regions look like sticks", sticks.len());

    Ok(sticks)
}

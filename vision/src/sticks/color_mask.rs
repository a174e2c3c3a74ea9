use opencv::{
    core::{bitwise_or_def, in_range, Mat, Point, Size, Vector},
    imgproc::{
        bounding_rect, contour_area_def, find_contours_def, get_structuring_element_def, morphology_ex_def,
        CHAIN_APPROX_SIMPLE, MORPH_OPEN, MORPH_RECT, RETR_EXTERNAL,
    },
};

use crate::config::HsvRange;

use super::candidate_region::CandidateRegion;

/// Marks every HSV sample that falls inside any of the ranges.
pub fn color_mask(img_hsv: &Mat, ranges: &[HsvRange]) -> anyhow::Result<Mat> {
    let mut combined = Mat::default();
    for (i, range) in ranges.iter().enumerate() {
        let mut masked = Mat::default();
        in_range(img_hsv, &range.lower_bound(), &range.upper_bound(), &mut masked)?;

        if i == 0 {
            combined = masked;
        } else {
            let mut merged = Mat::default();
            bitwise_or_def(&combined, &masked, &mut merged)?;
            combined = merged;
        }
    }

    Ok(combined)
}

/// Erode then dilate to drop speckles smaller than the kernel.
pub fn open_mask(mask: &Mat, kernel_size: i32) -> anyhow::Result<Mat> {
    let kernel = get_structuring_element_def(MORPH_RECT, Size::new(kernel_size, kernel_size))?;

    let mut opened = Mat::default();
    morphology_ex_def(mask, &mut opened, MORPH_OPEN, &kernel)?;

    Ok(opened)
}

/// One region per external contour of the mask.
pub fn extract_regions(mask: &Mat) -> anyhow::Result<Vec<CandidateRegion>> {
    let mut contours: Vector<Vector<Point>> = Vector::new();
    find_contours_def(mask, &mut contours, RETR_EXTERNAL, CHAIN_APPROX_SIMPLE)?;

    contours
        .iter()
        .map(|contour| -> anyhow::Result<CandidateRegion> {
            let rect = bounding_rect(&contour)?;
            let area = contour_area_def(&contour)?;

            Ok(CandidateRegion::new(rect, area))
        })
        .collect()
}

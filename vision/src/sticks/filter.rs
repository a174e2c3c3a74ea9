use super::candidate_region::CandidateRegion;


/// Keeps the regions large and elongated enough to be a stick.
pub fn filter_sticks(regions: Vec<CandidateRegion>, min_area: f64, min_aspect_ratio: f64) -> Vec<CandidateRegion> {
    regions
        .into_iter()
        .filter(|r| {
            let keep = is_stick(r, min_area, min_aspect_ratio);
            if !keep {
                log::trace!("Rejected region {}x{} with area {}", r.width(), r.height(), r.area);
            }
            keep
        })
        .collect()
}

#[inline(always)]
pub fn is_stick(region: &CandidateRegion, min_area: f64, min_aspect_ratio: f64) -> bool {
    region.area > min_area && region.aspect_ratio() > min_aspect_ratio
}

#[cfg(test)]
mod tests {
    use opencv::core::Rect;

    use super::*;

    fn region(w: i32, h: i32, area: f64) -> CandidateRegion {
        CandidateRegion::new(Rect::new(0, 0, w, h), area)
    }

    #[test]
    fn long_thin_region_counts() {
        assert!(is_stick(&region(40, 8, 320.0), 200.0, 2.0));
    }

    #[test]
    fn compact_region_is_rejected_despite_area() {
        assert!(!is_stick(&region(20, 18, 360.0), 200.0, 2.0));
    }

    #[test]
    fn limits_are_exclusive() {
        assert!(!is_stick(&region(40, 8, 200.0), 200.0, 2.0));
        assert!(!is_stick(&region(40, 20, 800.0), 200.0, 2.0));
    }

    #[test]
    fn small_speck_is_rejected() {
        assert!(!is_stick(&region(30, 3, 90.0), 200.0, 2.0));
    }

    #[test]
    fn filter_keeps_only_sticks() {
        let kept = filter_sticks(
            vec![region(40, 8, 320.0), region(20, 18, 360.0), region(8, 60, 480.0)],
            200.0,
            2.0,
        );

        assert_eq!(kept.len(), 2);
        assert_eq!(kept[1].height(), 60);
    }
}

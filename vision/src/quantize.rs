/// Rounds a raw stick count down to even, then caps it.
///
/// Sticks come in parallel pairs, so an odd count means one partner was
/// missed and the lone stick is dropped.
pub fn quantize(raw: usize, max_units: u32) -> u32 {
    let even = raw - raw % 2;
    even.min(max_units as usize) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_counts_round_down() {
        assert_eq!(quantize(7, 10), 6);
        assert_eq!(quantize(4, 10), 4);
        assert_eq!(quantize(1, 10), 0);
        assert_eq!(quantize(0, 10), 0);
    }

    #[test]
    fn large_counts_are_capped() {
        assert_eq!(quantize(12, 10), 10);
        assert_eq!(quantize(13, 10), 10);
        assert_eq!(quantize(1000, 0), 0);
    }

    #[test]
    fn output_is_even_and_in_range() {
        for max_units in (0..=20).step_by(2) {
            for raw in 0..50 {
                let q = quantize(raw, max_units);
                assert_eq!(q % 2, 0);
                assert!(q <= max_units);
            }
        }
    }
}

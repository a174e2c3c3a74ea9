use anyhow::bail;

mod cost;
mod search;

pub use cost::{CostBreakdown, CostModel, CostPreset};
pub use search::{optimal_counts, OptimizationResult};

/// Sticks needed for one unit of rectangle side. A rectangle uses its sticks
/// in parallel pairs, so two sticks make one side unit.
pub const UNITS_PER_SIDE: u32 = 2;

/// Largest stick count the search grid accepts.
pub const MAX_UNITS_LIMIT: u32 = 1000;

/// Rectangle area, in square units, built from the given stick counts.
pub fn area(red: u32, blue: u32) -> u64 {
    (red / UNITS_PER_SIDE) as u64 * (blue / UNITS_PER_SIDE) as u64
}

/// Checks that a unit limit is even and small enough to search.
pub fn check_max_units(max_units: u32) -> anyhow::Result<()> {
    if max_units % 2 != 0 {
        bail!("max_units must be even, got {max_units}");
    }
    if max_units > MAX_UNITS_LIMIT {
        bail!("max_units must be at most {MAX_UNITS_LIMIT}, got {max_units}");
    }

    Ok(())
}

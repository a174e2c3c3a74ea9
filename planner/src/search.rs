use itertools::iproduct;

use crate::{area, cost::CostModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptimizationResult {
    pub red: u32,
    pub blue: u32,
}

impl OptimizationResult {
    pub fn area(&self) -> u64 {
        area(self.red, self.blue)
    }
}

/// Finds the even (red, blue) pair in `[0, max_units]` with the largest area
/// that stays within the budget.
///
/// Red is the outer loop and blue the inner one, both ascending, and only a
/// strictly larger area replaces the current best. Among equal areas the
/// pair with the smaller red count wins, then the smaller blue count.
/// `(0, 0)` costs nothing, so there is always an answer.
pub fn optimal_counts(cost: &CostModel, max_units: u32) -> OptimizationResult {
    let mut best = (OptimizationResult::default(), 0u64);

    for (red, blue) in iproduct!(even_counts(max_units), even_counts(max_units)) {
        if !cost.is_affordable(red, blue) {
            continue;
        }

        let candidate_area = area(red, blue);
        if candidate_area > best.1 {
            best = (OptimizationResult { red, blue }, candidate_area);
        }
    }

    log::trace!("Best plan for {max_units} units: {:?} with area {}", best.0, best.1);
    best.0
}

fn even_counts(max_units: u32) -> impl Iterator<Item = u32> + Clone {
    (0..=max_units).step_by(2)
}

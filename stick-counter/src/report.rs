use std::fmt;

use planner::{area, CostBreakdown, CostModel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Detected,
    Optimized,
}

/// Counts as shown to the user, with their price and rectangle area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub view: View,
    pub red: u32,
    pub blue: u32,
    pub cost: CostBreakdown,
    pub budget: f64,
    pub area: u64,
}

impl Summary {
    pub fn new(view: View, red: u32, blue: u32, cost_model: &CostModel) -> Self {
        Self {
            view,
            red,
            blue,
            cost: cost_model.breakdown(red, blue),
            budget: cost_model.budget(),
            area: area(red, blue),
        }
    }

    pub fn over_budget(&self) -> bool {
        self.cost.total > self.budget
    }

    pub fn cost_line(&self) -> String {
        format!(
            "Red ${:.2} + Blue ${:.2} = ${:.2} of ${:.2}",
            self.cost.red, self.cost.blue, self.cost.total, self.budget
        )
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self.view {
            View::Detected => "Detected",
            View::Optimized => "Optimized",
        };
        write!(f, "{label}: red={} blue={} | {} | area={}", self.red, self.blue, self.cost_line(), self.area)?;
        if self.over_budget() {
            write!(f, " (over budget)")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_prices_and_sizes_counts() {
        let summary = Summary::new(View::Optimized, 4, 6, &CostModel::standard());

        assert_eq!(summary.cost.total, 28.0);
        assert_eq!(summary.area, 6);
        assert!(!summary.over_budget());
        assert_eq!(
            summary.to_string(),
            "Optimized: red=4 blue=6 | Red $10.00 + Blue $18.00 = $28.00 of $30.00 | area=6"
        );
    }

    #[test]
    fn detected_counts_may_exceed_budget() {
        let summary = Summary::new(View::Detected, 10, 10, &CostModel::standard());

        assert_eq!(summary.cost.total, 55.0);
        assert_eq!(summary.area, 25);
        assert!(summary.to_string().ends_with("(over budget)"));
    }
}

use anyhow::bail;
use serde::Deserialize;

/// Unit prices and spending limit. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    cost_per_red: f64,
    cost_per_blue: f64,
    budget: f64,
}

/// The two price lists the counter ships with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostPreset {
    Standard,
    Alternate,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostBreakdown {
    pub red: f64,
    pub blue: f64,
    pub total: f64,
}

impl CostModel {
    pub fn new(cost_per_red: f64, cost_per_blue: f64, budget: f64) -> anyhow::Result<CostModel> {
        check_amount("cost_per_red", cost_per_red)?;
        check_amount("cost_per_blue", cost_per_blue)?;
        check_amount("budget", budget)?;

        Ok(CostModel { cost_per_red, cost_per_blue, budget })
    }

    // 2.50 per red, 3.00 per blue
    pub fn standard() -> CostModel {
        CostModel { cost_per_red: 2.5, cost_per_blue: 3.0, budget: 30.0 }
    }

    // 5.00 per red, 2.00 per blue
    pub fn alternate() -> CostModel {
        CostModel { cost_per_red: 5.0, cost_per_blue: 2.0, budget: 30.0 }
    }

    pub fn from_preset(preset: CostPreset) -> CostModel {
        match preset {
            CostPreset::Standard => CostModel::standard(),
            CostPreset::Alternate => CostModel::alternate(),
        }
    }

    pub fn cost_per_red(&self) -> f64 {
        self.cost_per_red
    }

    pub fn cost_per_blue(&self) -> f64 {
        self.cost_per_blue
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn total_cost(&self, red: u32, blue: u32) -> f64 {
        red as f64 * self.cost_per_red + blue as f64 * self.cost_per_blue
    }

    pub fn breakdown(&self, red: u32, blue: u32) -> CostBreakdown {
        let red_cost = red as f64 * self.cost_per_red;
        let blue_cost = blue as f64 * self.cost_per_blue;

        CostBreakdown {
            red: red_cost,
            blue: blue_cost,
            total: red_cost + blue_cost,
        }
    }

    pub fn is_affordable(&self, red: u32, blue: u32) -> bool {
        self.total_cost(red, blue) <= self.budget
    }
}

impl Default for CostModel {
    fn default() -> Self {
        CostModel::standard()
    }
}

fn check_amount(name: &str, value: f64) -> anyhow::Result<()> {
    if !value.is_finite() {
        bail!("{name} must be a finite number, got {value}");
    }
    if value < 0.0 {
        bail!("{name} must not be negative, got {value}");
    }

    Ok(())
}

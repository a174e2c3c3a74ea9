use std::{fs, path::Path};

use anyhow::{bail, Context};
use planner::{CostModel, CostPreset};
use serde::Deserialize;
use vision::DetectorConfig;

const DEFAULT_CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CostConfig {
    Preset { preset: CostPreset },
    Explicit { cost_per_red: f64, cost_per_blue: f64, budget: f64 },
}

impl Default for CostConfig {
    fn default() -> Self {
        CostConfig::Preset { preset: CostPreset::Standard }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Upper bound for both counts and for the optimizer search, must be even
    pub max_units: u32,
    pub cost: CostConfig,
    pub detector: DetectorConfig,
    pub camera_index: i32,
    pub tick_interval_ms: u64,
    /// Show the camera and plan in a window
    pub preview: bool,
    /// Pixels per side unit in the preview
    pub cell_size: i32,
    /// Start in the optimized view
    pub show_optimized: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_units: 10,
            cost: CostConfig::default(),
            detector: DetectorConfig::default(),
            camera_index: 0,
            tick_interval_ms: 100,
            preview: true,
            cell_size: 50,
            show_optimized: false,
        }
    }
}

impl AppConfig {
    /// Reads the given file, or `config.json` if it exists, or falls back to defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<AppConfig> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::from_file(Path::new(DEFAULT_CONFIG_FILE))?,
            None => {
                log::info!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                AppConfig::default()
            }
        };
        config.validate()?;

        Ok(config)
    }

    fn from_file(path: &Path) -> anyhow::Result<AppConfig> {
        log::info!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&contents).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn parse(contents: &str) -> anyhow::Result<AppConfig> {
        Ok(serde_json::from_str(contents)?)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        planner::check_max_units(self.max_units)?;
        if self.tick_interval_ms == 0 {
            bail!("tick_interval_ms must be positive");
        }
        if self.cell_size <= 0 {
            bail!("cell_size must be positive, got {}", self.cell_size);
        }
        self.cost_model()?;
        self.detector.validate().context("Invalid detector settings")?;

        Ok(())
    }

    pub fn cost_model(&self) -> anyhow::Result<CostModel> {
        match self.cost {
            CostConfig::Preset { preset } => Ok(CostModel::from_preset(preset)),
            CostConfig::Explicit { cost_per_red, cost_per_blue, budget } => {
                CostModel::new(cost_per_red, cost_per_blue, budget).context("Invalid cost settings")
            }
        }
    }
}

mod config;
mod preview;
mod report;
mod tracker;

use std::{path::PathBuf, thread::sleep, time::Duration};

use camera::{FrameSource, Webcam};
use config::AppConfig;
use planner::optimal_counts;
use preview::{KeyAction, Preview};
use report::{Summary, View};
use tracker::{CountTracker, TickStatus};
use vision::StickDetector;


fn main() -> anyhow::Result<()> {
    setup_logging();

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = AppConfig::load(config_path.as_deref())?;
    let cost_model = config.cost_model()?;

    // Pure function of the config, so it only needs computing once
    let plan = optimal_counts(&cost_model, config.max_units);
    log::info!("{}", Summary::new(View::Optimized, plan.red, plan.blue, &cost_model));

    log::info!("Opening camera {}", config.camera_index);
    let mut camera = Webcam::open(config.camera_index)?;
    let mut tracker = CountTracker::new(StickDetector::new(config.detector.clone())?, config.max_units);

    let preview = if config.preview {
        Some(Preview::open(config.cell_size, config.max_units)?)
    } else {
        None
    };
    let mut show_optimized = config.show_optimized;
    let tick_interval = Duration::from_millis(config.tick_interval_ms);

    log::info!("Starting main loop");
    loop {
        let frame = match camera.next_frame() {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Error reading frame: {e}");
                None
            }
        };
        if tracker.tick(frame.as_ref()) != TickStatus::Fresh {
            log::warn!("Counts are {} tick(s) old", tracker.stale_ticks());
        }

        let summary = if show_optimized {
            Summary::new(View::Optimized, plan.red, plan.blue, &cost_model)
        } else {
            let current = tracker.current();
            Summary::new(View::Detected, current.red, current.blue, &cost_model)
        };
        log::info!("{summary}");

        match &preview {
            Some(preview) => {
                let delay_ms = config.tick_interval_ms.min(i32::MAX as u64) as i32;
                match preview.show(frame.as_ref(), tracker.sticks(), &summary, delay_ms)? {
                    KeyAction::ToggleView => {
                        show_optimized = !show_optimized;
                        log::debug!("Optimized view {}", if show_optimized { "on" } else { "off" });
                    }
                    KeyAction::Quit => break,
                    KeyAction::None => {}
                }
            }
            None => sleep(tick_interval),
        }
    }

    log::info!("Stopped");
    Ok(())
}

fn setup_logging() {
    simple_log::quick!();
}

mod simulated_scene;

use anyhow::bail;
use planner::{area, optimal_counts, CostModel};
use rand::thread_rng;
use simulated_scene::SimScene;
use vision::{StickColor, StickDetector};

const MAX_UNITS: u32 = 10;
const DEFAULT_SCENES: usize = 20;


fn main() -> anyhow::Result<()> {
    setup_logging();

    let scene_count = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => DEFAULT_SCENES,
    };

    for cost_model in [CostModel::standard(), CostModel::alternate()] {
        let plan = optimal_counts(&cost_model, MAX_UNITS);
        log::info!(
            "Plan for {:.2}/{:.2} within {:.2}: red={} blue={} area={}",
            cost_model.cost_per_red(), cost_model.cost_per_blue(), cost_model.budget(),
            plan.red, plan.blue, plan.area()
        );
    }

    let detector = StickDetector::default();
    let mut rng = thread_rng();
    let mut mismatches = 0;

    log::info!("Running {scene_count} scenes");
    for i in 0..scene_count {
        let scene = SimScene::random(&mut rng);
        let frame = scene.render()?;

        let expected = scene.expected(MAX_UNITS);
        let detected = detector.detect(&frame, MAX_UNITS)?;

        log::debug!(
            "Scene {i}: {} red, {} blue, {} decoys",
            scene.count(StickColor::Red), scene.count(StickColor::Blue), scene.decoys.len()
        );
        if detected == expected {
            log::info!("Scene {i}: red={} blue={} area={}", detected.red, detected.blue, area(detected.red, detected.blue));
        } else {
            mismatches += 1;
            log::error!("Scene {i}: expected {expected:?}, detected {detected:?}");
        }
    }

    if mismatches > 0 {
        bail!("{mismatches} of {scene_count} scenes were miscounted");
    }

    Ok(())
}

fn setup_logging() {
    simple_log::quick!();
}

use opencv::{
    core::{Mat, Point, Scalar, Size, CV_8UC3},
    highgui::{destroy_all_windows, imshow, named_window, wait_key, WINDOW_AUTOSIZE},
    imgproc::{line, put_text, rectangle, FONT_HERSHEY_SIMPLEX, LINE_8},
    prelude::*,
};
use planner::UNITS_PER_SIDE;
use vision::{StickColor, Sticks};

use crate::report::{Summary, View};

const CAMERA_WINDOW: &str = "Stick Counter - Camera";
const PLAN_WINDOW: &str = "Stick Counter - Plan";
const MARGIN: i32 = 40;
const TEXT_HEIGHT: i32 = 90;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    ToggleView,
    Quit,
}

pub struct Preview {
    cell_size: i32,
    side_units: i32,
}

impl Preview {
    pub fn open(cell_size: i32, max_units: u32) -> anyhow::Result<Self> {
        named_window(CAMERA_WINDOW, WINDOW_AUTOSIZE)?;
        named_window(PLAN_WINDOW, WINDOW_AUTOSIZE)?;

        Ok(Self {
            cell_size,
            side_units: (max_units / UNITS_PER_SIDE) as i32,
        })
    }

    /// Shows one tick and waits up to `delay_ms` for a key press.
    pub fn show(&self, frame: Option<&Mat>, sticks: &Sticks, summary: &Summary, delay_ms: i32) -> anyhow::Result<KeyAction> {
        if let Some(frame) = frame {
            let mut annotated = frame.clone();
            draw_sticks(&mut annotated, sticks)?;
            imshow(CAMERA_WINDOW, &annotated)?;
        }
        imshow(PLAN_WINDOW, &self.draw_plan(summary)?)?;

        let key = wait_key(delay_ms.max(1))?;
        Ok(match key {
            k if k == 'o' as i32 || k == ' ' as i32 => KeyAction::ToggleView,
            k if k == 'q' as i32 || k == 27 => KeyAction::Quit,
            _ => KeyAction::None,
        })
    }

    fn draw_plan(&self, summary: &Summary) -> anyhow::Result<Mat> {
        let grid = self.cell_size * self.side_units;
        let mut canvas = Mat::new_size_with_default(
            Size::new(grid + 2 * MARGIN, grid + 2 * MARGIN + TEXT_HEIGHT),
            CV_8UC3,
            Scalar::all(224.0),
        )?;

        let gray = Scalar::new(190.0, 190.0, 190.0, 0.0);
        for i in 0..=self.side_units {
            let offset = MARGIN + i * self.cell_size;
            line(&mut canvas, Point::new(MARGIN, offset), Point::new(MARGIN + grid, offset), gray, 1, LINE_8, 0)?;
            line(&mut canvas, Point::new(offset, MARGIN), Point::new(offset, MARGIN + grid), gray, 1, LINE_8, 0)?;
        }

        // red sticks run along x, blue along y
        let width = (summary.red / UNITS_PER_SIDE) as i32 * self.cell_size;
        let height = (summary.blue / UNITS_PER_SIDE) as i32 * self.cell_size;
        if width > 0 && height > 0 {
            let red = Scalar::new(0.0, 0.0, 220.0, 0.0);
            let blue = Scalar::new(220.0, 0.0, 0.0, 0.0);
            let (x0, y0, x1, y1) = (MARGIN, MARGIN, MARGIN + width, MARGIN + height);
            line(&mut canvas, Point::new(x0, y0), Point::new(x1, y0), red, 4, LINE_8, 0)?;
            line(&mut canvas, Point::new(x0, y1), Point::new(x1, y1), red, 4, LINE_8, 0)?;
            line(&mut canvas, Point::new(x0, y0), Point::new(x0, y1), blue, 4, LINE_8, 0)?;
            line(&mut canvas, Point::new(x1, y0), Point::new(x1, y1), blue, 4, LINE_8, 0)?;
        }

        let title = match summary.view {
            View::Detected => format!("Detected: {} red, {} blue", summary.red, summary.blue),
            View::Optimized => format!("Optimized: {} red, {} blue", summary.red, summary.blue),
        };
        let text_top = grid + 2 * MARGIN;
        let black = Scalar::all(0.0);
        let cost_color = if summary.over_budget() { Scalar::new(0.0, 0.0, 200.0, 0.0) } else { black };
        put_text(&mut canvas, &title, Point::new(10, text_top + 20), FONT_HERSHEY_SIMPLEX, 0.6, black, 1, LINE_8, false)?;
        put_text(&mut canvas, &summary.cost_line(), Point::new(10, text_top + 45), FONT_HERSHEY_SIMPLEX, 0.5, cost_color, 1, LINE_8, false)?;
        put_text(&mut canvas, &format!("Area: {} (o: toggle, q: quit)", summary.area), Point::new(10, text_top + 70), FONT_HERSHEY_SIMPLEX, 0.5, black, 1, LINE_8, false)?;

        Ok(canvas)
    }
}

impl Drop for Preview {
    fn drop(&mut self) {
        if let Err(e) = destroy_all_windows() {
            log::error!("Failed to close preview windows: {e}");
        }
    }
}

fn draw_sticks(frame: &mut Mat, sticks: &Sticks) -> anyhow::Result<()> {
    for stick_color in [StickColor::Red, StickColor::Blue] {
        let color = match stick_color {
            StickColor::Red => Scalar::new(0.0, 255.0, 255.0, 0.0),
            StickColor::Blue => Scalar::new(255.0, 255.0, 0.0, 0.0),
        };
        for region in sticks.of(stick_color) {
            rectangle(frame, region.rect(), color, 2, LINE_8, 0)?;
        }
    }

    Ok(())
}

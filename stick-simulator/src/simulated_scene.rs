use nalgebra::Vector2;
use opencv::{
    core::{Mat, Rect, Scalar, Size, CV_8UC3},
    imgproc::{rectangle, FILLED, LINE_8},
};
use rand::{seq::SliceRandom, Rng};
use vision::{quantize, DetectionResult, StickColor};

const FRAME_SIZE: Vector2<i32> = Vector2::new(640, 480);
// Every object gets its own cell so nothing touches
const CELL: i32 = 80;
const STICK_LENGTH: i32 = 60;
const MAX_STICKS: usize = 12;
const MAX_DECOYS: usize = 4;

#[derive(Debug, Clone)]
pub struct SimObject {
    pub color: StickColor,
    pub pos: Vector2<i32>,
    pub size: Vector2<i32>,
}

impl SimObject {
    fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size.x, self.size.y)
    }
}

pub struct SimScene {
    pub sticks: Vec<SimObject>,
    pub decoys: Vec<SimObject>,
}

impl SimScene {
    pub fn random(rng: &mut impl Rng) -> Self {
        let mut cells: Vec<Vector2<i32>> = (0..FRAME_SIZE.y / CELL)
            .flat_map(|row| (0..FRAME_SIZE.x / CELL).map(move |col| Vector2::new(col * CELL, row * CELL)))
            .collect();
        cells.shuffle(rng);
        let mut cells = cells.into_iter();

        let red = rng.gen_range(0..=MAX_STICKS);
        let blue = rng.gen_range(0..=MAX_STICKS);
        let colors = std::iter::repeat(StickColor::Red).take(red).chain(std::iter::repeat(StickColor::Blue).take(blue));

        let mut sticks = Vec::new();
        for (color, cell) in colors.zip(cells.by_ref()) {
            let thickness = rng.gen_range(10..=14);
            let size = if rng.gen_bool(0.5) {
                Vector2::new(STICK_LENGTH, thickness)
            } else {
                Vector2::new(thickness, STICK_LENGTH)
            };
            sticks.push(SimObject { color, pos: cell + jitter(rng), size });
        }

        let decoy_count = rng.gen_range(0..=MAX_DECOYS);
        let mut decoys = Vec::new();
        for cell in cells.take(decoy_count) {
            let color = if rng.gen_bool(0.5) { StickColor::Red } else { StickColor::Blue };
            // compact blobs and specks, neither should count
            let side = if rng.gen_bool(0.5) { 30 } else { 3 };
            decoys.push(SimObject { color, pos: cell + jitter(rng), size: Vector2::new(side, side) });
        }

        Self { sticks, decoys }
    }

    pub fn count(&self, color: StickColor) -> usize {
        self.sticks.iter().filter(|s| s.color == color).count()
    }

    pub fn expected(&self, max_units: u32) -> DetectionResult {
        DetectionResult {
            red: quantize(self.count(StickColor::Red), max_units),
            blue: quantize(self.count(StickColor::Blue), max_units),
        }
    }

    pub fn render(&self) -> anyhow::Result<Mat> {
        let mut frame = Mat::new_size_with_default(Size::new(FRAME_SIZE.x, FRAME_SIZE.y), CV_8UC3, Scalar::all(0.0))?;
        for object in self.sticks.iter().chain(&self.decoys) {
            let color = match object.color {
                StickColor::Red => Scalar::new(0.0, 0.0, 255.0, 0.0),
                StickColor::Blue => Scalar::new(255.0, 0.0, 0.0, 0.0),
            };
            rectangle(&mut frame, object.rect(), color, FILLED, LINE_8, 0)?;
        }

        Ok(frame)
    }
}

fn jitter(rng: &mut impl Rng) -> Vector2<i32> {
    Vector2::new(rng.gen_range(2..10), rng.gen_range(2..10))
}

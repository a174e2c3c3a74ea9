use nalgebra::Vector2;
use opencv::core::Rect;

/// A connected blob from one color mask.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateRegion {
    pub min: Vector2<i32>,
    pub max: Vector2<i32>,
    /// Pixel area enclosed by the region's contour
    pub area: f64,
}

impl CandidateRegion {
    pub fn new(rect: Rect, area: f64) -> Self {
        Self {
            min: Vector2::new(rect.x, rect.y),
            max: Vector2::new(rect.x + rect.width, rect.y + rect.height),
            area,
        }
    }

    pub fn width(&self) -> i32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> i32 {
        self.max.y - self.min.y
    }

    /// Long side over short side. Infinite for a box with a zero side.
    pub fn aspect_ratio(&self) -> f64 {
        let (w, h) = (self.width() as f64, self.height() as f64);
        let short = w.min(h);
        if short <= 0.0 {
            return f64::INFINITY;
        }

        w.max(h) / short
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.min.x, self.min.y, self.width(), self.height())
    }
}

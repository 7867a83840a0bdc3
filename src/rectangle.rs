use crate::bounds::Bounds;
use crate::point::Point;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

/// Axis-aligned rectangle, stored as two opposite corners. `x1/y1` need not
/// be the top-left corner; rasterization sorts them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rectangle {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Rectangle {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.x1 = clamp(self.x1, 0, max_x);
        self.y1 = clamp(self.y1, 0, max_y);
        self.x2 = clamp(self.x2, 0, max_x);
        self.y2 = clamp(self.y2, 0, max_y);
    }
}

impl RandomShape for Rectangle {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Rectangle {
        let p0 = Point::random(bounds, rng);
        let p1 = p0.random_in_radius(16, rng);

        let mut rect = Rectangle {
            x1: p0.x,
            y1: p0.y,
            x2: p1.x,
            y2: p1.y,
        };
        rect.clamp_to(bounds);
        rect
    }
}

impl Shape for Rectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Rectangle
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        match rng.gen_range(0..4) {
            0 => self.x1 += rng.gen_range(-16..=16),
            1 => self.y1 += rng.gen_range(-16..=16),
            2 => self.x2 += rng.gen_range(-16..=16),
            _ => self.y2 += rng.gen_range(-16..=16),
        }
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        let (x1, x2) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (y1, y2) = (self.y1.min(self.y2), self.y1.max(self.y2));

        (y1..=y2).map(|y| Scanline::new(y, x1, x2)).collect()
    }

    fn params(&self) -> Vec<i32> {
        vec![self.x1, self.y1, self.x2, self.y2]
    }

    fn to_svg(&self) -> String {
        let (x1, x2) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (y1, y2) = (self.y1.min(self.y2), self.y1.max(self.y2));

        format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" SVG_STYLE_HOOK />",
            x1,
            y1,
            x2 - x1,
            y2 - y1
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rasterize_unit_square() {
        let rect = Rectangle { x1: 0, y1: 0, x2: 2, y2: 2 };
        let lines = rect.rasterize();
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.x1 == 0 && l.x2 == 2));
    }

    #[test]
    fn test_rasterize_handles_reversed_corners() {
        let rect = Rectangle { x1: 5, y1: 5, x2: 0, y2: 0 };
        let lines = rect.rasterize();
        assert_eq!(lines.len(), 6);
        assert!(lines.iter().all(|l| l.x1 == 0 && l.x2 == 5));
    }

    #[test]
    fn test_mutate_stays_in_bounds() {
        let bounds = Bounds::new(20, 20);
        let mut rng = StdRng::seed_from_u64(1);
        let mut rect = Rectangle::random(bounds, &mut rng);
        for _ in 0..200 {
            rect.mutate(bounds, &mut rng);
            assert!(rect.x1 >= 0 && rect.x1 <= 19);
            assert!(rect.y1 >= 0 && rect.y1 <= 19);
            assert!(rect.x2 >= 0 && rect.x2 <= 19);
            assert!(rect.y2 >= 0 && rect.y2 <= 19);
        }
    }

    #[test]
    fn test_clone_independence() {
        let rect = Rectangle { x1: 1, y1: 1, x2: 5, y2: 5 };
        let mut cloned = rect;
        cloned.x1 = 99;
        assert_eq!(rect.x1, 1);
    }

    #[test]
    fn test_to_svg_contains_hook() {
        let rect = Rectangle { x1: 0, y1: 0, x2: 4, y2: 4 };
        assert!(rect.to_svg().contains("SVG_STYLE_HOOK"));
    }

    #[test]
    fn test_params_layout() {
        let rect = Rectangle { x1: 1, y1: 2, x2: 3, y2: 4 };
        assert_eq!(rect.params(), vec![1, 2, 3, 4]);
    }
}

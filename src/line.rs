use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::bresenham_line;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

/// A single straight segment between two endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl Line {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.x1 = clamp(self.x1, 0, max_x);
        self.y1 = clamp(self.y1, 0, max_y);
        self.x2 = clamp(self.x2, 0, max_x);
        self.y2 = clamp(self.y2, 0, max_y);
    }
}

impl RandomShape for Line {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Line {
        let p0 = Point::random(bounds, rng);
        let p1 = p0.random_in_radius(32, rng);

        let mut line = Line {
            x1: p0.x,
            y1: p0.y,
            x2: p1.x,
            y2: p1.y,
        };
        line.clamp_to(bounds);
        line
    }
}

impl Shape for Line {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Line
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
        bresenham_line(Point::new(self.x1, self.y1), Point::new(self.x2, self.y2))
    }

    fn params(&self) -> Vec<i32> {
        vec![self.x1, self.y1, self.x2, self.y2]
    }

    fn to_svg(&self) -> String {
        format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" SVG_STYLE_HOOK />",
            self.x1, self.y1, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_degenerate_line_is_single_pixel_scanline() {
        let line = Line { x1: 5, y1: 5, x2: 5, y2: 5 };
        let lines = line.rasterize();
        assert_eq!(lines, vec![Scanline::new(5, 5, 5)]);
    }

    #[test]
    fn test_horizontal_line_covers_full_span() {
        let line = Line { x1: 0, y1: 0, x2: 4, y2: 0 };
        let lines = line.rasterize();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.y == 0));
    }

    #[test]
    fn test_mutate_stays_in_bounds() {
        let bounds = Bounds::new(20, 20);
        let mut rng = StdRng::seed_from_u64(13);
        let mut line = Line::random(bounds, &mut rng);
        for _ in 0..200 {
            line.mutate(bounds, &mut rng);
            assert!(line.x1 >= 0 && line.x1 <= 19);
            assert!(line.y2 >= 0 && line.y2 <= 19);
        }
    }

    #[test]
    fn test_to_svg_contains_hook() {
        let line = Line { x1: 0, y1: 0, x2: 4, y2: 4 };
        assert!(line.to_svg().contains("SVG_STYLE_HOOK"));
    }

    #[test]
    fn test_params_layout() {
        let line = Line { x1: 1, y1: 2, x2: 3, y2: 4 };
        assert_eq!(line.params(), vec![1, 2, 3, 4]);
    }
}

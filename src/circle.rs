use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::scan_ellipse;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

/// A circle, stored as center and radius. Rasterized by delegating to the
/// general ellipse scan conversion with equal semi-axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Circle {
    pub cx: i32,
    pub cy: i32,
    pub r: i32,
}

impl Circle {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.cx = clamp(self.cx, 0, max_x);
        self.cy = clamp(self.cy, 0, max_y);
        self.r = self.r.max(1);
    }
}

impl RandomShape for Circle {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Circle {
        let center = Point::random(bounds, rng);
        let mut circle = Circle {
            cx: center.x,
            cy: center.y,
            r: rng.gen_range(1..=32),
        };
        circle.clamp_to(bounds);
        circle
    }
}

impl Shape for Circle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Circle
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        match rng.gen_range(0..3) {
            0 => self.cx += rng.gen_range(-16..=16),
            1 => self.cy += rng.gen_range(-16..=16),
            _ => self.r += rng.gen_range(-16..=16),
        }
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        scan_ellipse(Point::new(self.cx, self.cy), self.r, self.r)
    }

    fn params(&self) -> Vec<i32> {
        vec![self.cx, self.cy, self.r]
    }

    fn to_svg(&self) -> String {
        format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\" SVG_STYLE_HOOK />",
            self.cx, self.cy, self.r
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rasterize_is_symmetric() {
        let circle = Circle { cx: 10, cy: 10, r: 5 };
        let lines = circle.rasterize();
        let center_row = lines.iter().find(|l| l.y == 10).unwrap();
        assert_eq!(center_row.x1, 5);
        assert_eq!(center_row.x2, 15);
    }

    #[test]
    fn test_radius_never_collapses_to_zero() {
        let bounds = Bounds::new(50, 50);
        let mut rng = StdRng::seed_from_u64(11);
        let mut circle = Circle::random(bounds, &mut rng);
        for _ in 0..200 {
            circle.mutate(bounds, &mut rng);
            assert!(circle.r >= 1);
        }
    }

    #[test]
    fn test_to_svg_contains_hook() {
        let circle = Circle { cx: 1, cy: 1, r: 5 };
        assert!(circle.to_svg().contains("SVG_STYLE_HOOK"));
    }

    #[test]
    fn test_params_layout() {
        let circle = Circle { cx: 1, cy: 2, r: 3 };
        assert_eq!(circle.params(), vec![1, 2, 3]);
    }
}

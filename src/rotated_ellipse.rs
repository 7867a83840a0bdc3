use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::scan_rotated_ellipse;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

/// An ellipse rotated about its own center by `angle_deg` degrees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedEllipse {
    pub cx: i32,
    pub cy: i32,
    pub rx: i32,
    pub ry: i32,
    pub angle_deg: i32,
}

impl RotatedEllipse {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.cx = clamp(self.cx, 0, max_x);
        self.cy = clamp(self.cy, 0, max_y);
        self.rx = self.rx.max(1);
        self.ry = self.ry.max(1);
        self.angle_deg = self.angle_deg.rem_euclid(360);
    }
}

impl RandomShape for RotatedEllipse {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> RotatedEllipse {
        let center = Point::random(bounds, rng);
        let mut ellipse = RotatedEllipse {
            cx: center.x,
            cy: center.y,
            rx: rng.gen_range(1..=32),
            ry: rng.gen_range(1..=32),
            angle_deg: rng.gen_range(0..360),
        };
        ellipse.clamp_to(bounds);
        ellipse
    }
}

impl Shape for RotatedEllipse {
    fn shape_type(&self) -> ShapeType {
        ShapeType::RotatedEllipse
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        match rng.gen_range(0..5) {
            0 => self.cx += rng.gen_range(-16..=16),
            1 => self.cy += rng.gen_range(-16..=16),
            2 => self.rx += rng.gen_range(-16..=16),
            3 => self.ry += rng.gen_range(-16..=16),
            _ => self.angle_deg += rng.gen_range(-4..=4),
        }
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        scan_rotated_ellipse(Point::new(self.cx, self.cy), self.rx, self.ry, self.angle_deg)
    }

    fn params(&self) -> Vec<i32> {
        vec![self.cx, self.cy, self.rx, self.ry, self.angle_deg]
    }

    fn to_svg(&self) -> String {
        format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" transform=\"rotate({} {} {})\" SVG_STYLE_HOOK />",
            self.cx, self.cy, self.rx, self.ry, self.angle_deg, self.cx, self.cy
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_unrotated_matches_axis_aligned_ellipse() {
        let ellipse = RotatedEllipse { cx: 10, cy: 10, rx: 5, ry: 3, angle_deg: 0 };
        let lines = ellipse.rasterize();
        let center_row = lines.iter().find(|l| l.y == 10).unwrap();
        assert_eq!(center_row.x1, 5);
        assert_eq!(center_row.x2, 15);
    }

    #[test]
    fn test_clamp_closure_after_mutation() {
        let bounds = Bounds::new(50, 50);
        let mut rng = StdRng::seed_from_u64(9);
        let mut ellipse = RotatedEllipse::random(bounds, &mut rng);
        for _ in 0..200 {
            ellipse.mutate(bounds, &mut rng);
            assert!(ellipse.cx >= 0 && ellipse.cx <= 49);
            assert!(ellipse.angle_deg >= 0 && ellipse.angle_deg < 360);
            assert!(ellipse.rx >= 1 && ellipse.ry >= 1);
        }
    }

    #[test]
    fn test_to_svg_contains_hook() {
        let ellipse = RotatedEllipse { cx: 1, cy: 1, rx: 5, ry: 5, angle_deg: 10 };
        assert!(ellipse.to_svg().contains("SVG_STYLE_HOOK"));
    }

    #[test]
    fn test_params_layout() {
        let ellipse = RotatedEllipse { cx: 1, cy: 2, rx: 3, ry: 4, angle_deg: 45 };
        assert_eq!(ellipse.params(), vec![1, 2, 3, 4, 45]);
    }
}

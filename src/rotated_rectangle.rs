use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::scan_polygon;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::{clamp, rotate_point};
use rand::{Rng, RngCore};

/// A rectangle rotated about its own center by `angle_deg` degrees, stored
/// as the unrotated corners plus the rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotatedRectangle {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub angle_deg: i32,
}

impl RotatedRectangle {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.x1 = clamp(self.x1, 0, max_x);
        self.y1 = clamp(self.y1, 0, max_y);
        self.x2 = clamp(self.x2, 0, max_x);
        self.y2 = clamp(self.y2, 0, max_y);
        self.angle_deg = self.angle_deg.rem_euclid(360);
    }

    fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2, (self.y1 + self.y2) / 2)
    }

    fn corners(&self) -> [Point; 4] {
        let center = self.center();
        let (x1, x2) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (y1, y2) = (self.y1.min(self.y2), self.y1.max(self.y2));

        let mut pts = [
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x2, y2),
            Point::new(x1, y2),
        ];
        for p in pts.iter_mut() {
            rotate_point(p, center, self.angle_deg);
        }
        pts
    }
}

impl RandomShape for RotatedRectangle {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> RotatedRectangle {
        let p0 = Point::random(bounds, rng);
        let p1 = p0.random_in_radius(16, rng);

        let mut rect = RotatedRectangle {
            x1: p0.x,
            y1: p0.y,
            x2: p1.x,
            y2: p1.y,
            angle_deg: rng.gen_range(0..360),
        };
        rect.clamp_to(bounds);
        rect
    }
}

impl Shape for RotatedRectangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::RotatedRectangle
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        match rng.gen_range(0..5) {
            0 => self.x1 += rng.gen_range(-16..=16),
            1 => self.y1 += rng.gen_range(-16..=16),
            2 => self.x2 += rng.gen_range(-16..=16),
            3 => self.y2 += rng.gen_range(-16..=16),
            _ => self.angle_deg += rng.gen_range(-4..=4),
        }
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        scan_polygon(&self.corners())
    }

    fn params(&self) -> Vec<i32> {
        vec![self.x1, self.y1, self.x2, self.y2, self.angle_deg]
    }

    fn to_svg(&self) -> String {
        let (x1, x2) = (self.x1.min(self.x2), self.x1.max(self.x2));
        let (y1, y2) = (self.y1.min(self.y2), self.y1.max(self.y2));
        let center = self.center();

        format!(
            "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" transform=\"rotate({} {} {})\" SVG_STYLE_HOOK />",
            x1,
            y1,
            x2 - x1,
            y2 - y1,
            self.angle_deg,
            center.x,
            center.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rasterize_unrotated_matches_axis_aligned() {
        let rect = RotatedRectangle { x1: 0, y1: 0, x2: 4, y2: 4, angle_deg: 0 };
        let lines = rect.rasterize();
        assert!(lines.iter().all(|l| l.x1 == 0 && l.x2 == 4));
        assert_eq!(lines.len(), 5);
    }

    #[test]
    fn test_clamp_closure_after_mutation() {
        let bounds = Bounds::new(30, 30);
        let mut rng = StdRng::seed_from_u64(2);
        let mut rect = RotatedRectangle::random(bounds, &mut rng);
        for _ in 0..200 {
            rect.mutate(bounds, &mut rng);
            assert!(rect.x1 >= 0 && rect.x1 <= 29);
            assert!(rect.y1 >= 0 && rect.y1 <= 29);
            assert!(rect.angle_deg >= 0 && rect.angle_deg < 360);
        }
    }

    #[test]
    fn test_params_layout() {
        let rect = RotatedRectangle { x1: 1, y1: 2, x2: 3, y2: 4, angle_deg: 45 };
        assert_eq!(rect.params(), vec![1, 2, 3, 4, 45]);
    }

    #[test]
    fn test_to_svg_contains_hook() {
        let rect = RotatedRectangle { x1: 0, y1: 0, x2: 4, y2: 4, angle_deg: 10 };
        assert!(rect.to_svg().contains("SVG_STYLE_HOOK"));
    }
}

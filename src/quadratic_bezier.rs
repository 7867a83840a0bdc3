use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::bresenham_path;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

const CURVE_SAMPLES: u32 = 20;

/// A quadratic Bézier curve with a single control point. Rasterized by
/// sampling the curve at fixed parameter steps and rasterizing the resulting
/// control polygon with Bresenham, rather than an analytic scan conversion —
/// cheap and exact enough at pixel resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadraticBezier {
    pub cx: i32,
    pub cy: i32,
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
}

impl QuadraticBezier {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.cx = clamp(self.cx, 0, max_x);
        self.cy = clamp(self.cy, 0, max_y);
        self.x1 = clamp(self.x1, 0, max_x);
        self.y1 = clamp(self.y1, 0, max_y);
        self.x2 = clamp(self.x2, 0, max_x);
        self.y2 = clamp(self.y2, 0, max_y);
    }

    fn sample_points(&self) -> Vec<Point> {
        let (p0, pc, p2) = (
            (self.x1 as f64, self.y1 as f64),
            (self.cx as f64, self.cy as f64),
            (self.x2 as f64, self.y2 as f64),
        );

        (0..=CURVE_SAMPLES)
            .map(|i| {
                let t = i as f64 / CURVE_SAMPLES as f64;
                let mt = 1.0 - t;
                let x = mt * mt * p0.0 + 2.0 * mt * t * pc.0 + t * t * p2.0;
                let y = mt * mt * p0.1 + 2.0 * mt * t * pc.1 + t * t * p2.1;
                Point::new(x.round() as i32, y.round() as i32)
            })
            .collect()
    }
}

impl RandomShape for QuadraticBezier {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> QuadraticBezier {
        let p0 = Point::random(bounds, rng);
        let p1 = p0.random_in_radius(32, rng);
        let control = p0.random_in_radius(32, rng);

        let mut curve = QuadraticBezier {
            cx: control.x,
            cy: control.y,
            x1: p0.x,
            y1: p0.y,
            x2: p1.x,
            y2: p1.y,
        };
        curve.clamp_to(bounds);
        curve
    }
}

impl Shape for QuadraticBezier {
    fn shape_type(&self) -> ShapeType {
        ShapeType::QuadraticBezier
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        match rng.gen_range(0..6) {
            0 => self.cx += rng.gen_range(-16..=16),
            1 => self.cy += rng.gen_range(-16..=16),
            2 => self.x1 += rng.gen_range(-16..=16),
            3 => self.y1 += rng.gen_range(-16..=16),
            4 => self.x2 += rng.gen_range(-16..=16),
            _ => self.y2 += rng.gen_range(-16..=16),
        }
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        bresenham_path(&self.sample_points())
    }

    fn params(&self) -> Vec<i32> {
        vec![self.cx, self.cy, self.x1, self.y1, self.x2, self.y2]
    }

    fn to_svg(&self) -> String {
        format!(
            "<path d=\"M {} {} Q {} {} {} {}\" SVG_STYLE_HOOK />",
            self.x1, self.y1, self.cx, self.cy, self.x2, self.y2
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rasterize_endpoints_reached() {
        let curve = QuadraticBezier { cx: 5, cy: 0, x1: 0, y1: 0, x2: 10, y2: 0 };
        let lines = curve.rasterize();
        assert!(lines.iter().any(|l| l.x1 == 0 || l.x2 == 0));
        assert!(lines.iter().any(|l| l.x1 == 10 || l.x2 == 10));
    }

    #[test]
    fn test_mutate_stays_in_bounds() {
        let bounds = Bounds::new(20, 20);
        let mut rng = StdRng::seed_from_u64(17);
        let mut curve = QuadraticBezier::random(bounds, &mut rng);
        for _ in 0..200 {
            curve.mutate(bounds, &mut rng);
            assert!(curve.cx >= 0 && curve.cx <= 19);
            assert!(curve.x2 >= 0 && curve.x2 <= 19);
        }
    }

    #[test]
    fn test_to_svg_contains_hook_and_control_path() {
        let curve = QuadraticBezier { cx: 5, cy: 5, x1: 0, y1: 0, x2: 10, y2: 10 };
        let svg = curve.to_svg();
        assert!(svg.contains("SVG_STYLE_HOOK"));
        assert!(svg.contains("M 0 0 Q 5 5 10 10"));
    }

    #[test]
    fn test_params_layout() {
        let curve = QuadraticBezier { cx: 1, cy: 2, x1: 3, y1: 4, x2: 5, y2: 6 };
        assert_eq!(curve.params(), vec![1, 2, 3, 4, 5, 6]);
    }
}

use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::scan_ellipse;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

/// An axis-aligned ellipse, stored as center and semi-axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ellipse {
    pub cx: i32,
    pub cy: i32,
    pub rx: i32,
    pub ry: i32,
}

impl Ellipse {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        self.cx = clamp(self.cx, 0, max_x);
        self.cy = clamp(self.cy, 0, max_y);
        self.rx = self.rx.max(1);
        self.ry = self.ry.max(1);
    }
}

impl RandomShape for Ellipse {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Ellipse {
        let center = Point::random(bounds, rng);
        let mut ellipse = Ellipse {
            cx: center.x,
            cy: center.y,
            rx: rng.gen_range(1..=32),
            ry: rng.gen_range(1..=32),
        };
        ellipse.clamp_to(bounds);
        ellipse
    }
}

impl Shape for Ellipse {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Ellipse
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        match rng.gen_range(0..4) {
            0 => self.cx += rng.gen_range(-16..=16),
            1 => self.cy += rng.gen_range(-16..=16),
            2 => self.rx += rng.gen_range(-16..=16),
            _ => self.ry += rng.gen_range(-16..=16),
        }
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        scan_ellipse(Point::new(self.cx, self.cy), self.rx, self.ry)
    }

    fn params(&self) -> Vec<i32> {
        vec![self.cx, self.cy, self.rx, self.ry]
    }

    fn to_svg(&self) -> String {
        format!(
            "<ellipse cx=\"{}\" cy=\"{}\" rx=\"{}\" ry=\"{}\" SVG_STYLE_HOOK />",
            self.cx, self.cy, self.rx, self.ry
        )
    }
}

use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::scan_polygon;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use rand::{Rng, RngCore};

const MINIMUM_DEGREES: f64 = 15.0;
const MAXIMUM_MUTATION_ATTEMPTS: u32 = 10_000;

/// A triangle described by its three vertices. Construction and mutation
/// reject any arrangement where two vertices coincide or any interior angle
/// falls below `MINIMUM_DEGREES`, since slivers contribute almost no visible
/// area for the optimizer to score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub path: [Point; 3],
}

impl Triangle {
    fn is_valid(&self) -> bool {
        let [p0, p1, p2] = self.path;

        if p0 == p1 || p0 == p2 || p1 == p2 {
            return false;
        }

        p0.angle(p1, p2) > MINIMUM_DEGREES
            && p1.angle(p2, p0) > MINIMUM_DEGREES
            && p2.angle(p0, p1) > MINIMUM_DEGREES
    }

    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        for p in self.path.iter_mut() {
            p.x = p.x.clamp(0, max_x);
            p.y = p.y.clamp(0, max_y);
        }
    }
}

impl RandomShape for Triangle {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Triangle {
        let p0 = Point::random(bounds, rng);

        let mut attempt = 0;
        loop {
            attempt += 1;
            let p1 = p0.random_in_radius(32, rng);
            let p2 = p0.random_in_radius(32, rng);

            let mut tri = Triangle { path: [p0, p1, p2] };
            tri.clamp_to(bounds);

            if tri.is_valid() || attempt > MAXIMUM_MUTATION_ATTEMPTS {
                return tri;
            }
        }
    }
}

impl Shape for Triangle {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Triangle
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        let original = *self;

        for attempt in 0..MAXIMUM_MUTATION_ATTEMPTS {
            *self = original;
            let i = rng.gen_range(0..3);
            self.path[i].x += rng.gen_range(-32..=32);
            self.path[i].y += rng.gen_range(-32..=32);
            self.clamp_to(bounds);

            if self.is_valid() || attempt == MAXIMUM_MUTATION_ATTEMPTS - 1 {
                return;
            }
        }
    }

    fn rasterize(&self) -> Vec<Scanline> {
        scan_polygon(&self.path)
    }

    fn params(&self) -> Vec<i32> {
        vec![
            self.path[0].x,
            self.path[0].y,
            self.path[1].x,
            self.path[1].y,
            self.path[2].x,
            self.path[2].y,
        ]
    }

    fn to_svg(&self) -> String {
        format!(
            "<polygon points=\"{},{} {},{} {},{}\" SVG_STYLE_HOOK />",
            self.path[0].x,
            self.path[0].y,
            self.path[1].x,
            self.path[1].y,
            self.path[2].x,
            self.path[2].y,
        )
    }
}

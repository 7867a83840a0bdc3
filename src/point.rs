use crate::bounds::Bounds;
use crate::utilities::{acos, clamp, degrees, sqrt};
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// An integer pixel coordinate, used both as a shape control point and as a
/// rasterization output coordinate.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }

    /// Perturb this point by Gaussian noise with the given standard deviation,
    /// clamping the result into `[-border, bounds.dim + border]`.
    pub fn mutate(&mut self, bounds: Bounds, sigma: f64, border: i32, rng: &mut impl Rng) {
        let normal = Normal::new(0.0, sigma).unwrap();

        self.x = clamp(
            self.x + normal.sample(rng).round() as i32,
            -border,
            bounds.width as i32 + border,
        );
        self.y = clamp(
            self.y + normal.sample(rng).round() as i32,
            -border,
            bounds.height as i32 + border,
        );
    }

    /// The angle in degrees between the rays `self -> p2` and `self -> p3`.
    pub fn angle(&self, p2: Point, p3: Point) -> f64 {
        let dx1 = (p2.x - self.x) as f64;
        let dy1 = (p2.y - self.y) as f64;
        let dx2 = (p3.x - self.x) as f64;
        let dy2 = (p3.y - self.y) as f64;

        let d1 = sqrt(dx1 * dx1 + dy1 * dy1);
        let d2 = sqrt(dx2 * dx2 + dy2 * dy2);

        degrees(acos((dx1 * dx2 + dy1 * dy2) / (d1 * d2)))
    }

    /// A point drawn uniformly from `[0, width) x [0, height)`.
    pub fn random(bounds: Bounds, rng: &mut impl Rng) -> Point {
        Point::new(
            rng.gen_range(0..bounds.width as i32),
            rng.gen_range(0..bounds.height as i32),
        )
    }

    /// A point drawn uniformly from the square of side `2*radius` centered on `self`.
    pub fn random_in_radius(&self, radius: i32, rng: &mut impl Rng) -> Point {
        Point::new(
            rng.gen_range(self.x - radius..self.x + radius + 1),
            rng.gen_range(self.y - radius..self.y + radius + 1),
        )
    }
}

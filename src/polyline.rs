use crate::bounds::Bounds;
use crate::point::Point;
use crate::raster::bresenham_path;
use crate::scanline::Scanline;
use crate::shape::{RandomShape, Shape, ShapeType};
use crate::utilities::clamp;
use rand::{Rng, RngCore};

const MIN_VERTICES: usize = 2;
const MAX_VERTICES: usize = 6;

/// An open chain of line segments through a variable number of vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polyline {
    pub vertices: Vec<Point>,
}

impl Polyline {
    fn clamp_to(&mut self, bounds: Bounds) {
        let max_x = bounds.width as i32 - 1;
        let max_y = bounds.height as i32 - 1;
        for p in self.vertices.iter_mut() {
            p.x = clamp(p.x, 0, max_x);
            p.y = clamp(p.y, 0, max_y);
        }
    }
}

impl RandomShape for Polyline {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Polyline {
        let count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
        let first = Point::random(bounds, rng);

        let mut vertices = vec![first];
        for _ in 1..count {
            let prev = *vertices.last().unwrap();
            vertices.push(prev.random_in_radius(32, rng));
        }

        let mut line = Polyline { vertices };
        line.clamp_to(bounds);
        line
    }
}

impl Shape for Polyline {
    fn shape_type(&self) -> ShapeType {
        ShapeType::Polyline
    }

    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore) {
        let i = rng.gen_range(0..self.vertices.len());
        self.vertices[i].x += rng.gen_range(-16..=16);
        self.vertices[i].y += rng.gen_range(-16..=16);
        self.clamp_to(bounds);
    }

    fn rasterize(&self) -> Vec<Scanline> {
        bresenham_path(&self.vertices)
    }

    fn params(&self) -> Vec<i32> {
        self.vertices.iter().flat_map(|p| [p.x, p.y]).collect()
    }

    fn to_svg(&self) -> String {
        let points: Vec<String> = self
            .vertices
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect();
        format!(
            "<polyline points=\"{}\" SVG_STYLE_HOOK />",
            points.join(" ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rasterize_two_vertices_is_a_single_segment() {
        let line = Polyline {
            vertices: vec![Point::new(0, 0), Point::new(4, 0)],
        };
        let lines = line.rasterize();
        assert_eq!(lines.len(), 5);
        assert!(lines.iter().all(|l| l.y == 0));
    }

    #[test]
    fn test_random_vertex_count_in_range() {
        let bounds = Bounds::new(50, 50);
        let mut rng = StdRng::seed_from_u64(19);
        for _ in 0..20 {
            let line = Polyline::random(bounds, &mut rng);
            assert!(line.vertices.len() >= MIN_VERTICES && line.vertices.len() <= MAX_VERTICES);
        }
    }

    #[test]
    fn test_mutate_stays_in_bounds() {
        let bounds = Bounds::new(20, 20);
        let mut rng = StdRng::seed_from_u64(23);
        let mut line = Polyline::random(bounds, &mut rng);
        for _ in 0..200 {
            line.mutate(bounds, &mut rng);
            for p in &line.vertices {
                assert!(p.x >= 0 && p.x <= 19);
                assert!(p.y >= 0 && p.y <= 19);
            }
        }
    }

    #[test]
    fn test_to_svg_contains_hook_and_all_points() {
        let line = Polyline {
            vertices: vec![Point::new(0, 0), Point::new(4, 4), Point::new(8, 0)],
        };
        let svg = line.to_svg();
        assert!(svg.contains("SVG_STYLE_HOOK"));
        assert!(svg.contains("0,0 4,4 8,0"));
    }

    #[test]
    fn test_params_layout() {
        let line = Polyline {
            vertices: vec![Point::new(1, 2), Point::new(3, 4)],
        };
        assert_eq!(line.params(), vec![1, 2, 3, 4]);
    }
}

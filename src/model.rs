use crate::bitmap::{Bitmap, Rgba};
use crate::bounds::Bounds;
use crate::color::compute_color;
use crate::optimizer::best_hill_climb_state;
use crate::result::ShapeResult;
use crate::rng;
use crate::scanline::Scanline;
use crate::scoring::difference_full;
use crate::shape::{Shape, ShapeType};
use rayon::prelude::*;

/// Every tunable the search loop needs, bundled for construction from CLI
/// args or directly by library callers. Never serialized to a file format.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub shape_types: Vec<ShapeType>,
    pub alpha: u8,
    pub candidates_per_pass: u32,
    pub max_age: u32,
    pub passes: u32,
    pub workers: usize,
    pub seed: u64,
}

impl RunConfig {
    pub fn new(shape_types: Vec<ShapeType>) -> RunConfig {
        RunConfig {
            shape_types,
            alpha: 128,
            candidates_per_pass: 16,
            max_age: 100,
            passes: 1,
            workers: 4,
            seed: 0,
        }
    }
}

/// Owns the target bitmap, the canvas under construction, the running score,
/// and the accumulated history of accepted shapes. The canvas is mutated
/// only by `draw_shape`; `last_score` is kept in lockstep with it.
pub struct Model {
    target: Bitmap,
    current: Bitmap,
    last_score: f64,
    results: Vec<ShapeResult>,
    config: RunConfig,
}

impl Model {
    pub fn new(target: Bitmap, background: Rgba, config: RunConfig) -> Model {
        let current = Bitmap::new(target.width(), target.height(), background);
        let last_score = difference_full(&target, &current);

        Model { target, current, last_score, results: Vec::new(), config }
    }

    pub fn target(&self) -> &Bitmap {
        &self.target
    }

    pub fn current(&self) -> &Bitmap {
        &self.current
    }

    pub fn last_score(&self) -> f64 {
        self.last_score
    }

    pub fn results(&self) -> &[ShapeResult] {
        &self.results
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    fn bounds(&self) -> Bounds {
        Bounds::new(self.target.width(), self.target.height())
    }

    /// Reset the canvas to a solid fill and clear the shape history, keeping
    /// the target and configuration.
    pub fn reset(&mut self, background: Rgba) {
        self.current.fill(background);
        self.last_score = difference_full(&self.target, &self.current);
        self.results.clear();
    }

    /// One round of the search: fan out `config.workers` independent
    /// best-of-`n`-candidates hill climbs, each against its own cloned
    /// canvas buffer and its own worker RNG, pick the lowest-scoring result
    /// (first-seen on ties), then commit it to the real canvas.
    pub fn step(&mut self) -> ShapeResult {
        let bounds = self.bounds();
        let target = &self.target;
        let current = &self.current;
        let config = &self.config;
        let last_score = self.last_score;

        let states: Vec<_> = (0..config.workers)
            .into_par_iter()
            .map(|worker| {
                let mut rng = rng::worker_rng(worker as u64);
                let mut canvas = current.clone();

                best_hill_climb_state(
                    &config.shape_types,
                    config.alpha,
                    config.candidates_per_pass,
                    config.max_age,
                    config.passes,
                    target,
                    &mut canvas,
                    last_score,
                    bounds,
                    &mut rng,
                )
            })
            .collect();

        let best = states
            .into_iter()
            .min_by(|a, b| a.score.partial_cmp(&b.score).unwrap())
            .expect("workers must be at least 1");

        self.draw_shape(best.shape, best.alpha)
    }

    /// Rasterize, solve color, blit into the real canvas, update the running
    /// score, and record the result.
    pub fn draw_shape(&mut self, shape: Box<dyn Shape>, alpha: u8) -> ShapeResult {
        let bounds = self.bounds();
        let lines = Scanline::trim(&shape.rasterize(), bounds.width, bounds.height);

        let color = compute_color(&self.target, &self.current, &lines, alpha);
        let before = crate::scoring::snapshot(&self.current, &lines);

        crate::blit::draw_lines(&mut self.current, color, &lines);
        self.last_score = crate::scoring::difference_partial(
            &self.target,
            &before,
            &self.current,
            self.last_score,
            &lines,
        );

        let result = ShapeResult::new(self.last_score, color, shape);
        self.results.push(result.clone());
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::ShapeType;

    #[test]
    fn test_step_improves_or_matches_score() {
        let target = Bitmap::new(10, 10, Rgba::new(255, 0, 0, 255));
        let mut config = RunConfig::new(vec![ShapeType::Rectangle, ShapeType::Circle]);
        config.workers = 2;
        config.candidates_per_pass = 4;
        config.max_age = 5;
        config.seed = 42;
        rng::set_seed(config.seed);

        let mut model = Model::new(target, Rgba::new(0, 0, 0, 255), config);
        let before = model.last_score();

        model.step();

        assert!(model.last_score() <= before);
        assert_eq!(model.results().len(), 1);
    }

    #[test]
    fn test_reset_clears_history() {
        let target = Bitmap::new(4, 4, Rgba::new(255, 255, 255, 255));
        let config = RunConfig::new(vec![ShapeType::Rectangle]);
        let mut model = Model::new(target, Rgba::new(0, 0, 0, 255), config);

        model.step();
        assert_eq!(model.results().len(), 1);

        model.reset(Rgba::new(0, 0, 0, 255));
        assert_eq!(model.results().len(), 0);
    }
}

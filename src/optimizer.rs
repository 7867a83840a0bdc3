use crate::bitmap::Bitmap;
use crate::bounds::Bounds;
use crate::scanline::Scanline;
use crate::scoring::{difference_partial, restore, snapshot};
use crate::shape::{random_shape, Shape, ShapeType};
use crate::color::compute_color;
use rand::Rng;

/// A candidate shape together with the score it would produce if drawn, and
/// the alpha it was solved against.
#[derive(Clone)]
pub struct State {
    pub shape: Box<dyn Shape>,
    pub score: f64,
    pub alpha: u8,
}

/// Evaluate `shape` against `current` without leaving a trace: rasterize,
/// solve its color, blit it in, measure, then undo the blit. `current` is
/// mutated and restored in place so callers don't pay for a fresh clone on
/// every candidate.
pub fn energy(
    shape: &dyn Shape,
    alpha: u8,
    target: &Bitmap,
    current: &mut Bitmap,
    last_score: f64,
    bounds: Bounds,
) -> f64 {
    let lines = Scanline::trim(&shape.rasterize(), bounds.width, bounds.height);
    if lines.is_empty() {
        return last_score;
    }

    let color = compute_color(target, current, &lines, alpha);
    let buffer = snapshot(current, &lines);

    crate::blit::draw_lines(current, color, &lines);
    let partial = difference_partial(target, &buffer, current, last_score, &lines);
    restore(current, &lines, &buffer);

    partial
}

/// Local search from `seed`: repeatedly mutate, keep the mutation if it
/// lowers the energy, otherwise revert. Stop after `max_age` consecutive
/// mutations fail to improve on the running best.
pub fn hill_climb(
    seed: Box<dyn Shape>,
    alpha: u8,
    max_age: u32,
    target: &Bitmap,
    current: &mut Bitmap,
    last_score: f64,
    bounds: Bounds,
    rng: &mut impl Rng,
) -> State {
    let seed_score = energy(seed.as_ref(), alpha, target, current, last_score, bounds);

    let mut state = seed.clone();
    let mut best = seed;
    let mut best_score = seed_score;
    let mut age = 0;

    while age < max_age {
        let undo = state.clone();
        state.mutate(bounds, rng);

        let e = energy(state.as_ref(), alpha, target, current, last_score, bounds);

        if e >= best_score {
            state = undo;
            age += 1;
        } else {
            best = state.clone();
            best_score = e;
            age = 0;
        }
    }

    State { shape: best, score: best_score, alpha }
}

/// Run `passes` rounds of random-restart hill climbing, each round drawing
/// `n` random seed shapes (kind chosen uniformly from `shape_types`), hill
/// climbing the one with lowest initial energy, and keeping it if it beats
/// the running best across all rounds. Ties are broken by first-seen.
pub fn best_hill_climb_state(
    shape_types: &[ShapeType],
    alpha: u8,
    n: u32,
    max_age: u32,
    passes: u32,
    target: &Bitmap,
    current: &mut Bitmap,
    last_score: f64,
    bounds: Bounds,
    rng: &mut impl Rng,
) -> State {
    let mut running_best: Option<State> = None;

    for _ in 0..passes {
        let mut candidates: Vec<(Box<dyn Shape>, f64)> = Vec::with_capacity(n as usize);
        for _ in 0..n {
            let kind = shape_types[rng.gen_range(0..shape_types.len())];
            let shape = random_shape(kind, bounds, rng);
            let e = energy(shape.as_ref(), alpha, target, current, last_score, bounds);
            candidates.push((shape, e));
        }

        let (seed, _) = candidates
            .into_iter()
            .min_by(|a, b| a.1.partial_cmp(&b.1).unwrap())
            .expect("n must be at least 1");

        let climbed = hill_climb(seed, alpha, max_age, target, current, last_score, bounds, rng);

        running_best = Some(match running_best {
            None => climbed,
            Some(best) if climbed.score < best.score => climbed,
            Some(best) => best,
        });
    }

    running_best.expect("passes must be at least 1")
}

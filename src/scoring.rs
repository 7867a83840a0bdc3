use crate::bitmap::{Bitmap, Rgba};
use crate::scanline::Scanline;

/// Root-mean-square normalized per-channel error between `target` and
/// `current`, in `[0, 1]`. The O(w*h) path; called O(1) times per step.
pub fn difference_full(target: &Bitmap, current: &Bitmap) -> f64 {
    debug_assert_eq!(target.width(), current.width());
    debug_assert_eq!(target.height(), current.height());

    let mut sum: f64 = 0.0;
    for (t, c) in target.pixels().iter().zip(current.pixels().iter()) {
        let d = *t as f64 - *c as f64;
        sum += d * d;
    }

    let n = (target.width() as f64) * (target.height() as f64) * 4.0;
    (sum / n).sqrt() / 255.0
}

/// One RGBA8 pixel per pixel covered by a set of scanlines, taken in the same
/// left-to-right, top-to-bottom order `for_each_covered_pixel` iterates.
pub fn snapshot(canvas: &Bitmap, lines: &[Scanline]) -> Vec<Rgba> {
    let mut out = Vec::new();
    for_each_covered_pixel(lines, |x, y| out.push(canvas.get_pixel(x, y)));
    out
}

/// Restore `canvas`'s pixels under `lines` from a snapshot taken earlier by
/// `snapshot`. `snapshot` must have been produced from the same `lines`.
pub fn restore(canvas: &mut Bitmap, lines: &[Scanline], snapshot: &[Rgba]) {
    let mut i = 0;
    for_each_covered_pixel(lines, |x, y| {
        canvas.set_pixel(x, y, snapshot[i]);
        i += 1;
    });
}

fn for_each_covered_pixel(lines: &[Scanline], mut f: impl FnMut(u32, u32)) {
    for line in lines {
        for x in line.x1..=line.x2 {
            f(x as u32, line.y as u32);
        }
    }
}

/// Reconstruct `differenceFull(target, after)` incrementally, given only the
/// pixels that changed. `before` is a flat per-covered-pixel snapshot (as
/// produced by `snapshot`) of `after`'s pixels prior to the change; `after`
/// is the canvas with the change already applied.
pub fn difference_partial(
    target: &Bitmap,
    before: &[Rgba],
    after: &Bitmap,
    last_score: f64,
    lines: &[Scanline],
) -> f64 {
    let n = (target.width() as f64) * (target.height() as f64) * 4.0;

    let mut total_sq = (last_score * 255.0).powi(2) * n;

    let mut i = 0;
    for_each_covered_pixel(lines, |x, y| {
        let t = target.get_pixel(x, y);
        let b = before[i];
        let a = after.get_pixel(x, y);
        i += 1;

        for (tc, (bc, ac)) in t.channels().iter().zip(b.channels().iter().zip(a.channels().iter())) {
            let db = *tc as f64 - *bc as f64;
            let da = *tc as f64 - *ac as f64;
            total_sq -= db * db;
            total_sq += da * da;
        }
    });

    (total_sq.max(0.0) / n).sqrt() / 255.0
}

//! Shared scan-conversion routines used by more than one shape kind.

use crate::point::Point;
use crate::scanline::Scanline;

/// Standard polygon scan conversion by edge interpolation: for every
/// integer row `y` in the polygon's vertical extent, intersect the
/// horizontal line `y + 0.5` with every edge and emit one scanline spanning
/// the min-x to max-x of the intersections.
///
/// Works for any simple polygon (convex or not) given as an ordered list of
/// vertices; used by `Triangle` and `RotatedRectangle`.
pub fn scan_polygon(vertices: &[Point]) -> Vec<Scanline> {
    if vertices.len() < 3 {
        return Vec::new();
    }

    let min_y = vertices.iter().map(|p| p.y).min().unwrap();
    let max_y = vertices.iter().map(|p| p.y).max().unwrap();

    let mut lines = Vec::new();

    for y in min_y..=max_y {
        let scan_y = y as f64 + 0.5;
        let mut xs: Vec<f64> = Vec::new();

        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];

            let (ay, by) = (a.y as f64, b.y as f64);
            if (ay <= scan_y && by > scan_y) || (by <= scan_y && ay > scan_y) {
                let t = (scan_y - ay) / (by - ay);
                xs.push(a.x as f64 + t * (b.x as f64 - a.x as f64));
            }
        }

        if xs.is_empty() {
            continue;
        }

        let x1 = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let x2 = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);

        lines.push(Scanline::new(y, x1.round() as i32, x2.round() as i32));
    }

    lines
}

/// Bresenham's line algorithm between two points, inclusive of both
/// endpoints. Each pixel becomes its own length-1 scanline.
pub fn bresenham_line(p0: Point, p1: Point) -> Vec<Scanline> {
    let mut lines = Vec::new();

    let (mut x0, mut y0) = (p0.x, p0.y);
    let (x1, y1) = (p1.x, p1.y);

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx = if x0 < x1 { 1 } else { -1 };
    let sy = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        lines.push(Scanline::new(y0, x0, x0));

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }

    lines
}

/// Piecewise-linear rasterization of a polyline (sequence of control
/// points), by Bresenham between successive points. Used for both
/// `Polyline` and the control-polygon approximation of `QuadraticBezier`.
pub fn bresenham_path(points: &[Point]) -> Vec<Scanline> {
    let mut lines = Vec::new();
    for w in points.windows(2) {
        lines.extend(bresenham_line(w[0], w[1]));
    }
    lines
}

/// Midpoint scan conversion of an axis-aligned ellipse centered at `center`
/// with semi-axes `(rx, ry)`: for each row in the vertical extent, solve the
/// conic for the x-extent.
pub fn scan_ellipse(center: Point, rx: i32, ry: i32) -> Vec<Scanline> {
    if rx <= 0 || ry <= 0 {
        return vec![Scanline::new(center.y, center.x, center.x)];
    }

    let mut lines = Vec::new();
    let rx2 = (rx * rx) as f64;
    let ry2 = (ry * ry) as f64;

    for dy in -ry..=ry {
        let inner = 1.0 - (dy * dy) as f64 / ry2;
        if inner < 0.0 {
            continue;
        }
        let dx = (rx2 * inner).sqrt();
        let dx = dx.round() as i32;
        lines.push(Scanline::new(center.y + dy, center.x - dx, center.x + dx));
    }

    lines
}

/// Sample the boundary of a rotated ellipse at fine angular resolution, then
/// take the per-row min/max x of the sampled points, filling between them.
pub fn scan_rotated_ellipse(center: Point, rx: i32, ry: i32, angle_deg: i32) -> Vec<Scanline> {
    use crate::utilities::radians;

    if rx <= 0 || ry <= 0 {
        return vec![Scanline::new(center.y, center.x, center.x)];
    }

    const SAMPLES: u32 = 720;
    let cos_a = radians(angle_deg as f64).cos();
    let sin_a = radians(angle_deg as f64).sin();

    let mut boundary = Vec::with_capacity(SAMPLES as usize);
    for i in 0..SAMPLES {
        let t = radians((i as f64 / SAMPLES as f64) * 360.0);
        let (ex, ey) = (rx as f64 * t.cos(), ry as f64 * t.sin());
        let x = ex * cos_a - ey * sin_a;
        let y = ex * sin_a + ey * cos_a;
        boundary.push(Point::new(
            (center.x as f64 + x).round() as i32,
            (center.y as f64 + y).round() as i32,
        ));
    }

    let min_y = boundary.iter().map(|p| p.y).min().unwrap();
    let max_y = boundary.iter().map(|p| p.y).max().unwrap();

    let mut lines = Vec::new();
    for y in min_y..=max_y {
        let xs: Vec<i32> = boundary.iter().filter(|p| p.y == y).map(|p| p.x).collect();
        if xs.is_empty() {
            continue;
        }
        let x1 = *xs.iter().min().unwrap();
        let x2 = *xs.iter().max().unwrap();
        lines.push(Scanline::new(y, x1, x2));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_polygon_unit_square() {
        let square = [
            Point::new(0, 0),
            Point::new(3, 0),
            Point::new(3, 3),
            Point::new(0, 3),
        ];
        let lines = scan_polygon(&square);
        assert_eq!(lines.len(), 4);
        for l in &lines {
            assert_eq!(l.x1, 0);
            assert_eq!(l.x2, 3);
        }
    }

    #[test]
    fn test_bresenham_line_degenerate_single_pixel() {
        let lines = bresenham_line(Point::new(5, 5), Point::new(5, 5));
        assert_eq!(lines, vec![Scanline::new(5, 5, 5)]);
    }

    #[test]
    fn test_bresenham_line_horizontal() {
        let lines = bresenham_line(Point::new(0, 0), Point::new(3, 0));
        assert_eq!(lines.len(), 4);
        assert!(lines.iter().all(|l| l.y == 0));
    }

    #[test]
    fn test_scan_ellipse_widest_at_center_row() {
        let lines = scan_ellipse(Point::new(10, 10), 5, 3);
        let center_row = lines.iter().find(|l| l.y == 10).unwrap();
        assert_eq!(center_row.x1, 5);
        assert_eq!(center_row.x2, 15);
    }
}

use crate::bitmap::{Bitmap, Rgba};
use crate::scanline::Scanline;

/// Composite `color` over `canvas` with straight-alpha src-over blending,
/// restricted to the pixels covered by `lines`. `lines` must already be
/// trimmed to `canvas`'s bounds; out-of-range pixels are a programmer error.
pub fn draw_lines(canvas: &mut Bitmap, color: Rgba, lines: &[Scanline]) {
    let a_src = color.a as f64 / 255.0;

    for line in lines {
        for x in line.x1..=line.x2 {
            let (x, y) = (x as u32, line.y as u32);
            let dst = canvas.get_pixel(x, y);

            let r = (dst.r as f64 * (1.0 - a_src) + color.r as f64 * a_src).round() as u8;
            let g = (dst.g as f64 * (1.0 - a_src) + color.g as f64 * a_src).round() as u8;
            let b = (dst.b as f64 * (1.0 - a_src) + color.b as f64 * a_src).round() as u8;
            let a = (dst.a as f64 + color.a as f64 * (1.0 - dst.a as f64 / 255.0)).round() as u8;

            canvas.set_pixel(x, y, Rgba::new(r, g, b, a));
        }
    }
}

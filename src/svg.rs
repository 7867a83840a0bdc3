use crate::bitmap::Rgba;
use crate::result::ShapeResult;
use crate::shape::ShapeType;

/// Splice the `fill`/`fill-opacity` attributes a shape's straight-alpha
/// solve implies into the literal `SVG_STYLE_HOOK` token its `to_svg`
/// emitted.
fn fill_attrs(color: Rgba) -> String {
    format!(
        "fill=\"{}\" fill-opacity=\"{:.4}\"",
        color.to_hex(),
        color.a as f64 / 255.0
    )
}

/// The stroke equivalent of `fill_attrs`, for the path-like shapes
/// (`Line`, `Polyline`, `QuadraticBezier`) whose fragments have no fillable
/// interior: `<line>`/`<polyline>`/an open `<path>` default to `fill="none"`
/// and `stroke="none"`, so these need `stroke`/`stroke-opacity` instead.
fn stroke_attrs(color: Rgba) -> String {
    format!(
        "fill=\"none\" stroke=\"{}\" stroke-opacity=\"{:.4}\"",
        color.to_hex(),
        color.a as f64 / 255.0
    )
}

fn style_attrs(shape_type: ShapeType, color: Rgba) -> String {
    match shape_type {
        ShapeType::Line | ShapeType::Polyline | ShapeType::QuadraticBezier => stroke_attrs(color),
        _ => fill_attrs(color),
    }
}

/// Assemble a full SVG document: background rect plus one element per
/// accepted shape, in acceptance order.
pub fn assemble_svg(width: u32, height: u32, background: Rgba, results: &[ShapeResult]) -> String {
    let mut out = String::new();

    out += &format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" width=\"{}\" height=\"{}\">",
        width, height
    );
    out += &format!(
        "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\" />",
        width,
        height,
        background.to_hex()
    );
    out += "<g>";

    for result in results {
        let fragment = result.shape.to_svg();
        let attrs = style_attrs(result.shape.shape_type(), result.color);
        let styled = fragment.replace("SVG_STYLE_HOOK", &attrs);
        out += &styled;
    }

    out += "</g></svg>";
    out
}

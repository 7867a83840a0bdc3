use crate::model::Model;
use crate::shape::ShapeType;

/// Parse the CLI's `--shapes` flag into the set of kinds the search draws
/// from. `"mixed"` (the default) means all nine kinds.
pub fn parse_shape_types(s: &str) -> Vec<ShapeType> {
    match s.to_lowercase().as_str() {
        "rectangle" => vec![ShapeType::Rectangle],
        "rotated-rectangle" => vec![ShapeType::RotatedRectangle],
        "triangle" => vec![ShapeType::Triangle],
        "ellipse" => vec![ShapeType::Ellipse],
        "rotated-ellipse" => vec![ShapeType::RotatedEllipse],
        "circle" => vec![ShapeType::Circle],
        "line" => vec![ShapeType::Line],
        "quadratic-bezier" => vec![ShapeType::QuadraticBezier],
        "polyline" => vec![ShapeType::Polyline],
        "mixed" => ShapeType::ALL.to_vec(),
        other => panic!("Unsupported shape kind: {}", other),
    }
}

/// Drive `model` until `target_shape_count` shapes have been accepted,
/// logging progress. A direct generalization of the reference
/// implementation's single-shape-kind loop: every accepted shape counts
/// toward `target_shape_count` regardless of which kind `model`'s
/// `RunConfig` drew it from.
pub fn run(model: &mut Model, target_shape_count: u32) {
    let mut n = 0;

    while n < target_shape_count {
        let result = model.step();
        n += 1;
        info!("Added shape #{} (score {:.6})", n, result.score);
        trace!("{:?}", result.shape.params());
    }
}

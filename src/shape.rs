use crate::bounds::Bounds;
use crate::circle::Circle;
use crate::ellipse::Ellipse;
use crate::line::Line;
use crate::polyline::Polyline;
use crate::quadratic_bezier::QuadraticBezier;
use crate::rectangle::Rectangle;
use crate::rotated_ellipse::RotatedEllipse;
use crate::rotated_rectangle::RotatedRectangle;
use crate::scanline::Scanline;
use crate::triangle::Triangle;
use rand::{Rng, RngCore};
use std::fmt::Debug;

/// The closed set of primitive kinds the optimizer can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeType {
    Rectangle,
    RotatedRectangle,
    Triangle,
    Ellipse,
    RotatedEllipse,
    Circle,
    Line,
    QuadraticBezier,
    Polyline,
}

impl ShapeType {
    pub const ALL: [ShapeType; 9] = [
        ShapeType::Rectangle,
        ShapeType::RotatedRectangle,
        ShapeType::Triangle,
        ShapeType::Ellipse,
        ShapeType::RotatedEllipse,
        ShapeType::Circle,
        ShapeType::Line,
        ShapeType::QuadraticBezier,
        ShapeType::Polyline,
    ];
}

/// A polymorphic geometric primitive. Dispatch is on `shape_type`, not on a
/// Rust type hierarchy: every call site that needs to branch on kind matches
/// over `ShapeType` rather than downcasting.
pub trait Shape: ShapeClone + Debug + Send {
    fn shape_type(&self) -> ShapeType;

    /// Perturb exactly one parameter (a vertex, a radius, the rotation, ...)
    /// chosen uniformly at random, then reclamp into `bounds`. Must not
    /// change the shape's type tag or parameter count.
    fn mutate(&mut self, bounds: Bounds, rng: &mut dyn RngCore);

    /// Untrimmed scanlines covering this shape's filled interior (or thin
    /// path, for line/polyline/Bézier). Callers trim with
    /// `Scanline::trim(&shape.rasterize(), width, height)` before use.
    fn rasterize(&self) -> Vec<Scanline>;

    /// This shape's parameters as a flat, fixed-layout sequence of signed
    /// 32-bit integers (see the crate's external-interface documentation for
    /// the per-type layout).
    fn params(&self) -> Vec<i32>;

    /// A self-contained SVG element for this shape, containing the literal
    /// token `SVG_STYLE_HOOK` exactly once where the caller must splice in
    /// `fill`/`fill-opacity` or `stroke`/`stroke-opacity`.
    fn to_svg(&self) -> String;
}

pub trait ShapeClone {
    fn clone_box(&self) -> Box<dyn Shape>;
}

impl<T> ShapeClone for T
where
    T: 'static + Shape + Clone,
{
    fn clone_box(&self) -> Box<dyn Shape> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Shape> {
    fn clone(&self) -> Box<dyn Shape> {
        self.clone_box()
    }
}

/// Random construction within `bounds`, for a concrete shape type. Kept
/// generic (rather than a `Shape` trait method) since it returns `Self`,
/// which would make `Shape` non-object-safe.
pub trait RandomShape: Sized {
    fn random(bounds: Bounds, rng: &mut impl Rng) -> Self;
}

/// Construct a random shape of the given kind, boxed for uniform storage
/// alongside the other eight kinds.
pub fn random_shape(kind: ShapeType, bounds: Bounds, rng: &mut impl Rng) -> Box<dyn Shape> {
    match kind {
        ShapeType::Rectangle => Box::new(Rectangle::random(bounds, rng)),
        ShapeType::RotatedRectangle => Box::new(RotatedRectangle::random(bounds, rng)),
        ShapeType::Triangle => Box::new(Triangle::random(bounds, rng)),
        ShapeType::Ellipse => Box::new(Ellipse::random(bounds, rng)),
        ShapeType::RotatedEllipse => Box::new(RotatedEllipse::random(bounds, rng)),
        ShapeType::Circle => Box::new(Circle::random(bounds, rng)),
        ShapeType::Line => Box::new(Line::random(bounds, rng)),
        ShapeType::QuadraticBezier => Box::new(QuadraticBezier::random(bounds, rng)),
        ShapeType::Polyline => Box::new(Polyline::random(bounds, rng)),
    }
}

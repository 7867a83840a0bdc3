extern crate image;
extern crate rand;
extern crate rand_distr;
extern crate rayon;
extern crate anyhow;
#[macro_use]
extern crate log;

pub mod bitmap;
pub mod blit;
pub mod bounds;
pub mod circle;
pub mod color;
pub mod ellipse;
pub mod io;
pub mod line;
pub mod model;
pub mod optimizer;
pub mod point;
pub mod polyline;
pub mod quadratic_bezier;
pub mod raster;
pub mod rectangle;
pub mod result;
pub mod rng;
pub mod rotated_ellipse;
pub mod rotated_rectangle;
pub mod runner;
pub mod scanline;
pub mod scoring;
pub mod shape;
pub mod svg;
pub mod triangle;
pub mod utilities;

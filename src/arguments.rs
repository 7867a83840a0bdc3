extern crate structopt;

use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "Primitive", about = "Generate SVG/raster approximations of images!", author = "Sam Goldman", rename_all = "kebab-case")]
pub struct Opt {
    #[structopt(short = "i", long = "input", parse(from_os_str))]
    /// Path to the image to be approximated (.jpg, .png, .tif, .gif, or .bmp)
    pub in_path: PathBuf,

    #[structopt(short = "o", long = "output", parse(from_os_str))]
    /// Path to the output file (.jpg, .png, .bmp, .ico, .gif, or .svg)
    pub out_path: PathBuf,

    #[structopt(short = "n", default_value = "100")]
    /// Number of shapes to add to the approximation
    pub n: u32,

    #[structopt(long, default_value = "100")]
    /// Maximum age for each hill climbing attempt
    pub max_age: u32,

    #[structopt(long, default_value = "1")]
    /// Number of random-restart passes per shape
    pub passes: u32,

    #[structopt(long, default_value = "16")]
    /// Number of random candidate shapes generated per pass
    pub candidates: u32,

    #[structopt(long, default_value = "128")]
    /// Alpha (0-255) every shape is drawn with
    pub alpha: u8,

    #[structopt(long, default_value = "mixed")]
    /// Which shape kinds to draw from: one of rectangle, rotated-rectangle,
    /// triangle, ellipse, rotated-ellipse, circle, line, quadratic-bezier,
    /// polyline, or "mixed" for all nine
    pub shapes: String,

    #[structopt(long, default_value = "100")]
    /// The value to scale the image's largest dimension to. <= 0 prevents scaling
    pub scale_to: u32,

    #[structopt(long, default_value = "4")]
    /// Number of parallel search workers per step
    pub workers: usize,

    #[structopt(long, default_value = "0")]
    /// The random seed. 0 picks a seed based on the time
    pub seed: u64,

    #[structopt(short, parse(from_occurrences))]
    /// Turn on verbosity (use multiple for different levels)
    pub v: usize,
}

extern crate primitive_image;
extern crate image;
#[macro_use]
extern crate log;
extern crate simplelog;

mod arguments;

use anyhow::Result;
use primitive_image::io::{load_bitmap, save_raster, save_svg};
use primitive_image::model::{Model, RunConfig};
use primitive_image::rng;
use primitive_image::runner;
use primitive_image::svg::assemble_svg;
use simplelog::*;
use structopt::StructOpt;

fn main() -> Result<()> {
    let opt = arguments::Opt::from_args();

    let log_level = match opt.v {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        _ => LevelFilter::Trace,
    };
    SimpleLogger::init(log_level, Config::default()).unwrap();

    rng::set_seed(opt.seed);

    let (target, background) = load_bitmap(&opt.in_path, opt.scale_to)?;
    let shape_types = runner::parse_shape_types(&opt.shapes);

    let config = RunConfig {
        shape_types,
        alpha: opt.alpha,
        candidates_per_pass: opt.candidates,
        max_age: opt.max_age,
        passes: opt.passes,
        workers: opt.workers,
        seed: opt.seed,
    };

    let mut model = Model::new(target, background, config);
    runner::run(&mut model, opt.n);

    match opt.out_path.extension().and_then(|e| e.to_str()) {
        Some("svg") => {
            let markup = assemble_svg(
                model.target().width(),
                model.target().height(),
                background,
                model.results(),
            );
            save_svg(&markup, &opt.out_path)?;
        }
        Some("png") | Some("jpg") | Some("bmp") | Some("ico") | Some("gif") => {
            save_raster(model.current(), &opt.out_path)?;
        }
        other => panic!("Unsupported output file type: {:?}", other),
    }

    Ok(())
}

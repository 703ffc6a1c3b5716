use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use image::GenericImageView;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use speckle::svg::Style;
use speckle::{Point, Selection};

#[derive(Parser)]
pub struct Options {
    /// Image to process, either an http(s) URL or a local path
    #[arg(long, short)]
    input: String,

    /// Output file, .svg or .json
    #[arg(long, short)]
    output: PathBuf,

    /// Thin the selection down to this many points
    #[arg(long, short)]
    num_points: Option<usize>,

    /// Stop after the stride decimation instead of trimming to the exact count
    #[arg(long)]
    approximate: bool,

    /// Seed for the random trim, for reproducible output
    #[arg(long)]
    seed: Option<u64>,

    /// Circle radius for SVG output
    #[arg(long, default_value_t = 1.0)]
    point_size: f64,

    /// Fill color for SVG output
    #[arg(long, default_value = "black")]
    color: String,

    #[command(subcommand)]
    strategy: Strategy,
}

#[derive(Subcommand)]
enum Strategy {
    /// Select every pixel darker than a luminance threshold
    Threshold {
        #[arg(long, default_value_t = 128)]
        threshold: u8,
    },
    /// Select the darkest fraction of all pixels
    Ratio {
        #[arg(long)]
        ratio: f64,
    },
    /// Select Canny edge pixels
    Edges {
        #[arg(long, default_value_t = 50.0)]
        low: f32,

        #[arg(long, default_value_t = 150.0)]
        high: f32,
    },
}

impl From<&Strategy> for Selection {
    fn from(strategy: &Strategy) -> Self {
        match *strategy {
            Strategy::Threshold { threshold } => Selection::Threshold { threshold },
            Strategy::Ratio { ratio } => Selection::Ratio { ratio },
            Strategy::Edges { low, high } => Selection::Edges { low, high },
        }
    }
}

fn write_json(filename: &Path, points: &[Point]) -> Result<()> {
    let pairs: Vec<(i32, i32)> = points.iter().map(|p| (p.x, p.y)).collect();
    let writer = BufWriter::new(File::create(filename)?);
    serde_json::to_writer(writer, &pairs)?;

    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Options::parse();
    let selection = Selection::from(&opt.strategy);

    info!("Fetch image");
    let img = speckle::fetch::fetch(&opt.input)?;
    let (width, height) = img.dimensions();

    info!("Select pixels");
    let points = speckle::select::select(&img, &selection)?;

    info!("Reduce points");
    let exact = !opt.approximate;
    let points = match opt.seed {
        Some(seed) => {
            speckle::reduce::reduce(points, opt.num_points, exact, &mut StdRng::seed_from_u64(seed))?
        }
        None => speckle::reduce::reduce(points, opt.num_points, exact, &mut rand::thread_rng())?,
    };

    match opt.output.extension().and_then(|ext| ext.to_str()) {
        Some("svg") => {
            let style = Style {
                radius: opt.point_size,
                color: opt.color.clone(),
            };
            speckle::svg::write_points(&opt.output, &points, width, height, &style)?;
        }
        Some("json") => write_json(&opt.output, &points)?,
        _ => bail!("unsupported output format: {}", opt.output.display()),
    }

    Ok(())
}

use std::{fs::read_to_string, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use simple_logger::SimpleLogger;

use maze_carver::{config::PartialConfig, Grid};

#[derive(Debug, Parser)]
struct Args {
    /// Configuration file for the maze
    #[clap(short)]
    config: Option<PathBuf>,
    /// Overrides of the configuration file
    #[clap(flatten)]
    overrides: PartialConfig,
    /// Column of the starting cell
    #[clap(long, requires = "start_y")]
    start_x: Option<usize>,
    /// Row of the starting cell
    #[clap(long, requires = "start_x")]
    start_y: Option<usize>,
    /// Output file
    #[clap(short, long)]
    output: PathBuf,
}

const TILE_SIZE: u32 = 10;
const WALL_SIZE: u32 = 1;
const WALL_COLOR: [u8; 3] = [0, 0, 0];
const FLOOR_COLOR: [u8; 3] = [255, 255, 255];

fn fill(image: &mut image::RgbImage, xs: std::ops::Range<u32>, ys: std::ops::Range<u32>) {
    for x in xs {
        for y in ys.clone() {
            image[(x, y)].0 = WALL_COLOR;
        }
    }
}

/// Draw the maze, north on top
fn render(grid: &Grid) -> anyhow::Result<image::RgbImage> {
    let [w, h] = [grid.width(), grid.height()].map(u32::try_from);
    let (w, h) = (w.context("Grid too wide")?, h.context("Grid too tall")?);
    let (width, height) = (
        w.checked_mul(TILE_SIZE)
            .and_then(|w| w.checked_add(WALL_SIZE))
            .context("Image too wide")?,
        h.checked_mul(TILE_SIZE)
            .and_then(|h| h.checked_add(WALL_SIZE))
            .context("Image too tall")?,
    );
    let mut image = image::RgbImage::from_pixel(width, height, image::Rgb(FLOOR_COLOR));

    // outer frame on the north and east sides, the others belong to the cells
    fill(&mut image, 0..width, 0..WALL_SIZE);
    fill(&mut image, width - WALL_SIZE..width, 0..height);

    for [x, y] in grid.positions() {
        let left = x as u32 * TILE_SIZE;
        let top = (h - 1 - y as u32) * TILE_SIZE;
        let cell = grid[[x, y]];
        if cell.wall_west() {
            fill(&mut image, left..left + WALL_SIZE, top..top + TILE_SIZE + WALL_SIZE);
        }
        if cell.wall_south() {
            let bottom = top + TILE_SIZE;
            fill(&mut image, left..left + TILE_SIZE + WALL_SIZE, bottom..bottom + WALL_SIZE);
        }
    }
    Ok(image)
}

fn main() -> anyhow::Result<()> {
    SimpleLogger::new()
        .without_timestamps()
        .with_level(if cfg!(debug_assertions) {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .env()
        .init()
        .context("While initializing logging")?;

    let Args {
        config,
        mut overrides,
        start_x,
        start_y,
        output,
    } = Args::parse();
    if let (Some(x), Some(y)) = (start_x, start_y) {
        overrides.start = Some([x, y]);
    }
    let config = config
        .map(|path| {
            read_to_string(path)
                .context("Cannot read config file")
                .and_then(|s| toml::from_str::<PartialConfig>(&s).context("Cannot parse config file"))
        })
        .transpose()
        .context("While loading configs")?
        .unwrap_or_default()
        .merge(overrides)
        .or_defaults();
    log::info!("Generating maze with {config:?}");

    let grid = config.generate().context("While generating the maze")?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Generated maze:\n{grid}");
    }
    render(&grid)?
        .save(output)
        .context("While saving the image")?;
    Ok(())
}

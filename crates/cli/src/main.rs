use anyhow::{anyhow, Context};
use config::{Config, File};
use log::{info, LevelFilter};
use nalgebra::Vector3;
use painter::{timed, GridRectangle, PlanetConfig, PlanetModel, Selection};
use serde::Serialize;
use simple_logger::SimpleLogger;
use std::{
    path::{Path, PathBuf},
    process,
};
use structopt::StructOpt;
use strum::{Display, EnumString};

/// CLI for selecting rectangles of tiles on a planet's grid
#[derive(Debug, StructOpt)]
#[structopt(name = "painter")]
struct Opt {
    /// First corner of the selection, as `x,y,z` relative to the planet's
    /// center
    #[structopt(long, parse(try_from_str = parse_point))]
    start: Vector3<f32>,

    /// Second corner of the selection, as `x,y,z` relative to the planet's
    /// center. If this isn't on the grid, only the start tile is selected.
    #[structopt(long, parse(try_from_str = parse_point))]
    end: Vector3<f32>,

    /// Path to a config file that defines the planet. Supported formats:
    /// JSON, TOML. If not given, a standard-sized planet is used.
    #[structopt(short, long)]
    config: Option<PathBuf>,

    /// Go the long way around the planet between the two corners
    #[structopt(long)]
    longest: bool,

    /// The format to print the selection in. Supported formats:
    ///
    /// text - Short human-readable summary
    ///
    /// json - Every selected index and point
    #[structopt(short = "f", long, default_value = "text")]
    output_format: OutputFormat,

    /// The logging level to use. See
    /// https://docs.rs/log/0.4.11/log/enum.LevelFilter.html for options
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,
}

/// Different output formats.
#[derive(Copy, Clone, Debug, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    // If you change this, make sure to update the help text for
    // `--output-format`!
    Text,
    Json,
}

/// Serializable form of an exported selection
#[derive(Debug, Serialize)]
struct Report {
    indices: Vec<i32>,
    points: Vec<[f32; 3]>,
    point_count: usize,
    center: [f32; 3],
}

impl From<&Selection> for Report {
    fn from(selection: &Selection) -> Self {
        Self {
            indices: selection.indices.clone(),
            points: selection.points.iter().map(|p| [p.x, p.y, p.z]).collect(),
            point_count: selection.point_count(),
            center: [selection.center.x, selection.center.y, selection.center.z],
        }
    }
}

fn parse_point(s: &str) -> anyhow::Result<Vector3<f32>> {
    let coords = s
        .split(',')
        .map(|coord| {
            coord
                .trim()
                .parse::<f32>()
                .with_context(|| format!("invalid coordinate {:?}", coord))
        })
        .collect::<anyhow::Result<Vec<f32>>>()?;
    match coords.as_slice() {
        [x, y, z] => Ok(Vector3::new(*x, *y, *z)),
        _ => Err(anyhow!("expected 3 coordinates as x,y,z, got {:?}", s)),
    }
}

fn load_config(config_path: &Path) -> anyhow::Result<PlanetConfig> {
    let mut settings = Config::new();
    let config_path = config_path.to_str().ok_or_else(|| {
        anyhow!("invalid character in path {:?}", config_path)
    })?;
    settings
        .merge(File::with_name(config_path))
        .context("error reading config file")?;
    settings.try_into().context("error reading config")
}

/// Run the CLI with some options
fn run(opt: Opt) -> anyhow::Result<()> {
    SimpleLogger::new().with_level(opt.log_level).init()?;

    let config = match &opt.config {
        Some(config_path) => load_config(config_path)?,
        None => PlanetConfig::default(),
    };
    let planet = PlanetModel::new(config)?;

    let mut rect = GridRectangle::new();
    let selection = timed!("Selection", log::Level::Info, {
        rect.calculate(&planet, &opt.start, &opt.end, !opt.longest);
        rect.export()?
    });
    info!(
        "Selected {} tiles, {} to reform",
        selection.indices.len(),
        selection.point_count()
    );

    match opt.output_format {
        OutputFormat::Text => {
            let area = selection.indices.iter().filter(|i| **i >= 0).count();
            println!("Selected area: {}", area);
            println!("Tiles to reform: {}", selection.point_count());
            println!(
                "Center: ({:.3}, {:.3}, {:.3})",
                selection.center.x, selection.center.y, selection.center.z
            );
        }
        OutputFormat::Json => {
            let report = Report::from(&selection);
            println!(
                "{}",
                serde_json::to_string_pretty(&report)
                    .context("error serializing selection")?
            );
        }
    }

    Ok(())
}

fn main() {
    let exit_code = match run(Opt::from_args()) {
        Ok(_) => 0,
        Err(err) => {
            eprintln!("Error: {:#}", err);
            1
        }
    };
    process::exit(exit_code);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        assert_eq!(
            parse_point("0.5, -1,2e1").unwrap(),
            Vector3::new(0.5, -1.0, 20.0)
        );
        assert!(parse_point("1,2").is_err());
        assert!(parse_point("1,2,3,4").is_err());
        assert!(parse_point("1,x,3").is_err());
    }

    #[test]
    fn test_report() {
        let selection = Selection {
            indices: vec![4, -1],
            points: vec![Vector3::new(1.0, 2.0, 3.0)],
            center: Vector3::new(1.0, 2.0, 3.0),
        };
        let json = serde_json::to_value(Report::from(&selection)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "indices": [4, -1],
                "points": [[1.0, 2.0, 3.0]],
                "point_count": 1,
                "center": [1.0, 2.0, 3.0],
            })
        );
    }
}

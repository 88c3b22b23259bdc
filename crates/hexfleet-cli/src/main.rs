//! hexfleet CLI tool
//!
//! Generates a grid from the resolved configuration and answers one query.
//!
//! Usage:
//!   hexfleet [options] summary
//!   hexfleet [options] tile <index>
//!   hexfleet [options] neighbors <index>
//!   hexfleet [options] pick <x> <y>
//!   hexfleet [options] place <unit> <index> <direction>

mod config;
mod error;

use std::path::PathBuf;
use std::str::FromStr;

use glam::DVec2;
use hexfleet_placement::{Fleet, NavalUnit};
use hexfleet_topology::{CubeCoord, Direction, HexGrid, SlotKind, SpiralIndex, NEIGHBOR_COUNT};
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::Overrides;
use crate::error::{CliError, Result};

#[derive(Debug, Clone, PartialEq)]
enum Command {
    Summary,
    Tile(SpiralIndex),
    Neighbors(SpiralIndex),
    Pick(DVec2),
    Place {
        unit: NavalUnit,
        origin: SpiralIndex,
        direction: Direction,
    },
}

#[derive(Debug, Clone, PartialEq)]
struct Options {
    config_path: Option<PathBuf>,
    overrides: Overrides,
    json: bool,
    command: Command,
}

fn print_usage() {
    eprintln!("hexfleet - Query a spiral-indexed hex grid");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  hexfleet [options] summary                             Grid size and ring layout");
    eprintln!("  hexfleet [options] tile <index>                        Describe one tile");
    eprintln!("  hexfleet [options] neighbors <index>                   Neighbor indices by direction");
    eprintln!("  hexfleet [options] pick <x> <y>                        Tile under a pixel offset");
    eprintln!("  hexfleet [options] place <unit> <index> <direction>    Check a ship placement");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config <path>      JSON grid config (otherwise read from environment)");
    eprintln!("  --radius <n>         Ring count, at least 1");
    eprintln!("  --tile-size <px>     Tile size in pixels");
    eprintln!("  --json               Print results as JSON");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  {}      Ring count (default: 6)", config::RADIUS_VAR);
    eprintln!("  {}   Tile size (default: 50)", config::TILE_SIZE_VAR);
    eprintln!("  RUST_LOG             Log filter (default: hexfleet=info)");
}

fn parse_value<T: FromStr>(what: &str, value: Option<String>) -> Result<T> {
    let value = value.ok_or_else(|| CliError::Usage(format!("missing value for {}", what)))?;
    value
        .parse()
        .map_err(|_| CliError::Usage(format!("invalid {}: {:?}", what, value)))
}

/// Accepts a direction name ("east", "north-west") or its number 0-5.
fn parse_direction(value: Option<String>) -> Result<Direction> {
    let value = value.ok_or_else(|| CliError::Usage("missing direction".to_string()))?;
    if let Ok(n) = value.parse::<i64>() {
        if (0..6).contains(&n) {
            return Ok(Direction::from_index(n));
        }
    }
    Direction::ALL
        .into_iter()
        .find(|dir| dir.to_string() == value)
        .ok_or_else(|| CliError::Usage(format!("invalid direction: {:?}", value)))
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut args = args.into_iter();
    let mut config_path = None;
    let mut overrides = Overrides::default();
    let mut json = false;

    let command = loop {
        let arg = args
            .next()
            .ok_or_else(|| CliError::Usage("missing command".to_string()))?;

        match arg.as_str() {
            "--config" => config_path = Some(parse_value::<PathBuf>("--config", args.next())?),
            "--radius" => overrides.radius = Some(parse_value("--radius", args.next())?),
            "--tile-size" => overrides.tile_size = Some(parse_value("--tile-size", args.next())?),
            "--json" => json = true,
            "summary" => break Command::Summary,
            "tile" => break Command::Tile(SpiralIndex(parse_value("index", args.next())?)),
            "neighbors" => break Command::Neighbors(SpiralIndex(parse_value("index", args.next())?)),
            "pick" => {
                let x = parse_value("x", args.next())?;
                let y = parse_value("y", args.next())?;
                break Command::Pick(DVec2::new(x, y));
            }
            "place" => {
                let unit = parse_value("unit", args.next())?;
                let origin = SpiralIndex(parse_value("index", args.next())?);
                let direction = parse_direction(args.next())?;
                break Command::Place {
                    unit,
                    origin,
                    direction,
                };
            }
            other => return Err(CliError::Usage(format!("unknown argument: {}", other))),
        }
    };

    if let Some(extra) = args.next() {
        return Err(CliError::Usage(format!("unexpected argument: {}", extra)));
    }

    Ok(Options {
        config_path,
        overrides,
        json,
        command,
    })
}

#[derive(Debug, Serialize)]
struct SummaryReport {
    radius: u32,
    tile_size: f64,
    tiles: usize,
    outer_layer: u32,
}

#[derive(Debug, Serialize)]
struct TileReport {
    index: SpiralIndex,
    layer: u64,
    position: u64,
    kind: SlotKind,
    cube: CubeCoord,
    offset: DVec2,
    neighbors: [Option<SpiralIndex>; NEIGHBOR_COUNT],
}

#[derive(Debug, Serialize)]
struct PickReport {
    point: DVec2,
    cube: Option<CubeCoord>,
    index: Option<SpiralIndex>,
}

#[derive(Debug, Serialize)]
struct PlaceReport {
    unit: NavalUnit,
    origin: SpiralIndex,
    direction: Direction,
    valid: bool,
    segments: Vec<SpiralIndex>,
    reason: Option<String>,
}

fn tile_report(grid: &HexGrid, index: SpiralIndex) -> Result<TileReport> {
    let tile = grid
        .fetch(index)
        .ok_or_else(|| CliError::Usage(format!("tile {} is outside a grid of {} tiles", index, grid.len())))?;
    let slot = index.slot();

    Ok(TileReport {
        index,
        layer: slot.layer,
        position: slot.position,
        kind: slot.kind(),
        cube: tile.cube(),
        offset: tile.offset(),
        neighbors: grid.neighbors(index),
    })
}

fn format_neighbors(neighbors: &[Option<SpiralIndex>]) -> String {
    Direction::ALL
        .iter()
        .zip(neighbors)
        .map(|(dir, n)| match n {
            Some(n) => format!("{}={}", dir, n.value()),
            None => format!("{}=-", dir),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn emit<T: Serialize>(json: bool, report: &T, text: impl FnOnce(&T) -> String) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        println!("{}", text(report));
    }
    Ok(())
}

fn run(options: Options) -> Result<()> {
    let base = match &options.config_path {
        Some(path) => config::from_file(path)?,
        None => config::from_env()?,
    };
    let config = config::resolve(base, &options.overrides)?;
    tracing::info!("Generating grid: radius {}, tile size {}", config.radius, config.tile_size);

    let grid = HexGrid::generate(config)?;

    match options.command {
        Command::Summary => {
            let report = SummaryReport {
                radius: grid.radius(),
                tile_size: grid.tile_size(),
                tiles: grid.len(),
                outer_layer: grid.radius() - 1,
            };
            emit(options.json, &report, |r| {
                format!(
                    "radius {} (layers 0-{}), tile size {}, {} tiles",
                    r.radius, r.outer_layer, r.tile_size, r.tiles
                )
            })
        }
        Command::Tile(index) => {
            let report = tile_report(&grid, index)?;
            emit(options.json, &report, |r| {
                format!(
                    "tile {}: layer {} position {} ({:?})\n  cube {}\n  offset ({:.3}, {:.3})\n  neighbors {}",
                    r.index.value(),
                    r.layer,
                    r.position,
                    r.kind,
                    r.cube,
                    r.offset.x,
                    r.offset.y,
                    format_neighbors(&r.neighbors)
                )
            })
        }
        Command::Neighbors(index) => {
            let report = tile_report(&grid, index)?;
            emit(options.json, &report.neighbors, |n| format_neighbors(n))
        }
        Command::Pick(point) => {
            let report = PickReport {
                point,
                cube: grid.point_to_cube(point),
                index: grid.point_to_index(point),
            };
            emit(options.json, &report, |r| match (r.index, r.cube) {
                (Some(index), Some(cube)) => {
                    format!("({}, {}) -> tile {} at {}", r.point.x, r.point.y, index.value(), cube)
                }
                (_, Some(cube)) => format!("({}, {}) -> no tile (cube {})", r.point.x, r.point.y, cube),
                (_, None) => format!("({}, {}) -> no tile", r.point.x, r.point.y),
            })
        }
        Command::Place {
            unit,
            origin,
            direction,
        } => {
            let plan = Fleet::plan(&grid, unit, origin, direction);
            let report = PlaceReport {
                unit,
                origin,
                direction,
                valid: plan.is_ok(),
                reason: plan.as_ref().err().map(|e| e.to_string()),
                segments: plan.unwrap_or_default(),
            };
            emit(options.json, &report, |r| match &r.reason {
                None => format!(
                    "{} fits at {} heading {}: tiles {:?}",
                    r.unit,
                    r.origin.value(),
                    r.direction,
                    r.segments.iter().map(|s| s.value()).collect::<Vec<_>>()
                ),
                Some(reason) => format!("{} does not fit: {}", r.unit, reason),
            })
        }
    }
}

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing on stderr so stdout stays parseable
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hexfleet=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage();
            std::process::exit(2);
        }
    };

    run(options)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_summary_with_flags() {
        let options = parse_args(args(&["--radius", "4", "--json", "summary"])).unwrap();
        assert_eq!(options.command, Command::Summary);
        assert_eq!(options.overrides.radius, Some(4));
        assert!(options.json);
        assert!(options.config_path.is_none());
    }

    #[test]
    fn parse_pick() {
        let options = parse_args(args(&["--tile-size", "20", "pick", "10.5", "-3"])).unwrap();
        assert_eq!(options.command, Command::Pick(DVec2::new(10.5, -3.0)));
        assert_eq!(options.overrides.tile_size, Some(20.0));
    }

    #[test]
    fn parse_place() {
        let options = parse_args(args(&["place", "carrier", "5", "east"])).unwrap();
        assert_eq!(
            options.command,
            Command::Place {
                unit: NavalUnit::Carrier,
                origin: SpiralIndex(5),
                direction: Direction::East,
            }
        );

        let options = parse_args(args(&["place", "patrol", "0", "5"])).unwrap();
        assert!(matches!(
            options.command,
            Command::Place {
                direction: Direction::NorthWest,
                ..
            }
        ));
    }

    #[test]
    fn parse_pick_non_finite() {
        let options = parse_args(args(&["pick", "inf", "0"])).unwrap();
        assert_eq!(options.command, Command::Pick(DVec2::new(f64::INFINITY, 0.0)));

        let options = parse_args(args(&["pick", "NaN", "1e19"])).unwrap();
        assert!(matches!(options.command, Command::Pick(p) if p.x.is_nan() && p.y == 1e19));
    }

    #[test]
    fn run_pick_far_and_non_finite() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"radius": 4, "tile_size": 50.0}}"#).unwrap();
        let path = file.path().to_str().unwrap();

        for point in [["inf", "0"], ["1e19", "0"], ["NaN", "NaN"], ["-1e308", "1e308"]] {
            for json in [false, true] {
                let mut list = vec!["--config", path];
                if json {
                    list.push("--json");
                }
                list.extend(["pick", point[0], point[1]]);
                assert!(run(parse_args(args(&list)).unwrap()).is_ok(), "pick {:?}", point);
            }
        }
    }

    #[test]
    fn parse_errors() {
        assert!(parse_args(args(&[])).is_err());
        assert!(parse_args(args(&["tile"])).is_err());
        assert!(parse_args(args(&["tile", "-1"])).is_err());
        assert!(parse_args(args(&["neighbors", "3", "extra"])).is_err());
        assert!(parse_args(args(&["--radius"])).is_err());
        assert!(parse_args(args(&["place", "patrol", "0", "up"])).is_err());
        assert!(parse_args(args(&["frobnicate"])).is_err());
    }

    #[test]
    fn tile_report_describes_tile() {
        let grid = HexGrid::new(3, 50.0).unwrap();
        let report = tile_report(&grid, SpiralIndex(8)).unwrap();
        assert_eq!((report.layer, report.position), (2, 1));
        assert_eq!(report.kind, SlotKind::Corner);
        assert_eq!(report.neighbors.iter().filter(|n| n.is_none()).count(), 3);

        assert!(tile_report(&grid, SpiralIndex(19)).is_err());
    }

    #[test]
    fn neighbor_formatting() {
        let grid = HexGrid::new(2, 50.0).unwrap();
        assert_eq!(
            format_neighbors(&grid.neighbors(SpiralIndex(0))),
            "north-east=1 east=2 south-east=3 south-west=4 west=5 north-west=6"
        );
        assert_eq!(
            format_neighbors(&grid.neighbors(SpiralIndex(1))),
            "north-east=- east=- south-east=2 south-west=0 west=6 north-west=-"
        );
    }

    #[test]
    fn tile_report_serializes() {
        let grid = HexGrid::new(2, 50.0).unwrap();
        let report = tile_report(&grid, SpiralIndex(0)).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["index"], 0);
        assert_eq!(json["kind"], "Center");
        assert_eq!(json["cube"]["q"], 0);
        assert_eq!(json["neighbors"][1], 2);
    }
}

//! jewelfit-snapshot: render a jewelry selection without a browser.
//!
//! Composes the same 3D scene the web preview shows and writes it as an
//! SVG snapshot, or prints a JSON summary of the composed frame. Useful
//! for checking scene changes and producing reference images.
//!
//! # Usage
//!
//! ```text
//! cargo run --bin jewelfit-snapshot -- --jewelry ring --material rose-gold -o ring.svg
//! ```

#![allow(clippy::print_stdout, clippy::print_stderr)]

use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use jewelfit_core::{
    CameraState, Gemstone, JewelryType, Material, Scene, SceneSummary, Selection, SpinState,
    Viewport,
};
use jewelfit_export::{SvgMetadata, to_svg};

/// Render a jewelfit 3D preview frame to SVG or a JSON summary.
#[derive(Parser)]
#[command(name = "jewelfit-snapshot", version)]
struct Cli {
    /// Jewelry type (earrings, necklace, ring).
    #[arg(long, default_value = "earrings")]
    jewelry: JewelryType,

    /// Metal (gold, silver, rose-gold).
    #[arg(long, default_value = "gold")]
    material: Material,

    /// Gemstone (ruby, emerald, sapphire, diamond).
    #[arg(long, default_value = "ruby")]
    gemstone: Gemstone,

    /// Camera distance, clamped to the zoom range.
    #[arg(long, default_value_t = CameraState::DEFAULT_DISTANCE)]
    distance: f32,

    /// Idle-spin frames to advance before rendering.
    #[arg(long, default_value_t = 0)]
    frames: u32,

    /// Output width in pixels.
    #[arg(long, default_value_t = Viewport::PREVIEW.width)]
    width: f32,

    /// Output height in pixels.
    #[arg(long, default_value_t = Viewport::PREVIEW.height)]
    height: f32,

    /// Print a JSON scene summary instead of SVG.
    #[arg(long)]
    json: bool,

    /// Write output to this file instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Errors that end a snapshot run.
#[derive(Debug, thiserror::Error)]
enum SnapshotError {
    #[error("invalid viewport {width}x{height}: both sides must be positive")]
    InvalidViewport { width: f32, height: f32 },

    #[error("error serializing summary: {0}")]
    Json(#[from] serde_json::Error),

    #[error("error writing {target}: {source}")]
    Write {
        target: String,
        source: std::io::Error,
    },
}

fn viewport_from_cli(cli: &Cli) -> Result<Viewport, SnapshotError> {
    let valid = |v: f32| v.is_finite() && v > 0.0;
    if valid(cli.width) && valid(cli.height) {
        Ok(Viewport::new(cli.width, cli.height))
    } else {
        Err(SnapshotError::InvalidViewport {
            width: cli.width,
            height: cli.height,
        })
    }
}

/// Compose the frame and serialize it in the requested format.
fn render(cli: &Cli) -> Result<String, SnapshotError> {
    let selection = Selection::new(cli.jewelry, cli.material, cli.gemstone);
    let camera = CameraState::at_distance(cli.distance);
    if (camera.distance() - cli.distance).abs() > f32::EPSILON {
        log::info!(
            "distance {} clamped to {}",
            cli.distance,
            camera.distance()
        );
    }
    let mut spin = SpinState::new();
    spin.advance(cli.frames);
    let viewport = viewport_from_cli(cli)?;

    let scene = Scene::compose(&selection, &camera, spin.angle(), viewport);
    log::info!(
        "{selection}: {} shapes at distance {}, angle {:.3} rad",
        scene.shapes.len(),
        camera.distance(),
        spin.angle()
    );

    if cli.json {
        let summary = SceneSummary::new(&scene, selection, &camera, spin.angle());
        let mut json = serde_json::to_string_pretty(&summary)?;
        json.push('\n');
        Ok(json)
    } else {
        let title = selection.to_string();
        let description = format!(
            "camera distance {}, spin {:.3} rad",
            camera.distance(),
            spin.angle()
        );
        Ok(to_svg(
            &scene,
            &SvgMetadata {
                title: Some(&title),
                description: Some(&description),
            },
        ))
    }
}

fn write_output(cli: &Cli, text: &str) -> Result<(), SnapshotError> {
    match cli.output {
        Some(ref path) => {
            std::fs::write(path, text).map_err(|source| SnapshotError::Write {
                target: path.display().to_string(),
                source,
            })?;
            log::info!("wrote {} ({} bytes)", path.display(), text.len());
        }
        None => {
            std::io::stdout()
                .lock()
                .write_all(text.as_bytes())
                .map_err(|source| SnapshotError::Write {
                    target: "stdout".to_owned(),
                    source,
                })?;
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let cli = Cli::parse();

    match render(&cli).and_then(|text| write_output(&cli, &text)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("jewelfit-snapshot").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn defaults_match_the_app() {
        let cli = cli(&[]);
        assert_eq!(cli.jewelry, JewelryType::Earrings);
        assert_eq!(cli.material, Material::Gold);
        assert_eq!(cli.gemstone, Gemstone::Ruby);
        assert!((cli.distance - 8.0).abs() < f32::EPSILON);
        assert_eq!(cli.frames, 0);
        assert!(!cli.json);
        assert!(cli.output.is_none());
    }

    #[test]
    fn parses_kebab_case_identifiers() {
        let cli = cli(&["--jewelry", "ring", "--material", "rose-gold", "--gemstone", "diamond"]);
        assert_eq!(cli.jewelry, JewelryType::Ring);
        assert_eq!(cli.material, Material::RoseGold);
        assert_eq!(cli.gemstone, Gemstone::Diamond);
    }

    #[test]
    fn rejects_unknown_material() {
        let result = Cli::try_parse_from(["jewelfit-snapshot", "--material", "bronze"]);
        assert!(result.is_err());
    }

    #[test]
    fn svg_output_carries_selection_title() {
        let text = render(&cli(&["--jewelry", "necklace", "--material", "silver"])).unwrap();
        assert!(text.starts_with("<?xml"));
        assert!(text.contains("<title>Silver Necklace with Ruby</title>"));
    }

    #[test]
    fn json_summary_reports_clamped_distance() {
        let text = render(&cli(&["--json", "--distance", "1", "--frames", "100"])).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["cameraDistance"], 3.0);
        assert_eq!(value["selection"]["material"], "gold");
        assert!(value["shapeCount"].as_u64().unwrap() > 0);
        let angle = value["angle"].as_f64().unwrap();
        assert!((angle - 0.5).abs() < 1e-4);
    }

    #[test]
    fn zero_sized_viewport_is_an_error() {
        let result = render(&cli(&["--width", "0"]));
        assert!(matches!(result, Err(SnapshotError::InvalidViewport { .. })));
    }
}

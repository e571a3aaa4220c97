//! Placeholder asset generation
//!
//! Draws the world map and its land/water mask and writes both as PNGs:
//! - map-image.png: earth-tone continents on a teal ocean
//! - land-mask.png: the same continents in white on black, with barriers cut in

pub mod canvas;
pub mod world;

use image::ImageFormat;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

use crate::constants::{LAND_MASK_FILE, MAP_IMAGE_FILE};
use crate::error::{GenerationError, GenerationResult};
use crate::settings::GeneratorSettings;
use canvas::Canvas;

/// A file written by a generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputArtifact {
    pub name: &'static str,
    pub path: PathBuf,
}

/// Everything a successful run produced, in write order
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub artifacts: Vec<OutputArtifact>,
}

/// Fail early when the PNG codec was not compiled into `image`
pub fn check_drawing_capability() -> GenerationResult<()> {
    if ImageFormat::Png.writing_enabled() {
        Ok(())
    } else {
        Err(GenerationError::MissingDrawingCapability {
            capability: "PNG encoding",
        })
    }
}

/// Draw both assets and write them to the configured output directory.
///
/// Progress lines go to `out`. Nothing is written to disk if the drawing
/// capability is missing. Existing files are overwritten.
pub fn generate(
    settings: &GeneratorSettings,
    out: &mut impl Write,
) -> GenerationResult<GenerationReport> {
    check_drawing_capability()?;

    let output_dir = settings.resolve_output_dir();
    fs::create_dir_all(&output_dir)?;
    info!("Writing placeholder assets to {}", output_dir.display());

    let mut report = GenerationReport::default();

    let map = write_asset(MAP_IMAGE_FILE, world::paint_map, &output_dir, out)?;
    report.artifacts.push(map);

    let mask = write_asset(LAND_MASK_FILE, world::paint_mask, &output_dir, out)?;
    report.artifacts.push(mask);

    writeln!(out)?;
    writeln!(out, "All map assets generated successfully!")?;

    Ok(report)
}

fn write_asset(
    name: &'static str,
    paint: fn() -> Canvas,
    output_dir: &std::path::Path,
    out: &mut impl Write,
) -> GenerationResult<OutputArtifact> {
    writeln!(out, "Generating {}...", name)?;

    let canvas = paint();
    let path = output_dir.join(name);
    canvas.save_png(&path)?;
    debug!(
        "Saved {} ({}x{}) to {}",
        name,
        canvas.width(),
        canvas.height(),
        path.display()
    );

    writeln!(out, "✓ Created {}", name)?;
    Ok(OutputArtifact { name, path })
}

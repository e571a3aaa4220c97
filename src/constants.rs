//! Fixed values for the placeholder assets
//!
//! Canvas size, palette, file names and default locations. None of these are
//! configurable; the assets are stand-ins until real art exists.

use image::Rgb;

// =============================================================================
// CANVAS
// =============================================================================

pub const CANVAS_WIDTH: u32 = 800;
pub const CANVAS_HEIGHT: u32 = 600;

// =============================================================================
// COLORS
// =============================================================================

/// Ocean teal (#2c5f7d)
pub const MAP_BACKGROUND: Rgb<u8> = Rgb([0x2c, 0x5f, 0x7d]);
/// Earth tone (#8b7355)
pub const MAP_LAND: Rgb<u8> = Rgb([0x8b, 0x73, 0x55]);

pub const MASK_WATER: Rgb<u8> = Rgb([0, 0, 0]);
pub const MASK_LAND: Rgb<u8> = Rgb([255, 255, 255]);
/// Rivers and mountain ridges cut through land on the mask
pub const MASK_BARRIER: Rgb<u8> = Rgb([0, 0, 0]);

/// Red channel above this counts as land when reading a mask back
pub const LAND_THRESHOLD: u8 = 128;

// =============================================================================
// OUTPUT
// =============================================================================

pub const MAP_IMAGE_FILE: &str = "map-image.png";
pub const LAND_MASK_FILE: &str = "land-mask.png";

/// Output directory, relative to the crate root
pub const DEFAULT_OUTPUT_DIR: &str = "public/assets";

/// Browser page that draws the same assets for manual download
pub const BROWSER_FALLBACK_PAGE: &str = "public/assets/generate-map-assets.html";

/// Settings file, relative to the crate root
pub const SETTINGS_FILE: &str = "config/placeholder_assets.toml";

/// Environment variable that overrides the output directory
pub const OUTPUT_DIR_ENV: &str = "PLACEHOLDER_ASSETS_OUT_DIR";

/// Root of the project that owns the generator binary
pub fn crate_root() -> &'static std::path::Path {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
}

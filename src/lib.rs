//! Placeholder map assets
//!
//! Draws a simplified world map and a matching land/water mask for use until
//! real art is available.

pub mod constants;
pub mod error;
pub mod generate;
pub mod mask;
pub mod settings;

pub use constants::*;
pub use error::{GenerationError, GenerationResult};
pub use generate::canvas::{BoundingBox, Canvas, Shape};
pub use generate::world::{BARRIERS, Barrier, LANDMASSES, Landmass};
pub use generate::{GenerationReport, OutputArtifact, check_drawing_capability, generate};
pub use mask::LandMask;
pub use settings::{GeneratorSettings, SettingsSource};

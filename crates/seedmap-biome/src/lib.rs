//! Biome registry and biome color profiles.
//!
//! A [`BiomeRegistry`] lists every known biome with a dense, stable index and a
//! default map color. A [`BiomeProfile`] overrides some of those colors by name,
//! resolves them into a dense lookup array for renderers, and writes itself out
//! as a deterministic text document.

mod builtin;
mod color;
mod profile;
mod registry;
mod serialize;

pub use color::BiomeColor;
pub use profile::{BiomeProfile, ColorMap, ProfileError, UNNAMED_PROFILE};
pub use registry::{BiomeDef, BiomeIndex, BiomeRegistry, BiomeRegistryError};
pub use serialize::LineEnding;

//! Biome color profiles: named per-biome color overrides with default fallback.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use thiserror::Error;

use crate::serialize::LineEnding;
use crate::{BiomeColor, BiomeRegistry};

/// Biome name to color overrides.
pub type ColorMap = hashbrown::HashMap<String, BiomeColor>;

/// Placeholder shown for a profile that has no name.
pub const UNNAMED_PROFILE: &str = "<unnamed>";

/// Errors returned by [`BiomeProfile::try_save`].
#[derive(Debug, Error)]
pub enum ProfileError {
    /// Creating or writing the temporary file failed.
    #[error("failed to write profile: {0}")]
    Io(#[from] std::io::Error),

    /// Moving the finished file into place failed.
    #[error("failed to replace {path}: {source}")]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

static DEFAULT_PROFILE: LazyLock<BiomeProfile> =
    LazyLock::new(|| BiomeProfile::from_registry_defaults(BiomeRegistry::builtin()));

/// A named mapping from biome name to color.
///
/// Every field is optional so a profile can exist half-populated. Such a
/// profile fails [`validate`](Self::validate) but still resolves colors,
/// falling back to registry defaults.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BiomeProfile {
    name: Option<String>,
    shortcut: Option<String>,
    color_map: Option<ColorMap>,
}

impl BiomeProfile {
    /// Creates an empty profile with no name, shortcut, or color map.
    pub fn new() -> Self {
        Self::default()
    }

    /// The shared read-only profile named `"default"`, holding every builtin
    /// biome's default color.
    pub fn default_profile() -> &'static BiomeProfile {
        &DEFAULT_PROFILE
    }

    /// Builds a `"default"` profile from the default colors of `registry`.
    pub fn from_registry_defaults(registry: &BiomeRegistry) -> Self {
        let color_map = registry
            .iter()
            .map(|(_, def)| (def.name.clone(), def.default_color))
            .collect();
        Self {
            name: Some("default".to_owned()),
            shortcut: None,
            color_map: Some(color_map),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_shortcut(mut self, shortcut: impl Into<String>) -> Self {
        self.shortcut = Some(shortcut.into());
        self
    }

    pub fn with_color_map(mut self, color_map: ColorMap) -> Self {
        self.color_map = Some(color_map);
        self
    }

    /// Sets the color for `biome`, creating the color map if it is absent.
    pub fn set_color(&mut self, biome: impl Into<String>, color: BiomeColor) {
        self.color_map
            .get_or_insert_with(ColorMap::new)
            .insert(biome.into(), color);
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The name, or [`UNNAMED_PROFILE`] when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNNAMED_PROFILE)
    }

    /// Optional keybinding hint; has no effect on colors.
    pub fn shortcut(&self) -> Option<&str> {
        self.shortcut.as_deref()
    }

    pub fn color_map(&self) -> Option<&ColorMap> {
        self.color_map.as_ref()
    }

    /// Color-map keys that have no biome in `registry`, sorted.
    pub fn unknown_biomes<'a>(&'a self, registry: &BiomeRegistry) -> Vec<&'a str> {
        let mut unknown: Vec<&str> = self
            .color_map
            .iter()
            .flat_map(|map| map.keys())
            .map(String::as_str)
            .filter(|name| !registry.contains(name))
            .collect();
        unknown.sort_unstable();
        unknown
    }

    /// Checks that the profile has a name and a color map.
    ///
    /// Unknown biome keys are logged but don't make the profile invalid.
    pub fn validate(&self, registry: &BiomeRegistry) -> bool {
        if self.color_map.is_none() {
            tracing::info!("Color map is missing in profile: {}", self.display_name());
            return false;
        }
        let Some(name) = self.name.as_deref() else {
            tracing::info!("Name is missing in profile");
            return false;
        };
        for biome in self.unknown_biomes(registry) {
            tracing::info!("Failed to find biome for: {biome} in profile: {name}");
        }
        true
    }

    /// Resolves the color of every biome in `registry`, indexed by
    /// [`BiomeIndex`](crate::BiomeIndex).
    ///
    /// Biomes missing from the color map get their registry default.
    pub fn create_color_array(&self, registry: &BiomeRegistry) -> Vec<BiomeColor> {
        registry
            .iter()
            .map(|(_, def)| {
                self.color_map
                    .as_ref()
                    .and_then(|map| map.get(&def.name))
                    .copied()
                    .unwrap_or(def.default_color)
            })
            .collect()
    }

    /// Writes the profile to `path` with CRLF line endings.
    ///
    /// Returns `false` on any I/O failure; the failure is logged.
    pub fn save(&self, path: &Path, registry: &BiomeRegistry) -> bool {
        self.save_with(path, registry, LineEnding::Crlf)
    }

    /// Like [`save`](Self::save) with an explicit line ending.
    pub fn save_with(
        &self,
        path: &Path,
        registry: &BiomeRegistry,
        line_ending: LineEnding,
    ) -> bool {
        match self.try_save(path, registry, line_ending) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(
                    "Failed to save profile {} to {}: {err}",
                    self.display_name(),
                    path.display()
                );
                false
            }
        }
    }

    /// Atomically writes the profile document to `path`.
    ///
    /// The document is written to a temporary file next to `path` and renamed
    /// over it, so `path` is either fully replaced or left untouched. A symlink
    /// at `path` is followed and its target replaced. An existing file keeps its
    /// permissions; a new one gets the usual umask-filtered `0o666`.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError`] if the temporary file can't be written or moved.
    pub fn try_save(
        &self,
        path: &Path,
        registry: &BiomeRegistry,
        line_ending: LineEnding,
    ) -> Result<(), ProfileError> {
        use std::io::Write;

        let document = self.serialize(registry, line_ending);
        let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
        let dir = match target.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let mut builder = tempfile::Builder::new();
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            builder.permissions(std::fs::Permissions::from_mode(0o666));
        }
        let mut file = builder.tempfile_in(dir)?;
        if let Ok(existing) = std::fs::metadata(&target) {
            file.as_file().set_permissions(existing.permissions())?;
        }
        file.write_all(document.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(&target).map_err(|err| ProfileError::Persist {
            path: path.to_path_buf(),
            source: err.error,
        })?;
        tracing::debug!("Saved profile {} to {}", self.display_name(), path.display());
        Ok(())
    }
}

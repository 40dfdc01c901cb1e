//! Command implementations, kept apart from `main` so they can write to any sink.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use seedmap_biome::{BiomeProfile, BiomeRegistry, LineEnding};
use seedmap_seed::WorldSeed;

/// File name used when exporting the default profile without an explicit path.
pub const DEFAULT_EXPORT_FILE: &str = "default.json";

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("failed to create profile directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("could not save profile to {}", .0.display())]
    SaveFailed(PathBuf),

    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

/// Derives a seed and prints its label and value.
///
/// `save_game` takes precedence over `input`; a missing input is treated as empty.
pub fn seed(
    input: Option<&str>,
    save_game: Option<i64>,
    out: &mut impl Write,
) -> Result<WorldSeed, CommandError> {
    let seed = match save_game {
        Some(value) => WorldSeed::from_save_game(value),
        None => WorldSeed::from_user_input(input.unwrap_or_default()),
    };
    writeln!(out, "{}", seed.label())?;
    writeln!(out, "{}", seed.value())?;
    Ok(seed)
}

/// Saves the default profile to `path`, or to `profiles_dir/default.json`.
///
/// Returns the path written.
pub fn export_default_profile(
    path: Option<&Path>,
    profiles_dir: &Path,
    line_ending: LineEnding,
) -> Result<PathBuf, CommandError> {
    let target = match path {
        Some(path) => path.to_path_buf(),
        None => {
            std::fs::create_dir_all(profiles_dir).map_err(|source| CommandError::CreateDir {
                path: profiles_dir.to_path_buf(),
                source,
            })?;
            profiles_dir.join(DEFAULT_EXPORT_FILE)
        }
    };

    let profile = BiomeProfile::default_profile();
    if !profile.save_with(&target, BiomeRegistry::builtin(), line_ending) {
        return Err(CommandError::SaveFailed(target));
    }
    tracing::info!("Exported profile {} to {}", profile.display_name(), target.display());
    Ok(target)
}

/// Prints `index name #rrggbb` for every biome, resolved through `profile`.
pub fn print_colors(
    profile: &BiomeProfile,
    registry: &BiomeRegistry,
    out: &mut impl Write,
) -> Result<(), CommandError> {
    let colors = profile.create_color_array(registry);
    for ((index, def), color) in registry.iter().zip(&colors) {
        writeln!(out, "{:>3} {} {color}", index.0, def.name)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use seedmap_biome::BiomeColor;
    use seedmap_seed::WorldSeedKind;

    #[test]
    fn test_seed_prints_label() {
        let mut out = Vec::new();
        let seed = seed(Some("abc"), None, &mut out).unwrap();
        assert_eq!(seed.kind(), WorldSeedKind::Text);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Text Seed: 'abc' (96354)\n96354\n"
        );
    }

    #[test]
    fn test_seed_from_save_game() {
        let mut out = Vec::new();
        let seed = seed(None, Some(-5), &mut out).unwrap();
        assert_eq!(seed.kind(), WorldSeedKind::SaveGame);
        assert_eq!(String::from_utf8(out).unwrap(), "Save Game Seed: -5\n-5\n");
    }

    #[test]
    fn test_seed_without_input_is_random() {
        let seed = seed(None, None, &mut io::sink()).unwrap();
        assert_eq!(seed.kind(), WorldSeedKind::Random);
    }

    #[test]
    fn test_export_to_profiles_dir() {
        let dir = tempfile::tempdir().unwrap();
        let profiles_dir = dir.path().join("biome");

        let written = export_default_profile(None, &profiles_dir, LineEnding::Crlf).unwrap();
        assert_eq!(written, profiles_dir.join(DEFAULT_EXPORT_FILE));

        let doc = std::fs::read_to_string(&written).unwrap();
        assert!(doc.starts_with("{ \"name\":\"default\", \"colorMap\":[\r\n"));
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(
            parsed["colorMap"].as_array().unwrap().len(),
            BiomeRegistry::builtin().len()
        );
    }

    #[test]
    fn test_export_to_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mine.json");
        let written =
            export_default_profile(Some(&path), Path::new("unused"), LineEnding::Lf).unwrap();
        assert_eq!(written, path);
        assert!(!std::fs::read_to_string(&path).unwrap().contains('\r'));
    }

    #[test]
    fn test_export_failure_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.json");
        let err = export_default_profile(Some(&path), dir.path(), LineEnding::Crlf).unwrap_err();
        assert!(matches!(err, CommandError::SaveFailed(p) if p == path));
    }

    #[test]
    fn test_print_colors() {
        let registry = BiomeRegistry::builtin();
        let mut profile = BiomeProfile::new().with_name("custom");
        profile.set_color("Plains", BiomeColor::new(255, 0, 0));

        let mut out = Vec::new();
        print_colors(&profile, registry, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text.lines().count(), registry.len());
        assert!(text.lines().any(|line| line == "  0 Ocean #000070"));
        assert!(text.lines().any(|line| line == "  1 Plains #ff0000"));
    }
}

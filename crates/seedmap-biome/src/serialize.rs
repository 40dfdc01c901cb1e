//! Text document format for [`BiomeProfile`].
//!
//! ```text
//! { "name":"default", "colorMap":[
//! [ "Ocean", { "r":0, "g":0, "b":112 } ],
//! [ "Plains", { "r":141, "g":179, "b":96 } ] ] }
//! ```
//!
//! Entries follow registry index order, so the same profile always produces the
//! same bytes. Keys without a registry entry come last, sorted by name.

use serde::{Deserialize, Serialize};

use crate::{BiomeColor, BiomeProfile, BiomeRegistry};

/// Line terminator used in saved profile documents.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineEnding {
    /// `\r\n`, the historical profile format.
    #[default]
    Crlf,
    /// `\n`.
    Lf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Crlf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

/// JSON string literal for `s`, quotes included.
fn json_string(s: &str) -> String {
    serde_json::Value::String(s.to_owned()).to_string()
}

impl BiomeProfile {
    /// Renders the profile as a deterministic JSON document.
    ///
    /// A missing name is written as `null`; a missing color map as an empty list.
    pub fn serialize(&self, registry: &BiomeRegistry, line_ending: LineEnding) -> String {
        let eol = line_ending.as_str();
        let name = self.name().map_or_else(|| "null".to_owned(), json_string);

        let entries: Vec<String> = self
            .sorted_entries(registry)
            .into_iter()
            .map(|(biome, color)| format_entry(biome, color))
            .collect();

        let mut out = format!("{{ \"name\":{name}, \"colorMap\":[{eol}");
        out.push_str(&entries.join(&format!(",{eol}")));
        out.push_str(" ] }");
        out.push_str(eol);
        out
    }

    fn sorted_entries<'a>(&'a self, registry: &BiomeRegistry) -> Vec<(&'a str, BiomeColor)> {
        let Some(map) = self.color_map() else {
            return Vec::new();
        };

        let mut known = Vec::with_capacity(map.len());
        let mut unknown = Vec::new();
        for (biome, &color) in map {
            match registry.lookup_by_name(biome) {
                Some(index) => known.push((index, biome.as_str(), color)),
                None => unknown.push((biome.as_str(), color)),
            }
        }
        known.sort_unstable_by_key(|&(index, _, _)| index);
        unknown.sort_unstable_by_key(|&(biome, _)| biome);

        known
            .into_iter()
            .map(|(_, biome, color)| (biome, color))
            .chain(unknown)
            .collect()
    }
}

fn format_entry(biome: &str, color: BiomeColor) -> String {
    format!(
        "[ {}, {{ \"r\":{}, \"g\":{}, \"b\":{} }} ]",
        json_string(biome),
        color.r,
        color.g,
        color.b
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BiomeDef, ColorMap};

    fn registry() -> BiomeRegistry {
        BiomeRegistry::from_defs([
            BiomeDef::new("Ocean", BiomeColor::new(0, 0, 112)),
            BiomeDef::new("Plains", BiomeColor::new(141, 179, 96)),
            BiomeDef::new("Desert", BiomeColor::new(250, 148, 24)),
        ])
        .unwrap()
    }

    #[test]
    fn test_exact_crlf_document() {
        let profile = BiomeProfile::from_registry_defaults(&registry());
        let expected = concat!(
            "{ \"name\":\"default\", \"colorMap\":[\r\n",
            "[ \"Ocean\", { \"r\":0, \"g\":0, \"b\":112 } ],\r\n",
            "[ \"Plains\", { \"r\":141, \"g\":179, \"b\":96 } ],\r\n",
            "[ \"Desert\", { \"r\":250, \"g\":148, \"b\":24 } ] ] }\r\n",
        );
        assert_eq!(profile.serialize(&registry(), LineEnding::Crlf), expected);
    }

    #[test]
    fn test_order_follows_registry_not_insertion() {
        let registry = registry();
        let mut a = BiomeProfile::new().with_name("p");
        let mut b = BiomeProfile::new().with_name("p");
        for name in ["Desert", "Ocean", "Plains"] {
            a.set_color(name, BiomeColor::new(1, 1, 1));
        }
        for name in ["Plains", "Desert", "Ocean"] {
            b.set_color(name, BiomeColor::new(1, 1, 1));
        }

        let doc = a.serialize(&registry, LineEnding::Lf);
        assert_eq!(doc, b.serialize(&registry, LineEnding::Lf));
        let ocean = doc.find("Ocean").unwrap();
        let plains = doc.find("Plains").unwrap();
        let desert = doc.find("Desert").unwrap();
        assert!(ocean < plains && plains < desert);
    }

    #[test]
    fn test_empty_color_map() {
        let profile = BiomeProfile::new()
            .with_name("empty")
            .with_color_map(ColorMap::new());
        let doc = profile.serialize(&registry(), LineEnding::Crlf);
        assert_eq!(doc, "{ \"name\":\"empty\", \"colorMap\":[\r\n ] }\r\n");

        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["colorMap"].as_array().unwrap().len(), 0);
    }

    #[test]
    fn test_absent_map_and_name() {
        let doc = BiomeProfile::new().serialize(&registry(), LineEnding::Lf);
        assert_eq!(doc, "{ \"name\":null, \"colorMap\":[\n ] }\n");
    }

    #[test]
    fn test_unknown_keys_come_last_sorted() {
        let mut profile = BiomeProfile::new().with_name("p");
        profile.set_color("Zed", BiomeColor::new(3, 3, 3));
        profile.set_color("Plains", BiomeColor::new(1, 1, 1));
        profile.set_color("Abc", BiomeColor::new(2, 2, 2));

        let doc = profile.serialize(&registry(), LineEnding::Lf);
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        let names: Vec<&str> = parsed["colorMap"]
            .as_array()
            .unwrap()
            .iter()
            .map(|entry| entry[0].as_str().unwrap())
            .collect();
        assert_eq!(names, ["Plains", "Abc", "Zed"]);
    }

    #[test]
    fn test_document_is_valid_json() {
        let registry = BiomeRegistry::builtin();
        let doc = BiomeProfile::default_profile().serialize(registry, LineEnding::Crlf);
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();

        assert_eq!(parsed["name"], "default");
        let entries = parsed["colorMap"].as_array().unwrap();
        assert_eq!(entries.len(), registry.len());
        for ((_, def), entry) in registry.iter().zip(entries) {
            assert_eq!(entry[0], def.name.as_str());
            assert_eq!(entry[1]["r"], def.default_color.r);
            assert_eq!(entry[1]["g"], def.default_color.g);
            assert_eq!(entry[1]["b"], def.default_color.b);
        }
    }

    #[test]
    fn test_name_is_escaped() {
        let profile = BiomeProfile::new()
            .with_name("my \"best\" profile")
            .with_color_map(ColorMap::new());
        let doc = profile.serialize(&registry(), LineEnding::Lf);
        let parsed: serde_json::Value = serde_json::from_str(&doc).unwrap();
        assert_eq!(parsed["name"], "my \"best\" profile");
    }

    #[test]
    fn test_line_endings() {
        assert_eq!(LineEnding::default(), LineEnding::Crlf);
        assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
        assert_eq!(LineEnding::Lf.as_str(), "\n");
    }
}

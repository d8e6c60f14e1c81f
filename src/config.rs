use crate::error::VizError;
use crate::models::PaletteSet;
use std::path::{Path, PathBuf};

/// Palette configuration loader.
///
/// The palette table is an explicit input to the dataset builder; this
/// resolves where it comes from: an explicit file, the user config file,
/// or the built-in defaults.
pub struct PaletteConfig;

impl PaletteConfig {
    /// Default config location: `<config_dir>/resviz/palettes.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("resviz").join("palettes.json"))
    }

    /// Resolve the palette table: explicit path if given, else the user
    /// config file if present, else the built-in defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<PaletteSet, VizError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = Self::default_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }
        Ok(PaletteSet::default())
    }

    /// Load and validate a palette file.
    pub fn load(path: &Path) -> Result<PaletteSet, VizError> {
        let raw = std::fs::read_to_string(path).map_err(|e| VizError::io(path, e))?;
        let set: PaletteSet =
            serde_json::from_str(&raw).map_err(|e| VizError::malformed(path, e.to_string()))?;
        if set.is_empty() {
            return Err(VizError::malformed(path, "defines no palettes"));
        }
        for palette in &set.palettes {
            if palette.colors.is_empty() {
                return Err(VizError::malformed(
                    path,
                    format!("palette '{}' has no colors", palette.name),
                ));
            }
        }
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_palette_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palettes.json");
        fs::write(
            &path,
            r##"{"palettes": [{"name": "mono", "colors": ["#000000", "#FFFFFF"]}]}"##,
        )
        .unwrap();
        let set = PaletteConfig::load(&path).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.for_file(0).name, "mono");
    }

    #[test]
    fn test_load_rejects_empty_tables() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palettes.json");
        fs::write(&path, r#"{"palettes": []}"#).unwrap();
        assert!(matches!(
            PaletteConfig::load(&path),
            Err(VizError::MalformedInput { .. })
        ));

        fs::write(&path, r#"{"palettes": [{"name": "empty", "colors": []}]}"#).unwrap();
        assert!(matches!(
            PaletteConfig::load(&path),
            Err(VizError::MalformedInput { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            PaletteConfig::load(&path),
            Err(VizError::Io { .. })
        ));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("palettes.json");
        fs::write(
            &path,
            r##"{"palettes": [{"name": "solo", "colors": ["#123456"]}]}"##,
        )
        .unwrap();
        let set = PaletteConfig::resolve(Some(&path)).unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.for_file(0).name, "solo");
    }
}

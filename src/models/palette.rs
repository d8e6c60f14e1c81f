// Color palette table for distinguishing overlapping series

use serde::{Deserialize, Serialize};

/// An ordered list of color tokens assigned to one source file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Palette {
    pub name: String,
    pub colors: Vec<String>,
}

impl Palette {
    /// Color for the n-th row produced within one subject, consuming the
    /// palette from its last entry backward and cycling once a subject
    /// holds more steps than the palette has colors.
    ///
    /// Panics if the palette has no colors; configuration loading rejects
    /// empty palettes.
    pub fn color_for(&self, step_index: usize) -> &str {
        let len = self.colors.len();
        &self.colors[len - 1 - (step_index % len)]
    }
}

/// The ordered palette table source files draw from.
///
/// Files take palettes by enumeration index, cycling when a directory
/// holds more files than the table has palettes. Passed explicitly into
/// the dataset builder so tests can substitute a small deterministic
/// table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaletteSet {
    pub palettes: Vec<Palette>,
}

impl PaletteSet {
    pub fn len(&self) -> usize {
        self.palettes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.palettes.is_empty()
    }

    /// Palette for the file at enumeration position `file_index`.
    ///
    /// Panics if the set is empty; configuration loading rejects empty
    /// sets.
    pub fn for_file(&self, file_index: usize) -> &Palette {
        &self.palettes[file_index % self.palettes.len()]
    }
}

impl Default for PaletteSet {
    /// Built-in table: one qualitative set for the first file, then four
    /// sequential ramps for overlays.
    fn default() -> Self {
        PaletteSet {
            palettes: vec![
                named(
                    "qualitative",
                    &[
                        "#3366CC", "#DC3912", "#FF9900", "#109618", "#990099", "#0099C6",
                        "#DD4477", "#66AA00", "#B82E2E", "#316395",
                    ],
                ),
                named(
                    "teal",
                    &[
                        "#D1EEEA", "#A8DBD9", "#85C4C9", "#68ABB8", "#4F90A6", "#3B738F",
                        "#2A5674",
                    ],
                ),
                named(
                    "brown",
                    &[
                        "#EDE5CF", "#E0C2A2", "#D39C83", "#C1766F", "#A65461", "#813753",
                        "#541F3F",
                    ],
                ),
                named(
                    "burgundy",
                    &[
                        "#FFC6C4", "#F4A3A8", "#E38191", "#CC607D", "#AD466C", "#8B3058",
                        "#672044",
                    ],
                ),
                named(
                    "purple",
                    &[
                        "#F3E0F7", "#E4C7F1", "#D1AFE8", "#B998DD", "#9F82CE", "#826DBA",
                        "#63589F",
                    ],
                ),
            ],
        }
    }
}

fn named(name: &str, colors: &[&str]) -> Palette {
    Palette {
        name: name.to_string(),
        colors: colors.iter().map(|c| c.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Palette {
        named("small", &["#111111", "#222222", "#333333"])
    }

    #[test]
    fn test_color_for_walks_backward() {
        let palette = small();
        assert_eq!(palette.color_for(0), "#333333");
        assert_eq!(palette.color_for(1), "#222222");
        assert_eq!(palette.color_for(2), "#111111");
    }

    #[test]
    fn test_color_for_cycles_past_the_end() {
        let palette = small();
        assert_eq!(palette.color_for(3), "#333333");
        assert_eq!(palette.color_for(4), "#222222");
        assert_eq!(palette.color_for(7), "#222222");
    }

    #[test]
    fn test_for_file_cycles() {
        let set = PaletteSet {
            palettes: vec![small(), named("other", &["#444444"])],
        };
        assert_eq!(set.for_file(0).name, "small");
        assert_eq!(set.for_file(1).name, "other");
        assert_eq!(set.for_file(2).name, "small");
        assert_eq!(set.for_file(5).name, "other");
    }

    #[test]
    fn test_default_table() {
        let set = PaletteSet::default();
        assert_eq!(set.len(), 5);
        assert!(set.palettes.iter().all(|p| !p.colors.is_empty()));
        assert_eq!(set.for_file(0).name, "qualitative");
        // A sixth file wraps back to the first palette.
        assert_eq!(set.for_file(5).name, "qualitative");
    }
}

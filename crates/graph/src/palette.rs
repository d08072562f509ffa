//! Node typing and coloring
//!
//! The palette is immutable configuration injected at synthesizer
//! construction, so tests can substitute alternate color tables.

use serde::{Deserialize, Serialize};

/// Semantic node categories recognized by the visualization layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Main,
    Method,
    Finding,
    Dataset,
    Challenge,
    Solution,
    Result,
    Technique,
    Concept,
}

impl NodeType {
    /// Parse a payload type name. Unknown names map to `None`.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "main" => Some(NodeType::Main),
            "method" => Some(NodeType::Method),
            "finding" => Some(NodeType::Finding),
            "dataset" => Some(NodeType::Dataset),
            "challenge" => Some(NodeType::Challenge),
            "solution" => Some(NodeType::Solution),
            "result" => Some(NodeType::Result),
            "technique" => Some(NodeType::Technique),
            "concept" => Some(NodeType::Concept),
            _ => None,
        }
    }
}

/// Declaration order doubles as the index space for numeric group fallback
const DEFAULT_COLORS: &[(NodeType, &str)] = &[
    (NodeType::Main, "#ff0066"),
    (NodeType::Method, "#00ffcc"),
    (NodeType::Finding, "#ffcc00"),
    (NodeType::Dataset, "#00ccff"),
    (NodeType::Challenge, "#ff6633"),
    (NodeType::Solution, "#66ff66"),
    (NodeType::Result, "#cc66ff"),
    (NodeType::Technique, "#ff99cc"),
    (NodeType::Concept, "#66ccff"),
];

/// Ordered type-to-color table with an indexed fallback
#[derive(Debug, Clone)]
pub struct Palette {
    colors: Vec<(NodeType, String)>,
}

impl Palette {
    /// Create a palette from an ordered (type, color) list
    pub fn new(colors: Vec<(NodeType, String)>) -> Self {
        Self { colors }
    }

    /// Color for a known node type; falls back to the `concept` color
    pub fn color_of(&self, node_type: NodeType) -> &str {
        self.colors
            .iter()
            .find(|(t, _)| *t == node_type)
            .map(|(_, c)| c.as_str())
            .unwrap_or_else(|| self.concept_color())
    }

    /// Resolve a color from the loosely-typed payload hints.
    ///
    /// A string type name wins when recognized; otherwise a numeric group
    /// indexes the palette modulo its length; anything else gets the
    /// `concept` color.
    pub fn color_for(&self, type_name: Option<&str>, group: Option<u64>) -> &str {
        if let Some(node_type) = type_name.and_then(NodeType::from_name) {
            return self.color_of(node_type);
        }
        if type_name.is_none() {
            if let Some(index) = group {
                let slot = (index as usize) % self.colors.len().max(1);
                if let Some((_, color)) = self.colors.get(slot) {
                    return color;
                }
            }
        }
        self.concept_color()
    }

    /// Number of palette entries
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// True when the palette holds no colors
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    fn concept_color(&self) -> &str {
        self.colors
            .iter()
            .find(|(t, _)| *t == NodeType::Concept)
            .map(|(_, c)| c.as_str())
            .unwrap_or("#66ccff")
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(
            DEFAULT_COLORS
                .iter()
                .map(|(t, c)| (*t, c.to_string()))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_type_colors() {
        let palette = Palette::default();

        assert_eq!(palette.color_of(NodeType::Main), "#ff0066");
        assert_eq!(palette.color_of(NodeType::Finding), "#ffcc00");
        assert_eq!(palette.color_of(NodeType::Concept), "#66ccff");
    }

    #[test]
    fn test_color_for_named() {
        let palette = Palette::default();

        assert_eq!(palette.color_for(Some("method"), None), "#00ffcc");
        // Unknown names default to concept
        assert_eq!(palette.color_for(Some("application"), None), "#66ccff");
    }

    #[test]
    fn test_color_for_numeric_group() {
        let palette = Palette::default();

        assert_eq!(palette.color_for(None, Some(0)), "#ff0066");
        assert_eq!(palette.color_for(None, Some(1)), "#00ffcc");
        // Modulo wraps past the palette length
        assert_eq!(palette.color_for(None, Some(9)), "#ff0066");
        assert_eq!(palette.color_for(None, Some(10)), "#00ffcc");
    }

    #[test]
    fn test_color_for_nothing() {
        let palette = Palette::default();
        assert_eq!(palette.color_for(None, None), "#66ccff");
    }

    #[test]
    fn test_type_name_round_trip() {
        for name in [
            "main", "method", "finding", "dataset", "challenge", "solution", "result",
            "technique", "concept",
        ] {
            let node_type = NodeType::from_name(name).unwrap();
            let json = serde_json::to_string(&node_type).unwrap();
            assert_eq!(json, format!("\"{}\"", name));
        }
        assert!(NodeType::from_name("unknown").is_none());
    }
}

//! Analysis payload model
//!
//! The loosely-shaped object returned by the external LLM analysis service.
//! Every field is explicitly optional; absence suppresses the corresponding
//! output rather than erroring. Unknown fields are ignored.

use serde::Deserialize;

/// Generic analysis object from the LLM service
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisPayload {
    /// Document title
    pub title: Option<String>,

    /// Methodology description
    pub methodology: Option<String>,

    /// Problem statement
    pub problem_statement: Option<String>,

    /// Key findings; entries are either bare strings or structured records
    #[serde(default)]
    pub key_findings: Vec<KeyFinding>,

    /// Pre-built knowledge graph, bypassing heuristic synthesis when present
    /// with at least one node
    pub knowledge_graph: Option<GraphPayload>,
}

/// One key finding, in either wire shape
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum KeyFinding {
    /// Bare string entry
    Text(String),

    /// Structured entry with supporting evidence
    Structured {
        finding: Option<String>,
        evidence: Option<String>,
    },
}

impl KeyFinding {
    /// The display text of this finding, when it carries any
    pub fn summary(&self) -> Option<&str> {
        match self {
            KeyFinding::Text(text) => Some(text),
            KeyFinding::Structured { finding, .. } => finding.as_deref(),
        }
    }
}

/// Externally supplied graph structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GraphPayload {
    #[serde(default)]
    pub nodes: Vec<NodePayload>,

    #[serde(default)]
    pub links: Vec<LinkPayload>,
}

/// Incoming node, loosely typed
#[derive(Debug, Clone, Deserialize)]
pub struct NodePayload {
    pub id: String,

    pub label: Option<String>,

    /// Type name; unrecognized values fall back to `concept`
    #[serde(rename = "type")]
    pub type_name: Option<String>,

    /// Numeric cluster used for palette indexing when `type` is absent
    pub group: Option<u64>,

    /// Display size; the original wire format calls this `val`
    #[serde(alias = "val")]
    pub size: Option<f64>,
}

/// Incoming edge
#[derive(Debug, Clone, Deserialize)]
pub struct LinkPayload {
    pub source: String,
    pub target: String,
    pub relationship: Option<String>,
}

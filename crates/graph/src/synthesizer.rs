//! Graph synthesis strategies
//!
//! Synthesis is an ordered chain: each strategy either handles the payload
//! and returns a graph, or declines and the next tier runs. The heuristic
//! tier always handles, so the chain never produces an empty graph.

use crate::model::{GraphEdge, GraphNode, KnowledgeGraph};
use crate::palette::{NodeType, Palette};
use crate::payload::AnalysisPayload;
use std::collections::HashSet;
use tracing::debug;

/// Display size defaults by role
const PAPER_NODE_SIZE: f64 = 30.0;
const METHOD_NODE_SIZE: f64 = 20.0;
const PROBLEM_NODE_SIZE: f64 = 18.0;
const DEFAULT_NODE_SIZE: f64 = 15.0;

/// Label truncation lengths
const TITLE_LABEL_CHARS: usize = 30;
const FINDING_LABEL_CHARS: usize = 25;

/// Label for documents without a title
const FALLBACK_PAPER_LABEL: &str = "Research Paper";

/// One tier of the synthesis chain
pub trait SynthesisStrategy: Send + Sync {
    /// Strategy name for logs and metrics
    fn name(&self) -> &'static str;

    /// Produce a graph, or decline and let the next tier run
    fn synthesize(&self, payload: &AnalysisPayload, palette: &Palette) -> Option<KnowledgeGraph>;
}

/// Tier 1: pass an externally supplied knowledge graph through, normalizing
/// sizes and colors. Declines unless the payload carries at least one node.
pub struct PrebuiltGraphStrategy;

impl SynthesisStrategy for PrebuiltGraphStrategy {
    fn name(&self) -> &'static str {
        "prebuilt"
    }

    fn synthesize(&self, payload: &AnalysisPayload, palette: &Palette) -> Option<KnowledgeGraph> {
        let kg = payload.knowledge_graph.as_ref()?;
        if kg.nodes.is_empty() {
            return None;
        }

        let nodes: Vec<GraphNode> = kg
            .nodes
            .iter()
            .map(|n| GraphNode {
                id: n.id.clone(),
                label: n.label.clone().unwrap_or_else(|| n.id.clone()),
                node_type: n
                    .type_name
                    .as_deref()
                    .and_then(NodeType::from_name)
                    .unwrap_or(NodeType::Concept),
                size: n.size.unwrap_or(DEFAULT_NODE_SIZE),
                color: palette.color_for(n.type_name.as_deref(), n.group).to_string(),
            })
            .collect();

        let ids: HashSet<&str> = nodes.iter().map(|n| n.id.as_str()).collect();
        let total_links = kg.links.len();

        let links: Vec<GraphEdge> = kg
            .links
            .iter()
            .filter(|l| ids.contains(l.source.as_str()) && ids.contains(l.target.as_str()))
            .map(|l| GraphEdge {
                source: l.source.clone(),
                target: l.target.clone(),
                relationship: l.relationship.clone(),
            })
            .collect();

        let dropped = total_links - links.len();
        if dropped > 0 {
            debug!(dropped, "Dropped links referencing undeclared nodes");
        }

        Some(KnowledgeGraph { nodes, links })
    }
}

/// Terminal tier: build a minimal star graph from the flat analysis fields.
/// Always handles; emits at least the central paper node.
pub struct HeuristicGraphStrategy;

impl HeuristicGraphStrategy {
    fn build(payload: &AnalysisPayload, palette: &Palette) -> KnowledgeGraph {
        let paper_label = payload
            .title
            .as_deref()
            .map(|t| truncate_label(t, TITLE_LABEL_CHARS))
            .unwrap_or_else(|| FALLBACK_PAPER_LABEL.to_string());

        let mut nodes = vec![GraphNode {
            id: "paper".to_string(),
            label: paper_label,
            node_type: NodeType::Main,
            size: PAPER_NODE_SIZE,
            color: palette.color_of(NodeType::Main).to_string(),
        }];
        let mut links = Vec::new();

        for (i, finding) in payload.key_findings.iter().enumerate() {
            let id = format!("finding-{}", i);
            nodes.push(GraphNode {
                id: id.clone(),
                label: truncate_label(finding.summary().unwrap_or_default(), FINDING_LABEL_CHARS),
                node_type: NodeType::Finding,
                size: DEFAULT_NODE_SIZE,
                color: palette.color_of(NodeType::Finding).to_string(),
            });
            links.push(edge_from_paper(id));
        }

        if payload
            .methodology
            .as_deref()
            .is_some_and(|m| !m.is_empty())
        {
            nodes.push(GraphNode {
                id: "method".to_string(),
                label: "Methodology".to_string(),
                node_type: NodeType::Method,
                size: METHOD_NODE_SIZE,
                color: palette.color_of(NodeType::Method).to_string(),
            });
            links.push(edge_from_paper("method".to_string()));
        }

        if payload.problem_statement.is_some() {
            nodes.push(GraphNode {
                id: "problem".to_string(),
                label: "Problem".to_string(),
                node_type: NodeType::Challenge,
                size: PROBLEM_NODE_SIZE,
                color: palette.color_of(NodeType::Challenge).to_string(),
            });
            links.push(edge_from_paper("problem".to_string()));
        }

        KnowledgeGraph { nodes, links }
    }
}

impl SynthesisStrategy for HeuristicGraphStrategy {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn synthesize(&self, payload: &AnalysisPayload, palette: &Palette) -> Option<KnowledgeGraph> {
        Some(Self::build(payload, palette))
    }
}

fn edge_from_paper(target: String) -> GraphEdge {
    GraphEdge {
        source: "paper".to_string(),
        target,
        relationship: None,
    }
}

/// Truncate to a character budget and append an ellipsis
fn truncate_label(text: &str, max_chars: usize) -> String {
    let truncated: String = text.chars().take(max_chars).collect();
    format!("{}...", truncated)
}

/// Ordered strategy chain over an injected palette
pub struct GraphSynthesizer {
    palette: Palette,
    strategies: Vec<Box<dyn SynthesisStrategy>>,
}

impl GraphSynthesizer {
    /// Create a synthesizer with the default prebuilt-then-heuristic chain
    pub fn new(palette: Palette) -> Self {
        Self::with_strategies(
            palette,
            vec![Box::new(PrebuiltGraphStrategy), Box::new(HeuristicGraphStrategy)],
        )
    }

    /// Create a synthesizer with an explicit strategy chain
    pub fn with_strategies(palette: Palette, strategies: Vec<Box<dyn SynthesisStrategy>>) -> Self {
        Self { palette, strategies }
    }

    /// Synthesize a graph. The output is never empty.
    pub fn synthesize(&self, payload: &AnalysisPayload) -> KnowledgeGraph {
        self.synthesize_labeled(payload).1
    }

    /// Synthesize a graph, returning the name of the strategy that handled
    /// the payload (for logs and metrics).
    pub fn synthesize_labeled(&self, payload: &AnalysisPayload) -> (&'static str, KnowledgeGraph) {
        for strategy in &self.strategies {
            if let Some(graph) = strategy.synthesize(payload, &self.palette) {
                debug!(
                    strategy = strategy.name(),
                    nodes = graph.node_count(),
                    links = graph.link_count(),
                    "Graph synthesized"
                );
                return (strategy.name(), graph);
            }
        }

        // Every strategy declined (possible only with a custom chain); the
        // output graph must still never be empty.
        ("heuristic", HeuristicGraphStrategy::build(payload, &self.palette))
    }
}

impl Default for GraphSynthesizer {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

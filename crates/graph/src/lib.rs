//! PaperScope Graph Engine
//!
//! Normalizes either a pre-built knowledge-graph payload or a flat analysis
//! object into a consistent typed node/edge graph for visualization.
//! Synthesis is an ordered chain of strategies; the terminal heuristic tier
//! always produces at least the central paper node, so the output graph is
//! never empty.

mod model;
mod palette;
mod payload;
mod synthesizer;

pub use model::{GraphEdge, GraphNode, KnowledgeGraph};
pub use palette::{NodeType, Palette};
pub use payload::{AnalysisPayload, GraphPayload, KeyFinding, LinkPayload, NodePayload};
pub use synthesizer::{
    GraphSynthesizer, HeuristicGraphStrategy, PrebuiltGraphStrategy, SynthesisStrategy,
};

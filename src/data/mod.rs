/// Data layer: parsing, graph model, loading and sampling.
///
/// Architecture:
/// ```text
///   nodes.txt  (Node: <id> / <neighbor> <weight>)
///        │
///        ▼
///   ┌──────────┐
///   │  parser   │  line state machine → EdgeRecord triples
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ WeightedGraph  │  ordered node set, unordered-pair edge map
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ sampler   │  first N nodes → induced subgraph
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod parser;
pub mod sampler;

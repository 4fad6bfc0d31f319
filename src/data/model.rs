use indexmap::{IndexMap, IndexSet};

// ---------------------------------------------------------------------------
// EdgeKey – an unordered node pair
// ---------------------------------------------------------------------------

/// Undirected edge key. The endpoints are stored in sorted order so that
/// `(u, v)` and `(v, u)` hash and compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EdgeKey {
    a: String,
    b: String,
}

impl EdgeKey {
    pub fn new(u: &str, v: &str) -> Self {
        if u <= v {
            EdgeKey { a: u.to_string(), b: v.to_string() }
        } else {
            EdgeKey { a: v.to_string(), b: u.to_string() }
        }
    }

    /// Both endpoints, smaller identifier first.
    pub fn endpoints(&self) -> (&str, &str) {
        (&self.a, &self.b)
    }
}

// ---------------------------------------------------------------------------
// WeightedGraph – the loaded road graph
// ---------------------------------------------------------------------------

/// An undirected weighted graph.
///
/// Nodes keep their first-insertion order, which the sampler relies on.
/// Edges are keyed by unordered pair; re-adding a pair overwrites the weight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightedGraph {
    nodes: IndexSet<String>,
    edges: IndexMap<EdgeKey, f64>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `u` and `v` if new, then upsert the weight of edge `{u, v}`.
    pub fn add_edge(&mut self, u: &str, v: &str, weight: f64) {
        self.insert_node(u);
        self.insert_node(v);
        self.edges.insert(EdgeKey::new(u, v), weight);
    }

    fn insert_node(&mut self, id: &str) {
        if !self.nodes.contains(id) {
            self.nodes.insert(id.to_string());
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Node identifiers in first-insertion order.
    pub fn nodes_in_order(&self) -> impl Iterator<Item = &str> + '_ {
        self.nodes.iter().map(String::as_str)
    }

    /// Position of a node in insertion order.
    pub fn node_index(&self, id: &str) -> Option<usize> {
        self.nodes.get_index_of(id)
    }

    /// Weight of edge `{u, v}`, if present.
    pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
        self.edges.get(&EdgeKey::new(u, v)).copied()
    }

    /// All edges as `(u, v, weight)`, in first-insertion order of the pair.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str, f64)> + '_ {
        self.edges.iter().map(|(key, &w)| {
            let (a, b) = key.endpoints();
            (a, b, w)
        })
    }

    /// Build the subgraph induced by `keep`.
    ///
    /// Nodes keep the parent's insertion order; identifiers not present in
    /// the parent are ignored. Only edges with both endpoints kept survive,
    /// with their weights unchanged.
    pub fn induced_subgraph<'a, I>(&self, keep: I) -> WeightedGraph
    where
        I: IntoIterator<Item = &'a str>,
    {
        let wanted: IndexSet<&str> = keep.into_iter().collect();
        let nodes: IndexSet<String> = self
            .nodes
            .iter()
            .filter(|id| wanted.contains(id.as_str()))
            .cloned()
            .collect();
        let edges: IndexMap<EdgeKey, f64> = self
            .edges
            .iter()
            .filter(|(key, _)| {
                let (a, b) = key.endpoints();
                nodes.contains(a) && nodes.contains(b)
            })
            .map(|(key, &w)| (key.clone(), w))
            .collect();
        WeightedGraph { nodes, edges }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> WeightedGraph {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("A", "C", 2.5);
        g.add_edge("B", "C", 0.5);
        g
    }

    #[test]
    fn nodes_follow_first_insertion_order() {
        let mut g = WeightedGraph::new();
        g.add_edge("z", "a", 1.0);
        g.add_edge("m", "z", 1.0);
        let order: Vec<&str> = g.nodes_in_order().collect();
        assert_eq!(order, vec!["z", "a", "m"]);
    }

    #[test]
    fn edge_is_undirected_and_last_write_wins() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "B", 1.0);
        g.add_edge("B", "A", 4.0);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight("A", "B"), Some(4.0));
        assert_eq!(g.weight("B", "A"), Some(4.0));
    }

    #[test]
    fn self_loops_are_kept() {
        let mut g = WeightedGraph::new();
        g.add_edge("A", "A", 3.0);
        assert_eq!(g.node_count(), 1);
        assert_eq!(g.edge_count(), 1);
        assert_eq!(g.weight("A", "A"), Some(3.0));
    }

    #[test]
    fn induced_subgraph_keeps_only_inner_edges() {
        let g = triangle();
        let sub = g.induced_subgraph(["A", "B"]);
        assert_eq!(sub.nodes_in_order().collect::<Vec<_>>(), vec!["A", "B"]);
        assert_eq!(sub.edge_count(), 1);
        assert_eq!(sub.weight("A", "B"), Some(1.0));
        assert_eq!(sub.weight("A", "C"), None);
    }

    #[test]
    fn induced_subgraph_ignores_unknown_ids_and_keeps_parent_order() {
        let g = triangle();
        let sub = g.induced_subgraph(["C", "nope", "A"]);
        assert_eq!(sub.nodes_in_order().collect::<Vec<_>>(), vec!["A", "C"]);
        assert_eq!(sub.weight("C", "A"), Some(2.5));
    }

    #[test]
    fn induced_subgraph_of_all_nodes_is_identical() {
        let g = triangle();
        let sub = g.induced_subgraph(g.nodes_in_order());
        assert_eq!(sub, g);
    }
}

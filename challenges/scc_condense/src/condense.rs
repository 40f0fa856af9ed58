use crate::graph::Graph;
use crate::scc::SccResult;

/// Condensation bucket of a component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bucket {
    /// Only outgoing cross-component edges.
    A,
    /// Only incoming cross-component edges.
    B,
    /// Both, or neither.
    C,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComponentSummary {
    pub node_count: usize,
    pub has_incoming_external_edge: bool,
    pub has_outgoing_external_edge: bool,
}

impl ComponentSummary {
    /// Isolated components share bucket C with components that have edges both ways.
    pub fn bucket(&self) -> Bucket {
        match (self.has_incoming_external_edge, self.has_outgoing_external_edge) {
            (true, true) => Bucket::C,
            (false, true) => Bucket::A,
            (true, false) => Bucket::B,
            (false, false) => Bucket::C,
        }
    }
}

/// Node totals per bucket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Buckets {
    pub a: usize,
    pub b: usize,
    pub c: usize,
}

impl Buckets {
    pub fn total(&self) -> usize {
        self.a + self.b + self.c
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condensation {
    /// Indexed by component id.
    pub components: Vec<ComponentSummary>,
}

impl Condensation {
    pub fn totals(&self) -> Buckets {
        self.components
            .iter()
            .fold(Buckets::default(), |mut acc, component| {
                match component.bucket() {
                    Bucket::A => acc.a += component.node_count,
                    Bucket::B => acc.b += component.node_count,
                    Bucket::C => acc.c += component.node_count,
                }
                acc
            })
    }
}

/// Counts the nodes of every component and flags the components that have edges
/// coming in from, or going out to, another component.
pub fn classify(graph: &Graph, scc: &SccResult) -> Condensation {
    let mut components = vec![ComponentSummary::default(); scc.component_count()];

    for &component in &scc.component_of {
        components[component].node_count += 1;
    }

    for edge in graph.edges() {
        let from = scc.component_of[edge.source];
        let to = scc.component_of[edge.target];
        if from == to {
            continue;
        }
        components[to].has_incoming_external_edge = true;
        components[from].has_outgoing_external_edge = true;
    }

    Condensation { components }
}

/// A single node. Nodes live in an arena and are referred to by their dense
/// 0-based index; `value` is the 1-based label used in input and output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Node {
    pub value: usize,
}

/// A directed edge between two node indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub source: usize,
    pub target: usize,
}

impl Edge {
    pub fn reverse(&self) -> Edge {
        Edge {
            source: self.target,
            target: self.source,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    neighbors: Vec<Vec<usize>>,
}

impl Graph {
    /// Creates `node_count` nodes labeled `1..=node_count` and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            nodes: (0..node_count).map(|index| Node { value: index + 1 }).collect(),
            edges: Vec::new(),
            neighbors: vec![Vec::new(); node_count],
        }
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Maps a 1-based label to its node index, if such a node exists.
    pub fn index_of(&self, label: i64) -> Option<usize> {
        let index = usize::try_from(label).ok()?.checked_sub(1)?;
        (index < self.nodes.len()).then_some(index)
    }

    /// Appends `source -> target`. Both must be valid node indices.
    pub fn add_edge(&mut self, source: usize, target: usize) {
        assert!(
            source < self.nodes.len() && target < self.nodes.len(),
            "edge {source} -> {target} outside of {} nodes",
            self.nodes.len()
        );
        self.edges.push(Edge { source, target });
        self.neighbors[source].push(target);
    }

    /// Out-neighbors of `node` in edge insertion order.
    pub fn neighbors_of(&self, node: usize) -> &[usize] {
        &self.neighbors[node]
    }

    /// Same nodes, every edge reversed. Edge order is kept, so adjacency lists
    /// of the result are ordered by the original edge positions.
    pub fn transpose(&self) -> Graph {
        let mut neighbors = vec![Vec::new(); self.nodes.len()];
        let mut edges = Vec::with_capacity(self.edges.len());

        for edge in &self.edges {
            let rev = edge.reverse();
            neighbors[rev.source].push(rev.target);
            edges.push(rev);
        }

        Graph {
            nodes: self.nodes.clone(),
            edges,
            neighbors,
        }
    }
}

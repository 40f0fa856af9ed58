//! Kosaraju's strongly connected components.
//!
//! Phase one runs a DFS over the graph in label order and records nodes in
//! finishing order. Phase two walks that list backwards over the transposed graph
//! and gives every node reached from an unassigned node the next component id.
//!
//! Both phases use an explicit stack so deep graphs cannot overflow the call
//! stack. Phase one reproduces the visit and push order of the recursive
//! formulation exactly, which the verbose trace depends on.

use crate::graph::Graph;

/// Observes phase one of the search. `depth` is the recursion depth the event
/// would have in the recursive formulation.
pub trait DfsVisitor {
    /// `node` is entered for the first time.
    fn visiting(&mut self, node: usize, depth: usize);
    /// A neighbor of the node at `depth` was already visited and is skipped.
    fn visited(&mut self, node: usize, depth: usize);
    /// `node` has no unexplored neighbors left and is appended to the finishing list.
    fn push(&mut self, node: usize, depth: usize);
}

/// Visitor that ignores every event.
pub struct NoTrace;

impl DfsVisitor for NoTrace {
    fn visiting(&mut self, _: usize, _: usize) {}
    fn visited(&mut self, _: usize, _: usize) {}
    fn push(&mut self, _: usize, _: usize) {}
}

/// Per-node working state of one run.
#[derive(Debug, Clone, Copy, Default)]
struct NodeState {
    visited: bool,
    component: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SccResult {
    /// Node indices in DFS finishing order.
    pub finish_order: Vec<usize>,
    /// Component id of every node, indexed by node.
    pub component_of: Vec<usize>,
    component_count: usize,
}

impl SccResult {
    pub fn component_count(&self) -> usize {
        self.component_count
    }
}

/// Partitions the nodes of `graph` into strongly connected components. Component
/// ids are dense and follow discovery order in phase two.
pub fn find_components<V: DfsVisitor>(graph: &Graph, visitor: &mut V) -> SccResult {
    let n = graph.node_count();
    let mut state = vec![NodeState::default(); n];
    let mut finish_order = Vec::with_capacity(n);

    for start in 0..n {
        if state[start].visited {
            continue;
        }
        finish_order_from(start, graph, &mut state, &mut finish_order, visitor);
    }

    let transposed = graph.transpose();
    let mut component_count = 0;

    for &start in finish_order.iter().rev() {
        if state[start].component.is_some() {
            continue;
        }
        assign_component(start, component_count, &transposed, &mut state);
        component_count += 1;
    }

    let component_of = state
        .iter()
        .map(|s| s.component.expect("every node is assigned in phase two"))
        .collect();

    SccResult {
        finish_order,
        component_of,
        component_count,
    }
}

fn finish_order_from<V: DfsVisitor>(
    start: usize,
    graph: &Graph,
    state: &mut [NodeState],
    order: &mut Vec<usize>,
    visitor: &mut V,
) {
    // (node, index of the next neighbor to look at)
    let mut stack: Vec<(usize, usize)> = vec![(start, 0)];
    state[start].visited = true;
    visitor.visiting(start, 0);

    while let Some(&(v, next_i)) = stack.last() {
        let depth = stack.len() - 1;

        let Some(&to) = graph.neighbors_of(v).get(next_i) else {
            visitor.push(v, depth);
            order.push(v);
            stack.pop();
            continue;
        };

        stack[depth].1 += 1;
        if state[to].visited {
            visitor.visited(to, depth);
        } else {
            state[to].visited = true;
            visitor.visiting(to, depth + 1);
            stack.push((to, 0));
        }
    }
}

fn assign_component(start: usize, id: usize, transposed: &Graph, state: &mut [NodeState]) {
    let mut stack = vec![start];
    state[start].component = Some(id);

    while let Some(x) = stack.pop() {
        for &p in transposed.neighbors_of(x) {
            if state[p].component.is_none() {
                state[p].component = Some(id);
                stack.push(p);
            }
        }
    }
}

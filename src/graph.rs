//! Project dependency graph.
//!
//! Builds the precedence DAG (edge: dependency → dependent), rejects
//! unknown references and cycles, and produces the processing order used
//! by both solvers and the schedule evaluator.
//!
//! # Ordering
//! Kahn's algorithm with a deterministic ready queue: among projects whose
//! dependencies are all placed, higher priority goes first, then earlier
//! input position.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.4 (Topological Sort)

use std::cmp::Reverse;
use std::collections::{BTreeSet, HashMap};

use crate::error::GraphError;
use crate::models::Project;

/// Validated, index-based precedence graph over projects.
///
/// Node `i` is the project at input position `i`.
#[derive(Debug, Clone, PartialEq)]
pub struct DependencyGraph {
    names: Vec<String>,
    index: HashMap<String, usize>,
    predecessors: Vec<Vec<usize>>,
    successors: Vec<Vec<usize>>,
    order: Vec<usize>,
}

impl DependencyGraph {
    /// Builds and validates the graph.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateProject`] if two projects share a name.
    /// - [`GraphError::UnknownDependency`] for a dependency on a name not in `projects`.
    /// - [`GraphError::CyclicDependency`] if the dependencies contain a cycle.
    pub fn build(projects: &[Project]) -> Result<Self, GraphError> {
        let mut index = HashMap::with_capacity(projects.len());
        for (i, project) in projects.iter().enumerate() {
            if index.insert(project.name.clone(), i).is_some() {
                return Err(GraphError::DuplicateProject {
                    name: project.name.clone(),
                });
            }
        }

        let mut predecessors = vec![Vec::new(); projects.len()];
        let mut successors = vec![Vec::new(); projects.len()];
        for (i, project) in projects.iter().enumerate() {
            // Dependencies are a set, so each edge appears once.
            for dep in &project.dependencies {
                let &d = index
                    .get(dep.as_str())
                    .ok_or_else(|| GraphError::UnknownDependency {
                        project: project.name.clone(),
                        dependency: dep.clone(),
                    })?;
                predecessors[i].push(d);
                successors[d].push(i);
            }
        }
        for list in predecessors.iter_mut().chain(successors.iter_mut()) {
            list.sort_unstable();
        }

        let names: Vec<String> = projects.iter().map(|p| p.name.clone()).collect();
        if let Some(cycle) = find_cycle(&successors) {
            return Err(GraphError::CyclicDependency {
                path: cycle.into_iter().map(|i| names[i].clone()).collect(),
            });
        }

        let order = topological_order(projects, &predecessors, &successors);

        Ok(Self {
            names,
            index,
            predecessors,
            successors,
            order,
        })
    }

    /// Project indices in processing order.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Direct dependencies of project `i` (ascending indices).
    pub fn predecessors(&self, i: usize) -> &[usize] {
        &self.predecessors[i]
    }

    /// Direct dependents of project `i` (ascending indices).
    pub fn successors(&self, i: usize) -> &[usize] {
        &self.successors[i]
    }

    /// All edges as `(dependency, dependent)` pairs.
    pub fn edges(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.successors
            .iter()
            .enumerate()
            .flat_map(|(from, tos)| tos.iter().map(move |&to| (from, to)))
    }

    /// Input position of a project by name.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Name of project `i`.
    pub fn name(&self, i: usize) -> &str {
        &self.names[i]
    }

    /// Number of projects.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the graph has no projects.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Number of edges.
    pub fn edge_count(&self) -> usize {
        self.successors.iter().map(Vec::len).sum()
    }
}

/// Finds a cycle via iterative DFS with an explicit recursion stack.
///
/// Returns the cycle as a closed path (first node repeated at the end).
/// Roots and neighbors are visited in index order, so the reported cycle
/// is stable for a given input.
fn find_cycle(successors: &[Vec<usize>]) -> Option<Vec<usize>> {
    #[derive(Clone, Copy, PartialEq)]
    enum Mark {
        Unvisited,
        InStack,
        Done,
    }

    let n = successors.len();
    let mut mark = vec![Mark::Unvisited; n];
    // (node, next successor position)
    let mut stack: Vec<(usize, usize)> = Vec::new();

    for root in 0..n {
        if mark[root] != Mark::Unvisited {
            continue;
        }
        mark[root] = Mark::InStack;
        stack.push((root, 0));

        while let Some(top) = stack.last_mut() {
            let (node, cursor) = *top;
            let Some(&next) = successors[node].get(cursor) else {
                mark[node] = Mark::Done;
                stack.pop();
                continue;
            };
            top.1 += 1;

            match mark[next] {
                Mark::InStack => {
                    // Back edge → cycle
                    let start = stack.iter().position(|&(v, _)| v == next).unwrap_or(0);
                    let mut path: Vec<usize> = stack[start..].iter().map(|&(v, _)| v).collect();
                    path.push(next);
                    return Some(path);
                }
                Mark::Unvisited => {
                    mark[next] = Mark::InStack;
                    stack.push((next, 0));
                }
                Mark::Done => {}
            }
        }
    }
    None
}

/// Kahn's algorithm; ready projects ordered by (priority desc, index asc).
fn topological_order(
    projects: &[Project],
    predecessors: &[Vec<usize>],
    successors: &[Vec<usize>],
) -> Vec<usize> {
    let mut remaining: Vec<usize> = predecessors.iter().map(Vec::len).collect();
    let mut ready: BTreeSet<(Reverse<u8>, usize)> = remaining
        .iter()
        .enumerate()
        .filter(|&(_, &count)| count == 0)
        .map(|(i, _)| (Reverse(projects[i].priority), i))
        .collect();

    let mut order = Vec::with_capacity(projects.len());
    while let Some((_, node)) = ready.pop_first() {
        order.push(node);
        for &next in &successors[node] {
            remaining[next] -= 1;
            if remaining[next] == 0 {
                ready.insert((Reverse(projects[next].priority), next));
            }
        }
    }
    order
}

//! Breadth-first search for a shortest move sequence between two states.
//!
//! The state graph is implicit: nodes are [`PuzzleState`] values and edges are
//! the feasible moves out of each state. Nodes are expanded in a fixed move
//! order, so the same query always yields the same path.

use std::collections::{HashMap, HashSet, VecDeque};

use log::{debug, trace};
use serde::Serialize;

use crate::engine::successors;
use crate::puzzle::{Move, PuzzleState};

/// Configuration for the solver
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Moves tried from every node, in expansion order
    pub moves: Vec<Move>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            moves: Move::ALL.to_vec(),
        }
    }
}

impl SolverConfig {
    /// Restrict the search to a subset of moves.
    pub fn with_moves(moves: &[Move]) -> Self {
        Self {
            moves: moves.to_vec(),
        }
    }
}

/// Counters collected during one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// Distinct states marked visited
    pub states_visited: usize,
    pub nodes_dequeued: usize,
    pub nodes_enqueued: usize,
}

/// Terminal outcome of a search
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Shortest move sequence; empty when start already equals target
    Solved(Vec<Move>),
    /// The frontier emptied without reaching the target
    Unsolvable,
}

/// Result of the solver search
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub outcome: SolveOutcome,
    pub stats: SearchStats,
}

impl SolverResult {
    pub fn is_solved(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved(_))
    }

    /// The move sequence, if the target was reached
    pub fn path(&self) -> Option<&[Move]> {
        match &self.outcome {
            SolveOutcome::Solved(moves) => Some(moves),
            SolveOutcome::Unsolvable => None,
        }
    }
}

/// A frame in the search: a state and the moves that led to it
#[derive(Debug, Clone)]
struct SearchNode {
    state: PuzzleState,
    path: Vec<Move>,
}

/// Find a shortest move sequence from `start` to `target`.
pub fn find_shortest_path(
    start: &PuzzleState,
    target: &PuzzleState,
    config: &SolverConfig,
) -> SolverResult {
    debug!("searching {} -> {} with moves {:?}", start, target, config.moves);

    let mut stats = SearchStats::default();
    let mut visited: HashSet<PuzzleState> = HashSet::new();

    let mut queue: VecDeque<SearchNode> = VecDeque::new();
    queue.push_back(SearchNode {
        state: *start,
        path: Vec::new(),
    });
    stats.nodes_enqueued += 1;

    while let Some(node) = queue.pop_front() {
        stats.nodes_dequeued += 1;

        if visited.contains(&node.state) {
            continue;
        }

        if node.state == *target {
            debug!(
                "solved in {} moves after visiting {} states",
                node.path.len(),
                stats.states_visited
            );
            return SolverResult {
                outcome: SolveOutcome::Solved(node.path),
                stats,
            };
        }

        visited.insert(node.state);
        stats.states_visited += 1;
        trace!("expanding {} at depth {}", node.state, node.path.len());

        for (mv, next) in successors(&node.state, &config.moves) {
            let mut path = Vec::with_capacity(node.path.len() + 1);
            path.extend_from_slice(&node.path);
            path.push(mv);

            queue.push_back(SearchNode { state: next, path });
            stats.nodes_enqueued += 1;
        }
    }

    debug!(
        "no path from {} to {} ({} states visited)",
        start, target, stats.states_visited
    );
    SolverResult {
        outcome: SolveOutcome::Unsolvable,
        stats,
    }
}

/// Shortest distance from `start` to every state reachable from it.
pub fn distances_from(start: &PuzzleState, moves: &[Move]) -> HashMap<PuzzleState, usize> {
    let mut dist = HashMap::new();
    dist.insert(*start, 0);

    let mut queue = VecDeque::from([*start]);
    while let Some(state) = queue.pop_front() {
        let d = dist[&state];
        for (_, next) in successors(&state, moves) {
            if !dist.contains_key(&next) {
                dist.insert(next, d + 1);
                queue.push_back(next);
            }
        }
    }

    dist
}

/// Every state reachable from `start`, including `start` itself.
pub fn reachable_states(start: &PuzzleState, moves: &[Move]) -> HashSet<PuzzleState> {
    distances_from(start, moves).into_keys().collect()
}

/// Length of the longest shortest path out of `start`.
pub fn eccentricity(start: &PuzzleState, moves: &[Move]) -> usize {
    distances_from(start, moves)
        .into_values()
        .max()
        .unwrap_or(0)
}

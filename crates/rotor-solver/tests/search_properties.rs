//! Search results checked against exhaustive breadth-first distances.

use std::collections::HashSet;

use rotor_solver::clearance::slide_obstacle;
use rotor_solver::{
    distances_from, find_shortest_path, reachable_states, replay, slide_on_gold, slide_on_silver,
    Escape, Move, Piece, PuzzleState, SolveOutcome, SolverConfig, Spoke,
};

fn scrambled() -> PuzzleState {
    PuzzleState::new(Escape::E34, Spoke::S45, Escape::E56, Spoke::S45, true)
}

/// Clearance written out as a lookup over all nine (escape, spoke) pairs.
fn expected_clearance(escape: Escape, spoke: Spoke) -> bool {
    match (escape, spoke) {
        (_, Spoke::S05) => true,
        (Escape::E12, Spoke::S25) => false,
        (Escape::E34, Spoke::S25) | (Escape::E56, Spoke::S25) => true,
        (_, Spoke::S45) => false,
    }
}

#[test]
fn scrambled_state_matches_exhaustive_minimum() {
    let config = SolverConfig::default();
    let result = find_shortest_path(&scrambled(), &PuzzleState::SOLVED, &config);
    let dist = distances_from(&scrambled(), &Move::ALL);

    let path = result.path().expect("scrambled state is solvable");
    assert_eq!(Some(&path.len()), dist.get(&PuzzleState::SOLVED));
    assert_eq!(path.len(), 3);
    assert_eq!(replay(&scrambled(), path), Some(PuzzleState::SOLVED));
}

#[test]
fn search_agrees_with_all_pairs_distances() {
    let config = SolverConfig::default();

    for start in PuzzleState::all() {
        let dist = distances_from(&start, &Move::ALL);
        for target in PuzzleState::all() {
            let result = find_shortest_path(&start, &target, &config);
            match dist.get(&target) {
                Some(&d) => {
                    let path = result.path().expect("reachable target must be solved");
                    assert_eq!(path.len(), d, "{start} -> {target}");
                    assert_eq!(replay(&start, path), Some(target));
                }
                None => assert_eq!(result.outcome, SolveOutcome::Unsolvable),
            }
        }
    }
}

#[test]
fn search_is_deterministic() {
    let config = SolverConfig::default();
    for start in PuzzleState::all() {
        let first = find_shortest_path(&start, &PuzzleState::SOLVED, &config);
        let second = find_shortest_path(&start, &PuzzleState::SOLVED, &config);
        assert_eq!(first.outcome, second.outcome);
        assert_eq!(first.stats, second.stats);
    }
}

#[test]
fn search_never_revisits_states() {
    let config = SolverConfig::default();
    let unreachable = PuzzleState::new(Escape::E12, Spoke::S05, Escape::E12, Spoke::S45, true);

    for start in PuzzleState::all() {
        let result = find_shortest_path(&start, &unreachable, &config);
        let reachable = reachable_states(&start, &Move::ALL);

        assert!(result.stats.states_visited <= PuzzleState::STATE_SPACE);
        if !reachable.contains(&unreachable) {
            // Exhausted: every reachable state visited exactly once.
            assert_eq!(result.stats.states_visited, reachable.len());
        }
        assert!(result.stats.nodes_dequeued <= result.stats.nodes_enqueued);
    }
}

#[test]
fn start_equal_to_target_gives_empty_path() {
    let config = SolverConfig::default();
    for state in PuzzleState::all() {
        let result = find_shortest_path(&state, &state, &config);
        assert_eq!(result.outcome, SolveOutcome::Solved(Vec::new()));
    }
}

#[test]
fn disconnected_subgraph_is_unsolvable() {
    let loops_only = SolverConfig::with_moves(&[Move::LoopGold, Move::LoopSilver]);
    let result = find_shortest_path(&PuzzleState::SOLVED, &scrambled(), &loops_only);
    assert_eq!(result.outcome, SolveOutcome::Unsolvable);

    let nothing = SolverConfig::with_moves(&[]);
    let result = find_shortest_path(&scrambled(), &PuzzleState::SOLVED, &nothing);
    assert_eq!(result.outcome, SolveOutcome::Unsolvable);
    assert_eq!(result.stats.states_visited, 1);
}

#[test]
fn slide_feasibility_follows_clearance_table() {
    let mut gold_pairs = HashSet::new();
    let mut silver_pairs = HashSet::new();

    for state in PuzzleState::all() {
        let obstacle = slide_obstacle(&state, Piece::Gold);
        assert_eq!(
            slide_on_gold(&state).is_some(),
            expected_clearance(state.gold_escape, obstacle)
        );
        gold_pairs.insert((state.gold_escape, obstacle));

        let obstacle = slide_obstacle(&state, Piece::Silver);
        assert_eq!(
            slide_on_silver(&state).is_some(),
            expected_clearance(state.silver_escape, obstacle)
        );
        silver_pairs.insert((state.silver_escape, obstacle));
    }

    assert_eq!(gold_pairs.len(), 9);
    assert_eq!(silver_pairs.len(), 9);
}

#[test]
fn locate_then_solve_composes() {
    // Reaching the scrambled state from the solved one and back again are two
    // independent searches.
    let config = SolverConfig::default();
    let there = find_shortest_path(&PuzzleState::SOLVED, &scrambled(), &config);
    let back = find_shortest_path(&scrambled(), &PuzzleState::SOLVED, &config);

    let there = there.path().expect("scrambled state is reachable");
    let back = back.path().expect("scrambled state is solvable");
    let round_trip: Vec<Move> = there.iter().chain(back.iter()).copied().collect();
    assert_eq!(
        replay(&PuzzleState::SOLVED, &round_trip),
        Some(PuzzleState::SOLVED)
    );
}

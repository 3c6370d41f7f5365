//! Shortest-path and reachability search over the move graph
//!
//! Both searches walk a [`MoveGraph`], so jump edges count like any other
//! step. All edges have unit cost.

use std::collections::VecDeque;

use crate::board::{Pos, TOTAL_CELLS};

use super::movegen::MoveGraph;

/// Breadth-first shortest path from `start` to any cell of `goal_row`.
///
/// The returned path includes `start` and the goal cell, so its length
/// counts visited cells (a straight 8-row crossing is 9 long). Ties are
/// broken by discovery order. `None` means the goal is unreachable.
pub fn shortest_path(graph: &MoveGraph, start: Pos, goal_row: u8) -> Option<Vec<Pos>> {
    if start.row == goal_row {
        return Some(vec![start]);
    }

    let mut parent: [Option<Pos>; TOTAL_CELLS] = [None; TOTAL_CELLS];
    let mut seen = [false; TOTAL_CELLS];
    let mut queue = VecDeque::with_capacity(TOTAL_CELLS);

    seen[start.to_index()] = true;
    queue.push_back(start);

    while let Some(node) = queue.pop_front() {
        for next in graph.neighbors(node).iter() {
            if seen[next.to_index()] {
                continue;
            }
            seen[next.to_index()] = true;
            parent[next.to_index()] = Some(node);

            if next.row == goal_row {
                return Some(rebuild_path(&parent, start, next));
            }
            queue.push_back(next);
        }
    }
    None
}

fn rebuild_path(parent: &[Option<Pos>; TOTAL_CELLS], start: Pos, end: Pos) -> Vec<Pos> {
    let mut path = vec![end];
    let mut cur = end;
    while cur != start {
        match parent[cur.to_index()] {
            Some(prev) => {
                path.push(prev);
                cur = prev;
            }
            None => break,
        }
    }
    path.reverse();
    path
}

/// Length of the shortest path in cells, `None` if there is none.
#[inline]
pub fn shortest_path_length(graph: &MoveGraph, start: Pos, goal_row: u8) -> Option<usize> {
    shortest_path(graph, start, goal_row).map(|p| p.len())
}

/// Depth-first check that some cell of `goal_row` can be reached.
///
/// Stops at the first goal cell found. Cheaper than [`shortest_path`] when
/// only a yes/no answer is needed.
pub fn is_reachable(graph: &MoveGraph, start: Pos, goal_row: u8) -> bool {
    if start.row == goal_row {
        return true;
    }

    let mut seen = [false; TOTAL_CELLS];
    let mut stack = Vec::with_capacity(TOTAL_CELLS);
    stack.push(start);

    while let Some(node) = stack.pop() {
        seen[node.to_index()] = true;
        for next in graph.neighbors(node).iter() {
            if next.row == goal_row {
                return true;
            }
            if !seen[next.to_index()] {
                stack.push(next);
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Color, Grid, Wall};

    fn start_grid() -> Grid {
        let mut grid = Grid::new();
        grid.set_occupied(Color::White.start(), true);
        grid.set_occupied(Color::Black.start(), true);
        grid
    }

    #[test]
    fn test_fresh_board_paths_are_nine_cells() {
        let graph = MoveGraph::build(&start_grid());
        assert_eq!(
            shortest_path_length(&graph, Color::White.start(), Color::White.goal_row()),
            Some(9)
        );
        assert_eq!(
            shortest_path_length(&graph, Color::Black.start(), Color::Black.goal_row()),
            Some(9)
        );
    }

    #[test]
    fn test_path_is_connected_by_moves() {
        let mut grid = start_grid();
        grid.apply_wall(Wall::horizontal(3, 5));
        grid.apply_wall(Wall::horizontal(5, 3));
        let graph = MoveGraph::build(&grid);

        let path = shortest_path(&graph, Pos::new(4, 8), 0).expect("path exists");
        assert_eq!(path[0], Pos::new(4, 8));
        assert_eq!(path.last().map(|p| p.row), Some(0));
        for pair in path.windows(2) {
            assert!(graph.neighbors(pair[0]).contains(pair[1]));
        }
    }

    #[test]
    fn test_start_on_goal_row() {
        let graph = MoveGraph::build(&Grid::new());
        assert_eq!(shortest_path(&graph, Pos::new(2, 0), 0), Some(vec![Pos::new(2, 0)]));
        assert!(is_reachable(&graph, Pos::new(2, 0), 0));
    }

    #[test]
    fn test_walled_in_cell_is_unreachable() {
        let mut grid = Grid::new();
        // Box in (0,4): wall above, below and to the right
        grid.apply_wall(Wall::horizontal(0, 4));
        grid.apply_wall(Wall::horizontal(0, 5));
        grid.apply_wall(Wall::vertical(1, 4));
        let graph = MoveGraph::build(&grid);

        assert!(!is_reachable(&graph, Pos::new(0, 4), 0));
        assert_eq!(shortest_path(&graph, Pos::new(0, 4), 0), None);
        assert_eq!(shortest_path_length(&graph, Pos::new(0, 4), 8), None);
    }

    #[test]
    fn test_detour_lengthens_path() {
        let mut grid = start_grid();
        // Wall right in front of White
        grid.apply_wall(Wall::horizontal(4, 8));
        let graph = MoveGraph::build(&grid);
        assert_eq!(shortest_path_length(&graph, Pos::new(4, 8), 0), Some(10));
    }

    #[test]
    fn test_reachable_agrees_with_bfs() {
        let mut grid = start_grid();
        for col in [0u8, 2, 4, 6] {
            grid.apply_wall(Wall::horizontal(col, 4));
        }
        let graph = MoveGraph::build(&grid);
        let bfs = shortest_path(&graph, Pos::new(4, 8), 0).is_some();
        assert_eq!(is_reachable(&graph, Pos::new(4, 8), 0), bfs);
        assert!(bfs);
    }
}

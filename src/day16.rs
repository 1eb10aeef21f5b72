// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::{dijkstra::{self, Graph}, geom::{Direction, Maze, Point}};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Reindeer {
	pos: Point,
	heading: Direction,
}

struct ReindeerMaze(Maze);

impl ReindeerMaze {
	fn start(&self) -> Reindeer {
		Reindeer { pos: self.0.start, heading: Direction::East }
	}

	/// The end tile reached with each heading.
	fn ends(&self) -> impl Iterator<Item = Reindeer> {
		let pos = self.0.end;
		Direction::ALL.into_iter().map(move |heading| Reindeer { pos, heading })
	}
}

impl Graph for ReindeerMaze {
	type Node = Reindeer;

	/// Steps forward or sideways; turning around is never worth it.
	fn neighbours(&self, node: &Reindeer) -> impl Iterator<Item = Reindeer> {
		let node = *node;
		Direction::ALL.into_iter()
			.filter(move |&heading| heading != node.heading.opposite())
			.map(move |heading| Reindeer { pos: node.pos + heading.vector(), heading })
			.filter(move |next| self.0.is_open(next.pos))
	}

	fn edge_weight(&self, from: &Reindeer, to: &Reindeer) -> usize {
		match from.heading.dot(to.heading) {
			1 => 1,
			0 => 1001,
			_ => panic!("Cannot turn around"),
		}
	}
}


fn input_maze_from_str(s: &str) -> ReindeerMaze {
	ReindeerMaze(s.parse().unwrap())
}


fn part1_impl(input_maze: ReindeerMaze) -> usize {
	let distances = dijkstra::shortest_distances(&input_maze, input_maze.start());
	let Some(score) = input_maze.ends()
		.filter_map(|end| distances.get(&end).copied())
		.min() else { panic!("Could not reach end") };
	score
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl(input_maze_from_str(input))
}


fn part2_impl(input_maze: ReindeerMaze) -> usize {
	let distances = dijkstra::shortest_distances(&input_maze, input_maze.start());
	let Some(score) = input_maze.ends()
		.filter_map(|end| distances.get(&end).copied())
		.min() else { panic!("Could not reach end") };

	let tiles = input_maze.ends()
		.filter(|end| distances.get(end) == Some(&score))
		.flat_map(|end| dijkstra::all_shortest_paths(&input_maze, input_maze.start(), &end))
		.flatten()
		.map(|reindeer| reindeer.pos)
		.collect::<HashSet<_>>();

	#[cfg(LOGGING)]
	println!("{}", input_maze.0.render(&tiles));

	tiles.len()
}

pub(crate) fn part2(input: &str) -> usize {
	part2_impl(input_maze_from_str(input))
}


#[test]
fn tests() {
	const INPUTS: [&str; 2] = [
		indoc::indoc! { "
			###############
			#.......#....E#
			#.#.###.#.###.#
			#.....#.#...#.#
			#.###.#####.#.#
			#.#.#.......#.#
			#.#.#####.###.#
			#...........#.#
			###.#.#####.#.#
			#...#.....#.#.#
			#.#.#.###.#.#.#
			#.....#...#.#.#
			#.###.#.#.#.#.#
			#S..#.....#...#
			###############
		" },
		indoc::indoc! { "
			#################
			#...#...#...#..E#
			#.#.#.#.#.#.#.#.#
			#.#.#.#...#...#.#
			#.#.#.#.###.#.#.#
			#...#.#.#.....#.#
			#.#.#.#.#.#####.#
			#.#...#.#.#.....#
			#.#.#####.#.###.#
			#.#.#.......#...#
			#.#.###.#####.###
			#.#.#...#.....#.#
			#.#.#.#####.###.#
			#.#.#.........#.#
			#.#.#.#########.#
			#S#.............#
			#################
		" },
	];
	assert_eq!(part1_impl(input_maze_from_str(INPUTS[0])), 7036);
	assert_eq!(part1_impl(input_maze_from_str(INPUTS[1])), 11048);
	assert_eq!(part2_impl(input_maze_from_str(INPUTS[0])), 45);
	assert_eq!(part2_impl(input_maze_from_str(INPUTS[1])), 64);

	let maze = input_maze_from_str("#####\n#S.E#\n#####");
	let [start, end] = [maze.start(), Reindeer { pos: maze.0.end, heading: Direction::East }];
	assert_eq!(maze.neighbours(&start).collect::<Vec<_>>(),
		[Reindeer { pos: Point::new(2, 1), heading: Direction::East }]);
	assert_eq!(dijkstra::all_shortest_paths(&maze, start, &end).len(), 1);
	assert_eq!(part1_impl(maze), 2);
}

// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use crate::{dijkstra::{self, Graph}, geom::{Maze, Point}};


struct Racetrack(Maze);

impl Graph for Racetrack {
	type Node = Point;

	fn neighbours(&self, node: &Point) -> impl Iterator<Item = Point> {
		node.neighbours(self.0.dimension).filter(move |p| !self.0.walls.contains(p))
	}

	fn edge_weight(&self, _: &Point, _: &Point) -> usize {
		1
	}
}


fn input_track_from_str(s: &str) -> Racetrack {
	Racetrack(s.parse().unwrap())
}


/// Counts cheats of at most `CHEAT` steps that save at least `min_saving`.
fn part1and2_impl<const CHEAT: usize>(input_track: &Racetrack, min_saving: usize) -> usize {
	use {
		itertools::Itertools as _,
		rayon::prelude::{IndexedParallelIterator as _, IntoParallelRefIterator as _, ParallelIterator as _},
	};

	let Maze { start, end, .. } = input_track.0;
	let Ok(path) = dijkstra::all_shortest_paths(input_track, start, &end)
		.into_iter()
		.exactly_one() else { panic!("Racetrack is not a single path") };
	let normal = path.len() - 1;
	let from_end = dijkstra::shortest_distances(input_track, end);

	#[cfg(LOGGING)]
	println!("normal time: {normal}");

	path.par_iter()
		.enumerate()
		.map(|(steps, &cheat_from)| cheat_from.square(CHEAT as i32)
			.filter_map(|cheat_to| {
				let skip = cheat_from.manhattan_distance(cheat_to);
				if !(1..=CHEAT).contains(&skip) { return None }
				normal.checked_sub(steps + skip + from_end.get(&cheat_to)?)
			})
			.filter(|&saving| saving >= min_saving)
			.count())
		.sum()
}

pub(crate) fn part1(input: &str) -> usize {
	part1and2_impl::<2>(&input_track_from_str(input), 100)
}

pub(crate) fn part2(input: &str) -> usize {
	part1and2_impl::<20>(&input_track_from_str(input), 100)
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		###############
		#...#...#.....#
		#.#.#.#.#.###.#
		#S#...#.#.#...#
		#######.#.#.###
		#######.#.#...#
		#######.#.###.#
		###..E#...#...#
		###.#######.###
		#...###...#...#
		#.#####.#.###.#
		#.#...#.#.#...#
		#.#.#.#.#.#.###
		#...#...#...###
		###############
	" };

	#[test]
	fn normal_time() {
		let track = input_track_from_str(INPUT);
		let paths = dijkstra::all_shortest_paths(&track, track.0.start, &track.0.end);
		assert_eq!(paths.len(), 1);
		assert_eq!(paths[0].len() - 1, 84);
		assert_eq!(dijkstra::shortest_distances(&track, track.0.end)[&track.0.start], 84);
	}

	#[test_case(1, 44)]
	#[test_case(10, 10)]
	#[test_case(12, 8)]
	#[test_case(20, 5)]
	#[test_case(64, 1)]
	#[test_case(65, 0)]
	fn cheats_up_to_2(min_saving: usize, expected: usize) {
		assert_eq!(part1and2_impl::<2>(&input_track_from_str(INPUT), min_saving), expected);
	}

	#[test_case(50, 285)]
	#[test_case(72, 29)]
	#[test_case(74, 7)]
	#[test_case(76, 3)]
	#[test_case(77, 0)]
	fn cheats_up_to_20(min_saving: usize, expected: usize) {
		assert_eq!(part1and2_impl::<20>(&input_track_from_str(INPUT), min_saving), expected);
	}
}

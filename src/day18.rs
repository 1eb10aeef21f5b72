// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::collections::HashSet;
use crate::{dijkstra::{self, FnGraph, Graph}, geom::{Dimension, Point}};


struct MemorySpace {
	dimension: Dimension,
	corrupted: HashSet<Point>,
}

impl MemorySpace {
	fn new<const SIZE: i32>(fallen: &[Point]) -> Self {
		MemorySpace {
			dimension: Dimension { width: SIZE, height: SIZE },
			corrupted: fallen.iter().copied().collect(),
		}
	}

	fn exit(&self) -> Point {
		Point::new(self.dimension.width - 1, self.dimension.height - 1)
	}

	fn graph(&self) -> impl Graph<Node = Point> + '_ {
		FnGraph::new(
			move |pos: &Point| pos.neighbours(self.dimension)
				.filter(|p| !self.corrupted.contains(p))
				.collect::<Vec<_>>(),
			|_, _| 1)
	}
}


fn input_bytes_from_str(s: &str) -> Vec<Point> {
	parsing::bytes_from_str(s).map(|r| r.unwrap()).collect()
}


fn part1_impl<const SIZE: i32, const FALLEN: usize>(input_bytes: &[Point]) -> usize {
	let Some(fallen) = input_bytes.get(..FALLEN) else {
		panic!("Fewer than {FALLEN} bytes fell") };
	let space = MemorySpace::new::<SIZE>(fallen);
	let Some(&steps) = dijkstra::shortest_distances(&space.graph(), Point::new(0, 0))
		.get(&space.exit()) else { panic!("Could not reach exit") };
	steps
}

pub(crate) fn part1(input: &str) -> usize {
	part1_impl::<71, 1024>(&input_bytes_from_str(input))
}


fn part2_impl<const SIZE: i32, const FALLEN: usize>(input_bytes: &[Point]) -> Point {
	use rayon::prelude::{IntoParallelIterator as _, ParallelIterator as _};

	let Some(fallen) = (FALLEN + 1..=input_bytes.len())
		.into_par_iter()
		.find_first(|&fallen| {
			let space = MemorySpace::new::<SIZE>(&input_bytes[..fallen]);
			let graph = space.graph();
			let exit = space.exit();
			dijkstra::a_star_path(&graph, Point::new(0, 0), exit, |p| p.manhattan_distance(exit))
				.is_err()
		}) else { panic!("Exit never cut off") };

	input_bytes[fallen - 1]
}

pub(crate) fn part2(input: &str) -> String {
	part2_impl::<71, 1024>(&input_bytes_from_str(input)).to_string()
}


mod parsing {
	use crate::geom::{Point, parsing::PointError};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) struct ByteError { pub(super) line: usize, pub(super) source: PointError }

	pub(super) fn bytes_from_str(s: &str) -> impl Iterator<Item = Result<Point, ByteError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| line.parse::<Point>().map_err(|e| ByteError { line: l + 1, source: e }))
	}
}


#[test]
fn tests() {
	const INPUT: &str = indoc::indoc! { "
		5,4
		4,2
		4,5
		3,0
		2,1
		6,3
		2,4
		1,5
		0,6
		3,3
		2,6
		5,1
		1,2
		5,5
		2,5
		6,5
		1,4
		0,4
		6,4
		1,1
		6,1
		1,0
		0,5
		1,6
		2,0
	" };
	assert_eq!(part1_impl::<7, 12>(&input_bytes_from_str(INPUT)), 22);
	assert_eq!(part2_impl::<7, 12>(&input_bytes_from_str(INPUT)), Point::new(6, 1));
	assert_eq!(part2_impl::<7, 12>(&input_bytes_from_str(INPUT)).to_string(), "6,1");

	assert!(matches!(parsing::bytes_from_str("1,2\n3").nth(1),
		Some(Err(parsing::ByteError { line: 2, .. }))));

	assert_eq!(part1_impl::<7, 0>(&[]), 12);
}

#[test]
#[should_panic(expected = "Fewer than 12 bytes fell")]
fn too_few_bytes() {
	part1_impl::<7, 12>(&input_bytes_from_str("5,4\n4,2\n4,5"));
}

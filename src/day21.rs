// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::collections::HashMap;
use crate::{dijkstra::{self, Graph}, geom::{Direction, Point}};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Button {
	label: char,
	pos: Point,
}

struct Keypad(Vec<Button>);

impl Keypad {
	fn from_rows(rows: &[&str]) -> Self {
		Keypad(rows.iter()
			.enumerate()
			.flat_map(|(y, row)| row.chars()
				.enumerate()
				.filter(|&(_, label)| label != ' ')
				.map(move |(x, label)| Button { label, pos: Point::new(x as i32, y as i32) }))
			.collect())
	}

	fn numeric() -> Self {
		Keypad::from_rows(&["789", "456", "123", " 0A"])
	}

	fn directional() -> Self {
		Keypad::from_rows(&[" ^A", "<v>"])
	}

	/// Shortest arrow sequences between every pair of buttons.
	fn all_moves(&self) -> Moves {
		itertools::iproduct!(&self.0, &self.0)
			.map(|(from, to)| ((from.label, to.label), dijkstra::all_shortest_paths(self, *from, to)
				.into_iter()
				.map(|path| arrows(&path))
				.collect::<Vec<_>>()))
			.collect()
	}
}

impl Graph for Keypad {
	type Node = Button;

	fn neighbours(&self, node: &Button) -> impl Iterator<Item = Button> {
		let pos = node.pos;
		self.0.iter().copied().filter(move |b| b.pos.manhattan_distance(pos) == 1)
	}

	fn edge_weight(&self, _: &Button, _: &Button) -> usize {
		1
	}
}

fn arrows(path: &[Button]) -> String {
	use itertools::Itertools as _;
	path.iter()
		.tuple_windows()
		.map(|(from, to)| match Direction::from_vector(to.pos - from.pos) {
			Some(dir) => dir.to_char(),
			None => panic!("Buttons {} & {} are not adjacent", from.label, to.label),
		})
		.collect()
}

type Moves = HashMap<(char, char), Vec<String>>;


struct Robots {
	numeric: Moves,
	directional: Moves,
	cache: HashMap<(String, usize), u64>,
}

impl Robots {
	fn new() -> Self {
		Robots {
			numeric: Keypad::numeric().all_moves(),
			directional: Keypad::directional().all_moves(),
			cache: HashMap::new(),
		}
	}

	/// Number of button presses by the human to have `sequence` typed at
	/// `level` (0 being the numeric keypad) with `robots` directional keypad
	/// robots in between.
	fn presses(&mut self, sequence: &str, level: usize, robots: usize) -> u64 {
		use itertools::Itertools as _;

		if level == robots + 1 { return sequence.len() as u64 }
		if let Some(&presses) = self.cache.get(&(sequence.to_owned(), level)) { return presses }

		let presses = std::iter::once('A').chain(sequence.chars())
			.tuple_windows()
			.map(|(from, to)| {
				let moves = if level == 0 { &self.numeric } else { &self.directional };
				let Some(moves) = moves.get(&(from, to)).cloned() else {
					panic!("No button {from:?} or {to:?}") };
				moves.into_iter()
					.map(|arrows| self.presses(&format!("{arrows}A"), level + 1, robots))
					.min()
					.unwrap_or(0)
			})
			.sum();

		#[cfg(LOGGING)]
		println!("{sequence} at level {level}: {presses}");

		self.cache.insert((sequence.to_owned(), level), presses);
		presses
	}

	fn complexity(&mut self, code: &str, robots: usize) -> u64 {
		let numeric = code.trim_end_matches('A').parse::<u64>()
			.unwrap_or_else(|_| panic!("Invalid code {code:?}"));
		self.presses(code, 0, robots) * numeric
	}
}


fn input_codes_from_str(s: &str) -> Vec<&str> {
	parsing::codes_from_str(s).map(|r| r.unwrap()).collect()
}


fn part1and2_impl<const ROBOTS: usize>(input_codes: &[&str]) -> u64 {
	let mut robots = Robots::new();
	input_codes.iter().map(|code| robots.complexity(code, ROBOTS)).sum()
}

pub(crate) fn part1(input: &str) -> u64 {
	part1and2_impl::<2>(&input_codes_from_str(input))
}

pub(crate) fn part2(input: &str) -> u64 {
	part1and2_impl::<25>(&input_codes_from_str(input))
}


mod parsing {
	#[allow(dead_code)]
	#[derive(Debug)]
	pub(super) enum CodeError {
		InvalidChar { line: usize, column: usize, found: char },
		NoTrailingA { line: usize },
	}

	pub(super) fn codes_from_str(s: &str) -> impl Iterator<Item = Result<&str, CodeError>> + '_ {
		s.lines()
			.enumerate()
			.map(|(l, line)| {
				if let Some((c, found)) = line.char_indices()
					.find(|&(_, c)| !c.is_ascii_digit() && c != 'A') {
					return Err(CodeError::InvalidChar { line: l + 1, column: c + 1, found })
				}
				match line.strip_suffix('A') {
					Some(digits) if digits.chars().all(|c| c.is_ascii_digit()) && !digits.is_empty() => Ok(line),
					_ => Err(CodeError::NoTrailingA { line: l + 1 }),
				}
			})
	}
}


#[cfg(test)]
mod tests {
	use test_case::test_case;
	use super::*;

	const INPUT: &str = indoc::indoc! { "
		029A
		980A
		179A
		456A
		379A
	" };

	#[test]
	fn moves() {
		let numeric = Keypad::numeric().all_moves();
		assert_eq!(numeric.len(), 11 * 11);
		assert_eq!(numeric[&('A', 'A')], [""]);
		assert_eq!(numeric[&('A', '0')], ["<"]);
		let mut moves = numeric[&('A', '1')].clone();
		moves.sort();
		// Never through the gap in the bottom left
		assert_eq!(moves, ["<^<", "^<<"]);

		let directional = Keypad::directional().all_moves();
		assert_eq!(directional.len(), 5 * 5);
		let mut moves = directional[&('<', 'A')].clone();
		moves.sort();
		assert_eq!(moves, [">>^", ">^>"]);
	}

	#[test_case("029A", 68)]
	#[test_case("980A", 60)]
	#[test_case("179A", 68)]
	#[test_case("456A", 64)]
	#[test_case("379A", 64)]
	fn presses(code: &str, expected: u64) {
		assert_eq!(Robots::new().presses(code, 0, 2), expected);
	}

	#[test]
	fn complexities() {
		assert_eq!(Robots::new().presses("029A", 0, 0), 12);
		assert_eq!(Robots::new().complexity("029A", 2), 68 * 29);
		assert_eq!(part1and2_impl::<2>(&input_codes_from_str(INPUT)), 126384);
		assert_eq!(part1and2_impl::<25>(&input_codes_from_str(INPUT)), 154115708116294);

		assert!(matches!(parsing::codes_from_str("12B").next(),
			Some(Err(parsing::CodeError::InvalidChar { line: 1, column: 3, found: 'B' }))));
		assert!(matches!(parsing::codes_from_str("12").next(),
			Some(Err(parsing::CodeError::NoTrailingA { line: 1 }))));
	}
}

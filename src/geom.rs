// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::{collections::HashSet, ops::{Add, Sub}};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct Point {
	pub(crate) x: i32,
	pub(crate) y: i32,
}

impl Point {
	pub(crate) const fn new(x: i32, y: i32) -> Self {
		Point { x, y }
	}

	pub(crate) fn manhattan_distance(self, other: Point) -> usize {
		(self.x.abs_diff(other.x) + self.y.abs_diff(other.y)) as usize
	}

	/// Orthogonally adjacent points within `dimension`.
	pub(crate) fn neighbours(self, dimension: Dimension) -> impl Iterator<Item = Point> {
		Direction::ALL.into_iter()
			.map(move |dir| self + dir.vector())
			.filter(move |p| dimension.contains(*p))
	}

	/// All points whose coordinates each differ from `self` by at most `n`
	/// (including `self`), row by row.
	pub(crate) fn square(self, n: i32) -> impl Iterator<Item = Point> {
		itertools::iproduct!(-n..=n, -n..=n)
			.map(move |(dy, dx)| Point { x: self.x + dx, y: self.y + dy })
	}
}

impl Add for Point {
	type Output = Point;
	fn add(self, other: Point) -> Point {
		Point { x: self.x + other.x, y: self.y + other.y }
	}
}

impl Sub for Point {
	type Output = Point;
	fn sub(self, other: Point) -> Point {
		Point { x: self.x - other.x, y: self.y - other.y }
	}
}

impl std::fmt::Display for Point {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{},{}", self.x, self.y)
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Direction { North, East, South, West }

impl Direction {
	pub(crate) const ALL: [Direction; 4] =
		[Direction::North, Direction::East, Direction::South, Direction::West];

	pub(crate) fn vector(self) -> Point {
		match self {
			Direction::North => Point::new(0, -1),
			Direction::East => Point::new(1, 0),
			Direction::South => Point::new(0, 1),
			Direction::West => Point::new(-1, 0),
		}
	}

	/// 1 if equal, 0 if perpendicular, -1 if opposite.
	pub(crate) fn dot(self, other: Direction) -> i32 {
		let [v, w] = [self.vector(), other.vector()];
		v.x * w.x + v.y * w.y
	}

	pub(crate) fn opposite(self) -> Direction {
		match self {
			Direction::North => Direction::South,
			Direction::East => Direction::West,
			Direction::South => Direction::North,
			Direction::West => Direction::East,
		}
	}

	pub(crate) fn to_char(self) -> char {
		match self {
			Direction::North => '^',
			Direction::East => '>',
			Direction::South => 'v',
			Direction::West => '<',
		}
	}

	pub(crate) fn from_vector(vector: Point) -> Option<Direction> {
		Direction::ALL.into_iter().find(|dir| dir.vector() == vector)
	}
}


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Dimension {
	pub(crate) width: i32,
	pub(crate) height: i32,
}

impl Dimension {
	pub(crate) fn contains(self, point: Point) -> bool {
		(0..self.width).contains(&point.x) && (0..self.height).contains(&point.y)
	}
}


/// Grid of walls with a single start & end, as used by several puzzles.
pub(crate) struct Maze {
	pub(crate) dimension: Dimension,
	pub(crate) start: Point,
	pub(crate) end: Point,
	pub(crate) walls: HashSet<Point>,
}

impl Maze {
	pub(crate) fn is_open(&self, point: Point) -> bool {
		self.dimension.contains(point) && !self.walls.contains(&point)
	}
}

#[cfg(LOGGING)]
impl Maze {
	pub(crate) fn render(&self, path: &HashSet<Point>) -> String {
		use itertools::Itertools as _;
		(0..self.dimension.height)
			.map(|y| (0..self.dimension.width)
				.map(|x| {
					let p = Point::new(x, y);
					if self.walls.contains(&p) { '#' }
					else if path.contains(&p) { 'O' }
					else { '.' }
				})
				.collect::<String>())
			.join("\n")
	}
}


pub(crate) mod parsing {
	use std::{collections::HashSet, num::ParseIntError, str::FromStr};
	use super::{Dimension, Maze, Point};

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum PointError {
		Format,
		X(ParseIntError),
		Y(ParseIntError),
	}

	impl FromStr for Point {
		type Err = PointError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			let (x, y) = s.split_once(',').ok_or(PointError::Format)?;
			Ok(Point {
				x: x.trim().parse().map_err(PointError::X)?,
				y: y.trim().parse().map_err(PointError::Y)?,
			})
		}
	}

	#[allow(dead_code)]
	#[derive(Debug)]
	pub(crate) enum MazeError {
		Empty,
		LineLen { line: usize, len: usize, found: usize },
		InvalidByte { line: usize, column: usize, found: u8 },
		DuplicateStart { line: usize, column: usize },
		DuplicateEnd { line: usize, column: usize },
		NoStart,
		NoEnd,
	}

	impl FromStr for Maze {
		type Err = MazeError;
		fn from_str(s: &str) -> Result<Self, Self::Err> {
			use MazeError as E;

			let mut width = None;
			let mut height = 0;
			let mut start = None;
			let mut end = None;
			let mut walls = HashSet::new();

			for (l, line) in s.lines().enumerate() {
				let len = *width.get_or_insert(line.len());
				if line.len() != len { return Err(E::LineLen { line: l + 1, len, found: line.len() }) }

				for (c, b) in line.bytes().enumerate() {
					let point = Point::new(c as i32, l as i32);

					macro_rules! set_start_or_end { ( $which:ident, $which_err:ident ) => {
						if $which.replace(point).is_some() {
							return Err(E::$which_err { line: l + 1, column: c + 1 })
						}
					} }

					match b {
						b'#' => { walls.insert(point); }
						b'.' => (),
						b'S' => set_start_or_end!(start, DuplicateStart),
						b'E' => set_start_or_end!(end, DuplicateEnd),
						found => return Err(E::InvalidByte { line: l + 1, column: c + 1, found }),
					}
				}

				height += 1;
			}

			let width = width.ok_or(E::Empty)?;
			Ok(Maze {
				dimension: Dimension { width: width as i32, height },
				start: start.ok_or(E::NoStart)?,
				end: end.ok_or(E::NoEnd)?,
				walls,
			})
		}
	}
}


#[test]
fn tests() {
	let p = Point::new(3, 4);
	assert_eq!(p + Direction::North.vector(), Point::new(3, 3));
	assert_eq!(p - Point::new(1, 1), Point::new(2, 3));
	assert_eq!(p.manhattan_distance(Point::new(0, 0)), 7);
	assert_eq!(p.to_string(), "3,4");
	assert_eq!("3,4".parse::<Point>().unwrap(), p);
	assert!("3;4".parse::<Point>().is_err());

	let dimension = Dimension { width: 4, height: 4 };
	assert_eq!(Point::new(0, 0).neighbours(dimension).collect::<Vec<_>>(),
		[Point::new(1, 0), Point::new(0, 1)]);
	// Outside, but with (3,3) inside
	assert_eq!(p.neighbours(dimension).collect::<Vec<_>>(), [Point::new(3, 3)]);
	assert_eq!(Point::new(5, 5).neighbours(dimension).count(), 0);
	assert_eq!(Point::new(0, 0).square(2).count(), 25);

	for dir in Direction::ALL {
		assert_eq!(dir.dot(dir), 1);
		assert_eq!(dir.dot(dir.opposite()), -1);
		assert_eq!(Direction::from_vector(dir.vector()), Some(dir));
	}
	assert_eq!(Direction::North.dot(Direction::East), 0);
	assert_eq!(Direction::from_vector(Point::new(1, 1)), None);
	assert_eq!(Direction::ALL.map(Direction::to_char), ['^', '>', 'v', '<']);

	let maze = indoc::indoc! { "
		#####
		#S.E#
		#####
	" }.parse::<Maze>().unwrap();
	assert_eq!(maze.dimension, Dimension { width: 5, height: 3 });
	assert_eq!((maze.start, maze.end), (Point::new(1, 1), Point::new(3, 1)));
	assert_eq!(maze.walls.len(), 12);
	assert!(maze.is_open(Point::new(2, 1)));
	assert!(!maze.is_open(Point::new(2, 0)));
	assert!(!maze.is_open(Point::new(5, 1)));

	assert!(matches!("#S#\n#E".parse::<Maze>(),
		Err(parsing::MazeError::LineLen { line: 2, len: 3, found: 2 })));
	assert!(matches!("SxE".parse::<Maze>(),
		Err(parsing::MazeError::InvalidByte { line: 1, column: 2, found: b'x' })));
	assert!(matches!("SSE".parse::<Maze>(),
		Err(parsing::MazeError::DuplicateStart { line: 1, column: 2 })));
	assert!(matches!("S..".parse::<Maze>(), Err(parsing::MazeError::NoEnd)));
	assert!(matches!("".parse::<Maze>(), Err(parsing::MazeError::Empty)));
}

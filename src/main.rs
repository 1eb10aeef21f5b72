// Copyright (c) 2024 Bastiaan Marinus van de Weerd

use std::{path::PathBuf, process::ExitCode};

mod util;
mod geom;
mod dijkstra;
util::mod_days![16, 18, 20, 21];


/// Directory containing `dayNN.txt` inputs; `$ADVENT24_INPUTS` or `inputs/`.
fn inputs_dir() -> PathBuf {
	std::env::var_os("ADVENT24_INPUTS")
		.map(PathBuf::from)
		.unwrap_or_else(|| PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/inputs")))
}

fn run(day: u8) -> Result<(String, String), String> {
	let path = inputs_dir().join(format!("day{day:02}.txt"));
	let input = std::fs::read_to_string(&path)
		.map_err(|e| format!("cannot read {}: {e}", path.display()))?;
	std::panic::catch_unwind(|| run_day(day, &input))
		.map_err(|_| "panicked".to_owned())?
		.ok_or_else(|| "no such puzzle".to_owned())
}

fn main() -> ExitCode {
	use either::Either;

	let args = std::env::args().skip(1).collect::<Vec<_>>();
	let days = if args.is_empty() {
		Either::Left(DAYS.iter().map(|&day| Ok::<_, &str>(day)))
	} else {
		Either::Right(args.iter().map(|arg| arg.parse::<u8>().map_err(|_| arg.as_str())))
	};

	let mut failed = false;
	for day in days {
		match day.map(|day| (day, run(day))) {
			Ok((day, Ok((part1, part2)))) =>
				println!("Day {day:02}; part 1: {part1}, part 2: {part2}"),
			Ok((day, Err(e))) => {
				eprintln!("Day {day:02}; {e}");
				failed = true;
			}
			Err(arg) => {
				eprintln!("Invalid day {arg:?}");
				failed = true;
			}
		}
	}

	if failed { ExitCode::FAILURE } else { ExitCode::SUCCESS }
}

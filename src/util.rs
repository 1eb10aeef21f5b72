// Copyright (c) 2024 Bastiaan Marinus van de Weerd


/// Declares the `dayNN` modules and generates `DAYS` plus a `run_day`
/// dispatcher returning both answers as strings.
macro_rules! mod_days { ( $( $day:literal ),+ $(,)? ) => { paste::paste! {
	$( mod [<day $day>]; )+

	const DAYS: &[u8] = &[$( $day ),+];

	fn run_day(day: u8, input: &str) -> Option<(String, String)> {
		match day {
			$( $day => Some((
				[<day $day>]::part1(input).to_string(),
				[<day $day>]::part2(input).to_string(),
			)), )+
			_ => None,
		}
	}
} } }

pub(crate) use mod_days;

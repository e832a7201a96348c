//! Readers for the ASCII `.map` and `.scen` benchmark formats.
//!
//! A `.map` file starts with a four line header followed by the rows of the map:
//! ```no_code
//! type octile
//! height 3
//! width 4
//! map
//! ....
//! .@@.
//! ..T.
//! ```
//! Only `'.'` and `'G'` are walkable, every other character is treated as blocked.
//!
//! A `.scen` file holds an optional `version` line followed by one scenario per line, each made
//! of nine whitespace separated fields: bucket, map name, map width, map height, start x, start y,
//! goal x, goal y and the length of the optimal Path.

use crate::{Grid, GridError, Point};
use std::str::FromStr;

/// Errors raised while reading a `.map` or `.scen` file
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseError {
	/// The input ended before the header line with the given keyword
	MissingHeader(&'static str),
	/// A header line does not have the form `<keyword> <value>`
	BadHeader {
		/// 1-based line number
		line: usize,
		/// the offending line
		content: String,
	},
	/// The declared size does not match the rows that follow
	BadDimensions {
		/// `(width, height)` from the header
		declared: (usize, usize),
		/// number of rows found
		rows: usize,
	},
	/// A map row has the wrong length
	BadRow {
		/// 1-based line number
		line: usize,
		/// expected length
		expected: usize,
		/// actual length
		found: usize,
	},
	/// A scenario line does not have nine valid fields
	BadScenario {
		/// 1-based line number
		line: usize,
		/// the offending line
		content: String,
	},
}

impl std::fmt::Display for ParseError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			ParseError::MissingHeader(keyword) => write!(f, "missing `{}` header", keyword),
			ParseError::BadHeader { line, content } => {
				write!(f, "line {}: bad header `{}`", line, content)
			}
			ParseError::BadDimensions { declared, rows } => write!(
				f,
				"map declares {}x{} but has {} rows",
				declared.0, declared.1, rows
			),
			ParseError::BadRow {
				line,
				expected,
				found,
			} => write!(
				f,
				"line {}: row has {} cells, expected {}",
				line, found, expected
			),
			ParseError::BadScenario { line, content } => {
				write!(f, "line {}: bad scenario `{}`", line, content)
			}
		}
	}
}

impl std::error::Error for ParseError {}

/// The contents of a `.map` file
///
/// ## Examples
/// ```
/// use grid_pathfinder::scenario::MapFile;
///
/// let map = MapFile::parse("type octile\nheight 2\nwidth 3\nmap\n.G@\nT..\n").unwrap();
/// assert_eq!(map.kind, "octile");
/// assert_eq!((map.width, map.height), (3, 2));
///
/// let grid = map.to_grid().unwrap();
/// assert!(grid.is_walkable_at(1, 0));
/// assert!(!grid.is_walkable_at(2, 0));
/// assert!(!grid.is_walkable_at(0, 1));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MapFile {
	/// the value of the `type` header, usually `octile`
	pub kind: String,
	/// number of columns
	pub width: usize,
	/// number of rows
	pub height: usize,
	/// the raw characters, one `Vec` per row
	pub rows: Vec<Vec<char>>,
}

impl MapFile {
	/// Parses the text of a `.map` file.
	pub fn parse(input: &str) -> Result<MapFile, ParseError> {
		let mut lines = input
			.lines()
			.map(|l| l.trim_end_matches('\r'))
			.enumerate()
			.map(|(i, l)| (i + 1, l));

		let (_, kind) = header(&mut lines, "type")?;
		let height = dimension(&mut lines, "height")?;
		let width = dimension(&mut lines, "width")?;
		match lines.next() {
			Some((_, l)) if l.trim() == "map" => {}
			Some((line, l)) => {
				return Err(ParseError::BadHeader {
					line,
					content: l.to_owned(),
				})
			}
			None => return Err(ParseError::MissingHeader("map")),
		}

		let mut rows = Vec::with_capacity(height);
		for (line, l) in lines {
			if l.is_empty() {
				continue;
			}
			let row: Vec<char> = l.chars().collect();
			if row.len() != width {
				return Err(ParseError::BadRow {
					line,
					expected: width,
					found: row.len(),
				});
			}
			rows.push(row);
		}
		if rows.len() != height {
			return Err(ParseError::BadDimensions {
				declared: (width, height),
				rows: rows.len(),
			});
		}

		Ok(MapFile {
			kind,
			width,
			height,
			rows,
		})
	}

	/// Builds a [`Grid`] where `'.'` and `'G'` are walkable.
	pub fn to_grid(&self) -> Result<Grid, GridError> {
		Grid::from_matrix(self.width, self.height, &self.rows)
	}
}

impl FromStr for MapFile {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		MapFile::parse(s)
	}
}

fn header<'a>(
	lines: &mut impl Iterator<Item = (usize, &'a str)>,
	keyword: &'static str,
) -> Result<(usize, String), ParseError> {
	let (line, l) = lines.next().ok_or(ParseError::MissingHeader(keyword))?;
	let mut parts = l.split_whitespace();
	match (parts.next(), parts.next(), parts.next()) {
		(Some(key), Some(value), None) if key == keyword => Ok((line, value.to_owned())),
		_ => Err(ParseError::BadHeader {
			line,
			content: l.to_owned(),
		}),
	}
}

fn dimension<'a>(
	lines: &mut impl Iterator<Item = (usize, &'a str)>,
	keyword: &'static str,
) -> Result<usize, ParseError> {
	let (line, value) = header(lines, keyword)?;
	match value.parse() {
		Ok(n) if n > 0 => Ok(n),
		_ => Err(ParseError::BadHeader {
			line,
			content: format!("{} {}", keyword, value),
		}),
	}
}

/// A single line of a `.scen` file
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario {
	/// groups scenarios of similar length
	pub bucket: usize,
	/// the name of the `.map` file
	pub map: String,
	/// width of the map
	pub width: usize,
	/// height of the map
	pub height: usize,
	/// where the Path starts
	pub start: Point,
	/// where the Path ends
	pub goal: Point,
	/// the length of the shortest Path with octile movement
	pub optimal_length: f64,
}

impl Scenario {
	fn parse_line(line: usize, content: &str) -> Result<Scenario, ParseError> {
		let bad = || ParseError::BadScenario {
			line,
			content: content.to_owned(),
		};
		let fields: Vec<&str> = content.split_whitespace().collect();
		if fields.len() != 9 {
			return Err(bad());
		}
		let int = |i: usize| fields[i].parse::<usize>().map_err(|_| bad());

		Ok(Scenario {
			bucket: int(0)?,
			map: fields[1].to_owned(),
			width: int(2)?,
			height: int(3)?,
			start: (int(4)?, int(5)?),
			goal: (int(6)?, int(7)?),
			optimal_length: fields[8].parse().map_err(|_| bad())?,
		})
	}
}

/// The contents of a `.scen` file
///
/// ## Examples
/// ```
/// use grid_pathfinder::scenario::ScenarioFile;
///
/// let text = "version 1\n0\tarena.map\t49\t49\t1\t11\t1\t12\t1\n1\tarena.map\t49\t49\t2\t3\t5\t3\t3\n";
/// let file = ScenarioFile::parse(text).unwrap();
///
/// assert_eq!(file.version.as_deref(), Some("1"));
/// assert_eq!(file.scenarios.len(), 2);
/// assert_eq!(file.scenarios[1].start, (2, 3));
/// assert_eq!(file.scenarios[1].optimal_length, 3.0);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct ScenarioFile {
	/// the value of the `version` line, if present
	pub version: Option<String>,
	/// all scenarios, in file order
	pub scenarios: Vec<Scenario>,
}

impl ScenarioFile {
	/// Parses the text of a `.scen` file. Empty lines are skipped.
	pub fn parse(input: &str) -> Result<ScenarioFile, ParseError> {
		let mut file = ScenarioFile::default();
		for (i, l) in input.lines().enumerate() {
			let l = l.trim();
			if l.is_empty() {
				continue;
			}
			if i == 0 {
				if let Some(version) = l.strip_prefix("version") {
					file.version = Some(version.trim().to_owned());
					continue;
				}
			}
			file.scenarios.push(Scenario::parse_line(i + 1, l)?);
		}
		Ok(file)
	}

	/// the names of all maps referenced by the scenarios, without duplicates
	pub fn maps(&self) -> Vec<&str> {
		let mut maps: Vec<&str> = Vec::new();
		for scenario in &self.scenarios {
			if !maps.contains(&scenario.map.as_str()) {
				maps.push(&scenario.map);
			}
		}
		maps
	}
}

impl FromStr for ScenarioFile {
	type Err = ParseError;
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		ScenarioFile::parse(s)
	}
}

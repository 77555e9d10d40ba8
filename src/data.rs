//! Data loading functionality for Geodemax.
//!
//! Blueprints are read either from puzzle-style text, one blueprint per
//! record, or from a CSV table in the standard layout. Any malformed record
//! fails the whole load: no partial blueprint list is ever returned.

use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use regex::Regex;
use tracing::info;

use crate::error::BlueprintError;
use crate::models::{Blueprint, BlueprintRow, Cost, ResourceKind, ResourceMap};

/// How a blueprint file is laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum InputFormat {
    /// Pick by file extension: `.csv` is CSV, anything else is text.
    #[default]
    Auto,
    /// `Blueprint <id>: Each ore robot costs ...` records.
    Text,
    /// Header row plus one standard-layout blueprint per row.
    Csv,
}

impl InputFormat {
    /// Replaces [`InputFormat::Auto`] with the concrete format for `path`.
    pub fn resolve(self, path: &Path) -> InputFormat {
        match self {
            InputFormat::Auto => {
                let is_csv = path
                    .extension()
                    .and_then(|ext| ext.to_str())
                    .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
                if is_csv {
                    InputFormat::Csv
                } else {
                    InputFormat::Text
                }
            }
            concrete => concrete,
        }
    }
}

/// Structural parser for blueprint text.
///
/// A record is a `Blueprint <id>:` header followed by sentences of the form
/// `Each <kind> robot costs <amount> <resource> [and <amount> <resource>]...`
/// (or `costs nothing`). Sentence order is free, but every robot kind must be
/// priced exactly once.
pub struct BlueprintParser {
    header: Regex,
    sentence: Regex,
    entry: Regex,
    and: Regex,
}

impl BlueprintParser {
    pub fn new() -> Result<Self, BlueprintError> {
        Ok(Self {
            header: Regex::new(r"^\s*Blueprint\s+(\S+?)\s*:(.*)$")?,
            sentence: Regex::new(r"^Each\s+(\S+)\s+robot\s+costs\s+(.+)$")?,
            entry: Regex::new(r"^(\S+)\s+(\S+)$")?,
            and: Regex::new(r"\s+and\s+")?,
        })
    }

    /// Parses every blueprint in `text`.
    ///
    /// Blank lines are skipped. A line that does not start a new
    /// `Blueprint <id>:` record continues the previous one, so blueprints
    /// wrapped over several lines are accepted.
    pub fn parse_all(&self, text: &str) -> Result<Vec<Blueprint>, BlueprintError> {
        let mut records: Vec<(usize, String)> = Vec::new();
        for (index, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() {
                continue;
            }
            let starts_record = records.is_empty() || self.header.is_match(line);
            if starts_record {
                records.push((index + 1, line.to_string()));
            } else if let Some((_, record)) = records.last_mut() {
                record.push(' ');
                record.push_str(line);
            }
        }

        records
            .iter()
            .map(|(line, record)| self.parse_record(*line, record))
            .collect()
    }

    /// Parses a single blueprint record that starts on line `line`.
    pub fn parse_record(&self, line: usize, text: &str) -> Result<Blueprint, BlueprintError> {
        let caps = self
            .header
            .captures(text)
            .ok_or(BlueprintError::MissingHeader { line })?;
        let id = caps[1]
            .parse::<u32>()
            .map_err(|_| BlueprintError::InvalidAmount {
                line,
                value: caps[1].to_string(),
            })?;

        let mut priced: ResourceMap<Option<Cost>> = ResourceMap::default();
        for sentence in caps[2].split('.').map(str::trim).filter(|s| !s.is_empty()) {
            let (producer, cost) = self.parse_sentence(line, sentence)?;
            if priced[producer].is_some() {
                return Err(BlueprintError::DuplicateProducer { line, producer });
            }
            priced[producer] = Some(cost);
        }

        let mut costs: ResourceMap<Cost> = ResourceMap::default();
        for (producer, cost) in priced.iter() {
            costs[producer] = cost.ok_or(BlueprintError::MissingProducer { line, producer })?;
        }
        Blueprint::new(id, costs)
    }

    fn parse_sentence(
        &self,
        line: usize,
        sentence: &str,
    ) -> Result<(ResourceKind, Cost), BlueprintError> {
        let malformed = || BlueprintError::MalformedSentence {
            line,
            sentence: sentence.to_string(),
        };

        let caps = self.sentence.captures(sentence).ok_or_else(malformed)?;
        let producer =
            ResourceKind::from_name(&caps[1]).ok_or_else(|| BlueprintError::UnknownProducer {
                line,
                name: caps[1].to_string(),
            })?;

        let entries = caps[2].trim();
        let mut cost = Cost::new();
        if entries.eq_ignore_ascii_case("nothing") {
            return Ok((producer, cost));
        }

        let mut seen: ResourceMap<bool> = ResourceMap::default();
        for entry in self.and.split(entries) {
            let parts = self.entry.captures(entry.trim()).ok_or_else(malformed)?;
            let resource =
                ResourceKind::from_name(&parts[2]).ok_or_else(|| BlueprintError::UnknownResource {
                    line,
                    name: parts[2].to_string(),
                })?;
            let amount = parts[1]
                .parse::<i64>()
                .map_err(|_| BlueprintError::InvalidAmount {
                    line,
                    value: parts[1].to_string(),
                })?;
            let amount = u64::try_from(amount).map_err(|_| BlueprintError::NegativeCost {
                line,
                resource,
                amount,
            })?;
            if seen[resource] {
                return Err(BlueprintError::DuplicateCost {
                    line,
                    producer,
                    resource,
                });
            }
            seen[resource] = true;
            cost = cost.with(resource, amount);
        }
        Ok((producer, cost))
    }
}

/// Parses every blueprint in a block of text.
///
/// # Example
///
/// ```
/// use geodemax::data::parse_blueprints;
///
/// let text = "Blueprint 1: Each ore robot costs 4 ore. Each clay robot costs 2 ore. \
///             Each obsidian robot costs 3 ore and 14 clay. \
///             Each geode robot costs 2 ore and 7 obsidian.";
/// let blueprints = parse_blueprints(text).unwrap();
/// assert_eq!(blueprints.len(), 1);
/// assert_eq!(blueprints[0].id(), 1);
/// ```
pub fn parse_blueprints(text: &str) -> Result<Vec<Blueprint>, BlueprintError> {
    BlueprintParser::new()?.parse_all(text)
}

/// Parses a single one-line blueprint.
pub fn parse_blueprint(line: &str) -> Result<Blueprint, BlueprintError> {
    BlueprintParser::new()?.parse_record(1, line.trim())
}

/// Reads standard-layout blueprints from CSV.
///
/// # CSV Format
///
/// Expected columns: `id, ore_robot_ore, clay_robot_ore, obsidian_robot_ore,
/// obsidian_robot_clay, geode_robot_ore, geode_robot_obsidian`
pub fn read_blueprints_csv<R: Read>(reader: R) -> Result<Vec<Blueprint>, BlueprintError> {
    let mut rdr = ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut blueprints = Vec::new();
    for (index, result) in rdr.deserialize().enumerate() {
        let row: BlueprintRow = result?;
        // Line 1 is the header.
        blueprints.push(blueprint_from_row(index + 2, &row)?);
    }
    Ok(blueprints)
}

fn blueprint_from_row(line: usize, row: &BlueprintRow) -> Result<Blueprint, BlueprintError> {
    use ResourceKind::*;

    let amount = |resource: ResourceKind, value: i64| {
        u64::try_from(value).map_err(|_| BlueprintError::NegativeCost {
            line,
            resource,
            amount: value,
        })
    };

    Ok(Blueprint::standard(
        row.id,
        amount(Ore, row.ore_robot_ore)?,
        amount(Ore, row.clay_robot_ore)?,
        amount(Ore, row.obsidian_robot_ore)?,
        amount(Clay, row.obsidian_robot_clay)?,
        amount(Ore, row.geode_robot_ore)?,
        amount(Obsidian, row.geode_robot_obsidian)?,
    ))
}

/// Loads all blueprints from a file.
///
/// # Arguments
///
/// * `path` - Path to the blueprint file
/// * `format` - Layout of the file; [`InputFormat::Auto`] decides by extension
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use geodemax::data::{load_blueprints, InputFormat};
///
/// let blueprints = load_blueprints(Path::new("data/example.txt"), InputFormat::Auto).unwrap();
/// println!("Loaded {} blueprints", blueprints.len());
/// ```
pub fn load_blueprints(path: &Path, format: InputFormat) -> Result<Vec<Blueprint>, BlueprintError> {
    let blueprints = match format.resolve(path) {
        InputFormat::Csv => read_blueprints_csv(File::open(path)?)?,
        _ => parse_blueprints(&fs::read_to_string(path)?)?,
    };
    info!(count = blueprints.len(), path = %path.display(), "loaded blueprints");
    Ok(blueprints)
}

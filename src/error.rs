//! Error types for Geodemax.
//!
//! Every failure the crate can report comes from reading blueprints: once a
//! [`Blueprint`](crate::models::Blueprint) exists, searching it cannot fail.

use crate::models::ResourceKind;

/// Errors raised while reading or validating blueprints.
#[derive(Debug, thiserror::Error)]
pub enum BlueprintError {
    /// A line does not start with `Blueprint <id>:`.
    #[error("line {line}: expected a `Blueprint <id>:` header")]
    MissingHeader { line: usize },

    /// A sentence is not of the form `Each <kind> robot costs ...`.
    #[error("line {line}: cannot read cost sentence `{sentence}`")]
    MalformedSentence { line: usize, sentence: String },

    /// A sentence names a robot kind that does not exist.
    #[error("line {line}: unknown robot kind `{name}`")]
    UnknownProducer { line: usize, name: String },

    /// A cost names a resource that does not exist.
    #[error("line {line}: unknown resource `{name}`")]
    UnknownResource { line: usize, name: String },

    /// A blueprint id or cost amount is not an integer.
    #[error("line {line}: `{value}` is not a valid amount")]
    InvalidAmount { line: usize, value: String },

    /// A cost amount is below zero.
    #[error("line {line}: negative cost of {amount} {resource}")]
    NegativeCost {
        line: usize,
        resource: ResourceKind,
        amount: i64,
    },

    /// The same robot kind is priced twice in one blueprint.
    #[error("line {line}: the {producer} robot is priced more than once")]
    DuplicateProducer { line: usize, producer: ResourceKind },

    /// The same resource appears twice in one robot's cost.
    #[error("line {line}: {resource} appears twice in the {producer} robot cost")]
    DuplicateCost {
        line: usize,
        producer: ResourceKind,
        resource: ResourceKind,
    },

    /// A robot kind has no cost in the blueprint.
    #[error("line {line}: no cost given for the {producer} robot")]
    MissingProducer { line: usize, producer: ResourceKind },

    /// A robot's cost would make the resource dependencies cyclic.
    #[error("blueprint {blueprint}: the {producer} robot cannot cost {resource}")]
    CyclicCost {
        blueprint: u32,
        producer: ResourceKind,
        resource: ResourceKind,
    },

    /// A CSV blueprint table could not be read.
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),

    /// A blueprint file could not be read.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// A parser pattern failed to compile.
    #[error("pattern: {0}")]
    Regex(#[from] regex::Error),
}

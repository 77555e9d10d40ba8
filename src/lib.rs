//! # Geodemax
//!
//! A command-line tool and library for finding the largest number of geodes a
//! robot factory blueprint can crack within a time budget.
//!
//! A factory starts with one ore-collecting robot. Every robot collects one
//! unit of its resource per minute, and the factory can build one new robot
//! per minute if it can pay the robot's cost. The question for each blueprint
//! is which purchase order yields the most geodes by the end of the budget.
//!
//! ## Modules
//!
//! - [`models`] - Resource kinds, costs, blueprints, and the time type
//! - [`error`] - Blueprint reading and validation errors
//! - [`data`] - Text and CSV blueprint loading
//! - [`state`] - Production states, purchase transitions, and the upper bound
//! - [`optimizer`] - Branch-and-bound search driver
//! - [`batch`] - Evaluating many blueprints and combining the results
//! - [`display`] - Output formatting and display utilities
//!
//! ## Example Usage
//!
//! ```no_run
//! use geodemax::{
//!     batch::{evaluate_all, quality_level_sum},
//!     data::{load_blueprints, InputFormat},
//!     optimizer::SearchConfig,
//! };
//! use std::path::Path;
//!
//! let blueprints = load_blueprints(Path::new("data/example.txt"), InputFormat::Auto).unwrap();
//! let results = evaluate_all(&blueprints, &SearchConfig::new(24), true);
//! println!("Quality level sum: {}", quality_level_sum(&results));
//! ```
//!
//! ## Search
//!
//! The search jumps from one purchase to the next instead of simulating every
//! minute, orders its frontier by an optimistic upper bound, and drops any
//! state whose bound cannot beat the best total found so far. Robots of a
//! resource are never bought beyond the most of that resource any single
//! robot costs.

pub mod batch;
pub mod data;
pub mod display;
pub mod error;
pub mod models;
pub mod optimizer;
pub mod state;
pub mod wasm;

//! Pickline Core Library
//!
//! This crate provides the engine behind pickline, a terminal utility that
//! lists the rows of a flat text file and resolves a single row from a free
//! form answer: either the row's number or the exact value of any one of its
//! fields.
//!
//! # Key Features
//!
//! - **Pick Files**: Parse header lines (`#...`) and numbered, delimiter separated rows
//! - **Answer Matching**: Resolve an answer to exactly one row, rejecting ambiguity
//! - **Interactive Loop**: Prompt, fall back to a default answer, retry until resolved
//! - **Post-processing**: Hand the chosen row to awk or render it with a template
//! - **Error Handling**: Error types for every failure that can end a session
//!
//! # Examples
//!
//! Resolving an answer without any interaction:
//!
//! ```
//! use pickline_core::dataset::Dataset;
//!
//! let dataset = Dataset::from_lines(["#Device\tMount", "sda1\t/", "sdb1\t/home"], "\t")?;
//! assert_eq!(dataset.find("/home").unwrap().ordinal(), 2);
//! assert_eq!(dataset.find("1").unwrap().raw_text(), "sda1\t/");
//! # Ok::<(), pickline_core::error::Error>(())
//! ```

pub mod config;
pub mod dataset;
pub mod error;
pub mod input;
pub mod picker;
pub mod postprocess;

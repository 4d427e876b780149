//! Text flow utilities shared by the drawing surfaces and the resume renderer.
//!
//! - [`split_to_width`](crate::layout::split_to_width) - word-aware wrapping of a string into lines no wider than a limit
//! - [`pack_rows`](crate::layout::pack_rows) - greedy left-to-right packing of fixed-width items into rows
//! - [`Margins`](crate::layout::Margins) - page margins
//!
//! # Example
//!
//! ```
//! use resume_pdf::layout::split_to_width;
//! use resume_pdf::Pt;
//!
//! // measure every character as 1pt wide
//! let lines = split_to_width("the quick brown fox", Pt(10.0), |s| Pt(s.chars().count() as f32));
//! assert_eq!(lines, vec!["the quick", "brown fox"]);
//! ```

mod margins;
mod text;

pub use margins::*;
pub use text::*;

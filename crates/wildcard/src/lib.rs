//! A lightweight wildcard pattern library used for adaptive pattern ranking.
//!
//! This crate provides wildcard patterns with `*` (zero or more characters) and `?`
//! (exactly one UTF-8 character) wildcards, together with the structural information
//! needed to rank them: literal segments, a coarse complexity score and a heuristic
//! subsumption test.
//!
//! # Features
//!
//! - **Simple API**: Infallible pattern creation with `Pattern::new()`
//! - **UTF-8 aware**: The `?` wildcard matches exactly one UTF-8 character
//! - **Greedy matching**: A two-cursor matcher that never backtracks
//! - **Literal segments**: Maximal wildcard-free runs usable as a cheap pre-filter
//! - **Complexity score**: An ordered rule list classifying the pattern shape
//!
//! # Pattern Syntax
//!
//! - `*` - Matches zero or more characters
//! - `?` - Matches exactly one UTF-8 character
//! - Any other character matches itself, there is no escaping
//!
//! # Examples
//!
//! ```
//! use wildcard::{Complexity, Pattern};
//!
//! let pattern = Pattern::new("abc*def?ghi");
//! assert_eq!(pattern.literals(), ["abc", "def", "ghi"]);
//! assert_eq!(pattern.complexity(), Complexity::Question);
//!
//! let pattern = Pattern::new("test*");
//! assert!(pattern.matches("testxyz"));
//! assert!(!pattern.matches("tast"));
//! ```
//!
//! # Greedy Matching
//!
//! A `*` is committed to the first occurrence of the literal run following it,
//! so some strings accepted by a backtracking matcher are rejected here:
//!
//! ```
//! use wildcard::Pattern;
//!
//! let pattern = Pattern::new("*ab");
//! assert!(pattern.matches("xxab"));
//! assert!(!pattern.matches("abab"));
//! ```

mod complexity;
mod pattern;
mod utf8;

pub use complexity::*;
pub use pattern::*;

//! Parsers for the `.stt` test DSL.
//!
//! The grammar is section-based: `#`-headed marker lines carve the file into
//! regions, fenced blocks carry SQL bodies, and pipe tables carry procedure
//! arguments. Parsing is strict: a malformed file aborts with a specific
//! error from the taxonomy in [`crate::errors`] and never yields a partial
//! model.
//!
//! Layering, leaves first: [`table`] and [`section`] know nothing of tests;
//! [`hooks`], [`generic`] and [`procedure`] parse single sections or blocks;
//! [`case`] dispatches a whole file to its dialect.

pub mod case;
pub mod generic;
pub mod hooks;
pub mod procedure;
pub mod section;
pub mod table;

pub use case::parse_test_case;

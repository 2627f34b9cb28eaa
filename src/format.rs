//! Representation Format Description
//!
//! This module documents the textual representation format produced by this
//! library.
//!
//! # Overview
//!
//! The format writes an in-memory value graph as deterministic, human-readable
//! text of the kind used in experiment configuration scripts. Its defining
//! feature is identity-based sharing: when the same matrix or object occurs in
//! several places of a graph, its full text appears exactly once and every
//! later occurrence is a short numbered citation. Equality of contents never
//! triggers sharing; only identity does.
//!
//! ## Design Philosophy
//!
//! - **Determinism**: The same graph serialized through the same session always
//!   yields the same text
//! - **Sharing**: One expansion per identity keeps large shared components from
//!   being written repeatedly
//! - **Readability**: Container bodies indent uniformly, four spaces per level
//!   by default
//!
//! # Atoms
//!
//! | Type | Syntax | Example |
//! |------|--------|---------|
//! | Integer | Decimal digits, optional `-` | `42`, `-7` |
//! | Float | Shortest form that round-trips | `0.2`, `-3.5`, whole floats as `1` |
//! | Boolean | `true` or `false` | `true` |
//! | String | Always double quoted | `"hello"` |
//! | Null | The reserved token | `*0;` |
//!
//! ## Strings
//!
//! Strings are always quoted. The only escape is the double quote itself:
//!
//! ```text
//! "say \"hi\""
//! ```
//!
//! Every other character, including newlines, is written verbatim. A string
//! containing a raw newline therefore counts as multiline for layout purposes.
//!
//! # Containers
//!
//! ## The layout rule
//!
//! Lists and maps share one body layout, parameterized by the indentation
//! level `L` of the elements (one deeper than the brackets) and the indent
//! width `w` (default 4):
//!
//! - **No elements**: the body is a single space: `[ ]`, `{ }`
//! - **One element, single line**: one space on each side: `[ 42 ]`
//! - **One element, multiline**: a newline plus `w * L` spaces on each side
//! - **Several elements**: joined by `,` + newline + `w * L` spaces, with a
//!   newline plus `w * L` spaces before the first and after the last element
//!
//! The closing bracket of a multiline body lands at the element indentation:
//!
//! ```text
//! [
//!     1,
//!     2
//!     ]
//! ```
//!
//! ## Lists
//!
//! Square brackets around the laid-out elements. Elements render one level
//! deeper than the list itself.
//!
//! ## Maps
//!
//! Curly braces around `key : value` entries, in insertion order. Keys and
//! values are full representations themselves and render at the level of the
//! map, not one deeper, so the body of a nested container lines up with the
//! entry lines around it:
//!
//! ```text
//! {
//!     "learning_rate" : 0.01,
//!     "layers" : [
//!     2,
//!     3
//!     ]
//!     }
//! ```
//!
//! ## Pairs
//!
//! A two-element tuple is the key-value shorthand `first:second`, with no
//! spaces around the colon:
//!
//! ```text
//! 0:"first"
//! ```
//!
//! # Matrices
//!
//! A two-dimensional matrix writes its shape then the row-major elements:
//!
//! ```text
//! 2 2 [1, 2, 3, 4]
//! ```
//!
//! Matrices are reference tracked, so a shared matrix is expanded once.
//!
//! # References
//!
//! Matrices and custom objects carry an identity. The first time a session
//! meets an identity it renders the **long form**, the expansion preceded by
//! a freshly assigned index:
//!
//! ```text
//! *1 -> 2 2 [1, 2, 3, 4];
//! ```
//!
//! Every later occurrence of the same identity is the **short form**:
//!
//! ```text
//! *1
//! ```
//!
//! Indices are assigned in order of first expansion, starting at 1; index 0
//! is reserved for the null token `*0;`. An object expanded while a larger
//! object's text is being built receives its index first, so inner objects
//! get smaller indices than the objects containing them.
//!
//! Objects may opt out of tracking entirely, in which case every occurrence
//! renders in full and no index is ever assigned.
//!
//! # Sessions
//!
//! Reference state lives in a session. Serializing several graphs through one
//! session lets later graphs cite objects expanded earlier, which is how a
//! family of configurations shares common components. A fresh session starts
//! counting from 1 again.
//!
//! # Worked Example
//!
//! Two experiment configurations sharing one dataset object, serialized
//! through the same session:
//!
//! ```text
//! Experiment(
//!     dataset = *1 -> Dataset( path = "train.amat" );,
//!     learner = *2 -> Learner( inputs = 4 );
//!     )
//! ```
//!
//! ```text
//! Experiment(
//!     dataset = *1,
//!     learner = *3 -> Learner( inputs = 8 );
//!     )
//! ```
//!
//! # Limitations
//!
//! - **One-way**: The format is written, never parsed back
//! - **Sharing scope**: Citations are only valid within the session that
//!   assigned them
//! - **Matrices**: Two-dimensional `f64` only

// This module contains only documentation; no implementation code

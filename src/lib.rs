//! # plrepr
//!
//! A textual serializer for in-memory value graphs with identity-based
//! reference sharing.
//!
//! ## What does it produce?
//!
//! The deterministic, human-readable object representations used in
//! experiment configuration scripts: nested lists, insertion-ordered maps,
//! numeric matrices, and custom objects, where every component that appears
//! in several places of a graph is written out once and cited by number
//! everywhere else:
//!
//! ```text
//! [
//!     *1 -> 2 2 [1, 2, 3, 4];,
//!     *1
//!     ]
//! ```
//!
//! Sharing follows identity, never equality of contents: two equal matrices
//! in different allocations serialize as two full expansions.
//!
//! ## Key Features
//!
//! - **Reference sharing**: The first occurrence of a tracked identity gets a
//!   long form `*1 -> expansion;`, later occurrences the citation `*1`
//! - **Explicit sessions**: All reference state lives in a [`Session`] you
//!   create and own; serializing a family of related graphs through one
//!   session shares their common components
//! - **Capability trait**: Any type implementing [`Repr`] renders itself and
//!   participates in reference tracking
//! - **Serde Compatible**: [`to_value`] converts any `Serialize` type into a
//!   [`Value`] graph
//! - **No Unsafe Code**: Written entirely in safe Rust with zero unsafe blocks
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! plrepr = "0.1"
//! serde = { version = "1.0", features = ["derive"] }
//! ```
//!
//! ### Sharing objects across a session
//!
//! ```rust
//! use std::sync::Arc;
//! use plrepr::{Repr, Result, Session, Value};
//!
//! #[derive(Debug)]
//! struct Normalizer {
//!     mean: f64,
//! }
//!
//! impl Repr for Normalizer {
//!     fn repr(&self, session: &mut Session, indent_level: usize) -> Result<String> {
//!         let mean = session.repr_at(&Value::from(self.mean), indent_level + 1)?;
//!         Ok(format!("Normalizer( mean = {} )", mean))
//!     }
//! }
//!
//! let shared = Arc::new(Normalizer { mean: 0.5 });
//! let mut session = Session::new();
//!
//! let first = session.repr(&Value::object(shared.clone()))?;
//! assert_eq!(first, "*1 -> Normalizer( mean = 0.5 );");
//!
//! let second = session.repr(&Value::object(shared))?;
//! assert_eq!(second, "*1");
//! # Ok::<(), plrepr::Error>(())
//! ```
//!
//! ### Dynamic Values with the repr! Macro
//!
//! ```rust
//! use plrepr::{repr, to_string};
//!
//! let config = repr!({
//!     "layers": [10, 5],
//!     "bias": true
//! });
//!
//! let text = to_string(&config).unwrap();
//! assert_eq!(
//!     text,
//!     "{\n    \"layers\" : [\n    10,\n    5\n    ],\n    \"bias\" : true\n    }"
//! );
//! ```
//!
//! ### Bridging from Serde Types
//!
//! ```rust
//! use plrepr::{to_string, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Layer {
//!     units: u32,
//!     activation: String,
//! }
//!
//! let layer = Layer { units: 64, activation: "tanh".to_string() };
//! let value = to_value(&layer).unwrap();
//! let text = to_string(&value).unwrap();
//! assert_eq!(text, "{\n    \"units\" : 64,\n    \"activation\" : \"tanh\"\n    }");
//! ```
//!
//! ## Determinism
//!
//! - Map entries serialize in insertion order
//! - Reference indices follow the order of first expansion, starting at 1
//! - The convenience functions use a fresh session per call, so their output
//!   depends only on the value passed in
//!
//! ## Format Description
//!
//! The full output grammar, the container layout rule, and the reference
//! forms are documented in the [`format`] module.
//!
//! ## Demos
//!
//! See the `demos/` directory:
//!
//! - **`shared_objects.rs`** - Experiment configurations sharing components
//! - **`serde_bridge.rs`** - Serializing ordinary Rust types
//!
//! Run any demo with: `cargo run --example <name>`

pub mod error;
pub mod format;
pub mod macros;
pub mod map;
pub mod matrix;
pub mod object;
pub mod options;
pub mod ser;
pub mod session;
pub mod value;

pub use error::{Error, Result};
pub use map::ReprMap;
pub use matrix::Matrix;
pub use object::Repr;
pub use options::ReprOptions;
pub use ser::{format_elements, ValueSerializer};
pub use session::{ObjectId, RefRecord, RefTable, Session};
pub use value::{Number, Value};

use serde::Serialize;

/// Serialize a [`Value`] graph to its textual representation.
///
/// A fresh [`Session`] is used for the call, so sharing collapses within
/// this value but nothing carries over between calls. Hold a [`Session`]
/// yourself to share references across several serializations.
///
/// # Examples
///
/// ```rust
/// use plrepr::{repr, to_string};
///
/// assert_eq!(to_string(&repr!([1, 2])).unwrap(), "[\n    1,\n    2\n    ]");
/// assert_eq!(to_string(&repr!(null)).unwrap(), "*0;");
/// ```
///
/// # Errors
///
/// Returns an error if a custom object fails to render.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(value: &Value) -> Result<String> {
    to_string_with_options(value, ReprOptions::default())
}

/// Serialize a [`Value`] graph to text with custom options.
///
/// # Examples
///
/// ```rust
/// use plrepr::{repr, to_string_with_options, ReprOptions};
///
/// let options = ReprOptions::new().with_indent(2);
/// let text = to_string_with_options(&repr!([1, 2]), options).unwrap();
/// assert_eq!(text, "[\n  1,\n  2\n  ]");
/// ```
///
/// # Errors
///
/// Returns an error if a custom object fails to render.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(value: &Value, options: ReprOptions) -> Result<String> {
    let mut session = Session::with_options(options);
    session.repr(value)
}

/// Convert any `T: Serialize` to a [`Value`].
///
/// Useful for feeding ordinary Rust types into a representation graph. The
/// mapping is documented on [`ValueSerializer`].
///
/// # Examples
///
/// ```rust
/// use plrepr::{to_value, Value};
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point { x: i32, y: i32 }
///
/// let point = Point { x: 1, y: 2 };
/// let value: Value = to_value(&point).unwrap();
/// assert!(value.is_map());
/// ```
///
/// # Errors
///
/// Returns an error if the value cannot be represented, for example an
/// `i128` outside `i64` range.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_value<T>(value: &T) -> Result<Value>
where
    T: ?Sized + Serialize,
{
    value.serialize(crate::ser::ValueSerializer)
}

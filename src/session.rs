//! Serialization sessions and reference bookkeeping.
//!
//! A [`Session`] turns values into text while tracking which matrices and
//! custom objects it has already expanded. The first occurrence of a tracked
//! identity renders in long form, `*1 -> expansion;`, and every later
//! occurrence collapses to the short citation `*1`. The bookkeeping lives in
//! a [`RefTable`] owned by the session, so sharing is visible across every
//! call made through the same session.
//!
//! Sessions are not shared between threads while serializing: every entry
//! point takes `&mut self`, so the reference table is updated by exactly one
//! caller at a time.
//!
//! ## Examples
//!
//! ```rust
//! use std::sync::Arc;
//! use plrepr::{Matrix, Session, Value};
//!
//! let weights = Arc::new(Matrix::new(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap());
//! let graph = Value::from(vec![
//!     Value::matrix(weights.clone()),
//!     Value::matrix(weights),
//! ]);
//!
//! let mut session = Session::new();
//! let text = session.repr(&graph).unwrap();
//! assert_eq!(text, "[\n    *1 -> 2 2 [1, 2, 3, 4];,\n    *1\n    ]");
//! ```

use indexmap::IndexMap;
use std::sync::Arc;

use crate::error::{Error, Result};
use crate::options::ReprOptions;
use crate::ser;
use crate::value::Value;

/// An identity token for a tracked value.
///
/// Two tokens compare equal exactly when they come from clones of the same
/// [`Arc`] allocation; equal contents in different allocations yield distinct
/// tokens. A token stays meaningful for as long as some clone of the
/// originating `Arc` is alive. The [`RefTable`] keeps a clone of every value
/// it records, so identities held by a table cannot be invalidated by the
/// allocation being freed and its address reused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ObjectId(usize);

impl ObjectId {
    pub(crate) fn from_arc<T: ?Sized>(arc: &Arc<T>) -> Self {
        ObjectId(Arc::as_ptr(arc) as *const () as usize)
    }
}

/// One entry of a [`RefTable`].
///
/// A record remembers the reference index assigned to an identity, the raw
/// expansion text rendered for it, and whether the long form has already
/// been emitted.
#[derive(Clone, Debug)]
pub struct RefRecord {
    index: usize,
    expanded: bool,
    expansion: String,
    value: Value,
}

impl RefRecord {
    /// Returns the 1-based reference index assigned to this record.
    #[must_use]
    #[inline]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Returns `true` once the long form has been emitted.
    #[must_use]
    #[inline]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Returns the raw expansion text, without reference markers.
    #[must_use]
    pub fn expansion(&self) -> &str {
        &self.expansion
    }

    /// Returns the tracked value.
    ///
    /// The table holds this clone for the life of the record, which also
    /// pins the underlying allocation so the identity stays unambiguous.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Returns the short citation form, `*index`.
    #[must_use]
    pub fn short_form(&self) -> String {
        format!("*{}", self.index)
    }

    /// Returns the long form, `*index -> expansion;`.
    #[must_use]
    pub fn long_form(&self) -> String {
        format!("*{} -> {};", self.index, self.expansion)
    }
}

/// The reference table of a serialization session.
///
/// Records are kept in insertion order and indexed from 1; index 0 is
/// reserved for the null token `*0;`. A table never forgets or renumbers a
/// record, and inserting an identity twice is an error.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use plrepr::{Matrix, Session, Value};
///
/// let m = Arc::new(Matrix::new(1, 1, vec![7.0]).unwrap());
/// let value = Value::matrix(m);
///
/// let mut session = Session::new();
/// session.repr(&value).unwrap();
///
/// let table = session.table();
/// assert_eq!(table.len(), 1);
/// let id = value.identity().unwrap();
/// assert_eq!(table.index_of(id), Some(1));
/// ```
#[derive(Clone, Debug, Default)]
pub struct RefTable {
    records: IndexMap<ObjectId, RefRecord>,
}

impl RefTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        RefTable {
            records: IndexMap::new(),
        }
    }

    /// Registers a value under the next free index and stores its expansion.
    ///
    /// The index sequence follows insertion order: the first record gets
    /// index 1, the second index 2, and so on. The table keeps a clone of
    /// `value` so the identity stays pinned.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedType`] when the value has no identity, or is an
    ///   object that opts out of reference tracking
    /// - [`Error::DuplicateReference`] when the identity is already
    ///   registered; representations can not be updated
    pub fn insert(&mut self, value: &Value, expansion: impl Into<String>) -> Result<usize> {
        let id = value.identity().ok_or_else(|| {
            Error::unsupported_type("only matrices and custom objects can be reference tracked")
        })?;
        if let Value::Object(object) = value {
            if object.unreferenced() {
                return Err(Error::unsupported_type(
                    "object opts out of reference tracking",
                ));
            }
        }
        if let Some(record) = self.records.get(&id) {
            return Err(Error::duplicate_reference(record.index));
        }
        let index = self.records.len() + 1;
        self.records.insert(
            id,
            RefRecord {
                index,
                expanded: false,
                expansion: expansion.into(),
                value: value.clone(),
            },
        );
        Ok(index)
    }

    /// Produces the reference text for a registered identity.
    ///
    /// The first lookup after insertion yields the long form and marks the
    /// record expanded; every later lookup yields the short form. Returns
    /// `None` for identities the table does not know.
    pub fn lookup(&mut self, id: ObjectId) -> Option<String> {
        let record = self.records.get_mut(&id)?;
        if record.expanded {
            Some(record.short_form())
        } else {
            record.expanded = true;
            Some(record.long_form())
        }
    }

    /// Returns `true` if the identity is registered.
    #[must_use]
    pub fn contains(&self, id: ObjectId) -> bool {
        self.records.contains_key(&id)
    }

    /// Returns the index assigned to an identity, if registered.
    #[must_use]
    pub fn index_of(&self, id: ObjectId) -> Option<usize> {
        self.records.get(&id).map(RefRecord::index)
    }

    /// Returns the record for an identity, if registered.
    #[must_use]
    pub fn record(&self, id: ObjectId) -> Option<&RefRecord> {
        self.records.get(&id)
    }

    /// Returns the number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if no record is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Drops every record. Index assignment starts over from 1.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Iterates over the records in insertion order, lowest index first.
    pub fn iter(&self) -> impl Iterator<Item = &RefRecord> {
        self.records.values()
    }
}

/// A serialization session.
///
/// The session owns the [`RefTable`] and the formatting [`ReprOptions`], and
/// drives the rendering of whole value graphs. State persists across calls:
/// serializing two graphs through one session lets the second cite objects
/// the first already expanded, which is how a family of related
/// configurations shares common sub-objects.
///
/// Use [`Session::reset`] to forget all assignments, or a fresh session for
/// fully independent output. The convenience functions
/// [`to_string`](crate::to_string) and
/// [`to_string_with_options`](crate::to_string_with_options) create a fresh
/// session per call.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use plrepr::{Repr, Result, Session, Value};
///
/// #[derive(Debug)]
/// struct Dataset;
///
/// impl Repr for Dataset {
///     fn repr(&self, _session: &mut Session, _indent_level: usize) -> Result<String> {
///         Ok("Dataset()".to_string())
///     }
/// }
///
/// let shared = Arc::new(Dataset);
/// let mut session = Session::new();
///
/// assert_eq!(session.repr(&Value::object(shared.clone()))?, "*1 -> Dataset();");
/// assert_eq!(session.repr(&Value::object(shared.clone()))?, "*1");
///
/// session.reset();
/// assert_eq!(session.repr(&Value::object(shared))?, "*1 -> Dataset();");
/// # Ok::<(), plrepr::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct Session {
    table: RefTable,
    options: ReprOptions,
}

impl Session {
    /// Creates a session with default options.
    #[must_use]
    pub fn new() -> Self {
        Session::with_options(ReprOptions::default())
    }

    /// Creates a session with the given options.
    #[must_use]
    pub fn with_options(options: ReprOptions) -> Self {
        Session {
            table: RefTable::new(),
            options,
        }
    }

    /// Returns the formatting options of this session.
    #[must_use]
    pub fn options(&self) -> &ReprOptions {
        &self.options
    }

    /// Returns the reference table for inspection.
    #[must_use]
    pub fn table(&self) -> &RefTable {
        &self.table
    }

    /// Returns the reference table for direct manipulation.
    ///
    /// Custom [`Repr`](crate::Repr) implementations normally never need
    /// this; nested values serialized through [`Session::repr_at`] are
    /// tracked automatically.
    pub fn table_mut(&mut self) -> &mut RefTable {
        &mut self.table
    }

    /// Serializes a value at indentation level 0.
    ///
    /// Equivalent to [`Session::repr_at`] with `indent_level` 0.
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn repr(&mut self, value: &Value) -> Result<String> {
        self.repr_at(value, 0)
    }

    /// Serializes a value at the given indentation level.
    ///
    /// Atoms and the built-in containers render directly. Matrices and
    /// custom objects go through the reference table: an unknown identity is
    /// expanded first and registered, then the table supplies the long form;
    /// a known identity collapses to its short citation. Nested tracked
    /// values are registered while the enclosing expansion is being built,
    /// so inner objects receive smaller indices than the objects containing
    /// them.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedType`] when a custom object reports a value it
    ///   cannot render
    /// - [`Error::DuplicateReference`] when an identity was registered by
    ///   hand while its expansion was being rendered
    #[must_use = "this returns the result of the operation, errors must be handled"]
    pub fn repr_at(&mut self, value: &Value, indent_level: usize) -> Result<String> {
        let id = match value {
            Value::Matrix(_) => value.identity(),
            Value::Object(object) if !object.unreferenced() => value.identity(),
            _ => None,
        };
        match id {
            None => ser::format_value(self, value, indent_level),
            Some(id) => {
                if !self.table.contains(id) {
                    let expansion = ser::format_value(self, value, indent_level)?;
                    self.table.insert(value, expansion)?;
                }
                self.table
                    .lookup(id)
                    .ok_or_else(|| Error::custom("reference record missing after insertion"))
            }
        }
    }

    /// Forgets every reference assignment.
    ///
    /// The next tracked value gets index 1 again. Options are kept.
    pub fn reset(&mut self) {
        self.table.clear();
    }
}

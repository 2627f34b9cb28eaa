//! The self-representation capability for custom objects.
//!
//! Values built from the fixed [`Value`](crate::Value) variants cover atoms
//! and containers. Everything else enters a graph as a [`Repr`] trait object:
//! the object renders its own textual expansion, and the session wraps that
//! expansion in reference bookkeeping so shared objects are expanded once.

use std::fmt;

use crate::error::Result;
use crate::session::Session;

/// Capability trait for values that produce their own textual representation.
///
/// An object held in a [`Value::Object`](crate::Value::Object) is asked to
/// render itself before any built-in handling applies. The object receives
/// the active [`Session`] so nested values can be serialized through the same
/// reference table, and the indentation level at which its text begins.
///
/// Implementations typically render nested fields at `indent_level + 1` and
/// join them with [`format_elements`](crate::format_elements), which yields
/// the same layout the built-in containers use.
///
/// # Examples
///
/// ```rust
/// use std::sync::Arc;
/// use plrepr::{format_elements, Repr, Result, Session, Value};
///
/// #[derive(Debug)]
/// struct Gaussian {
///     sigma: f64,
/// }
///
/// impl Repr for Gaussian {
///     fn repr(&self, session: &mut Session, indent_level: usize) -> Result<String> {
///         let sigma = session.repr_at(&Value::from(self.sigma), indent_level + 1)?;
///         let fields = vec![format!("sigma = {}", sigma)];
///         Ok(format!(
///             "Gaussian({})",
///             format_elements(&fields, session.options(), indent_level + 1)
///         ))
///     }
/// }
///
/// let kernel = Arc::new(Gaussian { sigma: 2.5 });
/// let mut session = Session::new();
/// let text = session.repr(&Value::object(kernel))?;
/// assert_eq!(text, "*1 -> Gaussian( sigma = 2.5 );");
/// # Ok::<(), plrepr::Error>(())
/// ```
pub trait Repr: fmt::Debug {
    /// Renders this object's textual expansion at `indent_level`.
    ///
    /// The session is passed down so nested values share the caller's
    /// reference table. Returning an error aborts the whole serialization.
    fn repr(&self, session: &mut Session, indent_level: usize) -> Result<String>;

    /// Opts this object out of reference tracking.
    ///
    /// When this returns `true` the session emits the raw expansion directly,
    /// never assigns a reference index, and never records the object in the
    /// reference table. Every occurrence is rendered in full, even when the
    /// same object appears many times.
    ///
    /// The default is `false`: objects are tracked by identity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::sync::Arc;
    /// use plrepr::{Repr, Result, Session, Value};
    ///
    /// #[derive(Debug)]
    /// struct Keyword(&'static str);
    ///
    /// impl Repr for Keyword {
    ///     fn repr(&self, _session: &mut Session, _indent_level: usize) -> Result<String> {
    ///         Ok(self.0.to_string())
    ///     }
    ///
    ///     fn unreferenced(&self) -> bool {
    ///         true
    ///     }
    /// }
    ///
    /// let auto = Arc::new(Keyword("AUTO"));
    /// let mut session = Session::new();
    /// assert_eq!(session.repr(&Value::object(auto.clone()))?, "AUTO");
    /// assert_eq!(session.repr(&Value::object(auto))?, "AUTO");
    /// assert!(session.table().is_empty());
    /// # Ok::<(), plrepr::Error>(())
    /// ```
    fn unreferenced(&self) -> bool {
        false
    }
}

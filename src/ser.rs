//! Representation serialization.
//!
//! This module renders the raw text of every [`Value`] variant and hosts
//! [`ValueSerializer`], the bridge that turns any [`serde::Serialize`] type
//! into a [`Value`] graph.
//!
//! ## Overview
//!
//! Rendering splits in two layers. [`Session::repr_at`](crate::Session::repr_at)
//! decides whether a value is reference tracked; the raw formatting of each
//! variant lives here. Container bodies share one layout rule, exposed as
//! [`format_elements`] so custom [`Repr`](crate::Repr) implementations can
//! format their fields exactly like the built-in containers do.
//!
//! ## Usage
//!
//! Most users go through the high-level functions in the crate root:
//!
//! ```rust
//! use plrepr::{to_string, to_value};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Data { x: i32, y: i32 }
//!
//! let value = to_value(&Data { x: 1, y: 2 }).unwrap();
//! let text = to_string(&value).unwrap();
//! assert_eq!(text, "{\n    \"x\" : 1,\n    \"y\" : 2\n    }");
//! ```
//!
//! ## Direct Serializer Usage
//!
//! The bridge serializer can be driven by hand:
//!
//! ```rust
//! use plrepr::ValueSerializer;
//! use serde::Serialize;
//!
//! let value = (1, "one").serialize(ValueSerializer).unwrap();
//! assert_eq!(plrepr::to_string(&value).unwrap(), "1:\"one\"");
//! ```

use crate::error::{Error, Result};
use crate::map::ReprMap;
use crate::options::ReprOptions;
use crate::session::Session;
use crate::value::{Number, Value};
use serde::{ser, Serialize};

/// Renders the raw text of a value, without reference bookkeeping.
///
/// Children recurse through [`Session::repr_at`] so nested matrices and
/// objects still pick up reference indices while this expansion is built.
pub(crate) fn format_value(
    session: &mut Session,
    value: &Value,
    indent_level: usize,
) -> Result<String> {
    match value {
        // The self-representation capability takes priority over everything.
        Value::Object(object) => object.repr(session, indent_level),
        Value::Null => Ok("*0;".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::String(s) => Ok(quote_string(s)),
        Value::List(items) => {
            let rendered = items
                .iter()
                .map(|element| session.repr_at(element, indent_level + 1))
                .collect::<Result<Vec<_>>>()?;
            Ok(format!(
                "[{}]",
                format_elements(&rendered, session.options(), indent_level + 1)
            ))
        }
        Value::Map(map) => {
            // Keys and values render at the enclosing level; only the
            // entry list itself is laid out one level deeper.
            let mut rendered = Vec::with_capacity(map.len());
            for (key, entry) in map.iter() {
                let key_text = session.repr_at(key, indent_level)?;
                let entry_text = session.repr_at(entry, indent_level)?;
                rendered.push(format!("{} : {}", key_text, entry_text));
            }
            Ok(format!(
                "{{{}}}",
                format_elements(&rendered, session.options(), indent_level + 1)
            ))
        }
        Value::Pair(pair) => {
            let (first, second) = pair.as_ref();
            Ok(format!(
                "{}:{}",
                session.repr_at(first, indent_level)?,
                session.repr_at(second, indent_level)?
            ))
        }
        Value::Matrix(m) => Ok(m.to_string()),
    }
}

/// Lays out already-rendered container elements.
///
/// The rule is uniform across lists, maps, and custom objects that choose to
/// use it. `indent_level` is the level of the elements themselves, one
/// deeper than the surrounding brackets:
///
/// - no elements: a single space, so `[` and `]` close as `[ ]`
/// - one single-line element: padded with one space on each side
/// - one multiline element: padded with a newline plus indentation on each side
/// - several elements: joined by `,` plus a newline and indentation, with the
///   same newline padding before the first and after the last element
///
/// # Examples
///
/// ```rust
/// use plrepr::{format_elements, ReprOptions};
///
/// let options = ReprOptions::new();
///
/// assert_eq!(format_elements(&[], &options, 1), " ");
///
/// let one = vec!["42".to_string()];
/// assert_eq!(format_elements(&one, &options, 1), " 42 ");
///
/// let two = vec!["1".to_string(), "2".to_string()];
/// assert_eq!(format_elements(&two, &options, 1), "\n    1,\n    2\n    ");
/// ```
#[must_use]
pub fn format_elements(elements: &[String], options: &ReprOptions, indent_level: usize) -> String {
    match elements {
        [] => " ".to_string(),
        [only] => {
            let padding = if only.contains('\n') {
                format!("\n{}", options.padding(indent_level))
            } else {
                " ".to_string()
            };
            format!("{}{}{}", padding, only, padding)
        }
        _ => {
            let separator = format!(",\n{}", options.padding(indent_level));
            let body = elements.join(&separator);
            // The leading and trailing padding is the separator minus its comma.
            let padding = &separator[1..];
            format!("{}{}{}", padding, body, padding)
        }
    }
}

/// Quotes a string atom. Only the double quote is escaped; newlines and
/// every other character pass through verbatim.
fn quote_string(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\\\""))
}

/// Serializer that converts any [`Serialize`] type into a [`Value`] graph.
///
/// The mapping follows the shape of the target format:
///
/// - integers up to `i64` become [`Number::Integer`]; `u64` values beyond
///   `i64::MAX` fall back to [`Number::Float`]
/// - `None` and units become [`Value::Null`]
/// - two-element tuples become [`Value::Pair`]; other tuples, sequences, and
///   tuple structs become [`Value::List`]
/// - maps and structs become [`Value::Map`]; map keys may be any value
/// - unit enum variants become their name as a string; newtype, tuple, and
///   struct variants become a pair of the variant name and its payload
/// - bytes become a list of integers
pub struct ValueSerializer;

pub struct SerializeVec {
    vec: Vec<Value>,
}

pub struct SerializeTuple {
    vec: Vec<Value>,
}

pub struct SerializeTupleVariant {
    variant: &'static str,
    vec: Vec<Value>,
}

pub struct SerializeMap {
    map: ReprMap,
    current_key: Option<Value>,
}

pub struct SerializeStructVariant {
    variant: &'static str,
    map: ReprMap,
}

impl ser::Serializer for ValueSerializer {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SerializeVec;
    type SerializeTuple = SerializeTuple;
    type SerializeTupleStruct = SerializeVec;
    type SerializeTupleVariant = SerializeTupleVariant;
    type SerializeMap = SerializeMap;
    type SerializeStruct = SerializeMap;
    type SerializeStructVariant = SerializeStructVariant;

    fn serialize_bool(self, v: bool) -> Result<Value> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i16(self, v: i16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i32(self, v: i32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_i64(self, v: i64) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v)))
    }

    fn serialize_i128(self, v: i128) -> Result<Value> {
        i64::try_from(v)
            .map(|i| Value::Number(Number::Integer(i)))
            .map_err(|_| Error::unsupported_type("i128 outside i64 range"))
    }

    fn serialize_u8(self, v: u8) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u16(self, v: u16) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u32(self, v: u32) -> Result<Value> {
        Ok(Value::Number(Number::Integer(v as i64)))
    }

    fn serialize_u64(self, v: u64) -> Result<Value> {
        if v <= i64::MAX as u64 {
            Ok(Value::Number(Number::Integer(v as i64)))
        } else {
            Ok(Value::Number(Number::Float(v as f64)))
        }
    }

    fn serialize_u128(self, v: u128) -> Result<Value> {
        i64::try_from(v)
            .map(|i| Value::Number(Number::Integer(i)))
            .map_err(|_| Error::unsupported_type("u128 outside i64 range"))
    }

    fn serialize_f32(self, v: f32) -> Result<Value> {
        Ok(Value::Number(Number::Float(v as f64)))
    }

    fn serialize_f64(self, v: f64) -> Result<Value> {
        Ok(Value::Number(Number::Float(v)))
    }

    fn serialize_char(self, v: char) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value> {
        let vec = v
            .iter()
            .map(|&b| Value::Number(Number::Integer(b as i64)))
            .collect();
        Ok(Value::List(vec))
    }

    fn serialize_none(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_some<T>(self, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_unit(self) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, _name: &'static str) -> Result<Value> {
        Ok(Value::Null)
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T>(self, _name: &'static str, value: &T) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value>
    where
        T: ?Sized + Serialize,
    {
        Ok(Value::pair(variant, to_repr_value(value)?))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple(self, _len: usize) -> Result<SerializeTuple> {
        Ok(SerializeTuple { vec: Vec::new() })
    }

    fn serialize_tuple_struct(self, _name: &'static str, _len: usize) -> Result<SerializeVec> {
        Ok(SerializeVec::new())
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeTupleVariant> {
        Ok(SerializeTupleVariant {
            variant,
            vec: Vec::new(),
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<SerializeMap> {
        Ok(SerializeMap::new())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<SerializeStructVariant> {
        Ok(SerializeStructVariant {
            variant,
            map: ReprMap::new(),
        })
    }
}

impl SerializeVec {
    fn new() -> Self {
        SerializeVec { vec: Vec::new() }
    }
}

impl SerializeMap {
    fn new() -> Self {
        SerializeMap {
            map: ReprMap::new(),
            current_key: None,
        }
    }
}

impl ser::SerializeSeq for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTuple for SerializeTuple {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        // Two-element tuples take the pair shorthand; everything else is a list.
        match <[Value; 2]>::try_from(self.vec) {
            Ok([first, second]) => Ok(Value::pair(first, second)),
            Err(vec) => Ok(Value::List(vec)),
        }
    }
}

impl ser::SerializeTupleStruct for SerializeVec {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::List(self.vec))
    }
}

impl ser::SerializeTupleVariant for SerializeTupleVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.vec.push(to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::pair(self.variant, Value::List(self.vec)))
    }
}

impl ser::SerializeMap for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T>(&mut self, key: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.current_key = Some(to_repr_value(key)?);
        Ok(())
    }

    fn serialize_value<T>(&mut self, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        let key = self
            .current_key
            .take()
            .ok_or_else(|| Error::custom("serialize_value called without serialize_key"))?;
        self.map.insert(key, to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStruct for SerializeMap {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::Map(self.map))
    }
}

impl ser::SerializeStructVariant for SerializeStructVariant {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T>(&mut self, key: &'static str, value: &T) -> Result<()>
    where
        T: ?Sized + Serialize,
    {
        self.map.insert(key, to_repr_value(value)?);
        Ok(())
    }

    fn end(self) -> Result<Value> {
        Ok(Value::pair(self.variant, Value::Map(self.map)))
    }
}

fn to_repr_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    value.serialize(ValueSerializer)
}

//! Value tree to JSON text.
//!
//! Aggregates are walked with an explicit frame stack rather than recursion, so
//! output depth is bounded by [`Limits::max_serialize_depth`] and not by the
//! call stack. Objects whose keys are exactly `"0"`, `"1"`, ... in order are
//! written as arrays of their values.

use crate::data::{Map, Number, Value};
use crate::errors::SerializeError;
use crate::limits::Limits;
use std::fmt::Write;

pub struct Serializer {
    out: String,
    max_depth: usize,
}

enum Frame<'v> {
    Array {
        items: Items<'v>,
        depth: usize,
        first: bool,
    },
    Object {
        members: indexmap::map::Iter<'v, String, Value>,
        depth: usize,
        first: bool,
    },
}

enum Items<'v> {
    Slice(std::slice::Iter<'v, Value>),
    Values(indexmap::map::Values<'v, String, Value>),
}

impl<'v> Iterator for Items<'v> {
    type Item = &'v Value;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Items::Slice(iter) => iter.next(),
            Items::Values(iter) => iter.next(),
        }
    }
}

impl Serializer {
    pub fn new(limits: Limits) -> Self {
        Self {
            out: String::new(),
            max_depth: limits.max_serialize_depth,
        }
    }

    pub fn serialize(mut self, value: &Value) -> Result<String, SerializeError> {
        let mut stack = Vec::new();
        self.write_value(value, 0, &mut stack)?;

        while let Some(frame) = stack.last_mut() {
            let next = match frame {
                Frame::Array {
                    items,
                    depth,
                    first,
                } => items
                    .next()
                    .map(|v| (None, v, *depth, std::mem::replace(first, false))),
                Frame::Object {
                    members,
                    depth,
                    first,
                } => members
                    .next()
                    .map(|(k, v)| (Some(k), v, *depth, std::mem::replace(first, false))),
            };

            match next {
                Some((key, value, depth, first)) => {
                    if !first {
                        self.out.push(',');
                    }
                    if let Some(key) = key {
                        self.write_string(key);
                        self.out.push(':');
                    }
                    self.write_value(value, depth, &mut stack)?;
                }
                None => match stack.pop() {
                    Some(Frame::Array { .. }) => self.out.push(']'),
                    Some(Frame::Object { .. }) => self.out.push('}'),
                    None => {}
                },
            }
        }

        Ok(self.out)
    }

    fn write_value<'v>(
        &mut self,
        value: &'v Value,
        depth: usize,
        stack: &mut Vec<Frame<'v>>,
    ) -> Result<(), SerializeError> {
        match value {
            Value::Null => self.out.push_str("null"),
            Value::Bool(true) => self.out.push_str("true"),
            Value::Bool(false) => self.out.push_str("false"),
            Value::Number(n) => self.write_number(*n)?,
            Value::String(s) => self.write_string(s),
            Value::Array(items) => {
                let depth = self.enter(depth)?;
                self.out.push('[');
                stack.push(Frame::Array {
                    items: Items::Slice(items.iter()),
                    depth,
                    first: true,
                });
            }
            Value::Object(map) if is_list(map) => {
                let depth = self.enter(depth)?;
                self.out.push('[');
                stack.push(Frame::Array {
                    items: Items::Values(map.values()),
                    depth,
                    first: true,
                });
            }
            Value::Object(map) => {
                let depth = self.enter(depth)?;
                self.out.push('{');
                stack.push(Frame::Object {
                    members: map.iter(),
                    depth,
                    first: true,
                });
            }
        }
        Ok(())
    }

    fn enter(&self, depth: usize) -> Result<usize, SerializeError> {
        let depth = depth + 1;
        if depth > self.max_depth {
            return Err(SerializeError::DepthExceeded {
                depth,
                max: self.max_depth,
            });
        }
        Ok(depth)
    }

    fn write_number(&mut self, n: Number) -> Result<(), SerializeError> {
        match n {
            Number::Int(i) => {
                let _ = write!(self.out, "{i}");
            }
            Number::Float(f) if !f.is_finite() => return Err(SerializeError::NonFiniteNumber(f)),
            Number::Float(f) => {
                let start = self.out.len();
                let _ = write!(self.out, "{f}");
                // Keep a '.' so the text decodes back into a float
                if !self.out[start..].contains('.') {
                    self.out.push_str(".0");
                }
            }
        }
        Ok(())
    }

    fn write_string(&mut self, s: &str) {
        self.out.push('"');
        for ch in s.chars() {
            match ch {
                '\\' => self.out.push_str("\\\\"),
                '/' => self.out.push_str("\\/"),
                '"' => self.out.push_str("\\\""),
                '\x0C' => self.out.push_str("\\f"),
                '\n' => self.out.push_str("\\n"),
                '\r' => self.out.push_str("\\r"),
                '\t' => self.out.push_str("\\t"),
                '\x08' => self.out.push_str("\\b"),
                x => self.out.push(x),
            }
        }
        self.out.push('"');
    }
}

/// Whether an object's keys are the indices `0..len` in order, which makes it
/// serialize as an array. Empty objects stay objects.
pub fn is_list(map: &Map) -> bool {
    !map.is_empty()
        && map
            .keys()
            .enumerate()
            .all(|(i, key)| is_index_key(key, i))
}

fn is_index_key(key: &str, index: usize) -> bool {
    let canonical = key == "0" || !key.starts_with('0');
    canonical && key.bytes().all(|b| b.is_ascii_digit()) && key.parse::<usize>() == Ok(index)
}

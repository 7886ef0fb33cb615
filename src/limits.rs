//! Nesting bounds for parsing and serialization.

/// Depth guard applied by the serializer unless configured otherwise.
pub const DEFAULT_SERIALIZE_DEPTH: usize = 1 << 20;

/// Nesting depth accepted by the parser unless configured otherwise.
///
/// The parser recurses once per nested array or object, so this bound keeps
/// hostile input from exhausting the call stack.
pub const DEFAULT_PARSE_DEPTH: usize = 512;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Deepest array/object nesting the parser accepts. The top-level aggregate is depth 1.
    pub max_parse_depth: usize,
    /// Deepest array/object nesting the serializer writes.
    pub max_serialize_depth: usize,
}

impl Limits {
    pub const fn new() -> Self {
        Self {
            max_parse_depth: DEFAULT_PARSE_DEPTH,
            max_serialize_depth: DEFAULT_SERIALIZE_DEPTH,
        }
    }

    pub const fn with_parse_depth(mut self, depth: usize) -> Self {
        self.max_parse_depth = depth;
        self
    }

    pub const fn with_serialize_depth(mut self, depth: usize) -> Self {
        self.max_serialize_depth = depth;
        self
    }
}

impl Default for Limits {
    fn default() -> Self {
        Self::new()
    }
}

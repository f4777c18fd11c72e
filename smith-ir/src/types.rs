//! Declared field types.

use std::{fmt, str::FromStr};

use serde::{Serialize, Serializer};
use springsmith_core::{is_qualified, last_segment, strip_last_segment};

/// Java primitives and their boxed wrappers.
const PRIMITIVES: &[(&str, &str)] = &[
    ("boolean", "Boolean"),
    ("byte", "Byte"),
    ("short", "Short"),
    ("int", "Integer"),
    ("long", "Long"),
    ("char", "Character"),
    ("float", "Float"),
    ("double", "Double"),
];

/// Error produced when a declared type cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeParseError {
    #[error("type is empty")]
    Empty,

    #[error("unexpected '{found}' at offset {offset} in type '{input}'")]
    Unexpected {
        found: char,
        offset: usize,
        input: String,
    },

    #[error("type '{input}' ends unexpectedly")]
    UnexpectedEnd { input: String },
}

/// A reference to a declared type, e.g. `java.util.List<com.acme.Order>` or `long[]`.
///
/// Names are kept as written: simple (`Long`) or qualified (`java.time.LocalDate`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeRef {
    name: String,
    args: Vec<TypeRef>,
    array_depth: usize,
}

impl TypeRef {
    /// A non-generic type with the given (simple or qualified) name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
            array_depth: 0,
        }
    }

    /// A generic type with the given type arguments.
    pub fn generic(name: impl Into<String>, args: impl IntoIterator<Item = TypeRef>) -> Self {
        Self {
            name: name.into(),
            args: args.into_iter().collect(),
            array_depth: 0,
        }
    }

    /// Parse Java type syntax.
    pub fn parse(input: &str) -> Result<Self, TypeParseError> {
        let mut parser = Parser { input, pos: 0 };
        parser.skip_ws();
        if parser.peek().is_none() {
            return Err(TypeParseError::Empty);
        }
        let ty = parser.type_ref()?;
        parser.skip_ws();
        if parser.peek().is_some() {
            return Err(parser.unexpected());
        }
        Ok(ty)
    }

    /// The name as written (simple or qualified), without type arguments.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The name after the last package separator.
    pub fn simple_name(&self) -> &str {
        last_segment(&self.name)
    }

    /// The package portion of a qualified name.
    pub fn package(&self) -> Option<&str> {
        strip_last_segment(&self.name)
    }

    /// Whether the name carries a package.
    pub fn is_qualified(&self) -> bool {
        is_qualified(&self.name)
    }

    /// Type arguments, in declaration order.
    pub fn args(&self) -> &[TypeRef] {
        &self.args
    }

    /// Number of `[]` suffixes.
    pub fn array_depth(&self) -> usize {
        self.array_depth
    }

    /// Whether accessors for this type use the `is` prefix.
    pub fn is_boolean(&self) -> bool {
        self.is_plain()
            && matches!(
                self.name.as_str(),
                "boolean" | "Boolean" | "java.lang.Boolean"
            )
    }

    /// Whether this is a Java primitive such as `long` or `boolean`.
    pub fn is_primitive(&self) -> bool {
        self.is_plain() && PRIMITIVES.iter().any(|(p, _)| *p == self.name)
    }

    /// The boxed form of a primitive; other types are returned unchanged.
    ///
    /// Identifier types pass through this before they are used as generic
    /// arguments or nullable parameters.
    pub fn boxed(&self) -> TypeRef {
        if !self.is_plain() {
            return self.clone();
        }
        PRIMITIVES
            .iter()
            .find(|(p, _)| *p == self.name)
            .map_or_else(|| self.clone(), |(_, boxed)| TypeRef::named(*boxed))
    }

    /// Rewrite every name in this type (arguments included).
    ///
    /// `rename` returns `None` to keep a name as is.
    pub fn map_names(&self, rename: &impl Fn(&str) -> Option<String>) -> TypeRef {
        TypeRef {
            name: rename(&self.name).unwrap_or_else(|| self.name.clone()),
            args: self.args.iter().map(|arg| arg.map_names(rename)).collect(),
            array_depth: self.array_depth,
        }
    }

    /// Every name referenced by this type, outermost first.
    pub fn names(&self) -> Vec<&str> {
        let mut names = vec![self.name.as_str()];
        for arg in &self.args {
            names.extend(arg.names());
        }
        names
    }

    /// Render with simple names only, e.g. `List<OrderDTO>`.
    pub fn display_simple(&self) -> String {
        self.display_with(&mut |name| last_segment(name).to_string())
    }

    /// Render with every name passed through `name`, outermost first.
    pub fn display_with(&self, name: &mut impl FnMut(&str) -> String) -> String {
        let mut out = name(&self.name);
        if !self.args.is_empty() {
            let args: Vec<String> = self.args.iter().map(|arg| arg.display_with(name)).collect();
            out.push('<');
            out.push_str(&args.join(", "));
            out.push('>');
        }
        for _ in 0..self.array_depth {
            out.push_str("[]");
        }
        out
    }

    fn is_plain(&self) -> bool {
        self.args.is_empty() && self.array_depth == 0
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_with(&mut |name| name.to_string()))
    }
}

impl FromStr for TypeRef {
    type Err = TypeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeRef::parse(s)
    }
}

impl Serialize for TypeRef {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn eat(&mut self, expected: char) -> bool {
        self.skip_ws();
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: char) -> Result<(), TypeParseError> {
        if self.eat(expected) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    fn unexpected(&self) -> TypeParseError {
        match self.peek() {
            Some(found) => TypeParseError::Unexpected {
                found,
                offset: self.pos,
                input: self.input.to_string(),
            },
            None => TypeParseError::UnexpectedEnd {
                input: self.input.to_string(),
            },
        }
    }

    fn name(&mut self) -> Result<String, TypeParseError> {
        self.skip_ws();
        let start = self.pos;
        loop {
            match self.peek() {
                Some(c) if c.is_alphabetic() || c == '_' || c == '$' => self.bump(),
                _ => return Err(self.unexpected()),
            }
            while self
                .peek()
                .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '$')
            {
                self.bump();
            }
            if self.peek() == Some('.') {
                self.bump();
            } else {
                break;
            }
        }
        Ok(self.input[start..self.pos].to_string())
    }

    fn type_ref(&mut self) -> Result<TypeRef, TypeParseError> {
        let name = self.name()?;
        let mut args = Vec::new();
        if self.eat('<') {
            loop {
                args.push(self.type_ref()?);
                if !self.eat(',') {
                    self.expect('>')?;
                    break;
                }
            }
        }
        let mut array_depth = 0;
        while self.eat('[') {
            self.expect(']')?;
            array_depth += 1;
        }
        Ok(TypeRef {
            name,
            args,
            array_depth,
        })
    }
}

// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Parameter interpreters: read tokens from a cursor, produce typed values.

use argtree_lists::{Cursor, ListConfig, ListTokenizer};

use crate::error::{DefinitionError, ParameterError, ParseError};
use crate::value::Value;

/// Converts tokens read from a shared cursor into a [`Value`].
///
/// An interpreter consumes exactly the tokens it needs and leaves the rest
/// for the next interpreter or the next option.
pub trait Interpreter {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError>;
}

fn next<'a>(cursor: &mut Cursor<'a>) -> Result<&'a str, ParameterError> {
    cursor.next_token().ok_or(ParameterError::Missing)
}

/// Terminal parser for list leaves and single-token interpreters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Int,
    Float,
    Text,
}

impl Element {
    pub fn name(self) -> &'static str {
        match self {
            Element::Int => "integer",
            Element::Float => "float",
            Element::Text => "string",
        }
    }

    pub fn parse(self, token: &str) -> Result<Value, ParameterError> {
        let token = token.trim();
        let format = || ParameterError::Format {
            value: token.to_string(),
            expected: self.name(),
        };
        match self {
            Element::Int => token.parse::<i64>().map(Value::Int).map_err(|_| format()),
            Element::Float => token.parse::<f64>().map(Value::Float).map_err(|_| format()),
            Element::Text => Ok(Value::Str(token.to_string())),
        }
    }
}

/// Base-10 integer, one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Int;

impl Interpreter for Int {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError> {
        Element::Int.parse(next(cursor)?)
    }
}

/// Floating point, one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Float;

impl Interpreter for Float {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError> {
        Element::Float.parse(next(cursor)?)
    }
}

/// Trimmed string, one token.
#[derive(Debug, Clone, Copy, Default)]
pub struct Text;

impl Interpreter for Text {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError> {
        Element::Text.parse(next(cursor)?)
    }
}

/// One of a fixed set of strings; resolves to its index.
#[derive(Debug, Clone)]
pub struct Selection {
    choices: Vec<String>,
}

impl Selection {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl Interpreter for Selection {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError> {
        let token = next(cursor)?.trim();
        self.choices
            .iter()
            .position(|c| c == token)
            .map(Value::Selection)
            .ok_or_else(|| ParameterError::InvalidSelection {
                value: token.to_string(),
                choices: self.choices.clone(),
            })
    }
}

/// Nested list literal, possibly spanning several tokens.
#[derive(Debug, Clone)]
pub struct List {
    element: Element,
    tokenizer: ListTokenizer,
}

impl List {
    pub fn new(element: Element) -> Self {
        Self::with_config(element, ListConfig::default())
    }

    pub fn with_config(element: Element, config: ListConfig) -> Self {
        Self {
            element,
            tokenizer: ListTokenizer::new(config),
        }
    }

    pub fn element(&self) -> Element {
        self.element
    }
}

impl Interpreter for List {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError> {
        let element = self.element;
        let nested = self
            .tokenizer
            .parse(cursor, |token| element.parse(token))?;
        Ok(Value::from(nested))
    }
}

type CustomFn = dyn Fn(&mut Cursor<'_>) -> Result<Value, ParameterError>;

/// Caller-supplied interpreter.
pub struct Custom(Box<CustomFn>);

impl Custom {
    pub fn new(f: impl Fn(&mut Cursor<'_>) -> Result<Value, ParameterError> + 'static) -> Self {
        Self(Box::new(f))
    }
}

impl Interpreter for Custom {
    fn interpret(&self, cursor: &mut Cursor<'_>) -> Result<Value, ParameterError> {
        (self.0)(cursor)
    }
}

/// Ordered interpreters and their human-readable descriptors.
///
/// An empty set is a flag.
#[derive(Default)]
pub struct ParameterSet {
    interpreters: Vec<Box<dyn Interpreter>>,
    descriptors: Vec<String>,
}

impl ParameterSet {
    pub fn new(
        interpreters: Vec<Box<dyn Interpreter>>,
        descriptors: Vec<String>,
    ) -> Result<Self, DefinitionError> {
        if interpreters.len() != descriptors.len() {
            return Err(DefinitionError::ParameterCountMismatch {
                interpreters: interpreters.len(),
                descriptors: descriptors.len(),
            });
        }
        Ok(Self {
            interpreters,
            descriptors,
        })
    }

    pub fn flag() -> Self {
        Self::default()
    }

    pub fn single(interpreter: impl Interpreter + 'static, descriptor: impl Into<String>) -> Self {
        Self {
            interpreters: vec![Box::new(interpreter)],
            descriptors: vec![descriptor.into()],
        }
    }

    pub fn descriptors(&self) -> &[String] {
        &self.descriptors
    }

    pub fn len(&self) -> usize {
        self.interpreters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.interpreters.is_empty()
    }

    /// Apply every interpreter in order to one shared cursor.
    ///
    /// A flag resolves to [`Value::Flag`], a single parameter to its value,
    /// several parameters to [`Value::Multi`].
    pub fn resolve(&self, option: &str, cursor: &mut Cursor<'_>) -> Result<Value, ParseError> {
        let mut values = Vec::with_capacity(self.interpreters.len());
        for (interpreter, descriptor) in self.interpreters.iter().zip(&self.descriptors) {
            let value = interpreter
                .interpret(cursor)
                .map_err(|e| e.for_option(option, descriptor))?;
            values.push(value);
        }
        Ok(match values.len() {
            0 => Value::Flag,
            1 => values.swap_remove(0),
            _ => Value::Multi(values),
        })
    }
}

impl std::fmt::Debug for ParameterSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParameterSet")
            .field("descriptors", &self.descriptors)
            .finish()
    }
}

#[cfg(test)]
#[path = "interpreter_tests.rs"]
mod tests;

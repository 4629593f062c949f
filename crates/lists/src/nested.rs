// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Nested value tree produced by the list tokenizer.

use serde::Serialize;

/// A leaf value or an ordered list of nested values.
///
/// The nesting mirrors the source literal exactly: `[1,[2,3]]` becomes
/// `List([Leaf(1), List([Leaf(2), Leaf(3)])])`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Nested<T> {
    Leaf(T),
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Nested::Leaf(_))
    }

    pub fn as_leaf(&self) -> Option<&T> {
        match self {
            Nested::Leaf(v) => Some(v),
            Nested::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Nested<T>]> {
        match self {
            Nested::Leaf(_) => None,
            Nested::List(items) => Some(items),
        }
    }

    /// Nesting depth: 0 for a leaf, 1 for a flat list, and so on.
    pub fn depth(&self) -> usize {
        match self {
            Nested::Leaf(_) => 0,
            Nested::List(items) => 1 + items.iter().map(Nested::depth).max().unwrap_or(0),
        }
    }

    /// All leaves in left-to-right order.
    pub fn leaves(&self) -> Vec<&T> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves<'a>(&'a self, out: &mut Vec<&'a T>) {
        match self {
            Nested::Leaf(v) => out.push(v),
            Nested::List(items) => {
                for item in items {
                    item.collect_leaves(out);
                }
            }
        }
    }

    /// Convert every leaf, keeping the shape.
    pub fn map<U>(self, f: &mut impl FnMut(T) -> U) -> Nested<U> {
        match self {
            Nested::Leaf(v) => Nested::Leaf(f(v)),
            Nested::List(items) => Nested::List(items.into_iter().map(|i| i.map(f)).collect()),
        }
    }

    /// Fallible [`Nested::map`]; stops at the first error.
    pub fn try_map<U, E>(self, f: &mut impl FnMut(T) -> Result<U, E>) -> Result<Nested<U>, E> {
        match self {
            Nested::Leaf(v) => Ok(Nested::Leaf(f(v)?)),
            Nested::List(items) => items
                .into_iter()
                .map(|i| i.try_map(f))
                .collect::<Result<Vec<_>, E>>()
                .map(Nested::List),
        }
    }
}

impl<T> From<Vec<Nested<T>>> for Nested<T> {
    fn from(items: Vec<Nested<T>>) -> Self {
        Nested::List(items)
    }
}

#[cfg(test)]
#[path = "nested_tests.rs"]
mod tests;

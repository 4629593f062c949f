// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared test helpers for use across crates.
//!
//! Gated behind `#[cfg(any(test, feature = "test-support"))]`.

use std::cell::RefCell;
use std::rc::Rc;

use crate::option::{Flow, Invocation};
use crate::parser::ProgramInfo;
use crate::style::Style;
use crate::value::OptionValues;

pub fn tokens(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

pub fn program(name: &str, version: Option<&str>) -> ProgramInfo {
    ProgramInfo {
        name: name.to_string(),
        version: version.map(str::to_string),
        style: Style::default(),
    }
}

/// One recorded callback.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Run { label: String, values: OptionValues },
    Option { label: String, key: String },
}

/// Records command and option callbacks in the order they fire.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    calls: Rc<RefCell<Vec<Call>>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command callback that records its values under `label`.
    pub fn on_run(&self, label: &str) -> impl FnMut(&OptionValues) + 'static {
        let calls = Rc::clone(&self.calls);
        let label = label.to_string();
        move |values| {
            calls.borrow_mut().push(Call::Run {
                label: label.clone(),
                values: values.clone(),
            })
        }
    }

    /// Option callback that records its key and returns `flow`.
    pub fn on_invoke(&self, label: &str, flow: Flow) -> impl Fn(&Invocation<'_>) -> Flow + 'static {
        let calls = Rc::clone(&self.calls);
        let label = label.to_string();
        move |invocation| {
            calls.borrow_mut().push(Call::Option {
                label: label.clone(),
                key: invocation.key.to_string(),
            });
            flow.clone()
        }
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    /// Labels of recorded calls, in firing order.
    pub fn labels(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|call| match call {
                Call::Run { label, .. } | Call::Option { label, .. } => label.clone(),
            })
            .collect()
    }

    pub fn runs(&self) -> usize {
        self.calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Run { .. }))
            .count()
    }

    /// Values passed to the most recent command callback.
    pub fn last_values(&self) -> Option<OptionValues> {
        self.calls.borrow().iter().rev().find_map(|call| match call {
            Call::Run { values, .. } => Some(values.clone()),
            Call::Option { .. } => None,
        })
    }
}

//! Turn values into identifier fragments and assemble unique test names.
//!
//! Synthesis is lossy: every character outside the alphanumerics and the
//! fixed punctuation table collapses to `_`, so `"a b"` and `"a@b"` produce
//! the same token. Two combinations that end up with the same name are told
//! apart by [`NameRegistry`], which appends `_0`, `_1`, ... to the later ones.
use std::{collections::HashSet, fmt::Display};

use crate::{Combination, Error};

/// How many candidate names the registry tries for a single test: the bare
/// name and then the suffixes `_0` .. `_1022`.
pub const MAX_NAME_ATTEMPTS: usize = 1024;

fn as_word(c: char) -> Option<&'static str> {
    Some(match c {
        '.' => "_",
        '-' => "minus",
        '+' => "plus",
        '#' => "num",
        '!' => "excl",
        '"' => "quot",
        '$' => "dollar",
        '%' => "percnt",
        '&' => "amp",
        '/' => "sol",
        '\\' => "bsol",
        '=' => "eq",
        ',' => "comma",
        ';' => "semi",
        ':' => "colon",
        _ => return None,
    })
}

/// Identifier-safe token for `value`.
pub fn synthesize(value: &impl Display) -> String {
    value
        .to_string()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_string()
            } else {
                as_word(c).unwrap_or("_").to_owned()
            }
        })
        .collect()
}

/// Candidate name of the test generated from `template` for `combination`:
/// `test_<template>_<positional tokens>_<name>_<value>...` with named values
/// sorted by name.
pub fn test_name<V: Display>(template: &str, combination: &Combination<V>) -> String {
    let positional = combination
        .positional()
        .iter()
        .map(synthesize)
        .collect::<Vec<_>>()
        .join("_");
    let named = combination
        .sorted_named()
        .into_iter()
        .map(|(name, value)| format!("{}_{}", synthesize(&name), synthesize(value)))
        .collect::<Vec<_>>()
        .join("_");

    let mut name = format!("test_{template}");
    if !combination.is_empty() {
        name.push('_');
    }
    name.push_str(&positional);
    if !combination.positional().is_empty() && !combination.named().is_empty() {
        name.push('_');
    }
    name.push_str(&named);
    name
}

/// The set of names already used in a test group.
#[derive(Debug, Default, Clone)]
pub struct NameRegistry {
    used: HashSet<String>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members<S: Into<String>>(members: impl IntoIterator<Item = S>) -> Self {
        Self {
            used: members.into_iter().map(Into::into).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.used.contains(name)
    }

    /// Mark `name` as used without any check.
    pub fn reserve(&mut self, name: impl Into<String>) {
        self.used.insert(name.into());
    }

    /// Claim `candidate`, or the first free `candidate_<n>`, and return the
    /// claimed name.
    pub fn claim(&mut self, candidate: &str) -> Result<String, Error> {
        std::iter::once(candidate.to_owned())
            .chain((0..MAX_NAME_ATTEMPTS - 1).map(|n| format!("{candidate}_{n}")))
            .find(|name| !self.used.contains(name))
            .map(|name| {
                self.used.insert(name.clone());
                name
            })
            .ok_or_else(|| Error::NameCollision {
                prefix: candidate.to_owned(),
                attempts: MAX_NAME_ATTEMPTS,
            })
    }
}

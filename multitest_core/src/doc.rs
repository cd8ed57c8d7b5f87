//! Documentation templating.
//!
//! A template doc can refer to its bound values: `$arg0`, `${arg1}` ... for
//! positional values and `$name` / `${name}` for named ones. `$$` is a
//! literal `$`. Placeholders that don't match any value are left untouched.
use std::{collections::HashMap, fmt::Display, sync::OnceLock};

use regex::{Captures, Regex};

use crate::Combination;

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"\$(?:(?P<escaped>\$)|(?P<named>[_a-zA-Z][_a-zA-Z0-9]*)|\{(?P<braced>[_a-zA-Z][_a-zA-Z0-9]*)\})",
        )
        .expect("placeholder regex")
    })
}

/// Rendered values by placeholder name. A named value called like a
/// positional placeholder (e.g. `arg0`) wins over the positional one.
pub(crate) fn placeholders<V: Display>(combination: &Combination<V>) -> HashMap<String, String> {
    let mut values = combination
        .positional()
        .iter()
        .enumerate()
        .map(|(i, v)| (format!("arg{i}"), v.to_string()))
        .collect::<HashMap<_, _>>();
    values.extend(
        combination
            .named()
            .iter()
            .map(|(n, v)| (n.clone(), v.to_string())),
    );
    values
}

/// Fill `doc` placeholders with the values of `combination`.
pub fn substitute<V: Display>(doc: &str, combination: &Combination<V>) -> String {
    let values = placeholders(combination);
    placeholder_regex()
        .replace_all(doc, |caps: &Captures| {
            if caps.name("escaped").is_some() {
                return "$".to_owned();
            }
            caps.name("named")
                .or_else(|| caps.name("braced"))
                .and_then(|key| values.get(key.as_str()))
                .cloned()
                .unwrap_or_else(|| caps[0].to_owned())
        })
        .into_owned()
}

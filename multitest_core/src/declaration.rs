use crate::{combination::Combinations, Value};

/// The parameter domains attached to a template: positional domains in
/// declaration order followed by named domains in declaration order.
///
/// The engine never checks that the domains match the template signature:
/// a mismatch shows up only when a generated test binds its arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration<V = Value> {
    positional: Vec<Vec<V>>,
    named: Vec<(String, Vec<V>)>,
}

impl<V> Default for Declaration<V> {
    fn default() -> Self {
        Self {
            positional: Default::default(),
            named: Default::default(),
        }
    }
}

impl<V> Declaration<V> {
    /// Append a positional domain.
    pub fn positional<I>(mut self, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        self.push_positional(values.into_iter().map(Into::into).collect());
        self
    }

    /// Append a named domain. Declaring the same name again replaces its
    /// values but keeps its original position.
    pub fn named<I>(mut self, name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<V>,
    {
        self.push_named(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    pub fn push_positional(&mut self, values: Vec<V>) {
        self.positional.push(values)
    }

    pub fn push_named(&mut self, name: String, values: Vec<V>) {
        match self.named.iter_mut().find(|(n, _)| n == &name) {
            Some((_, domain)) => *domain = values,
            None => self.named.push((name, values)),
        }
    }

    pub fn positional_domains(&self) -> &[Vec<V>] {
        &self.positional
    }

    pub fn named_domains(&self) -> &[(String, Vec<V>)] {
        &self.named
    }

    /// Total number of domains, positional and named.
    pub fn domains_count(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    pub(crate) fn domain(&self, index: usize) -> &[V] {
        match index.checked_sub(self.positional.len()) {
            None => &self.positional[index],
            Some(named) => &self.named[named].1,
        }
    }

    /// How many combinations the declaration produces: the product of all
    /// domain lengths (1 when there are no domains at all).
    pub fn combinations_count(&self) -> usize {
        (0..self.domains_count())
            .map(|i| self.domain(i).len())
            .product()
    }

    /// Lazy, restartable iterator over every combination: the last declared
    /// domain varies fastest.
    pub fn combinations(&self) -> Combinations<'_, V> {
        Combinations::new(self)
    }
}

impl Declaration<Value> {
    /// Empty declaration of [`Value`] domains. Use `Declaration::default()`
    /// for other value types.
    pub fn new() -> Self {
        Self::default()
    }

    /// Text domain made by the characters of `text`: `"+-"` is the same as
    /// `["+", "-"]`.
    pub fn chars(text: &str) -> Vec<Value> {
        text.chars().map(Value::from).collect()
    }
}

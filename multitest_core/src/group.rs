use std::fmt::Display;

use crate::{
    bind::{Arguments, TemplateFn},
    doc::substitute,
    name::{test_name, NameRegistry},
    BindingError, Combination, Declaration, Error, Value,
};

/// A parameterized test body with its domains.
///
/// `T` is whatever the host uses to call the body: a [`TemplateFn`] at
/// runtime, a reference to the source function at compile time.
#[derive(Debug, Clone)]
pub struct Template<T, V = Value> {
    name: String,
    doc: Option<String>,
    declaration: Declaration<V>,
    body: T,
}

impl<T, V> Template<T, V> {
    pub fn new(name: impl Into<String>, declaration: Declaration<V>, body: T) -> Self {
        Self {
            name: name.into(),
            doc: None,
            declaration,
            body,
        }
    }

    pub fn with_doc(mut self, doc: impl Into<String>) -> Self {
        self.doc = Some(doc.into());
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    pub fn declaration(&self) -> &Declaration<V> {
        &self.declaration
    }

    pub fn body(&self) -> &T {
        &self.body
    }
}

/// The declarative table of a test group: the names it already declares and
/// its templates.
#[derive(Debug, Clone)]
pub struct TestGroup<T, V = Value> {
    members: Vec<String>,
    templates: Vec<Template<T, V>>,
}

impl<T, V> Default for TestGroup<T, V> {
    fn default() -> Self {
        Self {
            members: Default::default(),
            templates: Default::default(),
        }
    }
}

impl<T, V> TestGroup<T, V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a name that generated tests must not reuse.
    pub fn member(mut self, name: impl Into<String>) -> Self {
        self.push_member(name);
        self
    }

    pub fn template(mut self, template: Template<T, V>) -> Self {
        self.push_template(template);
        self
    }

    pub fn push_member(&mut self, name: impl Into<String>) {
        self.members.push(name.into())
    }

    pub fn push_template(&mut self, template: Template<T, V>) {
        self.templates.push(template)
    }

    pub fn templates(&self) -> &[Template<T, V>] {
        &self.templates
    }
}

impl<T: Clone, V: Clone + Display> TestGroup<T, V> {
    /// Generate a test for every combination of every template, in template
    /// declaration order.
    ///
    /// Templates and members names are reserved before any test is named.
    /// The group is consumed: the returned [`Expansion`] can't grow anymore.
    pub fn expand(self) -> Result<Expansion<T, V>, Error> {
        let mut registry = NameRegistry::with_members(
            self.members
                .iter()
                .cloned()
                .chain(self.templates.iter().map(|t| t.name.clone())),
        );
        let mut tests = Vec::new();
        for template in &self.templates {
            for combination in template.declaration.combinations() {
                let name = registry.claim(&test_name(&template.name, &combination))?;
                let doc = template.doc.as_deref().map(|d| substitute(d, &combination));
                tests.push(GeneratedTest {
                    name,
                    doc,
                    template: template.name.clone(),
                    combination,
                    body: template.body.clone(),
                });
            }
        }
        Ok(Expansion { tests })
    }
}

/// A test materialized for a single combination.
#[derive(Debug, Clone)]
pub struct GeneratedTest<T, V = Value> {
    name: String,
    doc: Option<String>,
    template: String,
    combination: Combination<V>,
    body: T,
}

impl<T, V> GeneratedTest<T, V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Template documentation with placeholders resolved.
    pub fn doc(&self) -> Option<&str> {
        self.doc.as_deref()
    }

    /// Name of the template that generated this test.
    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn combination(&self) -> &Combination<V> {
        &self.combination
    }

    pub fn body(&self) -> &T {
        &self.body
    }
}

impl GeneratedTest<TemplateFn> {
    /// Call the template with the bound values.
    pub fn run(&self) -> Result<(), BindingError> {
        (self.body)(&Arguments::new(&self.combination))
    }
}

/// All the tests generated for a group, in generation order.
#[derive(Debug, Clone)]
pub struct Expansion<T, V = Value> {
    tests: Vec<GeneratedTest<T, V>>,
}

impl<T, V> Expansion<T, V> {
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, GeneratedTest<T, V>> {
        self.tests.iter()
    }

    pub fn get(&self, name: &str) -> Option<&GeneratedTest<T, V>> {
        self.tests.iter().find(|t| t.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tests.iter().map(GeneratedTest::name)
    }
}

impl<T, V> IntoIterator for Expansion<T, V> {
    type Item = GeneratedTest<T, V>;
    type IntoIter = std::vec::IntoIter<GeneratedTest<T, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tests.into_iter()
    }
}

impl<'a, T, V> IntoIterator for &'a Expansion<T, V> {
    type Item = &'a GeneratedTest<T, V>;
    type IntoIter = std::slice::Iter<'a, GeneratedTest<T, V>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

use crate::{Declaration, Value};

/// One element of the cartesian product of a [`Declaration`]: a value for
/// every positional domain and a value for every named domain.
#[derive(Debug, Clone, PartialEq)]
pub struct Combination<V = Value> {
    positional: Vec<V>,
    named: Vec<(String, V)>,
}

impl<V> Default for Combination<V> {
    fn default() -> Self {
        Self {
            positional: Default::default(),
            named: Default::default(),
        }
    }
}

impl<V> Combination<V> {
    pub fn new(positional: Vec<V>, named: Vec<(String, V)>) -> Self {
        Self { positional, named }
    }

    pub fn positional(&self) -> &[V] {
        &self.positional
    }

    /// Named values in the order their domains were declared.
    pub fn named(&self) -> &[(String, V)] {
        &self.named
    }

    pub fn get(&self, name: &str) -> Option<&V> {
        self.named
            .iter()
            .find_map(|(n, v)| if n == name { Some(v) } else { None })
    }

    /// Named values sorted by parameter name.
    pub fn sorted_named(&self) -> Vec<(&str, &V)> {
        let mut named = self
            .named
            .iter()
            .map(|(n, v)| (n.as_str(), v))
            .collect::<Vec<_>>();
        named.sort_by(|(a, _), (b, _)| a.cmp(b));
        named
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    pub fn map<U>(self, f: impl Fn(V) -> U) -> Combination<U> {
        Combination {
            positional: self.positional.into_iter().map(&f).collect(),
            named: self.named.into_iter().map(|(n, v)| (n, f(v))).collect(),
        }
    }
}

/// Odometer over the domains of a [`Declaration`]: positional domains first,
/// then named ones, last domain varies fastest.
#[derive(Debug)]
pub struct Combinations<'a, V> {
    declaration: &'a Declaration<V>,
    indexes: Vec<usize>,
    remaining: usize,
}

impl<'a, V> Clone for Combinations<'a, V> {
    fn clone(&self) -> Self {
        Self {
            declaration: self.declaration,
            indexes: self.indexes.clone(),
            remaining: self.remaining,
        }
    }
}

impl<'a, V> Combinations<'a, V> {
    pub(crate) fn new(declaration: &'a Declaration<V>) -> Self {
        Self {
            declaration,
            indexes: vec![0; declaration.domains_count()],
            remaining: declaration.combinations_count(),
        }
    }

    fn advance(&mut self) {
        for (pos, index) in self.indexes.iter_mut().enumerate().rev() {
            *index += 1;
            if *index < self.declaration.domain(pos).len() {
                return;
            }
            *index = 0;
        }
    }
}

impl<'a, V: Clone> Iterator for Combinations<'a, V> {
    type Item = Combination<V>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let n_positional = self.declaration.positional_domains().len();
        let (positional, named) = self.indexes.split_at(n_positional);
        let combination = Combination::new(
            positional
                .iter()
                .enumerate()
                .map(|(pos, &i)| self.declaration.domain(pos)[i].clone())
                .collect(),
            self.declaration
                .named_domains()
                .iter()
                .zip(named)
                .map(|((name, domain), &i)| (name.clone(), domain[i].clone()))
                .collect(),
        );
        self.remaining -= 1;
        self.advance();
        Some(combination)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'a, V: Clone> ExactSizeIterator for Combinations<'a, V> {}

#[cfg(test)]
mod should {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn positional(c: &Combination) -> Vec<String> {
        c.positional().iter().map(ToString::to_string).collect()
    }

    fn named(c: &Combination) -> Vec<String> {
        c.named().iter().map(|(n, v)| format!("{n}={v}")).collect()
    }

    #[test]
    fn yield_one_empty_combination_without_domains() {
        let declaration = Declaration::<Value>::new();

        let combinations = declaration.combinations().collect::<Vec<_>>();

        assert_eq!(vec![Combination::default()], combinations);
        assert!(combinations[0].is_empty());
    }

    #[test]
    fn yield_nothing_if_a_domain_is_empty() {
        let declaration = Declaration::<Value>::new()
            .positional([1, 2])
            .named("a", Vec::<Value>::new());

        assert_eq!(0, declaration.combinations().count());
    }

    #[test]
    fn iterate_positional_before_named_and_last_domain_fastest() {
        let declaration = Declaration::<Value>::new()
            .positional([1, 2])
            .named("col", ["a", "b"]);

        let combinations = declaration
            .combinations()
            .map(|c| (positional(&c), named(&c)))
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                (vec!["1".to_owned()], vec!["col=a".to_owned()]),
                (vec!["1".to_owned()], vec!["col=b".to_owned()]),
                (vec!["2".to_owned()], vec!["col=a".to_owned()]),
                (vec!["2".to_owned()], vec!["col=b".to_owned()]),
            ],
            combinations
        );
    }

    #[test]
    fn follow_odometer_order_across_many_domains() {
        let declaration = Declaration::<Value>::new()
            .positional([0, 1])
            .positional([0, 1, 2])
            .named("z", [0, 1])
            .named("a", [7]);

        let rendered = declaration
            .combinations()
            .map(|c| {
                c.positional()
                    .iter()
                    .chain(c.named().iter().map(|(_, v)| v))
                    .map(ToString::to_string)
                    .collect::<String>()
            })
            .collect::<Vec<_>>();

        assert_eq!(
            vec![
                "0007", "0017", "0107", "0117", "0207", "0217", "1007", "1017", "1107", "1117",
                "1207", "1217"
            ],
            rendered
        );
    }

    #[rstest]
    #[case(&[], &[], 1)]
    #[case(&[3], &[], 3)]
    #[case(&[2, 3], &[4], 24)]
    #[case(&[], &[1, 5], 5)]
    #[case(&[2, 0], &[4], 0)]
    fn produce_exactly_the_product_of_domain_lengths(
        #[case] positional: &[usize],
        #[case] named: &[usize],
        #[case] expected: usize,
    ) {
        let mut declaration = Declaration::<Value>::new();
        for &len in positional {
            declaration.push_positional((0..len as i64).map(Value::Int).collect());
        }
        for (i, &len) in named.iter().enumerate() {
            declaration.push_named(format!("n{i}"), (0..len as i64).map(Value::Int).collect());
        }

        let combinations = declaration.combinations();

        assert_eq!(expected, combinations.len());
        assert_eq!(expected, combinations.count());
    }

    #[test]
    fn be_restartable() {
        let declaration = Declaration::<Value>::new()
            .positional([1, 2, 3])
            .named("b", [true, false]);
        let mut first = declaration.combinations();
        first.next();
        let restarted = first.clone();

        assert_eq!(
            first.collect::<Vec<_>>(),
            restarted.collect::<Vec<_>>()
        );
        assert_eq!(
            declaration.combinations().collect::<Vec<_>>(),
            declaration.combinations().collect::<Vec<_>>()
        );
    }

    #[test]
    fn sort_named_values_by_name() {
        let combination = Combination::new(
            vec![],
            vec![
                ("extra".to_owned(), Value::from("+")),
                ("col".to_owned(), Value::from("a")),
            ],
        );

        assert_eq!(
            vec!["col", "extra"],
            combination
                .sorted_named()
                .into_iter()
                .map(|(n, _)| n)
                .collect::<Vec<_>>()
        );
        assert_eq!(Some(&Value::from("+")), combination.get("extra"));
        assert_eq!(None, combination.get("missed"));
    }
}

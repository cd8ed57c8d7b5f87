use std::borrow::Cow;
use std::thread;

#[macro_export]
macro_rules! assert_in {
    ($text:expr, $message:expr) => ({
        match (&$text, &$message) {
            (text_val, message_val) => {
                if !text_val.contains(message_val) {
                    panic!(r#"assertion failed: `text don't contain message`
         text: `{}`,
         message: `{}`"#, text_val, message_val)
                }
            }
        }
        });
    ($text:expr, $message:expr, ) => (
        assert_in!($text, $message)
    );
    ($text:expr, $message:expr, $($arg:tt)+) => ({
        match (&$text, &$message) {
            (text_val, message_val) => {
                if !text_val.contains(message_val) {
                    panic!(r#"assertion failed: `text don't contain message`
         text: `{}`,
         message: `{}`: {}"#, text_val, message_val, format_args!($($arg)+))
                }
            }
        }
        });
}

#[macro_export]
macro_rules! assert_all_in {
    ($text:expr, $expected:expr) => (
        $crate::assert_in!($text, $expected)
    );
    ($text:expr, $expected:expr, ) => (
        $crate::assert_in!($text, $expected)
    );
    ($text:expr, $expected:expr, $( $others:expr ) ,+) => (
        {
            $crate::assert_in!($text, $expected);
            $crate::assert_all_in!($text $(, $others)*);
        }
    );
}

#[macro_export]
macro_rules! assert_not_in {
    ($text:expr, $message:expr) => ({
        match (&$text, &$message) {
            (text_val, message_val) => {
                if text_val.contains(message_val) {
                    panic!(r#"assertion failed: `text contains message`
         text: `{}`,
         message: `{}`"#, text_val, message_val)
                }
            }
        }
        });
    ($text:expr, $message:expr, ) => (
        assert_not_in!($text, $message)
    );
    ($text:expr, $message:expr, $($arg:tt)+) => ({
        match (&$text, &$message) {
            (text_val, message_val) => {
                if text_val.contains(message_val) {
                    panic!(r#"assertion failed: `text contains message`
         text: `{}`,
         message: `{}`: {}"#, text_val, message_val, format_args!($($arg)+))
                }
            }
        }
        });
}

#[macro_export]
macro_rules! assert_regex {
    ($regex:expr, $text:expr) => ({
        match (&$text, &$regex) {
            (text_val, regex_val) => {
                use $crate::regex::Regex;
                if !Regex::new(regex_val).unwrap().is_match(text_val) {
                    panic!(r#"assertion failed: `text don't satisfy regex`
         regex: `{}`,
         text: `{}`"#, regex_val, text_val)
                }
            }
        }
        });
    ($regex:expr, $text:expr, ) => (
        assert_regex!($regex, $text)
    );
}

#[derive(Clone, Debug)]
pub(crate) struct TestInfo {
    exactly: bool,
    times: usize,
}

impl Default for TestInfo {
    fn default() -> Self {
        Self {
            exactly: true,
            times: 1,
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum TestResult<S: AsRef<str>> {
    Ok(S, TestInfo),
    Fail(S, TestInfo),
    Ignored(S, TestInfo),
}

impl<S: AsRef<str>> TestResult<S> {
    fn full_name(&self, module: Option<&str>) -> String {
        match module {
            Some(module) => format!("{}::{}", module, self.name()),
            None => self.name(),
        }
    }

    fn assert(&self, module: Option<&str>, output: impl AsRef<str>) {
        let name = self.full_name(module);
        let regex = if self.exactly() {
            format!(
                "test {}( - should panic)? ... {}",
                regex::escape(&name),
                self.msg()
            )
        } else {
            format!(
                "test .*{}.*( - should panic)? ... {}",
                regex::escape(&name),
                self.msg()
            )
        };
        match self.times() {
            0 => {}
            1 => {
                assert_regex!(regex, output.as_ref());
            }
            n => {
                assert_regex!(regex, output.as_ref());
                assert_eq!(
                    n,
                    count_regex(output.as_ref(), &regex),
                    "test {} is present but wrong count",
                    name
                );
            }
        }
    }

    fn ok(name: S, exactly: bool, occurrence: usize) -> Self {
        Self::Ok(
            name,
            TestInfo {
                exactly,
                times: occurrence,
            },
        )
    }

    fn fail(name: S, exactly: bool, occurrence: usize) -> Self {
        Self::Fail(
            name,
            TestInfo {
                exactly,
                times: occurrence,
            },
        )
    }

    fn ignored(name: S) -> Self {
        Self::Ignored(name, Default::default())
    }

    pub fn is_fail(&self) -> bool {
        matches!(*self, TestResult::Fail(_, _))
    }

    pub fn name(&self) -> String {
        match self {
            TestResult::Ok(s, _) | TestResult::Fail(s, _) | TestResult::Ignored(s, _) => {
                s.as_ref().to_owned()
            }
        }
    }

    pub fn msg(&self) -> &'static str {
        match self {
            TestResult::Ok(_, _) => "ok",
            TestResult::Fail(_, _) => "FAILED",
            TestResult::Ignored(_, _) => "ignored",
        }
    }

    fn info(&self) -> &TestInfo {
        match self {
            TestResult::Ok(_, o) | TestResult::Fail(_, o) | TestResult::Ignored(_, o) => o,
        }
    }

    fn exactly(&self) -> bool {
        self.info().exactly
    }

    fn times(&self) -> usize {
        self.info().times
    }
}

/// Expected outcome of a `cargo test` run.
#[derive(Default, Clone, Debug)]
pub struct TestResults<S>
where
    S: AsRef<str> + Clone,
{
    results: Vec<TestResult<S>>,
    contains: bool,
    module: Option<String>,
}

impl<S> TestResults<S>
where
    S: AsRef<str> + Clone,
{
    pub fn new() -> Self {
        TestResults {
            results: vec![],
            contains: false,
            module: None,
        }
    }

    pub fn with_contains(self, contains: bool) -> Self {
        Self { contains, ..self }
    }

    /// Look for tests in the given module path, like a `#[multitest]` group.
    pub fn in_module(self, module: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            ..self
        }
    }

    pub fn ok_with(self, name: S, exactly: bool, occurrence: usize) -> Self {
        self.append(TestResult::ok(name, exactly, occurrence))
    }

    pub fn fail_with(self, name: S, exactly: bool, occurrence: usize) -> Self {
        self.append(TestResult::fail(name, exactly, occurrence))
    }

    pub fn ok(self, name: S) -> Self {
        let contains = self.contains;
        self.ok_with(name, !contains, 1)
    }

    pub fn fail(self, name: S) -> Self {
        let contains = self.contains;
        self.fail_with(name, !contains, 1)
    }

    /// A test marked by `#[ignore]`: listed but not run.
    pub fn ignored(self, name: S) -> Self {
        self.append(TestResult::ignored(name))
    }

    pub fn ok_times(self, name: S, occurrence: usize) -> Self {
        let contains = self.contains;
        self.ok_with(name, !contains, occurrence)
    }

    pub(crate) fn append(mut self, test: TestResult<S>) -> Self {
        self.results.push(test);
        self
    }

    pub fn assert(&self, output: ::std::process::Output) {
        let (expected_code, msg) = if !self.should_fail() {
            (0, "Unexpected fails!")
        } else {
            (101, "Some test should fail!")
        };
        assert_eq!(
            Some(expected_code),
            output.status.code(),
            "{}\n Console: \nOUT:\n{}\nERR:\n{}\n",
            msg,
            output.stdout.str(),
            output.stderr.str()
        );

        let stderr = output.stderr.str();
        let output = output.stdout.str();
        if output.is_empty() {
            eprintln!("Stderr: {stderr}");
            panic!("Empty stdout!");
        }

        assert_in!(output, format!("running {} test", self.count_tests()));

        let module = self.module.as_deref();
        self.results
            .iter()
            .for_each(|t| t.assert(module, output.as_ref()));

        if self.should_fail() {
            assert_in!(output, "failures:".to_string());
        }

        self.results
            .iter()
            .filter(|r| r.is_fail())
            .for_each(|t| assert_in!(output, format!("    {}", t.full_name(module))));
    }

    fn should_fail(&self) -> bool {
        self.results.iter().any(|r| r.is_fail())
    }

    fn count_tests(&self) -> usize {
        self.results.iter().map(|t| t.times()).sum()
    }
}

/// Test names printed by `cargo test -- --list`, in the printed order.
pub fn listed_tests(output: impl AsRef<str>) -> Vec<String> {
    output
        .as_ref()
        .lines()
        .filter_map(|line| line.strip_suffix(": test"))
        .map(ToOwned::to_owned)
        .collect()
}

pub trait Stringable {
    fn str(&self) -> Cow<'_, str>;
}

impl<B: AsRef<[u8]>> Stringable for B {
    fn str(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.as_ref())
    }
}

pub fn testname() -> String {
    thread::current().name().unwrap().to_string()
}

/// A valid project name from a test name like `module::test`.
pub fn sanitize_name<S: AsRef<str>>(s: S) -> String {
    s.as_ref().replace(':', "_").replace("__", "_")
}

/// How many lines of `text` match `regex`.
fn count_regex(text: &str, regex: &str) -> usize {
    let regex = regex::Regex::new(regex).unwrap();
    text.lines().filter(|line| regex.is_match(line)).count()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn should_count_regex_occurrence() {
        let message = "
        test group::test_t_1 ... ok
        test group::test_t_2 ... FAILED
        test group::test_u_1 ... ok
        ";

        assert_eq!(2, count_regex(message, r"test_t_\d"));
    }

    #[test]
    fn should_get_test_path() {
        assert_eq!("utils::test::should_get_test_path", testname());
    }

    #[test]
    fn should_parse_listed_tests() {
        let output = "
group::test_t_1: test
group::test_t_2: test
src/lib.rs - group (line 3): test

3 tests, 0 benchmarks
";

        assert_eq!(
            vec!["group::test_t_1", "group::test_t_2", "src/lib.rs - group (line 3)"],
            listed_tests(output)
        );
    }

    #[test]
    fn should_sanitize_test_path() {
        assert_eq!("module_test_name", sanitize_name("module::test_name"));
    }
}

use std::path::Path;

use multitest_test::*;
use rstest::rstest;
use unindent::Unindent;

pub fn resources(res: impl AsRef<Path>) -> std::path::PathBuf {
    let path = Path::new("multitest").join(res.as_ref());
    super::resources(path)
}

fn prj(res: impl AsRef<Path>) -> Project {
    crate::prj().set_code_file(resources(res))
}

fn run_test(res: impl AsRef<Path>) -> (std::process::Output, String) {
    let prj = prj(res);
    (
        prj.run_tests().unwrap(),
        prj.get_name().to_owned().to_string(),
    )
}

#[test]
fn should_generate_a_test_for_each_combination() {
    let (output, _) = run_test("steps.rs");

    let mut results = TestResults::new().in_module("group");
    for row in ["1_0", "2_0", "3_456"] {
        for col in ["a", "b", "c"] {
            for extra in ["plus", "minus"] {
                let name = format!("test_steps_{row}_col_{col}_extra_{extra}");
                results = if row == "3_456" {
                    results.fail(name)
                } else {
                    results.ok(name)
                };
            }
        }
    }

    results.assert(output);
}

#[test]
fn should_list_tests_named_by_values() {
    let prj = prj("steps.rs");

    let output = prj.list_tests().unwrap();
    let mut tests = listed_tests(output.stdout.str());
    tests.sort();

    let mut expected = ["1_0", "2_0", "3_456"]
        .iter()
        .flat_map(|row| {
            ["a", "b", "c"].iter().flat_map(move |col| {
                ["minus", "plus"]
                    .iter()
                    .map(move |extra| format!("group::test_steps_{row}_col_{col}_extra_{extra}"))
            })
        })
        .collect::<Vec<_>>();
    expected.sort();
    assert_eq!(expected, tests);
}

#[test]
fn should_synthesize_names_from_every_kind_of_value() {
    let (output, _) = run_test("values.rs");

    TestResults::new()
        .in_module("values")
        .fail("test_int_minus1")
        .ok("test_int_0")
        .ok("test_int_42")
        .ok("test_char_and_bool_x_flag_true")
        .ok("test_char_and_bool_x_flag_false")
        .ok("test_char_and_bool_y_flag_true")
        .fail("test_char_and_bool_y_flag_false")
        .ok("test_text_aplusb")
        .ok("test_text_c_d")
        .ok("test_text_1sol2")
        .ok("test_no_domains")
        .assert(output);
}

#[test]
fn should_not_hide_module_items_and_resolve_collisions() {
    let (output, _) = run_test("collisions.rs");

    TestResults::new()
        .in_module("group")
        .ok("test_t_1_0")
        .ok("test_t_2_0")
        .ok("test_t_3")
        .ok("test_same_asolb")
        .ok("test_same_a_b")
        .ok("test_same_a_b_0")
        .assert(output);
}

#[test]
fn should_move_test_attributes_to_generated_tests() {
    let (output, _) = run_test("panic.rs");

    TestResults::new()
        .in_module("group")
        .fail("test_not_positive_1")
        .ok("test_not_positive_0")
        .ok("test_not_positive_minus1")
        .ignored("test_ignored_1")
        .ignored("test_ignored_2")
        .fail("test_with_cfg_1")
        .ok("test_with_cfg_2")
        .assert(output);
}

#[test]
fn should_keep_template_return_type() {
    let (output, _) = run_test("return_result.rs");

    TestResults::new()
        .in_module("group")
        .ok("test_parse_42")
        .fail("test_parse_no")
        .assert(output);
}

#[test]
fn should_await_async_templates() {
    let prj = prj("async.rs");
    prj.add_dependency("async-std", r#"{version="1.13", features=["attributes"]}"#);

    let output = prj.run_tests().unwrap();

    TestResults::new()
        .in_module("group")
        .ok("test_default_attr_1")
        .ok("test_default_attr_2")
        .fail("test_default_attr_3")
        .ok("test_explicit_attr_v_1")
        .ok("test_explicit_attr_v_3")
        .assert(output);
}

#[test]
fn should_trace_arguments_only_when_asked() {
    let (output, _) = run_test("trace.rs");
    let out = output.stdout.str().to_string();

    TestResults::new()
        .in_module("group")
        .fail("test_traced_42_name_trace_me")
        .fail("test_not_traced_24")
        .assert(output);

    assert_in!(out, "---------- TEST ARGUMENTS ----------");
    assert_in!(out, "v = 42");
    assert_in!(out, r#"name = "trace me""#);
    assert_not_in!(out, "v = 24");
}

mod should_show_correct_errors {
    use std::process::Output;

    use lazy_static::lazy_static;

    use super::*;

    fn execute() -> &'static (Output, String) {
        lazy_static! {
            static ref OUTPUT: (Output, String) = run_test("errors.rs");
        }
        assert_ne!(Some(0), OUTPUT.0.status.code(), "Should not compile");
        &OUTPUT
    }

    #[rstest]
    #[case::empty_values("empty_values", "Values list should not be empty")]
    #[case::unsupported_value(
        "unsupported_value",
        "Unsupported value: use an integer, float, string, char or bool literal"
    )]
    #[case::positional_after_named(
        "positional_after_named",
        "Positional domains should precede the named ones"
    )]
    #[case::duplicate_domain("duplicate_domain", "Duplicate domain: 'a' is already defined.")]
    #[case::not_a_function("not_a_function", "#[combined] can be used just on functions")]
    #[case::twice(
        "twice",
        "You cannot use 'combined' attribute more than once for the same function"
    )]
    #[case::with_arguments("with_arguments", "#[multitest] doesn't take any argument")]
    fn report_error(#[case] module: &str, #[case] message: &str) {
        let (output, _) = execute();
        let stderr = output.stderr.str();

        assert_in!(stderr, format!("error: {message}"), "module {module}");
    }
}

#[test]
fn should_report_binding_errors_in_the_generated_test() {
    let (output, name) = run_test("binding_errors.rs");
    let stderr = output.stderr.str();

    assert_in!(
        stderr,
        format!(
            r#"
            error: test_too_many_1_2: too_many(): takes 1 positional arguments but 2 were given
             --> {name}/src/lib.rs:6:5
            "#
        )
        .unindent()
    );
    assert_all_in!(
        stderr,
        "error: test_unknown_b_1: unknown(): unexpected named argument 'b'",
        "error: test_missing_1: missing(): missed named argument 'b'",
        "error: test_twice_1_a_2: twice(): got multiple values for argument 'a'"
    );
}

use multitest_test::{assert_all_in, assert_in, assert_not_in, assert_regex};
use rstest::rstest;

const TEXT: &str = "generated test_steps_1_0
        continue.
        test_steps_2_0";

#[rstest]
#[case::single_line("test_steps")]
#[case::across_lines("1_0
        cont")]
fn assert_in_should_find_string(#[case] message: &str) {
    assert_in!(TEXT, message);
}

#[rstest]
#[case::missing("test_other")]
#[case::empty_text("")]
#[should_panic]
fn assert_in_should_panic_if_no_string_in_message(#[case] text_or_message: &str) {
    if text_or_message.is_empty() {
        assert_in!(text_or_message, "a");
    } else {
        assert_in!(TEXT, text_or_message);
    }
}

#[test]
#[should_panic(expected = "test_steps_2_0")]
fn assert_in_should_yield_text_if_fail() {
    assert_in!(TEXT, "x_y_z");
}

#[test]
#[should_panic(expected = "x_y_z")]
fn assert_in_should_yield_message_if_fail() {
    assert_in!(TEXT, "x_y_z");
}

#[test]
fn assert_all_in_should_check_all_clause() {
    assert_all_in!(TEXT, "test_steps_1", "continue", "steps_2_0");
}

#[test]
#[should_panic(expected = "xxx")]
fn assert_all_in_should_raise_the_first_that_didnt_match() {
    assert_all_in!(TEXT, "continue", "xxx", "yyy", "steps_2_0");
}

#[test]
fn assert_not_in_should_pass_if_no_string_in_message() {
    assert_not_in!(TEXT, "test_other");
    assert_not_in!("", "a");
}

#[test]
#[should_panic(expected = "_1_0")]
fn assert_not_in_should_yield_message_if_fail() {
    assert_not_in!(TEXT, "_1_0");
}

#[test]
fn assert_regex_should_match_across_lines() {
    assert_regex!(r"test_steps_\d_0\s+continue", TEXT);
}

#[rstest]
#[case::no_match(r"test_steps_\d_1")]
#[should_panic(expected = "don't satisfy regex")]
fn assert_regex_should_panic_if_message_dont_match(#[case] regex: &str) {
    assert_regex!(regex, TEXT);
}

use multitest::multitest;

#[multitest]
mod values {
    #[combined([-1, 0, 42])]
    fn int(v: i64) {
        assert!(v >= 0)
    }

    #[combined(['x', 'y'], flag = [true, false])]
    fn char_and_bool(c: char, flag: bool) {
        assert!(c == 'x' || flag)
    }

    #[combined(["a+b", "c.d", "1/2"])]
    fn text(t: &str) {
        assert_eq!(3, t.len())
    }

    #[combined]
    fn no_domains() {}
}

use multitest::multitest;

#[multitest]
mod group {
    use std::fmt::Debug as test_t_1;

    fn test_t_2() {}

    #[combined([1, 2, 3])]
    fn t(v: u32) {
        assert!(v > 0)
    }

    #[combined(["a/b", "a_b", "a.b"])]
    fn same(v: &str) {
        assert_eq!(3, v.len())
    }
}

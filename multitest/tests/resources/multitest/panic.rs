use multitest::multitest;

#[multitest]
mod group {
    #[combined([1, 0, -1])]
    #[should_panic]
    fn not_positive(v: i32) {
        assert!(v > 0)
    }

    #[combined([1, 2])]
    #[ignore]
    fn ignored(v: i32) {
        assert!(v > 100)
    }

    #[combined([1, 2])]
    #[cfg(not(any()))]
    fn with_cfg(v: i32) {
        assert!(v > 1)
    }
}

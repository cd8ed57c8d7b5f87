use multitest::multitest;

#[multitest]
mod group {
    #[combined([42], name = ["trace me"])]
    #[trace]
    fn traced(v: u32, name: &str) {
        assert!(v == 0 && name.is_empty())
    }

    #[combined([24])]
    fn not_traced(v: u32) {
        assert_eq!(0, v)
    }
}

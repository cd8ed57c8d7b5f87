use multitest::multitest;

#[multitest]
mod group {
    #[combined([1.0, 2.0, 3.456], col = ["a", "b", "c"], extra = "+-")]
    fn steps(row: f64, col: &str, extra: &str) {
        assert!(row < 3.0, "row {row} is too big");
        assert_eq!(1, col.len());
        assert!(["+", "-"].contains(&extra));
    }
}

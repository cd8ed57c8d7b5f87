use multitest::multitest;

#[multitest]
mod group {
    #[combined(["42", "no"])]
    fn parse(v: &str) -> Result<(), std::num::ParseIntError> {
        v.parse::<u32>().map(|_| ())
    }
}

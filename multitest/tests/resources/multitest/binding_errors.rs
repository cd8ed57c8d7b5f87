use multitest::multitest;

#[multitest]
mod group {
    #[combined([1], [2])]
    fn too_many(a: u32) {}

    #[combined(b = [1])]
    fn unknown(a: u32) {}

    #[combined([1])]
    fn missing(a: u32, b: u32) {}

    #[combined([1], a = [2])]
    fn twice(a: u32) {}
}

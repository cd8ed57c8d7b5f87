use multitest::multitest;

async fn double(v: u32) -> u32 {
    v * 2
}

#[multitest]
mod group {
    use super::double;

    #[combined([1, 2, 3])]
    async fn default_attr(v: u32) {
        assert!(double(v).await < 5)
    }

    #[combined(v = [1, 3])]
    #[async_std::test]
    async fn explicit_attr(v: u32) {
        assert_eq!(1, double(v).await % 4 / 2)
    }
}

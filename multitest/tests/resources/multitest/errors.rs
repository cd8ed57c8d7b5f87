use multitest::multitest;

#[multitest]
mod empty_values {
    #[combined([])]
    fn t(a: u32) {}
}

#[multitest]
mod unsupported_value {
    #[combined([1, some_var])]
    fn t(a: u32) {}
}

#[multitest]
mod positional_after_named {
    #[combined(a = [1], [2])]
    fn t(a: u32, b: u32) {}
}

#[multitest]
mod duplicate_domain {
    #[combined(a = [1], a = [2])]
    fn t(a: u32) {}
}

#[multitest]
mod not_a_function {
    #[combined([1])]
    struct S;
}

#[multitest]
mod twice {
    #[combined([1])]
    #[combined([2])]
    fn t(a: u32) {}
}

#[multitest(some)]
mod with_arguments {}

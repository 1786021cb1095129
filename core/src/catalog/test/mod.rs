use super::*;

pub mod proptest_arb;

//! Ready-made [`GaProblem`](crate::ga::GaProblem) implementations.

mod all_ones;

pub use all_ones::AllOnes;

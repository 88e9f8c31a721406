//! 累加器模块
//!
//! 三重嵌套循环校验和的串行参考实现与 rayon 并行实现。

pub mod core;

pub use core::{compute, compute_parallel, MAX_N};

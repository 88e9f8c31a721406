//! # QACOMPLEXITY-RS
//!
//! O(n³) 复杂度演示负载 - 确定性校验和计算
//!
//! ## 核心能力
//!
//! - **校验和计算**: 三重嵌套循环累加 `(i + j + k) mod 7` (accumulator/)
//! - **并行变体**: 外层索引区间切分，rayon 数据并行，结果逐位一致
//! - **配置管理**: 命令行参数 + TOML 配置文件 (utils/config)
//!
//! ## 架构设计
//!
//! ```text
//! qacomplexity-bench (src/main.rs)
//!     ↓
//! Config Layer (utils/config)
//!     ↓
//! Accumulator Core (accumulator/)
//! ```
//!
//! ## 确定性保证
//!
//! - 算术完全固定：对所有 i, j, k ∈ [0, n) 累加 (i + j + k) mod 7
//! - 串行与并行路径结果逐位一致（加法结合律）
//! - 参考场景: n = 300, 结果 80999999

// ============================================================================
// 外部依赖
// ============================================================================

// 数据并行
pub use rayon;

// 序列化
pub use serde;

// 日志
pub use log;

// 错误处理
pub use thiserror;

// ============================================================================
// 内部模块
// ============================================================================

pub mod accumulator;
pub mod utils;

// 常用类型 re-export
pub use accumulator::{compute, compute_parallel, MAX_N};
pub use utils::config::{BenchConfig, ConfigError, DEFAULT_N};

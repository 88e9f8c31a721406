//! 工具模块

pub mod config;

pub use config::{BenchConfig, ConfigError};

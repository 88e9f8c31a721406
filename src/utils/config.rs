//! 配置管理模块
//!
//! 基准参数来源：TOML 配置文件（`--config`）与命令行参数，
//! 后出现的参数覆盖先出现的。默认配置即参考场景（n = 300，串行）。

use crate::accumulator::MAX_N;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 参考场景的循环上界
pub const DEFAULT_N: u64 = 300;

/// 命令行帮助文本
pub const USAGE: &str = "\
用法: qacomplexity-bench [OPTIONS]

计算三重嵌套循环校验和 sum((i + j + k) mod 7)，并打印十进制结果。

选项:
  -n, --n <N>          循环上界 n（非负整数，默认 300）
      --parallel       使用 rayon 并行计算
      --threads <T>    并行线程数（0 = rayon 默认，默认 0）
      --config <FILE>  从 TOML 配置文件加载参数
  -h, --help           打印帮助
";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown argument: {0}")]
    UnknownArgument(String),

    #[error("missing value for {0}")]
    MissingValue(String),

    #[error("invalid value for {flag}: '{value}' ({reason})")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: String,
        source: toml::de::Error,
    },
}

/// 基准配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchConfig {
    /// 循环上界，迭代次数为 n³
    #[serde(default = "default_n")]
    pub n: u64,

    /// 是否使用并行路径
    #[serde(default)]
    pub parallel: bool,

    /// 并行线程数，0 表示交给 rayon 决定
    #[serde(default)]
    pub threads: usize,
}

fn default_n() -> u64 {
    DEFAULT_N
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            n: DEFAULT_N,
            parallel: false,
            threads: 0,
        }
    }
}

impl BenchConfig {
    /// 从 TOML 文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path_str = path.as_ref().display().to_string();
        let content = fs::read_to_string(path.as_ref()).map_err(|e| ConfigError::Io {
            path: path_str.clone(),
            source: e,
        })?;
        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path_str,
            source: e,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// 从命令行参数构建配置（不含 argv[0]）
    ///
    /// 返回 `Ok(None)` 表示请求了 `--help`。
    pub fn from_args<I>(args: I) -> Result<Option<Self>, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut iter = args.into_iter();

        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "-h" | "--help" => return Ok(None),
                "-n" | "--n" => {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.n = parse_n(&arg, &value)?;
                }
                "--parallel" => config.parallel = true,
                "--threads" => {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config.threads =
                        value.parse::<usize>().map_err(|e| ConfigError::InvalidValue {
                            flag: arg.clone(),
                            value: value.clone(),
                            reason: e.to_string(),
                        })?;
                }
                "--config" => {
                    let value = iter.next().ok_or_else(|| ConfigError::MissingValue(arg.clone()))?;
                    config = Self::load_from_file(&value)?;
                }
                other => return Err(ConfigError::UnknownArgument(other.to_string())),
            }
        }

        config.validate()?;
        Ok(Some(config))
    }

    /// 校验参数范围
    ///
    /// n > MAX_N 时 6·n³ 超出 u64，核心循环不做溢出检查，必须在此拦截。
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n > MAX_N {
            return Err(ConfigError::InvalidValue {
                flag: "--n".to_string(),
                value: self.n.to_string(),
                reason: format!("exceeds maximum supported n {}", MAX_N),
            });
        }
        Ok(())
    }
}

fn parse_n(flag: &str, value: &str) -> Result<u64, ConfigError> {
    value.parse::<u64>().map_err(|e| ConfigError::InvalidValue {
        flag: flag.to_string(),
        value: value.to_string(),
        reason: e.to_string(),
    })
}

// ═══════════════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════════════

//! qacomplexity-bench - O(n³) 校验和基准程序
//!
//! 默认即参考场景：n = 300，单线程，stdout 输出一行十进制结果。
//! 日志走 stderr，不污染结果行。
//!
//! 运行: cargo run --release --bin qacomplexity-bench

use qacomplexity::accumulator::{compute, compute_parallel};
use qacomplexity::utils::config::{BenchConfig, USAGE};
use std::process;
use std::time::Instant;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match BenchConfig::from_args(std::env::args().skip(1)) {
        Ok(Some(config)) => config,
        Ok(None) => {
            eprint!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("qacomplexity-bench: {}", e);
            eprint!("{}", USAGE);
            process::exit(2);
        }
    };

    log::info!(
        "配置: n = {}, parallel = {}, threads = {}",
        config.n,
        config.parallel,
        config.threads
    );

    let start = Instant::now();
    let result = run(&config);
    let elapsed = start.elapsed();

    log::info!(
        "完成: {} 次迭代, 耗时 {:?}, 校验和 {}",
        config.n.pow(3),
        elapsed,
        result
    );

    println!("{}", result);
}

fn run(config: &BenchConfig) -> u64 {
    if !config.parallel {
        return compute(config.n);
    }

    if config.threads > 0 {
        match rayon::ThreadPoolBuilder::new()
            .num_threads(config.threads)
            .build()
        {
            Ok(pool) => return pool.install(|| compute_parallel(config.n)),
            Err(e) => log::warn!("线程池创建失败, 使用默认线程池: {}", e),
        }
    }

    compute_parallel(config.n)
}

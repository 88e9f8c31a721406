//! 累加器核心
//!
//! 校验和定义：对所有 i, j, k ∈ [0, n) 累加 `(i + j + k) mod 7`，
//! i 为最外层，k 为最内层。加法可交换，结果与嵌套顺序无关，
//! 但参考实现保持该顺序不变。
//!
//! 累加器使用 u64：每项 ∈ [0, 6]，总和上界为 6·n³，
//! n ≤ [`MAX_N`] 时不会溢出（上界由配置层保证，核心循环不做检查）。

use rayon::prelude::*;

/// u64 累加器可承受的最大 n（6·n³ ≤ u64::MAX）
pub const MAX_N: u64 = 1_454_083;

/// 串行参考实现
///
/// 迭代次数为 n³，n = 0 时不进入循环，返回 0。
pub fn compute(n: u64) -> u64 {
    let mut count: u64 = 0;
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                count += (i + j + k) % 7;
            }
        }
    }
    count
}

/// 并行实现
///
/// 外层 i 区间切分到 rayon 线程池，每个分片内部保持 j/k 嵌套循环，
/// 部分和以 u64 加法合并。对任意 n 与 [`compute`] 结果逐位一致。
pub fn compute_parallel(n: u64) -> u64 {
    (0..n)
        .into_par_iter()
        .map(|i| {
            let mut partial: u64 = 0;
            for j in 0..n {
                for k in 0..n {
                    partial += (i + j + k) % 7;
                }
            }
            partial
        })
        .sum()
}

// ═══════════════════════════════════════════════════════════════════════════
// 测试
// ═══════════════════════════════════════════════════════════════════════════

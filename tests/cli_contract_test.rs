// 可执行程序级契约测试
//
// 测试流程：
// 1. 以参考场景运行 qacomplexity-bench，验证 stdout 恰为一行结果
// 2. 验证退出码：成功 0，参数错误 2
// 3. 非法参数时 stdout 保持为空，错误信息走 stderr

use std::process::Command;

fn bench_command() -> Command {
    Command::new(env!("CARGO_BIN_EXE_qacomplexity-bench"))
}

#[test]
fn test_reference_scenario_stdout_line() {
    let output = bench_command().output().expect("failed to run binary");

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "80999999\n");
}

#[test]
fn test_small_n_stdout_line() {
    let output = bench_command()
        .args(["-n", "2"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "12\n");
}

#[test]
fn test_parallel_matches_reference_output() {
    let output = bench_command()
        .args(["--parallel", "--threads", "2"])
        .output()
        .expect("failed to run binary");

    assert!(output.status.success(), "status: {:?}", output.status);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "80999999\n");
}

#[test]
fn test_invalid_n_exits_2_with_empty_stdout() {
    let output = bench_command()
        .args(["-n", "-5"])
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
    assert!(!output.stderr.is_empty());
}

#[test]
fn test_unknown_flag_exits_2() {
    let output = bench_command()
        .arg("--frobnicate")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(2));
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
}

#[test]
fn test_help_exits_0_with_empty_stdout() {
    let output = bench_command()
        .arg("--help")
        .output()
        .expect("failed to run binary");

    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty(), "stdout: {:?}", output.stdout);
    assert!(!output.stderr.is_empty());
}

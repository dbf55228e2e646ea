use std::env;
use std::process;
use text_dll::other_harness::{FailureMode, run_all};
use text_dll::other_logger::init_logger;

fn usage(program: &str) -> ! {
    eprintln!(
        "Usage: {} [--abort|--report] [--log-level <trace|debug|info|warn|error>] [--log-file <path>]",
        program
    );
    process::exit(2);
}

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut mode: Option<FailureMode> = None;
    let mut log_level = env::var("DLL_LOG_LEVEL").unwrap_or_else(|_| "info".to_owned());
    let mut log_file = env::var("DLL_LOG_FILE").ok();

    // 命令行参数优先于环境变量
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--abort" => mode = Some(FailureMode::Abort),
            "--report" => mode = Some(FailureMode::Report),
            "--log-level" => {
                i += 1;
                match args.get(i) {
                    Some(level) => log_level = level.clone(),
                    None => usage(&args[0]),
                }
            }
            "--log-file" => {
                i += 1;
                match args.get(i) {
                    Some(path) => log_file = Some(path.clone()),
                    None => usage(&args[0]),
                }
            }
            _ => usage(&args[0]),
        }
        i += 1;
    }

    // 未指定时退回环境变量，最终默认为 Abort
    let mode = mode
        .or_else(FailureMode::from_env)
        .unwrap_or(FailureMode::Abort);

    init_logger(&log_level, log_file.as_deref());
    log::debug!("失败处理模式: {:?}", mode);

    let code = run_all(mode);
    process::exit(code);
}

pub mod logger {
    use chrono::Local;
    use colored::Colorize;
    use fern::Dispatch;
    use log::LevelFilter;
    use std::fs::OpenOptions;

    /// 将日志级别文本解析为 `LevelFilter`，无法识别时回落到 `Info`
    pub fn parse_level(log_level: &str) -> LevelFilter {
        match log_level.to_lowercase().as_str() {
            "trace" => LevelFilter::Trace,
            "debug" => LevelFilter::Debug,
            "info" => LevelFilter::Info,
            "warn" => LevelFilter::Warn,
            "error" => LevelFilter::Error,
            _ => LevelFilter::Info,
        }
    }

    /// 初始化全局日志
    ///
    /// 日志统一写到标准错误，保持标准输出只承载检查结果；传入
    /// `log_file_path` 时额外追加写入该文件。重复初始化只会输出一条
    /// 警告，不会中止进程。
    pub fn init_logger(log_level: &str, log_file_path: Option<&str>) {
        let mut dispatch = Dispatch::new()
            .format(|out, message, record| {
                let level_str = match record.level() {
                    log::Level::Error => "ERROR".red(),
                    log::Level::Warn => "WARN".yellow(),
                    log::Level::Info => "INFO".green(),
                    log::Level::Debug => "DEBUG".cyan(),
                    log::Level::Trace => "TRACE".normal(),
                };

                out.finish(format_args!(
                    "[{}][{}][{}] {}",
                    Local::now().format("%Y-%m-%d %H:%M:%S"),
                    level_str,
                    record.target(),
                    message
                ))
            })
            .level(parse_level(log_level))
            .chain(std::io::stderr());

        if let Some(path) = log_file_path {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(log_file) => dispatch = dispatch.chain(log_file),
                Err(err) => eprintln!("无法打开日志文件 {}: {}", path, err),
            }
        }

        if let Err(err) = dispatch.apply() {
            eprintln!("日志初始化失败: {}", err);
        }
    }

    // 测试代码
    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn parse_level_recognizes_known_levels() {
            assert_eq!(parse_level("trace"), LevelFilter::Trace);
            assert_eq!(parse_level("DEBUG"), LevelFilter::Debug);
            assert_eq!(parse_level("info"), LevelFilter::Info);
            assert_eq!(parse_level("Warn"), LevelFilter::Warn);
            assert_eq!(parse_level("error"), LevelFilter::Error);
        }

        #[test]
        fn parse_level_falls_back_to_info() {
            assert_eq!(parse_level("verbose"), LevelFilter::Info);
            assert_eq!(parse_level(""), LevelFilter::Info);
        }

        #[test]
        fn logger_appends_to_requested_file() {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("dll_check.log");
            let path_str = path.to_str().unwrap();

            init_logger("debug", Some(path_str));
            log::info!("日志自检");

            let contents = std::fs::read_to_string(&path).unwrap();
            assert!(contents.contains("日志自检"));
        }
    }
}

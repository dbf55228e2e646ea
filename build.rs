use cbindgen::Config;
use std::env;
use std::fs;
use std::path::PathBuf;

fn main() {
    // 获取当前 crate 的根目录
    let crate_dir =
        env::var("CARGO_MANIFEST_DIR").expect("Could not find Cargo manifest directory");

    // 头文件输出到 include/ 目录
    let out_dir = PathBuf::from(&crate_dir).join("include");

    // 加载配置文件，如果有的话
    let config = match Config::from_file("cbindgen.toml") {
        Ok(cfg) => cfg,
        Err(e) => {
            println!("cargo:warning=Unable to load cbindgen.toml configuration: {:?}", e);
            return;
        }
    };

    // 尝试生成绑定并写入到输出目录下的头文件中
    match cbindgen::generate_with_config(&crate_dir, config) {
        Ok(bindings) => {
            // 确保输出目录存在
            fs::create_dir_all(&out_dir)
                .expect("Unable to create output directory for the header file");

            bindings.write_to_file(out_dir.join("text_dll.h"));
            println!("Successfully generated text_dll.h in {}", out_dir.display());
        }
        Err(e) => {
            println!("cargo:warning=Failed to generate bindings: {:?}", e);
        }
    }
}

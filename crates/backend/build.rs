use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Каталог профиля сборки (target/debug или target/release) по OUT_DIR
fn profile_dir(out_dir: &Path, profile: &str) -> Option<PathBuf> {
    out_dir
        .ancestors()
        .find(|p| p.ends_with(profile))
        .map(Path::to_path_buf)
}

fn main() {
    println!("cargo:rerun-if-changed=../../config.toml");

    let (Ok(out_dir), Ok(profile)) = (env::var("OUT_DIR"), env::var("PROFILE")) else {
        return;
    };
    let Some(target_dir) = profile_dir(Path::new(&out_dir), &profile) else {
        println!("cargo:warning=target profile directory not found, config.toml not copied");
        return;
    };

    // config.toml лежит в корне workspace, рядом с бинарником он подхватывается load_config
    let source = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../config.toml");
    if !source.exists() {
        println!("cargo:warning=config.toml not found, embedded defaults will be used");
        return;
    }

    match fs::copy(&source, target_dir.join("config.toml")) {
        Ok(_) => {}
        Err(e) => println!("cargo:warning=failed to copy config.toml: {}", e),
    }
}

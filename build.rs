use std::env;
use std::path::PathBuf;

const BACKEND_VARS: &[&str] = &["PORTFOLIO_BACKEND_URL", "TRUNK_PUBLIC_BACKEND_URL"];

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").unwrap_or_default());
    let env_path = manifest_dir.join(".env");
    let env_local_path = manifest_dir.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());
    for var in BACKEND_VARS {
        println!("cargo:rerun-if-env-changed={var}");
    }

    let backend = BACKEND_VARS
        .iter()
        .filter_map(|var| env::var(var).ok())
        .map(|value| value.trim().trim_end_matches('/').to_string())
        .find(|value| !value.is_empty())
        .unwrap_or_default();
    if backend.starts_with("ws://") || backend.starts_with("wss://") {
        println!("cargo:warning=backend base '{backend}' is a websocket URL; contact POSTs need http(s)");
    }
    println!("cargo:rustc-env=PORTFOLIO_BACKEND_BASE={backend}");
}

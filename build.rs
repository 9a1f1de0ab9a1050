use std::fs;
use std::process::Command;

const WASM_MANIFEST_PATH: &str = "./wasm/Cargo.toml";
const WASM_FILE_NAME: &str = "ad_user_manager_wasm.wasm";
const SKIP_WASM_BUILD_VAR: &str = "SKIP_WASM_BUILD";

fn main() {
    println!("cargo::rerun-if-changed=wasm/src");
    println!("cargo::rerun-if-changed=wasm/Cargo.toml");
    println!("cargo::rerun-if-changed=dto/src");
    println!("cargo::rerun-if-env-changed={SKIP_WASM_BUILD_VAR}");
    if std::env::var_os(SKIP_WASM_BUILD_VAR).is_some() {
        warning(&format!("{SKIP_WASM_BUILD_VAR} is set, frontend is not compiled."));
        return;
    }

    let compilation_path = "target-wasm";
    let pkg_path = "public/static/pkg";
    delete_entity(compilation_path);
    delete_entity(pkg_path);
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_owned());
    let profile = profile.as_str();
    let wasm_file_path =
        &format!("{compilation_path}/wasm32-unknown-unknown/{profile}/{WASM_FILE_NAME}");
    if compile_wasm(compilation_path, profile) {
        generate_bindings(wasm_file_path, pkg_path);
    }
}

/// Compile the frontend, reporting whether it succeeded.
fn compile_wasm(compilation_path: &str, profile: &str) -> bool {
    let target_dir = format!("--target-dir={compilation_path}");
    let manifest_path = format!("--manifest-path={WASM_MANIFEST_PATH}");
    let mut build_args = vec![
        "build",
        "--target=wasm32-unknown-unknown",
        target_dir.as_str(),
        manifest_path.as_str(),
    ];
    if profile == "release" {
        build_args.push("--release");
    }
    match Command::new("cargo").args(build_args).output() {
        Ok(output) if output.status.success() => true,
        Ok(output) => {
            warning("Frontend compilation has failed, is your WASM lib correct?");
            String::from_utf8_lossy(&output.stderr)
                .lines()
                .filter(|line| line.starts_with("error"))
                .for_each(warning);
            false
        }
        Err(error) => {
            warning(&format!("Can't run cargo to compile frontend: {error}"));
            false
        }
    }
}

/// Generate JS & TS bindings
fn generate_bindings(wasm_file_path: &str, pkg_path: &str) {
    let out_dir_param = format!("--out-dir={pkg_path}");
    let wasm_bindgen_args = ["--target=web", out_dir_param.as_str(), wasm_file_path];
    match Command::new("wasm-bindgen").args(wasm_bindgen_args).output() {
        Ok(output) if output.status.success() => {}
        Ok(output) => warning(&format!(
            "WASM wrappers can't be generated: {}",
            String::from_utf8_lossy(&output.stderr).trim()
        )),
        Err(error) => warning(&format!(
            "Can't run wasm-bindgen, is wasm-bindgen-cli installed? {error}"
        )),
    }
}

fn delete_entity(path: &str) {
    let result = match fs::metadata(path) {
        Ok(metadata) if metadata.is_dir() => fs::remove_dir_all(path),
        Ok(_) => fs::remove_file(path),
        Err(_) => Ok(()),
    };
    if let Err(error) = result {
        warning(&format!("Couldn't delete {path}: {error}"));
    }
}

fn warning(message: &str) {
    println!("cargo::warning={message}");
}

//! Build script for mi-bridge
//!
//! Compiles tests/native/mi_fixture.c into a shared library in OUT_DIR for the
//! integration tests, and exports its path as `MI_FIXTURE_LIBRARY`.

use std::env;
use std::path::PathBuf;
use std::process::Command;

const FIXTURE_SOURCE: &str = "tests/native/mi_fixture.c";

fn main() {
    println!("cargo:rerun-if-changed={FIXTURE_SOURCE}");
    println!("cargo:rerun-if-changed=build.rs");

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR is set by cargo"));
    let target_os = env::var("CARGO_CFG_TARGET_OS").unwrap_or_default();
    let file_name = match target_os.as_str() {
        "windows" => "mi_fixture.dll",
        "macos" => "libmi_fixture.dylib",
        _ => "libmi_fixture.so",
    };
    let output = out_dir.join(file_name);

    let compiler = match cc::Build::new()
        .cargo_metadata(false)
        .opt_level(2)
        .try_get_compiler()
    {
        Ok(compiler) => compiler,
        Err(err) => {
            println!("cargo:warning=no C compiler for {FIXTURE_SOURCE}: {err}");
            return;
        }
    };
    let mut cmd = compiler.to_command();
    if compiler.is_like_msvc() {
        cmd.arg("/LD")
            .arg(FIXTURE_SOURCE)
            .arg(format!("/Fe{}", output.display()))
            .arg(format!("/Fo{}\\", out_dir.display()));
    } else {
        cmd.arg("-shared")
            .arg("-fPIC")
            .arg(FIXTURE_SOURCE)
            .arg("-o")
            .arg(&output)
            .arg("-lm");
    }

    // The library itself never needs the fixture; only the integration tests
    // read MI_FIXTURE_LIBRARY, so a missing C toolchain fails those alone.
    match cmd.status() {
        Ok(status) if status.success() => {
            println!("cargo:rustc-env=MI_FIXTURE_LIBRARY={}", output.display());
        }
        Ok(status) => {
            println!("cargo:warning=compiling {FIXTURE_SOURCE} failed with {status}");
        }
        Err(err) => {
            println!("cargo:warning=could not run C compiler for {FIXTURE_SOURCE}: {err}");
        }
    }
}

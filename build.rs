use std::env;
use std::process::Command;
use std::str;

// Capability gate for the packed F16C representation of `Half2`.
fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(half2_native)");

    let arch = env::var("CARGO_CFG_TARGET_ARCH").unwrap_or_default();
    let target_features = env::var("CARGO_CFG_TARGET_FEATURE").unwrap_or_default();
    let has_f16c = target_features.split(',').any(|f| f == "f16c");
    let simd_enabled = env::var_os("CARGO_FEATURE_SIMD").is_some();

    // F16C intrinsics are stable in std::arch since 1.68.
    let toolchain_ok = match rustc_minor_version() {
        Some(minor) => minor >= 68,
        None => false,
    };

    if arch == "x86_64" && has_f16c && simd_enabled && toolchain_ok {
        println!("cargo:rustc-cfg=half2_native");
    }
}

fn rustc_minor_version() -> Option<u32> {
    let rustc = env::var_os("RUSTC")?;
    let output = Command::new(rustc).arg("--version").output().ok()?;
    let version = str::from_utf8(&output.stdout).ok()?;
    let mut pieces = version.split('.');
    if pieces.next() != Some("rustc 1") {
        return None;
    }
    pieces.next()?.parse().ok()
}

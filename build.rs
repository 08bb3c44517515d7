// Cargo only exposes `TARGET` to build scripts. Re-export it so the binary
// can report the triple it was compiled for via `env!("PLATPROBE_BUILD_TARGET")`.

fn main() {
    let target = std::env::var("TARGET").unwrap_or_else(|_| "unknown".to_string());
    println!("cargo:rustc-env=PLATPROBE_BUILD_TARGET={}", target);
    println!("cargo:rerun-if-env-changed=TARGET");
}

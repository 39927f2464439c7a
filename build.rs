#![allow(clippy::style)]


use std::env;
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

fn main() -> std::io::Result<()> {
    let outdir = match std::env::var_os("OUT_DIR") {
        None => return Ok(()),
        Some(outdir) => outdir,
    };
    let outdir_path = PathBuf::from(outdir);

    write_default_bases(&outdir_path, "default_base.rs")?;
    Ok(())
}

/// Read a base from the environment, falling back to `default`
fn read_base_from_env(name: &str, default: u32) -> u32 {
    match env::var(name) {
        Err(_) => default,
        Ok(s) => {
            let base = s.trim().parse::<u32>()
                        .unwrap_or_else(|_| panic!("${} must be an integer", name));
            if base < 2 {
                panic!("${} must be at least 2 (got {})", name, base);
            }
            base
        }
    }
}

/// Create default_base.rs, containing DEFAULT_BASE and DEFAULT_TARGET_BASE
fn write_default_bases(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{
    let default_base = read_base_from_env("RUST_DIGITRING_DEFAULT_BASE", 3);
    let default_target_base = read_base_from_env("RUST_DIGITRING_DEFAULT_TARGET_BASE", 8);

    let default_base_rs_path = outdir_path.join(filename);

    let contents = format!(
        "/// Base of rings built without an explicit base\n\
         pub const DEFAULT_BASE: u32 = {default_base};\n\
         /// Base produced by [`DigitRing::change_scale`]\n\
         pub const DEFAULT_TARGET_BASE: u32 = {default_target_base};\n"
    );

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&default_base_rs_path) {
        Ok(existing_contents) if existing_contents == contents => {},
        _ => {
            let mut default_base_rs = File::create(&default_base_rs_path)?;
            write!(default_base_rs, "{contents}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", default_base_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_DIGITRING_DEFAULT_BASE");
    println!("cargo:rerun-if-env-changed={}", "RUST_DIGITRING_DEFAULT_TARGET_BASE");

    Ok(())
}

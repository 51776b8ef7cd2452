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

    write_debug_digit_limit(&outdir_path, "debug_digit_limit.rs")?;
    Ok(())
}

/// Create debug_digit_limit.rs, containing definition of constant DEBUG_DIGIT_LIMIT
fn write_debug_digit_limit(outdir_path: &PathBuf, filename: &str) -> std::io::Result<()>
{

    let digit_limit = env::var("RUST_BIGNUM_DEBUG_DIGIT_LIMIT")
        .map(|s| s.parse::<std::num::NonZeroUsize>().expect("$RUST_BIGNUM_DEBUG_DIGIT_LIMIT must be an integer > 0"))
        .map(|nz_num| nz_num.get())
        .unwrap_or(40usize);

    let debug_digit_limit_rs_path = outdir_path.join(filename);

    let debug_digit_limit = format!("const DEBUG_DIGIT_LIMIT: usize = {digit_limit};");

    // Rewriting the file if it already exists with the same contents
    // would force a rebuild.
    match std::fs::read_to_string(&debug_digit_limit_rs_path) {
        Ok(existing_contents) if existing_contents == debug_digit_limit => {},
        _ => {
            let mut debug_digit_limit_rs = File::create(&debug_digit_limit_rs_path)
                .expect("Could not create debug_digit_limit.rs");
            write!(debug_digit_limit_rs, "{debug_digit_limit}")?;
        }
    };

    println!("cargo:rerun-if-changed={}", debug_digit_limit_rs_path.display());
    println!("cargo:rerun-if-env-changed={}", "RUST_BIGNUM_DEBUG_DIGIT_LIMIT");

    Ok(())
}

// Copies the static site (pages + shader sources) into `dist/`. The wasm bundle
// itself is produced by `wasm-pack build --target web --out-dir dist/pkg`.
use fs_extra::dir::{self, CopyOptions};
use std::{fs, path::Path};

fn main() {
    println!("cargo:rerun-if-changed=static");

    let static_dir = Path::new("static");
    if !static_dir.exists() {
        return;
    }

    let out_dir = Path::new("dist");
    fs::create_dir_all(out_dir).ok();

    let mut options = CopyOptions::new();
    options.overwrite = true;
    options.content_only = true;

    if let Err(err) = dir::copy(static_dir, out_dir, &options) {
        println!("cargo:warning=failed to copy static/ into dist/: {err}");
    }
}

use std::path::Path;
use std::{env, fs};

fn main() {
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").expect("manifest dir");
    let version_path = Path::new(&manifest_dir).join("../../VERSION");

    println!("cargo:rerun-if-changed={}", version_path.display());

    let version = fs::read_to_string(&version_path)
        .expect("read VERSION file")
        .trim()
        .to_string();
    assert!(!version.is_empty(), "VERSION file must not be blank");

    println!("cargo:rustc-env=PHOTO_MOSAIC_VERSION={version}");
}

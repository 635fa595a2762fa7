use chrono::{Datelike, Utc};

fn main() {
    let now = Utc::now();
    println!("cargo:rustc-env=BUILD_TIME={}", now.to_rfc3339());
    // footer copyright falls back to this when the content doesn't pin a year
    println!("cargo:rustc-env=BUILD_YEAR={}", now.year());

    println!("cargo:rerun-if-changed=build.rs");
    // content is embedded, so edits must trigger a rebuild in release
    println!("cargo:rerun-if-changed=content");
}

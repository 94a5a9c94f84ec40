fn main() {
    // stamped into the console banner at mount
    let build_time = chrono::Utc::now().to_rfc3339();
    println!("cargo:rustc-env=BUILD_TIME={build_time}");

    // site.json is embedded, so edits to it must rebuild
    println!("cargo:rerun-if-changed=config/site.json");
    println!("cargo:rerun-if-changed=build.rs");
}

fn main() {
    // Capture the current timestamp as the build time
    let build_time = chrono::Utc::now().to_rfc3339();

    // Also set as environment variable for use in env! macro
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);

    // The contact form key is baked in with option_env!
    println!("cargo:rerun-if-env-changed=WEB3FORMS_ACCESS_KEY");

    // Rerun if build.rs changes
    println!("cargo:rerun-if-changed=build.rs");
}

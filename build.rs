fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    // The runtime API is reached over a Unix domain socket
    #[cfg(not(unix))]
    compile_error!("ctinv only builds for Unix targets");

    // Reproducible builds pin the stamp through SOURCE_DATE_EPOCH
    let mut date = std::process::Command::new("date");
    date.arg("-u");
    if let Ok(epoch) = std::env::var("SOURCE_DATE_EPOCH") {
        date.arg("-d").arg(format!("@{}", epoch));
    }
    let build_time = date
        .arg("+%Y-%m-%d %H:%M:%S UTC")
        .output()
        .ok()
        .filter(|o| o.status.success())
        .map(|o| String::from_utf8_lossy(&o.stdout).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string());
    println!("cargo:rustc-env=BUILD_TIME={}", build_time);
}

// File: crates/chart-render-skia/build.rs
// Summary: Links the Windows system libraries Skia's raster backend pulls in.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}

// File: crates/trendline-render-skia/build.rs
// Summary: Build script to link required Windows system libraries for the Skia raster backend.

fn main() {
    #[cfg(target_os = "windows")]
    {
        // Needed for RegOpenKeyExW, RegQueryInfoKeyW, etc.
        println!("cargo:rustc-link-lib=advapi32");
    }
}

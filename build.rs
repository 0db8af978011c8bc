fn main() {
    #[cfg(feature = "desktop")]
    {
        tauri_build::build();
    }

    println!("cargo:rerun-if-changed=src/db/schemas");
}

fn main() {
    // Native reference kernel, compiled from C and bound with bindgen.
    #[cfg(feature = "native")]
    {
        use std::path::PathBuf;

        println!("cargo:rerun-if-changed=csrc/matrix_multiply.c");
        println!("cargo:rerun-if-changed=csrc/matrix_multiply.h");

        cc::Build::new()
            .file("csrc/matrix_multiply.c")
            .flag_if_supported("-std=c99")
            .flag_if_supported("-ffp-contract=off")
            .compile("matrix_multiply");

        let out_path =
            PathBuf::from(std::env::var("OUT_DIR").expect("[build] OUT_DIR is not set!"));
        let bindings = bindgen::Builder::default()
            .header("csrc/matrix_multiply.h")
            .allowlist_function("native_multiply_matrices")
            .generate()
            .expect("Unable to generate bindings");
        bindings
            .write_to_file(out_path.join("bindings.rs"))
            .expect("Couldn't write bindings!");
    }
}

use std::env;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rustc-check-cfg=cfg(ossl300)");

    // openssl-sys exports the detected header version as hex through its
    // `links = "openssl"` metadata. LibreSSL reports both variables.
    println!("cargo:rerun-if-env-changed=DEP_OPENSSL_VERSION_NUMBER");
    println!("cargo:rerun-if-env-changed=DEP_OPENSSL_LIBRESSL_VERSION_NUMBER");

    if env::var("DEP_OPENSSL_LIBRESSL_VERSION_NUMBER").is_ok() {
        return;
    }

    let Some(version) = env::var("DEP_OPENSSL_VERSION_NUMBER")
        .ok()
        .and_then(|raw| u64::from_str_radix(raw.trim(), 16).ok())
    else {
        println!("cargo:warning=sslver-openssl: OpenSSL version unknown, OPENSSL_info() disabled");
        return;
    };

    if version >= 0x3_00_00_00_0 {
        println!("cargo:rustc-cfg=ossl300");
    }
}

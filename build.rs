use std::fs;

const EXPORTED_KEYS: [(&str, &str); 3] = [
    ("name", "CARGO_PKG_NAME"),
    ("version", "CARGO_PKG_VERSION"),
    ("description", "CARGO_PKG_DESCRIPTION"),
];

fn main() {
    println!("cargo:rerun-if-changed=Cargo.toml");

    let cargo_toml = fs::read_to_string("Cargo.toml").expect("Failed to read Cargo.toml");
    let cargo: toml::Value = cargo_toml.parse().expect("Failed to parse Cargo.toml");
    let package = cargo.get("package");

    for (key, env_name) in EXPORTED_KEYS {
        if let Some(value) = package
            .and_then(|pkg| pkg.get(key))
            .and_then(|v| v.as_str())
        {
            println!("cargo:rustc-env={}={}", env_name, value);
        }
    }
}

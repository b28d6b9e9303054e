use std::env;
use std::fs;
use std::path::Path;

/// Variables the shell reads through `option_env!`.
const SHELL_VARS: &[&str] = &[
    "IMJS_BUDDI_RESOLVE_URL_USING_REGION",
    "AUTH_CLIENT_SCOPES",
    "AUTH_CLIENT_CLIENT_ID",
    "AUTH_CLIENT_REDIRECT_URI",
    "AUTH_CLIENT_LOGOUT_URI",
    "AUTH_CLIENT_AUTHORITY",
    "TEST_CONTEXT_ID",
    "TEST_IMODEL_ID",
];

fn main() {
    for var in SHELL_VARS {
        println!("cargo:rerun-if-env-changed={}", var);
    }

    let env_file = Path::new(".env");
    if env_file.exists() {
        println!("cargo:rerun-if-changed=.env");

        if let Ok(contents) = fs::read_to_string(env_file) {
            for line in contents.lines() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                if let Some((key, value)) = line.split_once('=') {
                    let key = key.trim();
                    let value = value.trim().trim_matches('"');

                    // The real environment wins over .env
                    if env::var(key).is_err() {
                        println!("cargo:rustc-env={}={}", key, value);
                    }
                }
            }
        }
    } else {
        println!("cargo:warning=No .env file found. Copy .env.example to .env to configure the OIDC client and viewer ids.");
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.env.example");
}

// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    validation: ValidationLimits,
    combo_box: ComboBoxLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ValidationLimits {
    max_param_length: usize,
    max_date_math_operations: usize,
}

#[derive(serde::Deserialize)]
struct ComboBoxLimits {
    max_logged_options: usize,
    max_logged_label_length: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=EXC_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=EXC_CONFIG_DIR");

    let profile = env::var("EXC_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("EXC_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of exception_autocomplete directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_limits(&config, &profile);
    generate_constants(&config, &profile);
}

fn validate_limits(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_PARAM_LENGTH: usize = 65_536;
    const ABSOLUTE_MAX_DATE_MATH_OPERATIONS: usize = 256;

    if config.validation.max_param_length == 0 {
        panic!("max_param_length must be greater than zero");
    }

    if config.validation.max_param_length > ABSOLUTE_MAX_PARAM_LENGTH {
        panic!("max_param_length exceeds absolute maximum");
    }

    if config.validation.max_date_math_operations > ABSOLUTE_MAX_DATE_MATH_OPERATIONS {
        panic!("max_date_math_operations exceeds absolute maximum");
    }

    if config.combo_box.max_logged_label_length < 16 {
        panic!("max_logged_label_length too small (min: 16)");
    }

    if config.logging.log_buffer_size < 100 || config.logging.log_buffer_size > 100_000 {
        panic!("log_buffer_size must be between 100 and 100000");
    }

    if config.logging.max_log_message_length < 64 {
        panic!("max_log_message_length too small (min: 64)");
    }

    if profile == "production" && config.validation.max_param_length > 4096 {
        panic!("PRODUCTION: max_param_length too high for production");
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod validation {{
        pub const MAX_PARAM_LENGTH: usize = {};
        pub const MAX_DATE_MATH_OPERATIONS: usize = {};
    }}

    pub mod combo_box {{
        pub const MAX_LOGGED_OPTIONS: usize = {};
        pub const MAX_LOGGED_LABEL_LENGTH: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
    }}
}}
"#,
        profile,
        // Validation
        config.validation.max_param_length,
        config.validation.max_date_math_operations,
        // Combo box
        config.combo_box.max_logged_options,
        config.combo_box.max_logged_label_length,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
    );

    fs::write(output_path, constants_code).unwrap();
}

//! Applying a loaded runtime configuration to the global logger

use exception_autocomplete::config::RuntimeConfig;
use exception_autocomplete::logging::{self, LogLevel};
use std::io::Write;

#[test]
fn test_runtime_config_drives_global_logger() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[logging]\nmin_log_level = \"debug\"\nuse_structured_logging = true").unwrap();

    let runtime = RuntimeConfig::from_toml_file(file.path()).unwrap();
    logging::init_global_logging_from(&runtime).unwrap();

    let logger = logging::try_get_global_logger().unwrap();
    assert_eq!(logger.min_level(), LogLevel::Debug);
    assert!(logging::config::use_structured_logging());

    // Preferences are write-once
    assert!(logging::init_global_logging_from(&runtime).is_err());
}

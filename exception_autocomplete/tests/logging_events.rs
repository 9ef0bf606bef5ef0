//! Events emitted by the core operations through the global logger

use exception_autocomplete::config::compile_time::combo_box::{
    MAX_LOGGED_LABEL_LENGTH, MAX_LOGGED_OPTIONS,
};
use exception_autocomplete::logging::{self, codes, LogEvent, LogLevel, LoggingService, MemoryLogger};
use exception_autocomplete::{
    check_param, project_combo_box, select_operators, FieldDescriptor, FieldType, ValidationFlags,
};
use std::sync::Arc;

fn debug_events(logger: &MemoryLogger, message: &str) -> Vec<LogEvent> {
    logger
        .get_events()
        .into_iter()
        .filter(|event| event.is_debug() && event.message == message)
        .collect()
}

// A single test owns the write-once global logger for this binary
#[test]
fn test_core_operations_emit_events() {
    let logger = Arc::new(MemoryLogger::new());
    let service = LoggingService::new(logger.clone(), LogLevel::Debug);
    logging::init_global_logging_with_service(Arc::new(service)).unwrap();

    // Operator selection
    let ssl = FieldDescriptor::new("ssl", FieldType::Boolean).with_es_types(["boolean"]);
    select_operators(Some(&ssl));

    let selected = debug_events(&logger, "Selected operators for field");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].context["field"], "ssl");
    assert_eq!(selected[0].context["operators"], "4");

    // Parameter validation
    logger.clear();
    let timestamp = FieldDescriptor::new("@timestamp", FieldType::Date);
    check_param(Some("1593478826"), &timestamp, ValidationFlags::new(true, true));

    let checked = debug_events(&logger, "Checked parameter");
    assert_eq!(checked.len(), 1);
    assert_eq!(checked[0].context["field"], "@timestamp");
    assert_eq!(checked[0].context["verdict"], "InvalidDate");

    // Combo box projection with dropped selections
    logger.clear();
    let long_label = "y".repeat(MAX_LOGGED_LABEL_LENGTH + 10);
    let mut missing: Vec<String> = vec![long_label];
    missing.extend((0..MAX_LOGGED_OPTIONS + 2).map(|i| format!("missing-{}", i)));

    let options = vec!["option1".to_string(), "option2".to_string()];
    let mut requested = missing.clone();
    requested.push("option2".to_string());

    let projection = project_combo_box(&options, &requested, |label| label.clone());
    assert_eq!(projection.selected.len(), 1);

    let dropped = logger.get_events_with_code(codes::combo_box::SELECTION_DROPPED);
    assert_eq!(dropped.len(), 1);
    assert!(dropped[0].is_warning());
    assert_eq!(dropped[0].context["dropped"], missing.len().to_string());

    let labels: Vec<&str> = dropped[0].context["labels"].split(", ").collect();
    assert_eq!(labels.len(), MAX_LOGGED_OPTIONS);
    assert_eq!(
        labels[0],
        format!("{}...", "y".repeat(MAX_LOGGED_LABEL_LENGTH))
    );

    let projected = debug_events(&logger, "Projected combo box options");
    assert_eq!(projected.len(), 1);
    assert_eq!(projected[0].context["selected"], "1");

    // Nothing is dropped, nothing is warned
    logger.clear();
    project_combo_box(&options, &options, |label| label.clone());
    assert!(logger
        .get_events_with_code(codes::combo_box::SELECTION_DROPPED)
        .is_empty());
}

//! Combo box option projection
//!
//! Values are attached to options by position: `labels[i]` and `options[i]`
//! both describe `values[i]`. Selected values are matched to options by label
//! equality only.

use crate::config::compile_time::combo_box::{MAX_LOGGED_LABEL_LENGTH, MAX_LOGGED_OPTIONS};
use crate::logging::codes;
use crate::{log_debug, log_warning};
use serde::Serialize;
use std::collections::HashSet;

/// A label-bearing entry for a selection widget
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ComboBoxOption {
    pub label: String,
}

impl ComboBoxOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ComboBoxProjection {
    pub options: Vec<ComboBoxOption>,
    pub labels: Vec<String>,
    pub selected: Vec<ComboBoxOption>,
}

impl ComboBoxProjection {
    pub fn is_selected(&self, label: &str) -> bool {
        self.selected.iter().any(|option| option.label == label)
    }

    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    fn selected_labels(&self) -> HashSet<&str> {
        self.selected.iter().map(|option| option.label.as_str()).collect()
    }
}

/// Project `options` into widget options and reconcile `selected_options`
///
/// `selected` is the subsequence of the projected options whose label was
/// requested, in `options` order. Requested labels missing from `options` are
/// dropped. Duplicate labels in `options` are kept as-is.
pub fn project_combo_box<T, F, L>(
    options: &[T],
    selected_options: &[T],
    get_label: F,
) -> ComboBoxProjection
where
    F: Fn(&T) -> L,
    L: Into<String>,
{
    let labels: Vec<String> = options.iter().map(|value| get_label(value).into()).collect();
    let projected: Vec<ComboBoxOption> = labels.iter().cloned().map(ComboBoxOption::new).collect();

    let requested: Vec<String> = selected_options
        .iter()
        .map(|value| get_label(value).into())
        .collect();
    let requested_labels: HashSet<&str> = requested.iter().map(String::as_str).collect();

    let selected: Vec<ComboBoxOption> = projected
        .iter()
        .filter(|option| requested_labels.contains(option.label.as_str()))
        .cloned()
        .collect();

    let available: HashSet<&str> = labels.iter().map(String::as_str).collect();
    let dropped: Vec<&str> = requested
        .iter()
        .map(String::as_str)
        .filter(|label| !available.contains(label))
        .collect();

    if !dropped.is_empty() {
        log_dropped_selections(&dropped);
    }

    log_debug!("Projected combo box options",
        "options" => projected.len(),
        "selected" => selected.len());

    ComboBoxProjection {
        options: projected,
        labels,
        selected,
    }
}

/// Map the projection's selection back onto the caller's values, in option order
pub fn selected_values<'a, T>(options: &'a [T], projection: &ComboBoxProjection) -> Vec<&'a T> {
    let selected = projection.selected_labels();

    options
        .iter()
        .zip(&projection.labels)
        .filter(|(_, label)| selected.contains(label.as_str()))
        .map(|(value, _)| value)
        .collect()
}

fn log_dropped_selections(dropped: &[&str]) {
    let shown: Vec<String> = dropped
        .iter()
        .take(MAX_LOGGED_OPTIONS)
        .map(|label| truncate_label(label))
        .collect();

    log_warning!(code = codes::combo_box::SELECTION_DROPPED,
        "Selected options not present in available options were dropped",
        "dropped" => dropped.len(),
        "labels" => shown.join(", "));
}

fn truncate_label(label: &str) -> String {
    match label.char_indices().nth(MAX_LOGGED_LABEL_LENGTH) {
        Some((end, _)) => format!("{}...", &label[..end]),
        None => label.to_string(),
    }
}

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use color_eyre::{Result, eyre::WrapErr};
use form::{ChangeEvent, FormError, ValueMap};
use job_application::{Confirmation, SummaryLine, fields::ALL_FIELDS, new_form};
use serde::Serialize;
use tracing::info;

/// Outcome of a headless submit attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckReport {
    pub accepted: bool,
    pub errors: BTreeMap<String, String>,
    pub summary: Vec<SummaryLine>,
}

/// Load values from `input` (a path, or `-` for stdin), submit them once and
/// print the result. Returns whether the application was accepted.
pub fn run(input: &Path, json: bool) -> Result<bool> {
    let raw = if input.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .wrap_err("failed to read values from stdin")?;
        buf
    } else {
        std::fs::read_to_string(input)
            .wrap_err_with(|| format!("failed to read {}", input.display()))?
    };
    let values: ValueMap = serde_json::from_str(&raw)
        .wrap_err("input is not a JSON object of field values")?;

    let report = evaluate(&values)?;
    info!(
        accepted = report.accepted,
        errors = report.errors.len(),
        "checked application"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(report.accepted)
}

/// Feed `values` through a fresh form as change events, then submit.
pub fn evaluate(values: &ValueMap) -> Result<CheckReport, FormError> {
    let mut form = new_form();

    let mut keys: Vec<&str> = values.keys().collect();
    keys.sort_unstable();
    for key in keys {
        if let Some(value) = values.get(key) {
            form.handle_change(ChangeEvent::new(key, value.clone()))?;
        }
    }

    let outcome = form.on_submit_attempt();
    let summary = if form.show_confirmation() {
        Confirmation::from_values(form.values()).lines
    } else {
        Vec::new()
    };

    Ok(CheckReport {
        accepted: outcome.is_accepted(),
        errors: form
            .errors()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
        summary,
    })
}

/// Plain-text rendering: the confirmation on success, otherwise one
/// `field: message` line per error in form order.
pub fn render_text(report: &CheckReport) -> String {
    let mut out = String::new();
    if report.accepted {
        out.push_str(Confirmation::TITLE);
        out.push('\n');
        for line in &report.summary {
            out.push_str(&format!("{line}\n"));
        }
    } else {
        for field in ALL_FIELDS {
            if let Some(msg) = report.errors.get(field) {
                out.push_str(&format!("{field}: {msg}\n"));
            }
        }
    }
    out
}

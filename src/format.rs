//! Response formatting - turns an outcome into the text shown in the response panel

use std::fmt::Write;

use crate::models::{ResponseMeta, ResponseOutcome};

/// Render an outcome as plain text. Pure and deterministic.
pub fn format_outcome(outcome: &ResponseOutcome) -> String {
    match outcome {
        ResponseOutcome::Failure { error, meta: None, duration } => {
            format!("❌ Error: {}\n\nDuration: {:?}", error, duration)
        }
        ResponseOutcome::Failure { error, meta: Some(meta), duration } => {
            let mut output = status_block(meta, duration);
            let _ = writeln!(output, "❌ Error: {}", error);
            push_headers(&mut output, meta);
            output.push_str("\nBody:\n");
            output
        }
        ResponseOutcome::Success { meta, body, duration } => {
            let mut output = status_block(meta, duration);
            push_headers(&mut output, meta);
            output.push_str("\nBody:\n");
            output.push_str(body);
            output
        }
    }
}

fn status_block(meta: &ResponseMeta, duration: &std::time::Duration) -> String {
    format!("Status: {}\nDuration: {:?}\n", meta.status_text, duration)
}

fn push_headers(output: &mut String, meta: &ResponseMeta) {
    output.push_str("\nHeaders:\n");
    for (name, values) in &meta.headers {
        for value in values {
            let _ = writeln!(output, "  {}: {}", name, value);
        }
    }
}

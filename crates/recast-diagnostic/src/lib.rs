//! Diagnostic and error reporting for Recast.
//!
//! A [`Diagnostic`] carries both the line/column position the grammar
//! works in and a byte span for rendering. Producers append diagnostics
//! to an [`ErrorSink`]; [`emit`] renders one diagnostic to stderr
//! through ariadne.

mod codes;
mod diagnostic;
mod sink;

pub use codes::ErrorCode;
pub use diagnostic::{Diagnostic, DiagnosticKind, Label, Severity};
pub use sink::ErrorSink;

use ariadne::{ColorGenerator, Label as AriadneLabel, Report, ReportKind, Source};

/// Render a diagnostic to stderr.
///
/// Labels attached by the producer are rendered as given; a diagnostic
/// with no labels of its own still gets one pointing at its span, so
/// every report shows a source location. When the producer supplied no
/// help, the canned suggestion of the error code (if any) stands in.
pub fn emit(source: &str, filename: &str, diagnostic: &Diagnostic) {
    let kind = match diagnostic.severity {
        Severity::Error => ReportKind::Error,
        Severity::Warning => ReportKind::Warning,
        Severity::Note => ReportKind::Advice,
    };

    let mut report = Report::build(kind, filename, diagnostic.span.start as usize)
        .with_message(&diagnostic.message);

    if let Some(code) = diagnostic.code {
        report = report.with_code(code.as_str());
    }

    let mut colors = ColorGenerator::new();
    if diagnostic.labels.is_empty() {
        report = report.with_label(
            AriadneLabel::new((filename, diagnostic.span.range()))
                .with_message(format!("at {}", diagnostic.pos))
                .with_color(colors.next()),
        );
    }
    for label in &diagnostic.labels {
        report = report.with_label(
            AriadneLabel::new((filename, label.span.range()))
                .with_message(&label.message)
                .with_color(colors.next()),
        );
    }

    for note in &diagnostic.notes {
        report = report.with_note(note);
    }

    let suggestion = diagnostic.code.and_then(|code| code.suggestion());
    if let Some(help) = &diagnostic.help {
        report = report.with_help(help);
    } else if let Some(suggestion) = suggestion {
        report = report.with_help(suggestion);
    }

    report
        .finish()
        .eprint((filename, Source::from(source)))
        .unwrap();
}

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};

/// Renders the error in `result` as a plain-text `miette` report, so tests can check what users will see
pub fn render_diagnostic<T: std::fmt::Debug, E: std::ops::Deref<Target = D>, D: Diagnostic>(
    result: Result<T, E>,
) -> String {
    let mut out = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .with_width(80)
        .render_report(&mut out, &*result.unwrap_err())
        .unwrap();
    out
}

//! Prometheus text exposition format, version 0.0.4.

use std::fmt::Write;

use super::Counter;

/// `Content-Type` of a rendered snapshot.
pub const CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Escape HELP text: only backslash and line feed are special.
fn escape_help(v: &str) -> String {
    v.replace('\\', "\\\\").replace('\n', "\\n")
}

/// Append one counter family to `out`.
pub(crate) fn render_counter(c: &Counter, out: &mut String) {
    let name = c.name();
    if !c.description().is_empty() {
        let _ = writeln!(out, "# HELP {} {}", name, escape_help(c.description()));
    }
    let _ = writeln!(out, "# TYPE {} counter", name);
    // 0.0.4 parsers skip unknown comment lines, so the unit rides along as one.
    if !c.unit().is_empty() {
        let _ = writeln!(out, "# UNIT {} {}", name, escape_help(c.unit()));
    }
    let _ = writeln!(out, "{} {}", name, c.get());
}

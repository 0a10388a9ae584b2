//! Inline math and call-notation substitution.
//!
//! Two independent rewrites applied to a line's trailing content:
//!
//! - `\CALL{name}{args}` embedded in text becomes an inline call span.
//! - `$...$` becomes a delimited inline-math span consumed by a math
//!   post-processor (Arithmatex-compatible); the math itself is not
//!   rendered here.
//!
//! On statement text both apply, call substitution first (see
//! [`statement_html`]).

use std::sync::LazyLock;

use regex::Regex;

static CALL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\CALL\{(.*?)\}\{(.*?)\}").unwrap());

static MATH_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$(.*?)\$").unwrap());

/// Rewrite `$...$` spans into inline-math markup.
///
/// # Example
///
/// ```
/// use psdoc_renderer::wrap_math;
///
/// assert_eq!(
///     wrap_math("set $x$ to zero"),
///     r#"set <span class="arithmatex">\(x\)</span> to zero"#
/// );
/// ```
#[must_use]
pub fn wrap_math(text: &str) -> String {
    MATH_RE
        .replace_all(text, r#"<span class="arithmatex">\(${1}\)</span>"#)
        .into_owned()
}

/// Rewrite embedded `\CALL{name}{args}` notation into inline call markup.
#[must_use]
pub fn replace_calls(text: &str) -> String {
    CALL_RE
        .replace_all(
            text,
            r#"<span class="ps-call"><span class="ps-funcname">${1}</span>(${2})</span>"#,
        )
        .into_owned()
}

/// Transform statement text: call substitution first, then math
/// substitution over the already-substituted text.
#[must_use]
pub fn statement_html(text: &str) -> String {
    wrap_math(&replace_calls(text))
}

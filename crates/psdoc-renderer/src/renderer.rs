//! Block-structured pseudocode renderer.
//!
//! A single-pass, line-oriented state machine: each line is classified into
//! a [`Directive`], begin-like directives push a [`Construct`] onto the open
//! stack and emit an opening fragment, end-like directives pop and emit a
//! closing fragment only when the stack top matches, and anything still open
//! at end of input is force-closed so the fragment tree is always balanced.
//!
//! Rendering never fails; malformed input degrades to dropped lines,
//! ignored end markers, or generic closing fragments, with a warning
//! collected for each.

use crate::directive::{Directive, classify};
use crate::inline::{statement_html, wrap_math};

/// Nesting construct tracked on the open-construct stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Construct {
    Algorithm,
    Algorithmic,
    Procedure,
    /// One if/elseif/else chain. The chain is a single stack entry; `arms`
    /// counts its open branch fragments, all closed together by `\ENDIF`
    /// or the end-of-block flush.
    Branch { arms: usize },
    For,
    ForEach,
    While,
    Repeat,
}

impl Construct {
    /// Number of fragments a generic flush must close for this entry.
    fn open_fragments(self) -> usize {
        match self {
            Self::Branch { arms } => arms,
            _ => 1,
        }
    }
}

/// Result of rendering one pseudocode block.
#[derive(Clone, Debug)]
pub struct RenderResult {
    /// Rendered HTML, one fragment per line, wrapped in a `ps-root` div.
    pub html: String,
    /// Warnings generated during rendering (ignored end markers, dropped
    /// captions, constructs closed by the end-of-block flush).
    pub warnings: Vec<String>,
}

/// Renders one pseudocode block to nested HTML fragments.
///
/// The algorithm number is threaded in by the caller (the block extractor
/// bumps it once per block) and is only used by `\caption`.
///
/// # Example
///
/// ```
/// use psdoc_renderer::BlockRenderer;
///
/// let block = "\\begin{algorithm}\n\\caption{Euclid}\n\\end{algorithm}";
/// let result = BlockRenderer::new(1).render(block);
/// assert!(result.html.contains("Algorithm 1"));
/// assert!(result.warnings.is_empty());
/// ```
pub struct BlockRenderer {
    number: u32,
    fragments: Vec<String>,
    stack: Vec<Construct>,
    indent: usize,
    /// Index of the fragment emitted by the most recent `\begin{algorithm}`,
    /// the rewrite target for `\caption`.
    caption_target: Option<usize>,
    warnings: Vec<String>,
}

impl BlockRenderer {
    /// Create a renderer for one block with the block's algorithm number.
    #[must_use]
    pub fn new(number: u32) -> Self {
        Self {
            number,
            fragments: Vec::new(),
            stack: Vec::new(),
            indent: 0,
            caption_target: None,
            warnings: Vec::new(),
        }
    }

    /// Render the block and return the markup plus collected warnings.
    #[must_use]
    pub fn render(mut self, source: &str) -> RenderResult {
        self.fragments.push("<div class='ps-root'>".to_owned());

        for (idx, line) in source.lines().enumerate() {
            let Some(directive) = classify(line) else {
                continue;
            };
            self.dispatch(idx + 1, directive);
        }

        if !self.stack.is_empty() {
            self.warnings.push(format!(
                "{} construct(s) left open at end of block, closed automatically",
                self.stack.len()
            ));
        }
        // Generic closers only: the source keyword of an unmatched entry is
        // not tracked beyond its kind.
        while let Some(construct) = self.stack.pop() {
            for _ in 0..construct.open_fragments() {
                self.fragments.push("</div>".to_owned());
            }
        }

        self.fragments.push("</div>".to_owned());
        RenderResult {
            html: self.fragments.join("\n"),
            warnings: self.warnings,
        }
    }

    fn dispatch(&mut self, line: usize, directive: Directive) {
        match directive {
            Directive::BeginAlgorithm => {
                self.caption_target = Some(self.fragments.len());
                self.fragments.push("<div class='ps-algorithm'>".to_owned());
                self.stack.push(Construct::Algorithm);
            }
            Directive::EndAlgorithm => {
                self.close(line, Construct::Algorithm, "</div>", r"\end{algorithm}");
            }
            Directive::Caption(text) => self.caption(line, &text),
            Directive::BeginAlgorithmic => {
                self.fragments.push("<div class='ps-algorithmic'>".to_owned());
                self.stack.push(Construct::Algorithmic);
            }
            Directive::EndAlgorithmic => {
                self.close(line, Construct::Algorithmic, "</div>", r"\end{algorithmic}");
            }
            Directive::Procedure { name, params } => {
                self.fragments.push(format!(
                    "<div class='ps-procedure ps-indent-{}'><span class='ps-keyword'>procedure </span><span class='ps-funcname'>{}</span>({})",
                    self.indent,
                    name,
                    wrap_math(&params)
                ));
                self.stack.push(Construct::Procedure);
                self.indent += 1;
            }
            Directive::EndProcedure => self.close(
                line,
                Construct::Procedure,
                "<div class='ps-keyword'>end procedure</div></div>",
                r"\ENDPROCEDURE",
            ),
            Directive::If(cond) => {
                let header = self.control_header("if", &wrap_math(&cond), "then");
                self.fragments.push(header);
                self.stack.push(Construct::Branch { arms: 1 });
                self.indent += 1;
            }
            Directive::ElseIf(cond) => {
                if self.grow_branch(line, r"\ELSEIF") {
                    let header = self.control_header("elseif", &wrap_math(&cond), "then");
                    self.fragments.push(header);
                }
            }
            Directive::Else => {
                if self.grow_branch(line, r"\ELSE") {
                    self.fragments.push(format!(
                        "<div class='ps-else ps-indent-{}'><span class='ps-keyword'>else</span>",
                        self.indent
                    ));
                }
            }
            Directive::EndIf => self.end_if(line),
            Directive::For(range) => {
                let range = wrap_math(&range)
                    .replace(r"\TO", r#"<span class="ps-keyword">to</span>"#);
                let header = self.control_header("for", &range, "do");
                self.fragments.push(header);
                self.stack.push(Construct::For);
                self.indent += 1;
            }
            Directive::EndFor => self.close(
                line,
                Construct::For,
                "<div class='ps-keyword'>end for</div></div>",
                r"\ENDFOR",
            ),
            Directive::ForEach(range) => {
                let range = wrap_math(&range)
                    .replace(r"\IN", r#"<span class="ps-keyword">in</span>"#);
                let header = self.control_header("foreach", &range, "do");
                self.fragments.push(header);
                self.stack.push(Construct::ForEach);
                self.indent += 1;
            }
            Directive::EndForEach => self.close(
                line,
                Construct::ForEach,
                "<div class='ps-keyword'>end foreach</div></div>",
                r"\ENDFOREACH",
            ),
            Directive::While(cond) => {
                let header = self.control_header("while", &wrap_math(&cond), "do");
                self.fragments.push(header);
                self.stack.push(Construct::While);
                self.indent += 1;
            }
            Directive::EndWhile => self.close(
                line,
                Construct::While,
                "<div class='ps-keyword'>end while</div></div>",
                r"\ENDWHILE",
            ),
            Directive::Repeat(cond) => {
                let header = self.control_header("repeat", &wrap_math(&cond), "do");
                self.fragments.push(header);
                self.stack.push(Construct::Repeat);
                self.indent += 1;
            }
            Directive::EndRepeat => self.close(
                line,
                Construct::Repeat,
                "<div class='ps-keyword'>end repeat</div></div>",
                r"\ENDREPEAT",
            ),
            Directive::Statement(text) => {
                self.fragments.push(format!(
                    "<div class='ps-state ps-indent-{}'>{}</div>",
                    self.indent,
                    statement_html(&text)
                ));
            }
            Directive::Call { name, args } => {
                self.fragments.push(format!(
                    "<div class='ps-call ps-indent-{}'><span class='ps-funcname'>{}</span>({})</div>",
                    self.indent, name, args
                ));
            }
        }
    }

    /// Opening fragment for a control-flow header: `kw (cond) tail`.
    fn control_header(&self, keyword: &str, condition: &str, tail: &str) -> String {
        format!(
            "<div class='ps-{keyword} ps-indent-{}'><span class='ps-keyword'>{keyword}</span> ({condition}) <span class='ps-keyword'>{tail}</span>",
            self.indent
        )
    }

    /// Pop `expected` and emit its closing fragment, or ignore the marker.
    fn close(&mut self, line: usize, expected: Construct, closing: &str, marker: &str) {
        if self.stack.last() == Some(&expected) {
            self.stack.pop();
            if matches!(
                expected,
                Construct::Procedure
                    | Construct::For
                    | Construct::ForEach
                    | Construct::While
                    | Construct::Repeat
            ) {
                self.indent -= 1;
            }
            self.fragments.push(closing.to_owned());
        } else {
            self.warnings.push(format!(
                "line {line}: {marker} does not match the open construct, ignored"
            ));
        }
    }

    /// Add an arm to the open branch chain; `false` when the top of the
    /// stack is not a branch (the marker is then ignored).
    fn grow_branch(&mut self, line: usize, marker: &str) -> bool {
        match self.stack.last_mut() {
            Some(Construct::Branch { arms }) => {
                *arms += 1;
                true
            }
            _ => {
                self.warnings.push(format!(
                    "line {line}: {marker} without an open \\IF, ignored"
                ));
                false
            }
        }
    }

    fn end_if(&mut self, line: usize) {
        match self.stack.last().copied() {
            Some(Construct::Branch { arms }) => {
                self.stack.pop();
                self.indent -= 1;
                // One keyword fragment, then one closer per accumulated arm:
                // the whole chain closes here, not at the end-of-block flush.
                let mut fragment = String::from("<div class='ps-keyword'>end if</div>");
                for _ in 0..arms {
                    fragment.push_str("</div>");
                }
                self.fragments.push(fragment);
            }
            _ => {
                self.warnings.push(format!(
                    "line {line}: \\ENDIF does not match the open construct, ignored"
                ));
            }
        }
    }

    fn caption(&mut self, line: usize, text: &str) {
        match self.caption_target {
            Some(idx) => {
                self.fragments[idx] = format!(
                    "<div class='ps-algorithm with-caption'><div class='ps-caption'><span class='ps-keyword'>Algorithm {}</span> {}</div>",
                    self.number, text
                );
            }
            None => {
                self.warnings.push(format!(
                    "line {line}: \\caption with no preceding \\begin{{algorithm}}, ignored"
                ));
            }
        }
    }
}

/// Render one pseudocode block with the given algorithm number.
///
/// Convenience wrapper around [`BlockRenderer`].
#[must_use]
pub fn render_block(source: &str, number: u32) -> RenderResult {
    BlockRenderer::new(number).render(source)
}

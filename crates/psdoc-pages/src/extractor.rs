//! Pseudocode region extraction and splicing.
//!
//! Scans a document for fenced regions whose info string matches the
//! configured tag, renders each region with `psdoc-renderer`, and splices
//! the result back in place of the region. Everything outside the regions
//! is reproduced byte-identically; rendered HTML is wrapped in blank lines
//! so the surrounding Markdown pipeline treats it as a raw block.

use psdoc_renderer::render_block;

use crate::fence::{self, Fence};

/// Result of extracting and rendering one document's pseudocode regions.
#[derive(Clone, Debug)]
pub struct ExtractResult {
    /// The document with every rendered region spliced in.
    pub output: String,
    /// Number of regions rendered.
    pub regions: usize,
    /// Warnings from the scanner and the renderer, prefixed with the
    /// algorithm number they belong to where applicable.
    pub warnings: Vec<String>,
}

/// Scanner state while locating regions.
#[derive(Clone, Copy)]
enum State {
    /// Outside any fence.
    Text,
    /// Inside a fence with a different info string; its content is opaque.
    Foreign(Fence),
    /// Inside a pseudocode region opened at line `start`.
    Region { fence: Fence, start: usize },
}

/// Replace every pseudocode region of `input` with rendered HTML.
///
/// `number` is the document's algorithm counter: bumped once per region,
/// before rendering, so the first region on a fresh page is algorithm 1.
/// A region still open at end of input is left unchanged and does not bump
/// the counter.
pub(crate) fn extract_blocks(input: &str, syntax: &str, number: &mut u32) -> ExtractResult {
    let lines: Vec<&str> = input.lines().collect();
    let mut warnings = Vec::new();

    // First pass: locate terminated regions as (opening, closing) line indices.
    let mut spans: Vec<(usize, usize)> = Vec::new();
    let mut state = State::Text;
    for (idx, line) in lines.iter().enumerate() {
        state = match state {
            State::Text => match fence::detect(line) {
                Some((fence, info)) if info == syntax => State::Region { fence, start: idx },
                Some((fence, _)) => State::Foreign(fence),
                None => State::Text,
            },
            State::Foreign(fence) if fence::closes(line, fence) => State::Text,
            State::Region { fence, start } if fence::closes(line, fence) => {
                spans.push((start, idx));
                State::Text
            }
            other => other,
        };
    }
    if let State::Region { start, .. } = state {
        warnings.push(format!(
            "unterminated pseudocode region opened at line {}, left unchanged",
            start + 1
        ));
    }

    // Second pass: splice. A region collapses to one segment holding the
    // blank-line-wrapped HTML; all other lines pass through unchanged.
    let mut out = String::with_capacity(input.len());
    let mut pending = spans.iter().copied().peekable();
    let mut idx = 0;
    let mut first = true;
    while idx < lines.len() {
        if !first {
            out.push('\n');
        }
        first = false;

        match pending.peek() {
            Some(&(start, end)) if start == idx => {
                pending.next();
                *number += 1;
                let body = lines[start + 1..end].join("\n");
                let result = render_block(&body, *number);
                warnings.extend(
                    result
                        .warnings
                        .into_iter()
                        .map(|w| format!("algorithm {}: {w}", *number)),
                );
                out.push_str("\n\n");
                out.push_str(&result.html);
                out.push_str("\n\n");
                idx = end + 1;
            }
            _ => {
                out.push_str(lines[idx]);
                idx += 1;
            }
        }
    }
    if input.ends_with('\n') {
        out.push('\n');
    }

    ExtractResult {
        output: out,
        regions: spans.len(),
        warnings,
    }
}

//! Block-structured pseudocode renderer.
//!
//! Renders a constrained, LaTeX-algorithmic-inspired plaintext notation into
//! nested HTML fragments for embedding in documentation pages.
//!
//! # Architecture
//!
//! - [`classify`]: maps one trimmed line to a [`Directive`] via a fixed,
//!   ordered prefix table.
//! - [`wrap_math`] / [`replace_calls`] / [`statement_html`]: stateless inline
//!   rewrites for `$...$` math spans and `\CALL{name}{args}` notation.
//! - [`BlockRenderer`]: the line-oriented state machine that drives both,
//!   tracks the open-construct stack and indent level, and force-closes
//!   anything left open so the output is always well-formed.
//!
//! The renderer is infallible: malformed input produces warnings on
//! [`RenderResult`], never errors. Locating pseudocode regions inside a
//! document and threading the per-page algorithm counter belong to the
//! `psdoc-pages` crate.
//!
//! # Example
//!
//! ```
//! use psdoc_renderer::render_block;
//!
//! let block = "\\IF{$x > 0$}\n\\STATE return $x$\n\\ENDIF";
//! let result = render_block(block, 1);
//! assert!(result.html.starts_with("<div class='ps-root'>"));
//! assert!(result.html.contains("arithmatex"));
//! ```

mod directive;
mod inline;
mod renderer;

pub use directive::{Directive, classify};
pub use inline::{replace_calls, statement_html, wrap_math};
pub use renderer::{BlockRenderer, RenderResult, render_block};

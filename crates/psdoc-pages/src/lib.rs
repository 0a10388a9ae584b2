//! Page-level pseudocode processing.
//!
//! Integrates the `psdoc-renderer` core with a documentation pipeline:
//! finds fenced pseudocode regions in a Markdown page, renders each one,
//! splices the HTML back into the page, and owns the per-page algorithm
//! counter that numbers captions sequentially.
//!
//! One [`PageProcessor`] serves one document at a time; documents rendered
//! concurrently need one processor each, because the algorithm counter is
//! sequential state scoped to a page.
//!
//! # Example
//!
//! ```
//! use psdoc_pages::{Config, PageProcessor};
//!
//! let mut processor = PageProcessor::new(Config::default());
//! let page = "# Doc\n\n```pseudocode\n\\begin{algorithm}\n\\caption{Scan}\n\\end{algorithm}\n```\n";
//! let result = processor.process_page(page);
//! assert!(result.output.contains("Algorithm 1"));
//! ```

mod config;
mod extractor;
mod fence;

pub use config::{CONFIG_FILENAME, Config, ConfigError};
pub use extractor::ExtractResult;

use tracing::{debug, warn};

/// Renders the pseudocode regions of documentation pages.
///
/// Owns the configuration and the algorithm counter. The counter resets at
/// the start of every [`process_page`](Self::process_page) call and bumps
/// once per region, so captions number 1, 2, ... within a page.
pub struct PageProcessor {
    config: Config,
    number: u32,
}

impl PageProcessor {
    /// Create a processor with the given configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self { config, number: 0 }
    }

    /// Render every pseudocode region of one page and splice the results in.
    ///
    /// Resets the algorithm counter first: one call is one page. Warnings
    /// are logged at `warn` level and also returned for programmatic use.
    pub fn process_page(&mut self, markdown: &str) -> ExtractResult {
        self.number = 0;
        let result = extractor::extract_blocks(markdown, &self.config.syntax, &mut self.number);
        debug!(regions = result.regions, "rendered pseudocode regions");
        for warning in &result.warnings {
            warn!("{warning}");
        }
        result
    }

    /// Value of the algorithm counter after the last processed page.
    #[must_use]
    pub fn algorithm_count(&self) -> u32 {
        self.number
    }
}

impl Default for PageProcessor {
    fn default() -> Self {
        Self::new(Config::default())
    }
}

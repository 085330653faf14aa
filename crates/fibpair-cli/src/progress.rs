//! Progress display for long sequence generations.

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use num_bigint::BigUint;

use fibpair_core::{FibError, FibIndex, SequenceGenerator};

/// Indices generated between two progress bar updates.
const CHUNK_SIZE: u64 = 256;

/// Build the bar used for a sequence of `len` values.
///
/// indicatif hides the bar by itself when stderr is not a terminal.
#[must_use]
pub fn sequence_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} ({eta})",
    ) {
        bar.set_style(style.progress_chars("=> "));
    }
    bar
}

/// Decorator that feeds a progress bar while its inner generator runs.
///
/// The range is generated in chunks of [`CHUNK_SIZE`] indices and the
/// chunks are concatenated, so the output is identical to the inner
/// generator's.
pub struct ProgressGenerator {
    inner: Arc<dyn SequenceGenerator>,
    bar: ProgressBar,
}

impl ProgressGenerator {
    /// Wrap `inner`, advancing `bar` as chunks complete.
    #[must_use]
    pub fn new(inner: Arc<dyn SequenceGenerator>, bar: ProgressBar) -> Self {
        Self { inner, bar }
    }
}

impl SequenceGenerator for ProgressGenerator {
    fn generate(&self, start: FibIndex, end: FibIndex) -> Result<Vec<(u64, BigUint)>, FibError> {
        if start > end {
            // Let the inner generator report the error in its own words.
            return self.inner.generate(start, end);
        }

        let (start, end) = (start.get(), end.get());
        let mut out = Vec::new();
        let mut lo = start;
        while lo < end {
            let hi = lo.saturating_add(CHUNK_SIZE).min(end);
            out.extend(self.inner.generate(FibIndex::new(lo), FibIndex::new(hi))?);
            self.bar.inc(hi - lo);
            lo = hi;
        }
        self.bar.finish_and_clear();
        Ok(out)
    }

    fn name(&self) -> &str {
        self.inner.name()
    }

    fn algorithm(&self) -> &str {
        self.inner.algorithm()
    }
}

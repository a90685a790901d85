use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

const SPINNER_TEMPLATE: &str = "{spinner:.green} {msg}";
const COUNTED_TEMPLATE: &str = "{spinner:.green} {msg} [{bar:40.cyan/blue}] {human_pos}/{human_len}";

/// Builds the progress indicators used by the pipeline passes: a plain
/// spinner by default, or a counted bar when the pass knows its length.
pub(crate) struct ProgressBarBuilder {
    message: String,
    total: Option<u64>,
    enable_tick: bool,
}

impl ProgressBarBuilder {
    pub(crate) fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            total: None,
            enable_tick: false,
        }
    }

    pub(crate) fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub(crate) fn with_tick(mut self) -> Self {
        self.enable_tick = true;
        self
    }

    pub(crate) fn build(self) -> Result<ProgressBar> {
        let pb = match self.total {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(ProgressStyle::default_bar().template(COUNTED_TEMPLATE)?);
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(ProgressStyle::default_spinner().template(SPINNER_TEMPLATE)?);
                pb
            }
        };
        pb.set_message(self.message);

        if self.enable_tick {
            pb.enable_steady_tick(Duration::from_millis(200));
        }

        Ok(pb)
    }
}

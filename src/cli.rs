use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Upper bound for `--clicks`; each one is a separate activation.
pub const MAX_CLICKS: u64 = 100_000;
use crate::ui::counter::{CounterState, CounterView};

#[derive(Debug, Parser)]
#[command(name = "counterview", version, about = "A counter with an increment button")]
pub struct Args {
    /// Starting count (overrides counter.initial from the config file)
    #[arg(long, allow_negative_numbers = true)]
    pub initial: Option<i64>,

    /// Activate the increment button this many times before showing the view
    #[arg(
        long,
        default_value_t = 0,
        value_parser = clap::value_parser!(u64).range(..=MAX_CLICKS)
    )]
    pub clicks: u64,

    /// Print the rendered view tree as JSON and exit instead of opening the UI
    #[arg(long)]
    pub snapshot: bool,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Build the component the run starts from: initial state, then any
    /// pre-applied clicks.
    pub fn build_view(&self, config: &Config) -> CounterView {
        let initial = self.initial.unwrap_or(config.counter.initial);
        let mut view = CounterView::with_state(CounterState::new(initial));
        for _ in 0..self.clicks {
            view.on_increment_clicked();
        }
        view
    }
}

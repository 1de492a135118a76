//! Layout CLI command
//!
//! Reports whether the terminal counts as a narrow layout, optionally
//! following resize notifications until interrupted.

use clap::Args;

use crate::error::{BudgetError, BudgetResult};
use crate::viewport::{ResizeWatcher, TerminalHost, ViewportClassifier, NARROW_BREAKPOINT};

/// Arguments for the layout command
#[derive(Debug, Clone, Args)]
pub struct LayoutArgs {
    /// Keep running and report every resize
    #[arg(short, long)]
    pub watch: bool,
}

/// Handle the layout command
pub fn handle_layout_command(args: LayoutArgs) -> BudgetResult<()> {
    let host = TerminalHost;
    let mut classifier = ViewportClassifier::new();

    classifier.observe(&host);
    println!("{}", format_layout(&classifier));

    if !args.watch {
        return Ok(());
    }

    let watcher = ResizeWatcher::default();
    loop {
        let resize = watcher
            .next()
            .map_err(|_| BudgetError::Terminal("resize notifications stopped".into()))?;
        tracing::debug!(columns = resize.columns, rows = resize.rows, "terminal resized");

        classifier.observe(&host);
        println!("{}", format_layout(&classifier));
    }
}

/// One-line description of the current classification
pub fn format_layout(classifier: &ViewportClassifier) -> String {
    let label = if classifier.is_narrow() { "narrow" } else { "wide" };
    match classifier.width() {
        Some(width) => format!(
            "layout: {} (width {}, breakpoint {})",
            label, width, NARROW_BREAKPOINT
        ),
        None => format!("layout: {} (no width reported)", label),
    }
}

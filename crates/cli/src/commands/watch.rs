use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use qrdoc_verifier::{
    scan::{close, dismiss, handle_scan, open, ScanEvent, ScanState},
    Verdict,
};

use super::ScanArgs;
use crate::util::write_dialog;

#[derive(Parser)]
#[command(
    name = "watch",
    about = "Verify scanned payloads read line by line from stdin. The reader starts open. An \
             empty line dismisses the current result and closes the reader; `open` and `close` \
             lines reopen or close it."
)]
pub struct WatchCmd {
    /// Dismiss every result right after printing it and keep the reader open.
    #[arg(long)]
    auto_dismiss: bool,

    #[clap(flatten)]
    scan: ScanArgs,
}

/// Input line that reopens the reader after a dismissal.
pub const OPEN_READER: &str = "open";
/// Input line that closes the reader.
pub const CLOSE_READER: &str = "close";

/// Counts of what a watch session saw.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WatchSummary {
    pub valid: usize,
    pub invalid: usize,
    pub errors: usize,
    pub unreadable: usize,
    pub suppressed: usize,
}

impl WatchCmd {
    pub fn run(&self) -> Result<WatchSummary> {
        let stdout = io::stdout();
        let summary = self.watch(io::stdin().lock(), &mut stdout.lock(), self.scan.color())?;
        tracing::info!(?summary, "scanner input closed");
        Ok(summary)
    }

    pub fn watch(
        &self,
        input: impl BufRead,
        out: &mut impl Write,
        color: bool,
    ) -> Result<WatchSummary> {
        let opts = self.scan.payload_options();
        let mut state = open(ScanState::Closed);
        let mut summary = WatchSummary::default();

        for line in input.lines() {
            let line = line.context("while reading scanner input")?;
            let data = line.trim_end_matches('\r');

            match data.trim() {
                "" => {
                    if state == ScanState::AwaitingDismissal {
                        state = dismiss(state);
                        tracing::debug!("result dismissed, reader closed");
                    }
                    continue;
                }
                OPEN_READER => {
                    state = open(state);
                    continue;
                }
                CLOSE_READER => {
                    state = close(state);
                    continue;
                }
                _ => {}
            }

            let event = ScanEvent { code_type: &self.scan.code_type, data };
            let transition = handle_scan(state, event, &opts);
            state = transition.state;

            let Some(dialog) = transition.dialog else {
                summary.suppressed += 1;
                continue;
            };
            match dialog.verdict() {
                Some(Verdict::Valid) => summary.valid += 1,
                Some(Verdict::Invalid) => summary.invalid += 1,
                Some(Verdict::Error) => summary.errors += 1,
                None => summary.unreadable += 1,
            }
            write_dialog(out, &dialog, color)?;
            out.flush()?;

            if self.auto_dismiss {
                state = open(dismiss(state));
            }
        }

        Ok(summary)
    }
}

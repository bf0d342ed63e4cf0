use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
};

use anyhow::{Context, Result};
use clap::Parser;
use qrdoc_verifier::scan::{handle_scan, open, Dialog, ScanEvent, ScanState};

use super::ScanArgs;
use crate::util::write_dialog;

#[derive(Parser)]
#[command(name = "verify", about = "Verify the signature of one scanned QR code payload.")]
pub struct VerifyCmd {
    /// The scanned text. Read from `--file` or stdin when omitted.
    data: Option<String>,

    /// Read the scanned text from a file.
    #[arg(long, conflicts_with = "data")]
    file: Option<PathBuf>,

    #[clap(flatten)]
    scan: ScanArgs,
}

impl VerifyCmd {
    /// Runs the command and reports whether the signature was valid.
    pub fn run(&self) -> Result<bool> {
        let input = self.read_input(io::stdin().lock())?;
        let stdout = io::stdout();
        let dialog = self.execute(&input, &mut stdout.lock(), self.scan.color())?;
        Ok(dialog.verdict().is_some_and(|verdict| verdict.is_valid()))
    }

    fn read_input(&self, mut stdin: impl Read) -> Result<String> {
        let raw = if let Some(data) = &self.data {
            data.clone()
        } else if let Some(path) = &self.file {
            fs::read_to_string(path)
                .with_context(|| format!("while reading scanned text from {}", path.display()))?
        } else {
            let mut buf = String::new();
            stdin.read_to_string(&mut buf).context("while reading scanned text from stdin")?;
            buf
        };
        Ok(raw.trim_end_matches(['\r', '\n']).to_string())
    }

    /// Opens the reader, handles a single scan and prints the resulting dialog.
    pub fn execute(&self, input: &str, out: &mut impl Write, color: bool) -> Result<Dialog> {
        let event = ScanEvent { code_type: &self.scan.code_type, data: input };
        let state = open(ScanState::Closed);
        let transition = handle_scan(state, event, &self.scan.payload_options());
        let Some(dialog) = transition.dialog else {
            anyhow::bail!("scan was suppressed by a scanner that was not idle");
        };
        write_dialog(out, &dialog, color)?;
        Ok(dialog)
    }
}

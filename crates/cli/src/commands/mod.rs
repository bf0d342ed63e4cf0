pub mod issue;
pub mod keygen;
pub mod verify;
pub mod watch;

use clap::Args;
use qrdoc_verifier::{scan::DEFAULT_CODE_TYPE, PayloadOptions, DEFAULT_MAX_SCAN_BYTES};

/// Options shared by the commands that consume scanned text.
#[derive(Debug, Clone, Args)]
pub struct ScanArgs {
    /// Barcode symbology reported in the result title.
    #[arg(long, env = "QRDOC_CODE_TYPE", default_value = DEFAULT_CODE_TYPE)]
    pub code_type: String,

    /// Reject scanned text longer than this many bytes.
    #[arg(long, env = "QRDOC_MAX_SCAN_BYTES", default_value_t = DEFAULT_MAX_SCAN_BYTES)]
    pub max_scan_bytes: usize,

    /// Treat fields outside the payload schema as a processing error.
    #[arg(long, env = "QRDOC_REJECT_UNKNOWN_FIELDS")]
    pub reject_unknown_fields: bool,

    /// Print without ANSI colors.
    #[arg(long)]
    pub no_color: bool,
}

impl ScanArgs {
    pub fn payload_options(&self) -> PayloadOptions {
        PayloadOptions {
            max_scan_bytes: self.max_scan_bytes,
            reject_unknown_fields: self.reject_unknown_fields,
        }
    }

    pub(crate) fn color(&self) -> bool {
        use std::io::IsTerminal;
        !self.no_color && std::io::stdout().is_terminal()
    }
}

impl Default for ScanArgs {
    fn default() -> Self {
        Self {
            code_type: DEFAULT_CODE_TYPE.to_string(),
            max_scan_bytes: DEFAULT_MAX_SCAN_BYTES,
            reject_unknown_fields: false,
            no_color: true,
        }
    }
}

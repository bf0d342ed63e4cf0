//! Scan handling: turns one scanned code into a result dialog.
//!
//! Video scanners report the same code many times per second. Once a scan has
//! produced a dialog the handler sits in [`ScanState::AwaitingDismissal`] and
//! drops further events until the host calls [`dismiss`]. Dismissing also
//! closes the reader; nothing is handled again until the host calls [`open`].

use std::fmt;

use crate::{PayloadOptions, QrPayload, SignatureValidator, Verdict};

pub const DEFAULT_CODE_TYPE: &str = "qr";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanState {
    /// The reader is not capturing.
    #[default]
    Closed,
    Idle,
    AwaitingDismissal,
}

/// A code reported by the capture device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanEvent<'a> {
    /// Barcode symbology as reported by the device, e.g. `qr`.
    pub code_type: &'a str,
    pub data: &'a str,
}

/// A modal message shown to the user after a scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dialog {
    /// The payload parsed and went through the validator.
    Result { code_type: String, verdict: Verdict },
    /// The scanned text did not match the payload schema.
    ProcessingError,
}

impl Dialog {
    pub fn title(&self) -> String {
        match self {
            Dialog::Result { code_type, .. } => format!("Código {code_type} Scaneado"),
            Dialog::ProcessingError => "Erro ao processar QR Code".to_string(),
        }
    }

    pub fn body(&self) -> String {
        match self {
            Dialog::Result { verdict, .. } => format!("Resultado: {verdict}"),
            Dialog::ProcessingError => "Detalhes: Dados inválidos".to_string(),
        }
    }

    pub fn verdict(&self) -> Option<Verdict> {
        match self {
            Dialog::Result { verdict, .. } => Some(*verdict),
            Dialog::ProcessingError => None,
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n{}", self.title(), self.body())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTransition {
    pub state: ScanState,
    /// `None` when the event was suppressed.
    pub dialog: Option<Dialog>,
}

/// Handles one scan event.
pub fn handle_scan(
    state: ScanState,
    event: ScanEvent<'_>,
    opts: &PayloadOptions,
) -> ScanTransition {
    if state != ScanState::Idle {
        tracing::trace!(code_type = event.code_type, ?state, "scan suppressed");
        return ScanTransition { state, dialog: None };
    }

    let dialog = match QrPayload::parse(event.data, opts) {
        Ok(payload) => Dialog::Result {
            code_type: event.code_type.to_string(),
            verdict: SignatureValidator::verdict(&payload),
        },
        Err(err) => {
            tracing::warn!(error = %err, "scanned text is not a document payload");
            Dialog::ProcessingError
        }
    };

    ScanTransition { state: ScanState::AwaitingDismissal, dialog: Some(dialog) }
}

/// The user acknowledged the dialog. The reader closes until [`open`] is called.
pub fn dismiss(_state: ScanState) -> ScanState {
    ScanState::Closed
}

/// Opens the reader. A pending dialog must still be dismissed first.
pub fn open(state: ScanState) -> ScanState {
    match state {
        ScanState::Closed => ScanState::Idle,
        other => other,
    }
}

/// Closes the reader without a dialog.
pub fn close(state: ScanState) -> ScanState {
    match state {
        ScanState::Idle => ScanState::Closed,
        other => other,
    }
}

use std::fmt;

pub const VALID_MESSAGE: &str = "Assinatura válida!";
pub const INVALID_MESSAGE: &str = "Assinatura inválida!";
pub const ERROR_MESSAGE: &str = "Erro ao validar QR Code.";

/// Outcome of a verification that ran to completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verification {
    Valid,
    Invalid,
}

/// The user-facing result of checking a payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Valid,
    Invalid,
    /// Any structural or decoding failure.
    Error,
}

impl Verdict {
    pub fn message(&self) -> &'static str {
        match self {
            Verdict::Valid => VALID_MESSAGE,
            Verdict::Invalid => INVALID_MESSAGE,
            Verdict::Error => ERROR_MESSAGE,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self, Verdict::Valid)
    }
}

impl From<Verification> for Verdict {
    fn from(value: Verification) -> Self {
        match value {
            Verification::Valid => Verdict::Valid,
            Verification::Invalid => Verdict::Invalid,
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

use std::io::{self, Write};

use anstyle::{AnsiColor, Effects, Style};
use qrdoc_verifier::{scan::Dialog, Verdict};

pub(crate) fn write_status(
    out: &mut impl Write,
    style: &Style,
    status: &str,
    msg: &str,
) -> io::Result<()> {
    writeln!(out, "{style}{status:>12}{style:#} {msg}")
}

fn dialog_style(dialog: &Dialog) -> Style {
    let color = match dialog.verdict() {
        Some(Verdict::Valid) => AnsiColor::Green,
        Some(Verdict::Invalid) => AnsiColor::Red,
        Some(Verdict::Error) | None => AnsiColor::Yellow,
    };
    color.on_default().effects(Effects::BOLD)
}

/// Prints a dialog as a bold title line followed by a colored body line.
pub(crate) fn write_dialog(out: &mut impl Write, dialog: &Dialog, color: bool) -> io::Result<()> {
    let (title, body) = if color {
        (Style::new().effects(Effects::BOLD), dialog_style(dialog))
    } else {
        (Style::new(), Style::new())
    };
    writeln!(out, "{title}{}{title:#}", dialog.title())?;
    writeln!(out, "{body}{}{body:#}", dialog.body())
}

use std::{fs, io, path::PathBuf};

use anstyle::{AnsiColor, Effects};
use anyhow::{Context, Result};
use clap::Parser;
use qrdoc_verifier::{
    encode_public_key,
    issuer::{generate_key, private_key_to_pem, DEFAULT_KEY_BITS},
};

use crate::util::write_status;

#[derive(Parser)]
#[command(name = "keygen", about = "Generate an RSA signing key for issuing document QR codes.")]
pub struct KeygenCmd {
    /// Where to write the PKCS#8 PEM private key.
    #[arg(long)]
    out: PathBuf,

    /// Modulus size in bits.
    #[arg(long, default_value_t = DEFAULT_KEY_BITS)]
    bits: usize,

    /// Overwrite an existing key file.
    #[arg(long)]
    force: bool,
}

impl KeygenCmd {
    /// Writes the key and returns the base64 public key that payloads will carry.
    pub fn generate(&self) -> Result<String> {
        if self.out.exists() && !self.force {
            anyhow::bail!("{} already exists, pass --force to overwrite it", self.out.display());
        }

        let key = generate_key(self.bits).context("while generating the RSA key")?;
        let pem = private_key_to_pem(&key)?;
        fs::write(&self.out, pem.as_bytes())
            .with_context(|| format!("while writing {}", self.out.display()))?;

        Ok(encode_public_key(&key.to_public_key())?)
    }

    pub fn run(&self) -> Result<()> {
        let public_key = self.generate()?;
        let green = AnsiColor::Green.on_default().effects(Effects::BOLD);
        let mut stderr = io::stderr().lock();
        write_status(
            &mut stderr,
            &green,
            "Generated",
            &format!("{}-bit key at {}", self.bits, self.out.display()),
        )?;
        println!("{public_key}");
        Ok(())
    }
}

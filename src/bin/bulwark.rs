//! Bulwark CLI: AES-CBC + HMAC-SHA256 envelope tooling
//!
//! Usage:
//!   bulwark seal --cipher-key <HEX> --mac-key <HEX> --iv <HEX> \
//!                (--pt <STRING> | --pt-hex <HEX> | --pt-file <PATH>) \
//!                [--mac-over <SCOPE>] [--format <hex|base64>]
//!   bulwark open --cipher-key <HEX> --mac-key <HEX> --iv <HEX> \
//!                (--ct <TEXT> | --ct-file <PATH>) --tag <TEXT> \
//!                [--mac-over <SCOPE>] [--format <hex|base64>] [--output <PATH>]

use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use bulwark_envelope::{open, seal, MacScope};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    let result = match args[1].as_str() {
        "seal" => cmd_seal(&args[2..]),
        "open" => cmd_open(&args[2..]),
        "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" => {
            println!("bulwark {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        cmd => {
            eprintln!("error: unknown command '{}'", cmd);
            print_usage();
            Err("unknown command".into())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn print_usage() {
    eprintln!(
        r#"Bulwark CLI: AES-CBC (PKCS#7) + HMAC-SHA256 truncated-tag envelope

USAGE:
    bulwark <COMMAND> [OPTIONS]

COMMANDS:
    seal        Encrypt and tag a plaintext
    open        Verify and decrypt an envelope

OPTIONS (both commands):
    --cipher-key <HEX>   AES key, 16 or 32 bytes
    --mac-key <HEX>      HMAC-SHA256 key, 32 bytes
    --iv <HEX>           IV, 16 bytes
    --mac-over <SCOPE>   ciphertext | iv+ciphertext | plaintext
                         (default: iv+ciphertext)
    --format <FMT>       hex | base64 (default: hex)

SEAL OPTIONS (exactly one plaintext source):
    --pt <STRING>        Plaintext as UTF-8 string
    --pt-hex <HEX>       Plaintext as hex string
    --pt-file <PATH>     Plaintext from file (raw bytes)

OPEN OPTIONS:
    --ct <TEXT>          Ciphertext in the selected format
    --ct-file <PATH>     Ciphertext from file (raw bytes)
    --tag <TEXT>         Tag in the selected format
    --output <PATH>      Write plaintext to file instead of stdout

EXAMPLES:
    bulwark seal \
        --cipher-key 000102030405060708090a0b0c0d0e0f \
        --mac-key $(head -c 32 /dev/urandom | xxd -p -c 64) \
        --iv 22222222222222222222222222222222 \
        --pt "hello"

    -h, --help       Print help
    -V, --version    Print version
"#
    );
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Format {
    Hex,
    Base64,
}

impl Format {
    fn parse(s: &str) -> Result<Self, Box<dyn std::error::Error>> {
        match s {
            "hex" => Ok(Format::Hex),
            "base64" => Ok(Format::Base64),
            _ => Err(format!("unknown format '{}' (expected hex or base64)", s).into()),
        }
    }

    fn encode(&self, bytes: &[u8]) -> String {
        match self {
            Format::Hex => hex::encode(bytes),
            Format::Base64 => BASE64.encode(bytes),
        }
    }

    fn decode(&self, text: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
        match self {
            Format::Hex => decode_hex(text),
            Format::Base64 => Ok(BASE64.decode(text.trim())?),
        }
    }
}

fn parse_scope(s: &str) -> Result<MacScope, Box<dyn std::error::Error>> {
    match s {
        "ciphertext" => Ok(MacScope::CiphertextOnly),
        "iv+ciphertext" => Ok(MacScope::IvThenCiphertext),
        "plaintext" => Ok(MacScope::PlaintextOnly),
        _ => Err(format!(
            "unknown MAC scope '{}' (expected ciphertext, iv+ciphertext or plaintext)",
            s
        )
        .into()),
    }
}

/// Hex decoding tolerant of `0x` prefixes, spaces, and mixed case.
fn decode_hex(s: &str) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let cleaned: String = s
        .trim()
        .to_lowercase()
        .replace("0x", "")
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    Ok(hex::decode(cleaned)?)
}

struct KeyMaterial {
    cipher_key: Vec<u8>,
    mac_key: Vec<u8>,
    iv: Vec<u8>,
}

fn cmd_seal(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut cipher_key: Option<String> = None;
    let mut mac_key: Option<String> = None;
    let mut iv: Option<String> = None;
    let mut pt: Option<String> = None;
    let mut pt_hex: Option<String> = None;
    let mut pt_file: Option<PathBuf> = None;
    let mut scope = MacScope::IvThenCiphertext;
    let mut format = Format::Hex;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--cipher-key" => {
                i += 1;
                cipher_key = Some(args.get(i).ok_or("missing cipher key")?.clone());
            }
            "--mac-key" => {
                i += 1;
                mac_key = Some(args.get(i).ok_or("missing MAC key")?.clone());
            }
            "--iv" => {
                i += 1;
                iv = Some(args.get(i).ok_or("missing IV")?.clone());
            }
            "--pt" => {
                i += 1;
                pt = Some(args.get(i).ok_or("missing plaintext")?.clone());
            }
            "--pt-hex" => {
                i += 1;
                pt_hex = Some(args.get(i).ok_or("missing plaintext hex")?.clone());
            }
            "--pt-file" => {
                i += 1;
                pt_file = Some(PathBuf::from(args.get(i).ok_or("missing plaintext path")?));
            }
            "--mac-over" => {
                i += 1;
                scope = parse_scope(args.get(i).ok_or("missing MAC scope")?)?;
            }
            "--format" => {
                i += 1;
                format = Format::parse(args.get(i).ok_or("missing format")?)?;
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let keys = load_keys(cipher_key, mac_key, iv)?;

    let sources = pt.is_some() as u8 + pt_hex.is_some() as u8 + pt_file.is_some() as u8;
    if sources != 1 {
        return Err("exactly one of --pt, --pt-hex, --pt-file is required".into());
    }
    let plaintext: Vec<u8> = if let Some(s) = pt {
        s.into_bytes()
    } else if let Some(h) = pt_hex {
        decode_hex(&h)?
    } else {
        // Checked above: pt_file is the remaining source.
        fs::read(pt_file.ok_or("missing plaintext source")?)?
    };

    let (ciphertext, tag) = seal(&keys.cipher_key, &keys.mac_key, &keys.iv, &plaintext, scope)?;

    println!("ciphertext: {}", format.encode(&ciphertext));
    println!("tag: {}", format.encode(&tag));

    Ok(())
}

fn cmd_open(args: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let mut cipher_key: Option<String> = None;
    let mut mac_key: Option<String> = None;
    let mut iv: Option<String> = None;
    let mut ct: Option<String> = None;
    let mut ct_file: Option<PathBuf> = None;
    let mut tag: Option<String> = None;
    let mut output: Option<PathBuf> = None;
    let mut scope = MacScope::IvThenCiphertext;
    let mut format = Format::Hex;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "--cipher-key" => {
                i += 1;
                cipher_key = Some(args.get(i).ok_or("missing cipher key")?.clone());
            }
            "--mac-key" => {
                i += 1;
                mac_key = Some(args.get(i).ok_or("missing MAC key")?.clone());
            }
            "--iv" => {
                i += 1;
                iv = Some(args.get(i).ok_or("missing IV")?.clone());
            }
            "--ct" => {
                i += 1;
                ct = Some(args.get(i).ok_or("missing ciphertext")?.clone());
            }
            "--ct-file" => {
                i += 1;
                ct_file = Some(PathBuf::from(args.get(i).ok_or("missing ciphertext path")?));
            }
            "--tag" => {
                i += 1;
                tag = Some(args.get(i).ok_or("missing tag")?.clone());
            }
            "--output" | "-o" => {
                i += 1;
                output = Some(PathBuf::from(args.get(i).ok_or("missing output path")?));
            }
            "--mac-over" => {
                i += 1;
                scope = parse_scope(args.get(i).ok_or("missing MAC scope")?)?;
            }
            "--format" => {
                i += 1;
                format = Format::parse(args.get(i).ok_or("missing format")?)?;
            }
            _ => return Err(format!("unknown option: {}", args[i]).into()),
        }
        i += 1;
    }

    let keys = load_keys(cipher_key, mac_key, iv)?;

    let ciphertext: Vec<u8> = match (ct, ct_file) {
        (Some(text), None) => format.decode(&text)?,
        (None, Some(path)) => fs::read(path)?,
        _ => return Err("exactly one of --ct, --ct-file is required".into()),
    };
    let tag = format.decode(&tag.ok_or("missing --tag")?)?;

    let plaintext = open(
        &keys.cipher_key,
        &keys.mac_key,
        &keys.iv,
        &ciphertext,
        &tag,
        scope,
    )?;

    if let Some(path) = output {
        fs::write(&path, &plaintext)?;
        eprintln!("Recovered {} bytes", plaintext.len());
        eprintln!("Output: {}", path.display());
    } else {
        io::stdout().write_all(&plaintext)?;
    }

    Ok(())
}

fn load_keys(
    cipher_key: Option<String>,
    mac_key: Option<String>,
    iv: Option<String>,
) -> Result<KeyMaterial, Box<dyn std::error::Error>> {
    Ok(KeyMaterial {
        cipher_key: decode_hex(&cipher_key.ok_or("missing --cipher-key")?)?,
        mac_key: decode_hex(&mac_key.ok_or("missing --mac-key")?)?,
        iv: decode_hex(&iv.ok_or("missing --iv")?)?,
    })
}

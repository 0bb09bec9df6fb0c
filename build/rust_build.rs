/**
 * Compiles the offline prefix data under resources/ into static lookup
 * tables, the same way libphonenumber's tools/cpp generates geocoding data.
 */

use std::{collections::BTreeMap, env, fmt::Write as _, fs::{self, File}, io::{BufRead, BufReader}, num::ParseIntError, path::Path};

use thiserror::Error;

#[derive(Debug, Error)]
enum BuildError {
    #[error("IO error occurred: {0}")]
    IO(#[from] std::io::Error),

    #[error("Line {line_num} is too long (max is {max_len} bytes)")]
    LineTooLong { line_num: usize, max_len: usize },

    #[error("Failed to parse prefix '{prefix}': {source}")]
    PrefixParseError {
        prefix: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Invalid region code '{0}'")]
    InvalidRegionCode(String),

    #[error("Formatting generated code failed: {0}")]
    Fmt(#[from] std::fmt::Error),
}

/// How the left-hand side of a `key|value` line is checked.
#[derive(Clone, Copy)]
enum KeyKind {
    /// Digits of `country code + national number`.
    Prefix,
    /// ISO 3166-1 alpha-2 region code.
    Region,
}

fn parse_entries(path: &Path, kind: KeyKind, entries: &mut BTreeMap<String, String>) -> Result<(), BuildError> {
    entries.clear();

    let input = File::open(path)?;
    const MAX_LINE_LENGTH: usize = 2 * 1024;

    let mut reader = BufReader::new(input);
    let mut line_buffer = String::with_capacity(MAX_LINE_LENGTH);
    let mut line_number = 0;

    loop {
        line_number += 1;
        line_buffer.clear();

        let bytes_read = reader.read_line(&mut line_buffer)?;
        if bytes_read == 0 {
            break;
        }

        if line_buffer.len() > MAX_LINE_LENGTH {
            return Err(BuildError::LineTooLong {
                line_num: line_number,
                max_len: MAX_LINE_LENGTH,
            });
        }

        let line = line_buffer.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some((key, desc)) = line.split_once('|') {
            let key = key.trim();
            if key.is_empty() {
                continue;
            }
            match kind {
                KeyKind::Prefix => {
                    key.parse::<u64>().map_err(|e| BuildError::PrefixParseError {
                        prefix: key.to_string(),
                        source: e,
                    })?;
                }
                KeyKind::Region => {
                    if key.len() != 2 || !key.bytes().all(|b| b.is_ascii_uppercase()) {
                        return Err(BuildError::InvalidRegionCode(key.to_string()));
                    }
                }
            }
            entries.insert(key.to_string(), desc.trim().to_string());
        }
    }

    Ok(())
}

fn write_table(out: &mut String, name: &str, entries: &BTreeMap<String, String>) -> Result<(), BuildError> {
    writeln!(out, "pub(crate) static {name}: &[(&str, &str)] = &[")?;
    for (key, value) in entries {
        writeln!(out, "    ({key:?}, {value:?}),")?;
    }
    writeln!(out, "];\n")?;
    Ok(())
}

fn main() -> Result<(), BuildError> {
    println!("cargo:rerun-if-changed=resources");

    let tables = [
        ("GEOCODING_EN", "resources/geocoding/en.txt", KeyKind::Prefix),
        ("CARRIER_EN", "resources/carrier/en.txt", KeyKind::Prefix),
        ("TIMEZONES", "resources/timezones/map_data.txt", KeyKind::Prefix),
        ("TIMEZONES_BY_REGION", "resources/timezones/regions.txt", KeyKind::Region),
        ("COUNTRY_NAMES_EN", "resources/countries/en.txt", KeyKind::Region),
    ];

    let mut generated = String::from("// @generated by build/rust_build.rs from resources/\n\n");
    let mut entries = BTreeMap::new();
    for (name, path, kind) in tables {
        println!("cargo:rerun-if-changed={path}");
        parse_entries(Path::new(path), kind, &mut entries)?;
        write_table(&mut generated, name, &entries)?;
    }

    let out_dir = env::var("OUT_DIR").map_err(|e| std::io::Error::new(std::io::ErrorKind::NotFound, e))?;
    fs::write(Path::new(&out_dir).join("offline_data.rs"), generated)?;
    Ok(())
}

use std::io::{IsTerminal, Write};

use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use riderwire::frame::{CatalogEntry, Frame, Payload};
use riderwire::message::{DataType, DeviceType};
use serde::Serialize;

use crate::hex::to_hex;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

#[derive(Serialize)]
struct FrameOutput<'a> {
    data_type: DataType,
    code: u8,
    length: u8,
    from: DeviceType,
    to: DeviceType,
    record: &'static str,
    payload: &'a Payload,
}

impl<'a> FrameOutput<'a> {
    fn new(frame: &'a Frame) -> Self {
        Self {
            data_type: frame.header.data_type,
            code: frame.header.data_type.to_wire(),
            length: frame.header.length,
            from: frame.header.from,
            to: frame.header.to,
            record: frame.payload.name(),
            payload: &frame.payload,
        }
    }
}

#[derive(Serialize)]
struct EncodedOutput<'a> {
    data_type: DataType,
    record: &'static str,
    length: u8,
    size: usize,
    hex: &'a str,
}

#[derive(Serialize)]
struct CatalogRow {
    code: u8,
    data_type: DataType,
    record: &'static str,
    size: usize,
}

/// One JSON document per line, to keep multi-frame output streamable.
pub fn print_frames(frames: &[Frame], wire: &[u8], format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            for frame in frames {
                println!("{}", to_json(&FrameOutput::new(frame)));
            }
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "FROM", "TO", "LENGTH", "RECORD", "FIELDS"]);
            for frame in frames {
                table.add_row(vec![
                    frame.header.data_type.to_string(),
                    frame.header.from.to_string(),
                    frame.header.to.to_string(),
                    frame.header.length.to_string(),
                    frame.payload.name().to_string(),
                    record_fields(&frame.payload),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for frame in frames {
                println!(
                    "{} from={} to={} length={} {}",
                    frame.payload.name(),
                    frame.header.from,
                    frame.header.to,
                    frame.header.length,
                    record_fields(&frame.payload)
                );
            }
        }
        OutputFormat::Raw => print_raw(wire),
    }
}

pub fn print_encoded(frame: &Frame, wire: &[u8], format: OutputFormat) {
    let hex = to_hex(wire);
    match format {
        OutputFormat::Json => {
            let out = EncodedOutput {
                data_type: frame.header.data_type,
                record: frame.payload.name(),
                length: frame.header.length,
                size: wire.len(),
                hex: &hex,
            };
            println!("{}", to_json(&out));
        }
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["TYPE", "RECORD", "LENGTH", "HEX"])
                .add_row(vec![
                    frame.header.data_type.to_string(),
                    frame.payload.name().to_string(),
                    frame.header.length.to_string(),
                    hex,
                ]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{hex}"),
        OutputFormat::Raw => print_raw(wire),
    }
}

pub fn print_catalog(entries: &[&CatalogEntry], format: OutputFormat) {
    let rows: Vec<CatalogRow> = entries
        .iter()
        .flat_map(|entry| {
            entry.variants.iter().map(|variant| CatalogRow {
                code: entry.data_type.to_wire(),
                data_type: entry.data_type,
                record: variant.name,
                size: variant.size,
            })
        })
        .collect();

    match format {
        OutputFormat::Json => println!("{}", to_json(&rows)),
        OutputFormat::Table => {
            let mut table = Table::new();
            table
                .load_preset(UTF8_FULL)
                .set_content_arrangement(ContentArrangement::Dynamic)
                .set_header(vec!["CODE", "TYPE", "RECORD", "SIZE"]);
            for row in &rows {
                table.add_row(vec![
                    format!("0x{:02X}", row.code),
                    row.data_type.to_string(),
                    row.record.to_string(),
                    row.size.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty | OutputFormat::Raw => {
            for row in &rows {
                println!(
                    "0x{:02X} {} {} {}",
                    row.code, row.data_type, row.record, row.size
                );
            }
        }
    }
}

pub fn print_raw(data: &[u8]) {
    let mut out = std::io::stdout();
    let _ = out.write_all(data);
    let _ = out.flush();
}

/// The record's own fields, without the enclosing variant name.
fn record_fields(payload: &Payload) -> String {
    match serde_json::to_value(payload) {
        Ok(serde_json::Value::Object(map)) => map
            .into_iter()
            .next()
            .map(|(_, fields)| fields.to_string())
            .unwrap_or_default(),
        Ok(other) => other.to_string(),
        Err(_) => String::new(),
    }
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

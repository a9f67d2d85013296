use clap::{Args, Subcommand};
use riderwire::message::{DataType, DeviceType};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod catalog;
pub mod decode;
pub mod encode;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Decode frames from hex or a binary file.
    Decode(DecodeArgs),
    /// Build a frame from a JSON payload.
    Encode(EncodeArgs),
    /// List type codes and their payload records.
    Catalog(CatalogArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Decode(args) => decode::run(args, format),
        Command::Encode(args) => encode::run(args, format),
        Command::Catalog(args) => catalog::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Frame bytes as hex. Read from stdin when neither this nor --file is
    /// given.
    #[arg(conflicts_with = "file")]
    pub hex: Option<String>,
    /// Read raw frame bytes from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Treat the input as one frame and ignore the header length.
    #[arg(long)]
    pub lenient: bool,
}

#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Payload as JSON, keyed by record name, e.g. '{"Ping":{"system_time":1}}'.
    #[arg(long, conflicts_with = "file", required_unless_present = "file")]
    pub json: Option<String>,
    /// Read the JSON payload from a file.
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
    /// Source endpoint.
    #[arg(long, default_value = "controller")]
    pub from: DeviceType,
    /// Destination endpoint.
    #[arg(long, default_value = "drone")]
    pub to: DeviceType,
}

#[derive(Args, Debug)]
pub struct CatalogArgs {
    /// Show only this type code, by name.
    #[arg(long, value_name = "NAME")]
    pub data_type: Option<DataType>,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

mod cmd;
mod exit;
mod hex;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "riderwire", version, about = "CodingRider wire protocol tool")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(
        long,
        value_name = "LEVEL",
        default_value = "warn",
        env = "RIDERWIRE_LOG",
        global = true
    )]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format);

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decode_subcommand() {
        let cli = Cli::try_parse_from(["riderwire", "decode", "01 08 02 01"])
            .expect("decode args should parse");
        assert!(matches!(cli.command, Command::Decode(_)));
    }

    #[test]
    fn rejects_conflicting_decode_inputs() {
        let err = Cli::try_parse_from(["riderwire", "decode", "0108", "--file", "frames.bin"])
            .expect_err("conflicting args should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn parses_encode_endpoints_by_name() {
        let cli = Cli::try_parse_from([
            "riderwire",
            "encode",
            "--json",
            "{\"Ping\":{\"system_time\":1}}",
            "--from",
            "drone",
            "--to",
            "controller",
        ])
        .expect("encode args should parse");
        match cli.command {
            Command::Encode(args) => {
                assert_eq!(args.from, riderwire::message::DeviceType::Drone);
                assert_eq!(args.to, riderwire::message::DeviceType::Controller);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn rejects_unknown_endpoint() {
        let err = Cli::try_parse_from(["riderwire", "encode", "--json", "{}", "--to", "moon"])
            .expect_err("unknown device should fail");
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }
}

use std::fs;
use std::io::Read;

use riderwire::frame::{parse_frame, Frame, FrameConfig, FrameError, FrameReader};
use tracing::debug;

use crate::cmd::DecodeArgs;
use crate::exit::{frame_error, io_error, CliError, CliResult, SUCCESS, USAGE};
use crate::hex::parse_hex;
use crate::output::{print_frames, OutputFormat};

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let wire = resolve_input(&args)?;
    if wire.is_empty() {
        return Err(CliError::new(USAGE, "no frame bytes given"));
    }

    let frames = if args.lenient {
        let config = FrameConfig {
            strict_length: false,
            ..FrameConfig::default()
        };
        vec![parse_frame(&wire, &config).map_err(|err| frame_error("decode failed", err))?]
    } else {
        split_frames(&wire)?
    };
    debug!(frames = frames.len(), bytes = wire.len(), "decoded input");

    print_frames(&frames, &wire, format);
    Ok(SUCCESS)
}

fn resolve_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(hex) = &args.hex {
        return parse_hex(hex);
    }
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    let mut text = String::new();
    std::io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| io_error("failed reading stdin", err))?;
    parse_hex(&text)
}

/// Split back-to-back frames on their header lengths.
fn split_frames(wire: &[u8]) -> CliResult<Vec<Frame>> {
    let mut reader = FrameReader::new(wire);
    let mut frames = Vec::new();
    loop {
        let context = format!("frame {}", frames.len());
        match reader.read_frame() {
            Ok(frame) => frames.push(frame),
            Err(FrameError::ConnectionClosed) if reader.buffered().is_empty() => {
                return Ok(frames)
            }
            Err(FrameError::ConnectionClosed) => {
                // Parse the tail on its own so the error names the short part.
                let err = parse_frame(reader.buffered(), &FrameConfig::default())
                    .err()
                    .unwrap_or(FrameError::ConnectionClosed);
                return Err(frame_error(&context, err));
            }
            Err(err) => return Err(frame_error(&context, err)),
        }
    }
}

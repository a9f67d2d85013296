use std::fs;

use riderwire::frame::{Frame, Payload};
use tracing::debug;

use crate::cmd::EncodeArgs;
use crate::exit::{frame_error, io_error, json_error, CliResult, SUCCESS};
use crate::output::{print_encoded, OutputFormat};

pub fn run(args: EncodeArgs, format: OutputFormat) -> CliResult<i32> {
    let text = resolve_json(&args)?;
    let payload = parse_payload(&text)?;

    let frame = Frame::new(args.from, args.to, payload)
        .map_err(|err| frame_error("encode failed", err))?;
    let wire = frame
        .encode()
        .map_err(|err| frame_error("encode failed", err))?;
    debug!(record = frame.payload.name(), size = wire.len(), "encoded frame");

    print_encoded(&frame, &wire, format);
    Ok(SUCCESS)
}

fn resolve_json(args: &EncodeArgs) -> CliResult<String> {
    if let Some(json) = &args.json {
        return Ok(json.clone());
    }
    match &args.file {
        Some(path) => fs::read_to_string(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err)),
        None => Ok(String::new()),
    }
}

fn parse_payload(text: &str) -> CliResult<Payload> {
    serde_json::from_str(text).map_err(|err| json_error("payload is not a known record", err))
}

#[cfg(test)]
mod tests {
    use riderwire::message::common::Ping;
    use riderwire::message::DataType;

    use super::*;
    use crate::exit::DATA_INVALID;

    #[test]
    fn parses_record_keyed_json() {
        let payload = parse_payload(r#"{"Ping":{"system_time":123456789}}"#).unwrap();
        assert_eq!(
            payload,
            Payload::Ping(Ping {
                system_time: 123_456_789
            })
        );
        assert_eq!(payload.data_type(), DataType::Ping);
    }

    #[test]
    fn rejects_unknown_record_or_tag() {
        assert_eq!(
            parse_payload(r#"{"Teleport":{}}"#).unwrap_err().code,
            DATA_INVALID
        );
        assert_eq!(
            parse_payload(r#"{"Request":{"data_type":"Nowhere"}}"#)
                .unwrap_err()
                .code,
            DATA_INVALID
        );
    }
}

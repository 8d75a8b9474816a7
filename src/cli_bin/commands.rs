//! CLI command handlers that bridge CLI arguments to library operations
//!
//! Handlers return the text to print so `main` owns stdout.

use crate::cli_bin::args::{DecodeArgs, EncodeArgs};
use log::{debug, info};
use std::fs;
use std::io::{self, Read};
use std::path::Path;
use yamlcast::error::Result;
use yamlcast::{EncoderConfig, Value, YamlReader, YamlWriter};

/// Execute the decode command
pub fn decode_command(args: &DecodeArgs) -> Result<String> {
    debug!("Executing decode command with args: {:?}", args);

    let reader = YamlReader::new();
    let defaults = args
        .defaults
        .as_deref()
        .map(|path| reader.read_defaults_file(path))
        .transpose()?;
    if let Some(defaults) = &defaults {
        debug!("Loaded {} default properties", defaults.len());
    }

    let input = read_input(args.file.as_deref())?;
    let values = reader.read_str(&input, defaults.as_ref())?;
    info!("Decoded {} document(s)", values.len());

    let output = if args.compact {
        serde_json::to_string(&values)?
    } else {
        serde_json::to_string_pretty(&values)?
    };
    Ok(output)
}

/// Execute the encode command
pub fn encode_command(args: &EncodeArgs) -> Result<String> {
    debug!("Executing encode command with args: {:?}", args);

    let input = read_input(args.file.as_deref())?;
    let values = match serde_json::from_str::<serde_json::Value>(&input)? {
        serde_json::Value::Array(items) => items.into_iter().map(Value::from).collect(),
        single => vec![Value::from(single)],
    };
    info!("Encoding {} value(s)", values.len());

    let writer = YamlWriter::with_config(EncoderConfig {
        depth: args.depth,
        indent: args.indent,
    });
    writer.encode(&values)
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => {
            debug!("Reading input from {}", path.display());
            Ok(fs::read_to_string(path)?)
        }
        None => {
            debug!("Reading input from stdin");
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;
    use yamlcast::YamlCastError;

    fn temp_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_decode_with_defaults_file() {
        let input = temp_file("name: api\nport: 80\n---\n- 1\n- two\n");
        let defaults = temp_file("port: 8080\nreplicas: 2\n");

        let output = decode_command(&DecodeArgs {
            file: Some(input.path().to_path_buf()),
            defaults: Some(defaults.path().to_path_buf()),
            compact: true,
        })
        .unwrap();

        assert_eq!(
            output,
            r#"[{"port":80,"replicas":2,"name":"api"},[1,"two"]]"#
        );
    }

    #[test]
    fn test_defaults_file_must_be_a_map() {
        let input = temp_file("a: 1\n");
        let defaults = temp_file("- not\n- a map\n");

        let result = decode_command(&DecodeArgs {
            file: Some(input.path().to_path_buf()),
            defaults: Some(defaults.path().to_path_buf()),
            compact: true,
        });

        assert!(matches!(result, Err(YamlCastError::Validation { .. })));
    }

    #[test]
    fn test_encode_json_array_as_piped_values() {
        let input = temp_file(r#"[{"id": 1}, {"id": 2}]"#);

        let output = encode_command(&EncodeArgs {
            file: Some(input.path().to_path_buf()),
            depth: 2,
            indent: 2,
        })
        .unwrap();

        assert_eq!(
            output,
            "---\r\n[\n  {\n    \"id\": 1\n  },\n  {\n    \"id\": 2\n  }\n]\r\n..."
        );
    }

    #[test]
    fn test_encode_empty_array_rejected() {
        let input = temp_file("[]");

        let result = encode_command(&EncodeArgs {
            file: Some(input.path().to_path_buf()),
            depth: 2,
            indent: 4,
        });

        assert!(matches!(result, Err(YamlCastError::InvalidArgument { .. })));
    }

    #[test]
    fn test_missing_input_file() {
        let result = decode_command(&DecodeArgs {
            file: Some("/nonexistent/input.yaml".into()),
            defaults: None,
            compact: false,
        });

        assert!(matches!(result, Err(YamlCastError::Io(_))));
    }
}

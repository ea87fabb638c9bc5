//! `mask` command implementation: masks a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::io::{self, BufRead, BufReader, Read, Write};

use logmask_core::{DecoratorConfig, DynDecorator};

use crate::cli::MaskCommand;

/// Merges the configuration file (or the built-in default) with the command-line flags.
pub fn resolve_config(cmd: &MaskCommand) -> Result<DecoratorConfig> {
    let mut config = match (&cmd.config, cmd.all_templates) {
        (Some(path), _) => DecoratorConfig::load_from_file(path)
            .with_context(|| format!("Failed to load configuration {}", path.display()))?,
        (None, true) => DecoratorConfig::load_default()?,
        (None, false) => DecoratorConfig::default(),
    };

    if let Some(strategy) = cmd.strategy {
        config.strategy = strategy.into();
    }
    if let Some(mask) = &cmd.mask {
        config.mask = Some(Some(mask.clone()));
    }
    config.templates.extend(cmd.templates.iter().cloned());
    config.custom_templates.extend(cmd.custom_templates.iter().cloned());
    config.fields.extend(cmd.fields.iter().cloned());

    debug!("Resolved configuration: {:?}", config);
    Ok(config)
}

/// Masks one line; JSON events are masked value by value.
///
/// An event in which no value changed is written back byte for byte, so spacing,
/// key order and number formatting of untouched lines survive.
pub fn mask_line(decorator: &DynDecorator, line: &str, json_lines: bool) -> String {
    if !json_lines {
        return decorator.mask_message(line);
    }
    match serde_json::from_str::<Value>(line) {
        Ok(event) => {
            let masked = decorator.mask_event(event.clone());
            if masked == event {
                return line.to_string();
            }
            serde_json::to_string(&masked).unwrap_or_else(|_| decorator.mask_message(line))
        }
        Err(e) => {
            debug!("Line is not a JSON event ({}), masking it as text.", e);
            decorator.mask_message(line)
        }
    }
}

/// Splits a line read with `read_line` into its content and its own terminator
/// (`\r\n`, `\n`, or nothing for a final unterminated line).
fn split_terminator(raw: &str) -> (&str, &str) {
    let content = raw
        .strip_suffix("\r\n")
        .or_else(|| raw.strip_suffix('\n'))
        .unwrap_or(raw);
    raw.split_at(content.len())
}

/// The main operation runner for the `mask` command.
pub fn run_mask(cmd: &MaskCommand) -> Result<()> {
    info!("Starting logmask operation.");

    let config = resolve_config(cmd)?;
    let decorator = config.build().context("Invalid decorator configuration")?;

    let mut reader: Box<dyn BufRead> = match &cmd.input_file {
        Some(path) => Box::new(BufReader::new(
            fs::File::open(path)
                .with_context(|| format!("Failed to open input file: {}", path.display()))?,
        )),
        None => Box::new(io::stdin().lock()),
    };

    let mut writer: Box<dyn Write> = match &cmd.output {
        Some(path) => {
            info!("Writing masked content to file: {}", path.display());
            Box::new(
                fs::File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?,
            )
        }
        None => Box::new(io::stdout().lock()),
    };

    if cmd.line_buffered || cmd.json_lines {
        let mut lines = 0usize;
        let mut buf = String::new();
        loop {
            buf.clear();
            if reader
                .read_line(&mut buf)
                .context("Failed to read input line")?
                == 0
            {
                break;
            }
            let (line, terminator) = split_terminator(&buf);
            write!(writer, "{}{}", mask_line(&decorator, line, cmd.json_lines), terminator)?;
            if cmd.line_buffered {
                writer.flush()?;
            }
            lines += 1;
        }
        debug!("Masked {} line(s).", lines);
    } else {
        let mut input = String::new();
        reader
            .read_to_string(&mut input)
            .context("Failed to read input")?;
        let masked = decorator.mask_message(&input);
        debug!(
            "Content masked. Original length: {}, masked length: {}",
            input.len(),
            masked.len()
        );
        writer.write_all(masked.as_bytes())?;
    }
    writer.flush()?;

    info!("logmask operation completed.");
    Ok(())
}

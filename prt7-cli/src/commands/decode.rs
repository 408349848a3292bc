use anyhow::{Context, Result};
use colored::Colorize;
use prt7_core::session::{Report, Session};
use prt7_core::source::ReaderLineSource;
use prt7_core::SessionEvent;
use std::fs::{self, File};
use std::io::{self, Read};
use tracing::info;

/// Report that prints events as they arrive and keeps them for file output
struct ConsoleReport {
    json: bool,
    quiet: bool,
    events: Vec<SessionEvent>,
}

impl ConsoleReport {
    fn new(json: bool, quiet: bool) -> Self {
        Self {
            json,
            quiet,
            events: Vec::new(),
        }
    }

    fn print_console(&self, event: &SessionEvent) {
        match event {
            SessionEvent::Banner => {
                println!("Control message received: [SISTEMA PRT-7 ACTIVO]");
            }
            SessionEvent::Loaded {
                raw,
                decoded,
                payload,
            } => {
                println!(
                    "Fragment '{}' decoded as '{}'. Message: {}",
                    raw,
                    decoded.to_string().green(),
                    payload
                );
            }
            SessionEvent::Rotated { delta, head } => {
                println!("Rotor rotated {:+}. ('A' now maps to '{}')", delta, head);
            }
            SessionEvent::Malformed { line, error } => {
                eprintln!("{} [{}]: {}", "Malformed frame".red(), line, error);
            }
            SessionEvent::Finished {
                message,
                frames_processed,
                malformed_lines,
            } => {
                println!("---");
                println!(
                    "Data stream ended ({} frames, {} malformed).",
                    frames_processed, malformed_lines
                );
                println!("HIDDEN MESSAGE:");
                println!("{}", message.bold());
                println!("---");
            }
        }
    }
}

impl Report for ConsoleReport {
    fn on_event(&mut self, event: &SessionEvent) {
        if self.json {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{}", line);
            }
        } else if self.quiet {
            if let SessionEvent::Finished { message, .. } = event {
                println!("{}", message);
            }
        } else {
            self.print_console(event);
        }
        self.events.push(event.clone());
    }
}

pub fn execute(input: &str, output: Option<&str>, json: bool, quiet: bool) -> Result<()> {
    info!("Decoding transcript: {}", input);

    let reader: Box<dyn Read> = if input == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(
            File::open(input)
                .with_context(|| format!("Failed to open line source: {}", input))?,
        )
    };

    let mut source = ReaderLineSource::new(reader);
    let mut report = ConsoleReport::new(json, quiet);

    let summary = Session::new()
        .run(&mut source, &mut report)
        .context("Line source failed mid-stream")?;

    info!(
        "Session complete: {} frames, {} malformed",
        summary.frames_processed, summary.malformed_lines
    );

    if let Some(path) = output {
        let contents = if json {
            let mut out = String::new();
            for event in &report.events {
                out.push_str(&serde_json::to_string(event)?);
                out.push('\n');
            }
            out
        } else {
            summary.message.clone()
        };

        fs::write(path, contents)
            .with_context(|| format!("Failed to write output file: {}", path))?;

        info!("Decoded output written to: {}", path);
    }

    Ok(())
}

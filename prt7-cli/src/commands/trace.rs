use anyhow::{Context, Result};
use prt7_core::constants::{SENTINEL_BANNER, SENTINEL_FIN};
use prt7_core::source::{LineSource, ReaderLineSource};
use prt7_core::{parser, Frame};
use serde::Serialize;
use std::fs::File;
use std::io::{self, Read};
use tracing::info;

#[derive(Serialize)]
struct LineRecord {
    #[serde(rename = "type")]
    kind: &'static str,
    line: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Default)]
struct TraceStats {
    lines: usize,
    load_frames: usize,
    map_frames: usize,
    banners: usize,
    malformed: usize,
    fin_seen: bool,
}

/// Classify transcript lines without touching any decoder state
pub fn execute(input: &str, json: bool) -> Result<()> {
    info!("Tracing transcript: {}", input);

    let reader: Box<dyn Read> = if input == "-" {
        Box::new(io::stdin())
    } else {
        Box::new(
            File::open(input)
                .with_context(|| format!("Failed to open line source: {}", input))?,
        )
    };

    let mut source = ReaderLineSource::new(reader);
    let mut stats = TraceStats::default();
    let mut records = Vec::new();

    while let Some(line) = source.next_line().context("Line source failed")? {
        if line.trim().is_empty() {
            continue;
        }
        stats.lines += 1;

        let record = if line == SENTINEL_FIN {
            stats.fin_seen = true;
            LineRecord {
                kind: "fin",
                line,
                detail: None,
            }
        } else if line == SENTINEL_BANNER {
            stats.banners += 1;
            LineRecord {
                kind: "banner",
                line,
                detail: None,
            }
        } else {
            match parser::parse(&line) {
                Ok(Frame::Load(c)) => {
                    stats.load_frames += 1;
                    LineRecord {
                        kind: "load",
                        line,
                        detail: Some(format!("char {:?}", c)),
                    }
                }
                Ok(Frame::Map(delta)) => {
                    stats.map_frames += 1;
                    LineRecord {
                        kind: "map",
                        line,
                        detail: Some(format!("delta {:+}", delta)),
                    }
                }
                Err(e) => {
                    stats.malformed += 1;
                    LineRecord {
                        kind: "malformed",
                        line,
                        detail: Some(e.to_string()),
                    }
                }
            }
        };

        let fin = stats.fin_seen;
        records.push(record);
        // A decoder would stop here; so does the trace
        if fin {
            break;
        }
    }

    if json {
        println!(
            "{}",
            serde_json::json!({
                "type": "stats",
                "lines": stats.lines,
                "load_frames": stats.load_frames,
                "map_frames": stats.map_frames,
                "banners": stats.banners,
                "malformed": stats.malformed,
                "fin_seen": stats.fin_seen,
            })
        );
        for record in &records {
            println!("{}", serde_json::to_string(record)?);
        }
    } else {
        println!("\n=== Trace Results ===");
        println!("Lines:          {}", stats.lines);
        println!("Load frames:    {}", stats.load_frames);
        println!("Map frames:     {}", stats.map_frames);
        println!("Banners:        {}", stats.banners);
        println!("Malformed:      {}", stats.malformed);
        println!("FIN seen:       {}", stats.fin_seen);
        println!();
    }

    Ok(())
}

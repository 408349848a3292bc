use anyhow::{Context, Result};
use prt7_core::encoder::compose_transcript;
use std::fs;
use tracing::info;

/// Build a transcript that decodes back to `message`
pub fn execute(message: &str, output: &str, schedule: &[i32]) -> Result<()> {
    let lines = compose_transcript(message, schedule);
    let mut text = lines.join("\n");
    text.push('\n');

    if output == "-" {
        print!("{}", text);
    } else {
        fs::write(output, &text)
            .with_context(|| format!("Failed to write transcript file: {}", output))?;

        info!(
            "Transcript with {} lines written to: {}",
            lines.len(),
            output
        );
    }

    Ok(())
}

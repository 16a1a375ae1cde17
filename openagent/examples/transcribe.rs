//! Transcription example: audio file in, text out.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example transcribe -- recording.mp3
//! ```

#![allow(clippy::print_stdout)]

use anyhow::Context;
use openagent::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .context("usage: transcribe <audio-file>")?;

    let agent = Agent::from_env()?;
    let transcript = agent.transcribe(&path).await?;

    if let Some(language) = &transcript.language {
        println!("[{language}]");
    }
    println!("{}", transcript.text);

    Ok(())
}

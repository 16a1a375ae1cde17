//! Streaming text-to-speech example: chunks are delivered to a sink as
//! they arrive instead of buffering the whole file.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example speak_stream
//! ```

#![allow(clippy::print_stdout)]

use openagent::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let agent = Agent::from_env()?;

    // MemorySink stands in for an audio device; a real player would
    // implement AudioSink over its playback buffer.
    let mut sink = MemorySink::new();
    let total = agent
        .synthesize_speech_stream(
            "Streaming speech arrives chunk by chunk.",
            &mut sink,
            SpeechOptions::new().format(AudioFormat::Pcm),
        )
        .await?;

    println!("Received {total} bytes of pcm audio");

    Ok(())
}

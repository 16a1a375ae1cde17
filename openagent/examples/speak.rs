//! Text-to-speech example: synthesize a sentence into an mp3 file.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example speak
//! ```

#![allow(clippy::print_stdout)]

use openagent::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let agent = Agent::from_env()?;

    let output_path = "output.mp3";
    println!("Generating speech...");
    agent
        .synthesize_speech(
            "Hello! This is a test of the speech synthesis API.",
            output_path,
            SpeechOptions::new().voice(Voice::Nova),
        )
        .await?;

    println!("Audio saved to: {output_path}");

    Ok(())
}

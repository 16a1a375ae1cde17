//! Embedding example: embed two texts and compare them.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example embed
//! ```

#![allow(clippy::print_stdout)]

use openagent::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let agent = Agent::from_env()?;

    let a = agent.embedding("The cat sat on the mat.").await?;
    let b = agent.embedding("A feline rested on the rug.").await?;

    println!("dimension: {}", a.dimension());
    println!("similarity: {:.4}", a.cosine_similarity(&b));

    Ok(())
}

//! Image captioning example.
//!
//! ```bash
//! export OPENAI_API_KEY=sk-...
//! cargo run --example caption -- photo.jpg
//! ```

#![allow(clippy::print_stdout)]

use openagent::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "photo.jpg".to_owned());

    let agent = Agent::from_env()?;
    let image = ImageData::load(&path).await?;

    let caption = agent.caption_image(&image, "english").await?;
    println!("{caption}");

    Ok(())
}

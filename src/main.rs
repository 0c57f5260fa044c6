//! aitk: list, dump and summarize project trees for LLM prompts

use anyhow::Result;

fn main() -> Result<()> {
    aitk::cli::run()
}

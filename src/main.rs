// Countdown Renderer
// Main entry point

use anyhow::{Context, Result};

use countdown_renderer::models::target::{TargetInstant, DEFAULT_TARGET_DATE};
use countdown_renderer::services::page::Page;
use countdown_renderer::services::renderer::{CountdownRenderer, COUNTDOWN_ELEMENT_ID};
use countdown_renderer::utils::clock::SystemClock;

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    log::info!("Starting countdown renderer");

    // A malformed target date is a startup failure, not a silent bad render.
    let target = TargetInstant::parse(DEFAULT_TARGET_DATE)
        .context("Failed to parse the target date literal")?;

    // The surrounding markup owns the display element; the renderer only
    // writes into it.
    let mut page = Page::new();
    page.document_mut().add_element(COUNTDOWN_ELEMENT_ID);

    CountdownRenderer::new(target).install(SystemClock, &mut page);
    page.load();

    if let Some(text) = page.document().element_text(COUNTDOWN_ELEMENT_ID) {
        println!("{}", text);
    }

    Ok(())
}

use image_search::app::SearchApp;
use image_search::core::models::UserSettings;
use image_search::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN, STARTUP_BANNER};
use image_search::presentation::TerminalRenderer;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    let settings = UserSettings::load().unwrap_or_else(|e| {
        log::warn!("{} Failed to load settings: {}, using defaults", LOG_TAG_MAIN, e);
        UserSettings::default().with_env_overrides()
    });

    println!("{}", STARTUP_BANNER);

    let app = SearchApp::build(&settings)?;
    let input = tokio::io::BufReader::new(tokio::io::stdin());

    app.run(input, TerminalRenderer::new(std::io::stdout())).await?;

    log::info!("{} Exiting", LOG_TAG_MAIN);
    Ok(())
}

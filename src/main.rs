use anyhow::Context;
use clap::Parser;

use product_card::asset::{AssetError, ImageSource, Thumbnail};
use product_card::cli::Cli;
use product_card::config::LoadedCard;
use product_card::logging::{default_log_path, init_tracing};
use product_card::shutdown::ShutdownCoordinator;
use product_card::ui::app::App;
use product_card::ui::card::view::{media_width, render_to_text, MEDIA_HEIGHT};
use product_card::ui::card::{CardState, ProductCard};
use product_card::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_path = cli.log_file.clone().unwrap_or_else(default_log_path);
    init_tracing(&log_path)
        .with_context(|| format!("failed to open log file '{}'", log_path.display()))?;

    let loaded = LoadedCard::load(cli.product.as_deref()).context("failed to load product")?;
    tracing::info!(source = %loaded.source, title = %loaded.file.product.title, "product loaded");

    let LoadedCard { file, source } = loaded;
    let width = file.page.card_width();

    if cli.print {
        let state = CardState::for_product(&file.product);
        for row in render_to_text(ProductCard::new(&file.product, &state), width) {
            println!("{row}");
        }
        return Ok(());
    }

    let image = ImageSource::resolve(&file.product.image, source.base_dir());
    let thumbnail = match Thumbnail::load(&image, media_width(width), MEDIA_HEIGHT) {
        Ok(thumbnail) => Some(thumbnail),
        Err(AssetError::Remote { url }) => {
            tracing::info!(%url, "remote image not fetched, showing placeholder");
            None
        }
        Err(err) => {
            tracing::warn!(error = %err, "image unavailable, showing placeholder");
            None
        }
    };

    let shutdown = ShutdownCoordinator::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;

    let app = App::new(file.product, file.page).with_thumbnail(thumbnail);
    runtime::run(app, &shutdown).context("terminal UI failed")?;

    tracing::info!("shutdown complete");
    Ok(())
}

use anyhow::Context;
use hr_dashboard::error::util::safe_write;
use hr_dashboard::{Dashboard, DashboardConfig, FontResource, HtmlSurface, RenderOutcome};
use log::{error, info};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = DashboardConfig::default();
    let font = FontResource::load(&config.font_path)
        .with_context(|| format!("Failed to load font {}", config.font_path.display()))?;

    let dashboard = Dashboard::new(config);
    let mut surface = HtmlSurface::new().with_font(&font);
    let outcome = dashboard.render(&mut surface).context("Failed to render dashboard")?;

    let config = dashboard.config();
    let page = surface.finish(&config.page_title);
    safe_write(&config.output_path, page.as_bytes(), "writing dashboard page")
        .context("Failed to write dashboard page")?;
    info!("Wrote dashboard to {}", config.output_path.display());

    match outcome {
        RenderOutcome::Rendered(snapshot) => {
            if let Some(path) = &config.snapshot_path {
                snapshot.write(path).context("Failed to write dashboard snapshot")?;
            }
        }
        RenderOutcome::Halted => {
            error!("No data loaded from {}", config.data_path.display());
        }
    }

    Ok(())
}

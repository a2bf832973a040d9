//! Demo app: a dot grid in a window, logging every reported selection.
//!
//! Grid size and interaction mode come from the settings file
//! (see `dotbox::settings`). Set `RUST_LOG=dotbox=trace` to see the grid
//! rendered as text after every change.

use anyhow::Result;
use dotbox::observer::LogObserver;
use dotbox::render::dots::DotGridView;
use dotbox::settings::GridSettings;
use gpui::*;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("dotbox=info")),
        )
        .init();

    let settings = GridSettings::load();
    let grid = settings.build_grid()?.with_observer(LogObserver);
    tracing::info!(
        columns = settings.columns,
        rows = settings.rows,
        mode = ?settings.mode,
        "Starting dot grid"
    );

    let (width, height) = DotGridView::preferred_size(grid.geometry());

    Application::new().run(move |cx: &mut App| {
        let bounds = Bounds::centered(None, size(px(width), px(height)), cx);
        let opened = cx.open_window(
            WindowOptions {
                window_bounds: Some(WindowBounds::Windowed(bounds)),
                ..Default::default()
            },
            |_, cx| cx.new(|_| DotGridView::new(grid)),
        );
        if let Err(e) = opened {
            tracing::error!("Failed to open window: {}", e);
            cx.quit();
            return;
        }
        cx.activate(true);
    });

    Ok(())
}

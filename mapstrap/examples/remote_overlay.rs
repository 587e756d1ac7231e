//! This example bootstraps a map the way the host page of a map widget
//! would: it registers a surface under an element id, initializes a map over
//! it with a fixed view configuration, and waits for the remote GeoJSON
//! overlay to be merged in.
//!
//! ```shell
//! cargo run --example remote_overlay
//! ```

use std::sync::Arc;

use anyhow::Result;
use mapstrap::{latlon, MapBootstrapper, Messenger, Size, SurfaceRegistry, ViewConfig};

const OVERLAY_URL: &str = "https://storage.googleapis.com/mapsdevsite/json/google.json";

/// Stand-in for a host window. A real host would forward redraw requests to
/// its event loop.
struct ConsoleSurface;

impl Messenger for ConsoleSurface {
    fn request_redraw(&self) {
        println!("redraw requested");
    }
}

impl mapstrap::DisplaySurface for ConsoleSurface {
    fn size(&self) -> Size {
        Size::new(800.0, 600.0)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let registry = Arc::new(SurfaceRegistry::new());
    registry.register("map", Arc::new(ConsoleSurface));

    let config = ViewConfig::new(latlon!(39.0, -105.0), 7)
        .with_style_id("terrain")
        .with_type_control(false);

    let handle = MapBootstrapper::new(registry).initialize("map", config, OVERLAY_URL)?;

    println!(
        "map ready: center ({}, {}), zoom {}, style {:?}",
        handle.map().view().center().lat(),
        handle.map().view().center().lon(),
        handle.map().view().zoom_level(),
        handle.map().config().style_id(),
    );

    let (map, overlay) = handle.into_parts();
    match overlay.outcome().await {
        Ok(merge) => println!(
            "overlay merged: {} features, data layer now holds {}",
            merge.feature_count,
            map.data().len()
        ),
        Err(error) => println!("overlay failed, base map stays up: {error}"),
    }

    Ok(())
}

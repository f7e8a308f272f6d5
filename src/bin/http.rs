#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use festival_map::{
        Config, ScheduleView, http_api, load_configured_schedule, load_configured_venues,
        telemetry,
    };

    let config = Config::from_env()?;
    telemetry::init_tracing(config.log_level);

    let data = load_configured_schedule(&config)?;
    let table = load_configured_venues(&config)?;
    let view = ScheduleView::new(data, table);

    println!("festival-map HTTP API listening on http://{}", config.http_addr);
    let state = http_api::AppState::new(view).with_api_key(config.maps_api_key.clone());
    http_api::serve(config.http_addr, state).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}

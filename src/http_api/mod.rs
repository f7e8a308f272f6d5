use std::{net::SocketAddr, sync::Arc};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use chrono::NaiveDate;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::info;

use crate::filter::VenueFilter;
use crate::location::{CITY_CENTER, DEFAULT_ZOOM, Location};
use crate::schedule::format_option_date;
use crate::view::{ClickOutcome, DayRows, MapCamera, MarkerView, ScheduleView, SelectedEvent};

#[derive(Clone)]
pub struct AppState {
    view: Arc<RwLock<ScheduleView<MapCamera>>>,
    maps_api_key: Option<String>,
}

impl AppState {
    pub fn new(view: ScheduleView<MapCamera>) -> Self {
        Self {
            view: Arc::new(RwLock::new(view)),
            maps_api_key: None,
        }
    }

    pub fn with_api_key(mut self, key: Option<String>) -> Self {
        self.maps_api_key = key;
        self
    }

    fn view(&self) -> Arc<RwLock<ScheduleView<MapCamera>>> {
        self.view.clone()
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
    message: String,
}

#[derive(Debug)]
enum ApiError {
    NotFound(String),
    Invalid(String),
}

impl ApiError {
    fn not_found(message: impl Into<String>) -> Self {
        ApiError::NotFound(message.into())
    }

    fn invalid(message: impl Into<String>) -> Self {
        ApiError::Invalid(message.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(message) => {
                let body = Json(ErrorBody {
                    error: "not_found",
                    message,
                });
                (StatusCode::NOT_FOUND, body).into_response()
            }
            ApiError::Invalid(message) => {
                let body = Json(ErrorBody {
                    error: "invalid_request",
                    message,
                });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ScheduleResponse {
    event_name: String,
    tagline: String,
    days: Vec<DayRows>,
}

#[derive(Debug, Serialize)]
struct DateOption {
    value: NaiveDate,
    label: String,
}

#[derive(Debug, Serialize)]
struct OptionsResponse {
    dates: Vec<DateOption>,
    locations: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct SelectEventPayload {
    day: usize,
    index: usize,
}

#[derive(Debug, Serialize)]
struct SelectEventResponse {
    outcome: &'static str,
    recentered: bool,
    selected: Option<SelectedEvent>,
}

#[derive(Debug, Serialize)]
struct MapResponse {
    ready: bool,
    camera: Option<MapCamera>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ClientConfig {
    maps_api_key: Option<String>,
    center: Location,
    zoom: u8,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/config", get(client_config))
        .route("/schedule", get(get_schedule))
        .route("/options", get(get_options))
        .route("/filters", get(get_filters).put(update_filters))
        .route("/venues", get(list_venues))
        .route("/events/select", post(select_event))
        .route("/markers/:venue/click", post(click_marker))
        .route("/selection", delete(clear_selection))
        .route("/map", get(get_map))
        .route("/map/ready", post(map_ready))
        .with_state(state)
}

pub async fn serve(addr: SocketAddr, state: AppState) -> std::io::Result<()> {
    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "http api listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

async fn client_config(State(state): State<AppState>) -> Json<ClientConfig> {
    Json(ClientConfig {
        maps_api_key: state.maps_api_key.clone(),
        center: CITY_CENTER,
        zoom: DEFAULT_ZOOM,
    })
}

async fn get_schedule(State(state): State<AppState>) -> Json<ScheduleResponse> {
    let view = state.view();
    let guard = view.read();
    let data = guard.data();
    Json(ScheduleResponse {
        event_name: data.event_name.clone(),
        tagline: data.tagline.clone(),
        days: guard.event_rows(),
    })
}

async fn get_options(State(state): State<AppState>) -> Json<OptionsResponse> {
    let view = state.view();
    let guard = view.read();
    Json(OptionsResponse {
        dates: guard
            .date_options()
            .into_iter()
            .map(|value| DateOption {
                value,
                label: format_option_date(value),
            })
            .collect(),
        locations: guard.location_options().to_vec(),
    })
}

async fn get_filters(State(state): State<AppState>) -> Json<VenueFilter> {
    let view = state.view();
    let filter = view.read().filter().clone();
    Json(filter)
}

async fn update_filters(
    State(state): State<AppState>,
    Json(filter): Json<VenueFilter>,
) -> Result<Json<VenueFilter>, ApiError> {
    let view = state.view();
    let mut guard = view.write();
    if let Some(date) = filter.date {
        if !guard.date_options().contains(&date) {
            return Err(ApiError::invalid(format!("{date} is not a schedule date")));
        }
    }
    if let Some(location) = filter.location.as_deref() {
        if !guard.location_options().iter().any(|name| name == location) {
            return Err(ApiError::invalid(format!(
                "'{location}' is not a selectable location"
            )));
        }
    }
    guard.set_filter(filter);
    Ok(Json(guard.filter().clone()))
}

async fn list_venues(State(state): State<AppState>) -> Json<Vec<MarkerView>> {
    let view = state.view();
    let markers = view.read().markers();
    Json(markers)
}

async fn select_event(
    State(state): State<AppState>,
    Json(payload): Json<SelectEventPayload>,
) -> Result<Json<SelectEventResponse>, ApiError> {
    let view = state.view();
    let mut guard = view.write();
    let outcome = guard.click_event(payload.day, payload.index);
    if outcome == ClickOutcome::NotFound {
        return Err(ApiError::not_found(format!(
            "no event {} in schedule day {}",
            payload.index, payload.day
        )));
    }
    Ok(Json(SelectEventResponse {
        outcome: outcome.as_str(),
        recentered: outcome.recentered(),
        selected: guard.selected().cloned(),
    }))
}

async fn click_marker(
    State(state): State<AppState>,
    Path(venue): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let view = state.view();
    let recentered = view
        .write()
        .click_marker(&venue)
        .ok_or_else(|| ApiError::not_found(format!("no marker for '{venue}'")))?;
    Ok(Json(json!({ "recentered": recentered })))
}

async fn clear_selection(State(state): State<AppState>) -> StatusCode {
    state.view().write().close_popup();
    StatusCode::NO_CONTENT
}

async fn get_map(State(state): State<AppState>) -> Json<MapResponse> {
    let view = state.view();
    let guard = view.read();
    Json(MapResponse {
        ready: guard.is_map_ready(),
        camera: guard.map().copied(),
    })
}

async fn map_ready(State(state): State<AppState>) -> Json<serde_json::Value> {
    let became_ready = state.view().write().map_ready(MapCamera::default());
    Json(json!({ "ready": true, "changed": became_ready }))
}

use axum::{
    Router,
    routing::{get, post},
};
use std::{io::Error, net::SocketAddr, sync::Arc};
use tower_http::{services::ServeDir, trace::TraceLayer};

use touchline_app::{app::AppBus, config::Config};
use touchline_types::{Result, errors::ApplicationError};

use crate::handlers::{
    adjust_statistic, create_player, delete_player, edit_player, edit_player_page, facilities,
    fixtures, gallery, history, home, results, standings, statistics, team,
};

#[derive(Clone)]
pub struct AppState {
    pub app_bus: Arc<AppBus>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(app_bus: Arc<AppBus>, config: Arc<Config>) -> AppState {
        AppState { app_bus, config }
    }
}

pub struct WebRouter {}

impl WebRouter {
    /// Every route of the site, with request tracing.
    pub fn router(state: AppState) -> Router {
        Router::new()
            .nest_service("/assets", ServeDir::new("touchline_web/assets"))
            .route("/", get(home))
            .route("/facilities", get(facilities))
            .route("/history", get(history))
            .route("/fixtures", get(fixtures))
            .route("/results", get(results))
            .route("/standings", get(standings))
            .route("/gallery", get(gallery))
            .route("/team", get(team))
            .route("/team/players", post(create_player))
            .route(
                "/team/players/{id}/edit",
                get(edit_player_page).post(edit_player),
            )
            .route("/team/players/{id}/delete", post(delete_player))
            .route("/statistics", get(statistics))
            .route("/statistics/adjust", post(adjust_statistic))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    pub async fn serve(state: AppState, port: u16) -> Result<(), ApplicationError> {
        let router = Self::router(state);

        let addr = SocketAddr::from(([0, 0, 0, 0], port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(infra_error)?;

        tracing::info!("HTTP Server started, listening on http://{}", addr);
        axum::serve(listener, router).await.map_err(infra_error)?;

        Ok(())
    }
}

fn infra_error(e: Error) -> ApplicationError {
    let err = format!("{:#?}", e);
    ApplicationError::Infrastructure(err)
}

//! Connection-status diagnostics.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::state::AppState;

/// Connection diagnostic report.
#[derive(Debug, Serialize)]
pub struct ConnectionStatus {
    /// Whether the store API answered the probe.
    pub connected: bool,
    /// Store display name, when connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_name: Option<String>,
    /// Store domain, when connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Probe failure description, when not connected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Probe the BigCommerce connection.
///
/// Diagnostic endpoint: a failed probe is reported in the body, never
/// as an error status.
pub async fn show(State(state): State<AppState>) -> Json<ConnectionStatus> {
    match state.catalog().store_information().await {
        Ok(store) => Json(ConnectionStatus {
            connected: true,
            store_name: Some(store.name),
            domain: Some(store.domain),
            error: None,
        }),
        Err(error) => {
            tracing::warn!(error = %error, "store connection probe failed");
            Json(ConnectionStatus {
                connected: false,
                store_name: None,
                domain: None,
                error: Some(error.to_string()),
            })
        }
    }
}

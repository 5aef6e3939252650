//! CSV download endpoints
//!
//! These sit outside GraphQL because browsers download them directly.

use axum::{
    extract::{Extension, Query},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::common::{ReportPeriod, WorkflowError};
use crate::domains::compliance::actions::{self as compliance_actions, compliance_csv, contents_csv, export_filename};
use crate::domains::content::actions as content_actions;
use crate::server::app::{authenticate, AxumAppState};
use crate::server::middleware::AuthUser;

#[derive(Debug, Deserialize)]
pub struct PeriodParams {
    pub month: u32,
    pub year: i32,
}

/// GET /export/compliance?month=&year=
pub async fn export_compliance_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    Query(params): Query<PeriodParams>,
) -> Response {
    let result = async {
        let actor = authenticate(auth_user.map(|Extension(u)| u).as_ref(), &state.db_pool).await?;
        let period = ReportPeriod::new(params.month, params.year)?;
        let report = compliance_actions::compliance_report(&actor, period, &state.server_deps).await?;
        Ok::<_, WorkflowError>((period, report))
    }
    .await;

    match result {
        Ok((period, report)) => match compliance_csv(&report) {
            Ok(body) => {
                info!(period = %period, "Exported compliance report");
                csv_response(export_filename("kepatuhan", period), body)
            }
            Err(e) => internal_error(e),
        },
        Err(e) => error_response(e),
    }
}

/// GET /export/contents?month=&year=
///
/// Operators and admins get every SKPD; publishers only their own.
pub async fn export_contents_handler(
    Extension(state): Extension<AxumAppState>,
    auth_user: Option<Extension<AuthUser>>,
    Query(params): Query<PeriodParams>,
) -> Response {
    let result = async {
        let actor = authenticate(auth_user.map(|Extension(u)| u).as_ref(), &state.db_pool).await?;
        let period = ReportPeriod::new(params.month, params.year)?;
        let rows = content_actions::content_listing(&actor, period, &state.server_deps).await?;
        Ok::<_, WorkflowError>((period, rows))
    }
    .await;

    match result {
        Ok((period, rows)) => match contents_csv(&rows) {
            Ok(body) => {
                info!(period = %period, rows = rows.len(), "Exported content listing");
                csv_response(export_filename("konten", period), body)
            }
            Err(e) => internal_error(e),
        },
        Err(e) => error_response(e),
    }
}

fn csv_response(filename: String, body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", filename),
            ),
        ],
        body,
    )
        .into_response()
}

/// HTTP status for a workflow error
pub fn status_for(err: &WorkflowError) -> StatusCode {
    match err {
        WorkflowError::Validation(_) => StatusCode::BAD_REQUEST,
        WorkflowError::InvalidState(_) => StatusCode::CONFLICT,
        WorkflowError::Authorization(_) => StatusCode::FORBIDDEN,
        WorkflowError::NotFound { .. } => StatusCode::NOT_FOUND,
        WorkflowError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn error_response(err: WorkflowError) -> Response {
    let status = status_for(&err);
    if status == StatusCode::INTERNAL_SERVER_ERROR {
        error!(error = %err, "Export failed");
        return (status, "Internal server error").into_response();
    }
    (status, err.to_string()).into_response()
}

fn internal_error(err: anyhow::Error) -> Response {
    error!(error = %err, "Failed to render CSV");
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn workflow_errors_map_to_http_statuses() {
        assert_eq!(status_for(&WorkflowError::validation("x")), StatusCode::BAD_REQUEST);
        assert_eq!(status_for(&WorkflowError::invalid_state("x")), StatusCode::CONFLICT);
        assert_eq!(
            status_for(&WorkflowError::Authorization("x".into())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            status_for(&WorkflowError::not_found("content", "1")),
            StatusCode::NOT_FOUND
        );
    }
}

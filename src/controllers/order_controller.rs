use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    Json,
};
use tracing::Instrument;

use crate::{
    errors::OrderEventError,
    models::{OrderReceipt, ParseError},
    services::order_service,
    AppState,
};

// ANY <order_events_path>
pub async fn handle_order_event(
    State(state): State<AppState>,
    method: Method,
    uri: Uri,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let span = tracing::info_span!("order_event", %method, path = %uri.path());

    async move {
        tracing::info!("Received {} {}", method, uri.path());

        match receive(&state, &method, body).await {
            Ok(receipt) => (StatusCode::OK, Json(receipt)).into_response(),
            Err(e) => e.into_response(),
        }
    }
    .instrument(span)
    .await
}

async fn receive(
    state: &AppState,
    method: &Method,
    body: Result<Bytes, BytesRejection>,
) -> Result<OrderReceipt, OrderEventError> {
    if *method != Method::POST {
        tracing::warn!("Only POST allowed");
        return Err(OrderEventError::MethodNotAllowed);
    }

    // oversized or broken bodies are reported like any other unusable body
    let body = body.map_err(|e| {
        tracing::error!("No JSON body: {e}");
        OrderEventError::from(ParseError::Unreadable(e.to_string()))
    })?;

    let enriched = order_service::process_order_event(state.store.as_ref(), &body).await?;
    tracing::info!("Order {} processed successfully", enriched.order.display_id());

    Ok(OrderReceipt::from(&enriched))
}

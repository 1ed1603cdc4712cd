use crate::{
    errors::OrderEventError,
    models::{EnrichedOrder, OrderPayload},
};

use super::{
    order_enricher,
    order_store::{OrderStore, StoreError},
    order_validator,
};

/// Decode, validate, enrich and save one order event body.
pub async fn process_order_event(
    store: &dyn OrderStore,
    body: &[u8],
) -> Result<EnrichedOrder, OrderEventError> {
    let payload = OrderPayload::decode(body).map_err(|e| {
        tracing::error!("No JSON body: {e}");
        OrderEventError::from(e)
    })?;

    let order = order_validator::validate(payload).map_err(|e| {
        tracing::error!("Validation failed: {e}");
        OrderEventError::from(e)
    })?;

    let enriched = order_enricher::enrich(order);

    save(store, &enriched).await?;

    Ok(enriched)
}

/// Runs the store write; a `false` answer counts as a failure just like an error.
pub async fn save(store: &dyn OrderStore, enriched: &EnrichedOrder) -> Result<(), OrderEventError> {
    let result = match store.save(enriched).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(StoreError::Rejected),
        Err(e) => Err(e),
    };

    result.map_err(|e| {
        tracing::error!("Error saving to DB: {e}");
        OrderEventError::from(e)
    })
}

//! Checkout handlers

use axum::{extract::State, Json};
use tracing::{info, warn};

use domain_pricing::Purchase;

use crate::{error::ApiError, AppState};

/// Settles a pending purchase
///
/// The posted record is priced again from its details as of its quote
/// date, and rejected if its product or premium disagree. Storing the
/// settled record is left to the caller; the paid purchase is returned.
pub async fn checkout(
    State(state): State<AppState>,
    Json(mut purchase): Json<Purchase>,
) -> Result<Json<Purchase>, ApiError> {
    let quoted_on = state.today(purchase.created_at);
    let expected = state.calculator.reprice(&purchase.details, quoted_on);

    if let Err(e) = purchase
        .verify(expected)
        .and_then(|()| purchase.pay(state.now()))
    {
        warn!(purchase_id = %purchase.id, error = %e, "Checkout rejected");
        return Err(e.into());
    }

    info!(
        purchase_id = %purchase.id,
        product = %purchase.product,
        plan = %purchase.plan,
        premium = %purchase.premium,
        "Purchase paid"
    );

    Ok(Json(purchase))
}

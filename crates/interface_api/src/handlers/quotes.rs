//! Quote handlers
//!
//! Each handler turns a form submission into a pricing input, prices it
//! against the configured tariff, and wraps the result into an unpaid
//! purchase for checkout.

use axum::{extract::State, Json};
use chrono::NaiveDate;
use tracing::{info, warn};
use validator::Validate;

use core_kernel::{parse_iso_date, Money};
use domain_pricing::{
    CarPremiumInput, CarPremiumResult, HealthPremiumBreakdown, HealthPremiumInput,
    LifePremiumInput, LifePremiumResult, LifeTable, Purchase, PurchaseDetails, RiskFlag,
};

use crate::dto::quotes::*;
use crate::{error::ApiError, AppState};

/// Parses an optional form date, dropping values that do not parse
///
/// The forms treat an unreadable date like a missing one, so a bad value
/// is logged rather than rejected.
fn lenient_date(field: &str, value: Option<&str>) -> Option<NaiveDate> {
    let value = value.map(str::trim).filter(|v| !v.is_empty())?;
    match parse_iso_date(value) {
        Ok(date) => Some(date),
        Err(e) => {
            warn!(field = field, error = %e, "Ignoring unparseable date");
            None
        }
    }
}

/// Prices a health application
pub async fn quote_health(
    State(state): State<AppState>,
    Json(request): Json<HealthQuoteRequest>,
) -> Result<Json<QuoteResponse<HealthPremiumBreakdown>>, ApiError> {
    request.validate()?;

    let now = state.now();
    let today = state.today(now);
    let date_of_birth = lenient_date("date_of_birth", request.date_of_birth.as_deref());

    // Only the comparison form (explicit age) answers "Merokok"
    let from_application_form = request.age.is_none() && date_of_birth.is_some();
    let smoker = if from_application_form {
        RiskFlag::from_form_value(&request.smoker)
    } else {
        RiskFlag::from_smoker_form_value(&request.smoker)
    };
    let hypertensive = RiskFlag::from_form_value(&request.hypertensive);
    let diabetic = RiskFlag::from_form_value(&request.diabetic);

    let input = match (request.age, date_of_birth) {
        (Some(age), _) => HealthPremiumInput::new(age, smoker, hypertensive, diabetic),
        (None, Some(dob)) => {
            HealthPremiumInput::from_date_of_birth(dob, today, smoker, hypertensive, diabetic)
        }
        (None, None) => HealthPremiumInput::new(0, smoker, hypertensive, diabetic),
    };

    let breakdown = state.calculator.health(&input);

    let purchase = Purchase::pending(
        request.plan,
        request.user,
        breakdown.total,
        PurchaseDetails::Health {
            full_name: request.full_name,
            date_of_birth,
            age: input.age,
            occupation: request.occupation,
            smoker,
            hypertensive,
            diabetic,
            breakdown,
        },
        now,
    );

    info!(
        purchase_id = %purchase.id,
        age = input.age,
        total = %breakdown.total,
        "Health quote created"
    );

    Ok(Json(QuoteResponse {
        quote: breakdown,
        purchase,
    }))
}

/// Prices a vehicle
pub async fn quote_car(
    State(state): State<AppState>,
    Json(request): Json<CarQuoteRequest>,
) -> Result<Json<QuoteResponse<CarPremiumResult>>, ApiError> {
    request.validate()?;

    let now = state.now();
    let current_year = state.current_year(now);
    let insured_value = Money::new(request.insured_value, state.config.default_currency);

    let input = CarPremiumInput {
        registration_year: request.registration_year,
        insured_value,
    };
    let result = state.calculator.car(&input, current_year);

    let purchase = Purchase::pending(
        request.plan,
        request.user,
        result.premium,
        PurchaseDetails::Car {
            brand: request.brand,
            model: request.model,
            registration_year: request.registration_year,
            insured_value,
            plate_number: request.plate_number,
            owner_name: request.owner_name,
        },
        now,
    );

    info!(
        purchase_id = %purchase.id,
        vehicle_age = result.vehicle_age,
        premium = %result.premium,
        "Car quote created"
    );

    Ok(Json(QuoteResponse {
        quote: result,
        purchase,
    }))
}

/// Prices a life application on the requested flow's table
///
/// The comparison flow charges the annual premium; the application flow
/// charges the monthly instalment of its yearly rate.
pub async fn quote_life(
    State(state): State<AppState>,
    Json(request): Json<LifeQuoteRequest>,
) -> Result<Json<QuoteResponse<LifePremiumResult>>, ApiError> {
    request.validate()?;

    let table = match request.flow.as_deref() {
        Some(flow) if !flow.trim().is_empty() => flow.parse::<LifeTable>()?,
        _ => LifeTable::default(),
    };
    if table == LifeTable::Application && request.coverage.is_zero() {
        return Err(ApiError::validation(
            "coverage must be greater than zero on the application flow",
        ));
    }

    let now = state.now();
    let today = state.today(now);
    let date_of_birth = lenient_date("date_of_birth", request.date_of_birth.as_deref());
    let coverage = Money::new(request.coverage, state.config.default_currency);

    let input = LifePremiumInput {
        age: request.age,
        date_of_birth,
        coverage,
    };
    let result = state.calculator.life(table, &input, today);

    let purchase = Purchase::pending(
        request.plan,
        request.user,
        result.charged_premium(),
        PurchaseDetails::Life {
            full_name: request.full_name,
            date_of_birth,
            age: result.age,
            coverage,
            table,
            monthly_premium: result.monthly_premium,
        },
        now,
    );

    info!(
        purchase_id = %purchase.id,
        table = %table,
        age = result.age,
        charged = %purchase.premium,
        "Life quote created"
    );

    Ok(Json(QuoteResponse {
        quote: result,
        purchase,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_date() {
        assert_eq!(
            lenient_date("dob", Some("1990-05-17")),
            NaiveDate::from_ymd_opt(1990, 5, 17)
        );
        assert_eq!(lenient_date("dob", Some("17/05/1990")), None);
        assert_eq!(lenient_date("dob", Some("  ")), None);
        assert_eq!(lenient_date("dob", None), None);
    }
}

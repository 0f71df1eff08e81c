//! Validation utilities

use bigdecimal::BigDecimal;

use crate::types::*;

/// Length of a GST identification number
pub const GSTIN_LENGTH: usize = 15;

/// Validate that an amount is not negative
pub fn validate_non_negative(amount: &BigDecimal) -> EngineResult<()> {
    if *amount < BigDecimal::from(0) {
        Err(EngineError::NegativeAmount(amount.to_string()))
    } else {
        Ok(())
    }
}

/// Validate a buyer or consignee GSTIN
pub fn validate_gstin(gstin: &str) -> EngineResult<()> {
    let gstin = gstin.trim();

    if gstin.chars().count() != GSTIN_LENGTH {
        return Err(EngineError::Validation(format!(
            "GST number must be exactly {} characters",
            GSTIN_LENGTH
        )));
    }

    if !gstin.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(EngineError::Validation(
            "GST number can only contain letters and digits".to_string(),
        ));
    }

    Ok(())
}

/// Validate the amount fields of an invoice before it is issued.
///
/// Either a base amount or both hours and rate must be present.
pub fn validate_amount_fields(
    base_amount: Option<&str>,
    total_hours: Option<&str>,
    rate: Option<&str>,
) -> EngineResult<()> {
    let present = |field: Option<&str>| field.is_some_and(|v| !v.trim().is_empty());

    let has_base = present(base_amount);
    let has_hours = present(total_hours);
    let has_rate = present(rate);

    if !has_base && !has_hours && !has_rate {
        return Err(EngineError::Validation(
            "Please provide either hours and rate or a base amount".to_string(),
        ));
    }

    if !has_base && !(has_hours && has_rate) {
        return Err(EngineError::Validation(
            "Both hours and rate must be entered".to_string(),
        ));
    }

    Ok(())
}

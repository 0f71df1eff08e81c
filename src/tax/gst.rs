//! GST (Goods and Services Tax) calculation engine for invoice totals

use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::config::EngineConfig;
use crate::types::EngineResult;
use crate::utils::validation::validate_amount_fields;
use crate::utils::money::{
    parse_optional_amount, round_half_up, round_to_integer, within_amount_bounds,
};

/// GST rate structure for Indian taxation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GstRate {
    /// Total GST rate percentage (e.g., 18.0 for 18%)
    pub total_rate: BigDecimal,
    /// CGST rate percentage (Central GST)
    pub cgst_rate: BigDecimal,
    /// SGST rate percentage (State GST)
    pub sgst_rate: BigDecimal,
    /// IGST rate percentage (Integrated GST)
    pub igst_rate: BigDecimal,
}

impl GstRate {
    /// Create a new GST rate with intra-state rates (CGST + SGST)
    pub fn intra_state(total_rate: BigDecimal) -> Self {
        let half_rate = &total_rate / BigDecimal::from(2);
        Self {
            total_rate,
            cgst_rate: half_rate.clone(),
            sgst_rate: half_rate,
            igst_rate: BigDecimal::from(0),
        }
    }

    /// Create a new GST rate with inter-state rates (IGST)
    pub fn inter_state(total_rate: BigDecimal) -> Self {
        Self {
            total_rate: total_rate.clone(),
            cgst_rate: BigDecimal::from(0),
            sgst_rate: BigDecimal::from(0),
            igst_rate: total_rate,
        }
    }

    /// No GST at all (exports)
    pub fn exempt() -> Self {
        Self {
            total_rate: BigDecimal::from(0),
            cgst_rate: BigDecimal::from(0),
            sgst_rate: BigDecimal::from(0),
            igst_rate: BigDecimal::from(0),
        }
    }

    /// Validate that the GST rate structure is correct
    pub fn validate(&self) -> Result<(), GstError> {
        let calculated_total = &self.cgst_rate + &self.sgst_rate + &self.igst_rate;

        if calculated_total != self.total_rate {
            return Err(GstError::InvalidRate(format!(
                "GST components don't add up to total rate: {} != {}",
                calculated_total, self.total_rate
            )));
        }

        // For intra-state transactions, CGST and SGST should be equal
        if self.igst_rate == BigDecimal::from(0) && self.cgst_rate != self.sgst_rate {
            return Err(GstError::InvalidRate(
                "CGST and SGST rates must be equal for intra-state transactions".to_string(),
            ));
        }

        // For inter-state transactions, only IGST should be non-zero
        if self.igst_rate > BigDecimal::from(0)
            && (self.cgst_rate > BigDecimal::from(0) || self.sgst_rate > BigDecimal::from(0))
        {
            return Err(GstError::InvalidRate(
                "Only IGST should be applicable for inter-state transactions".to_string(),
            ));
        }

        Ok(())
    }
}

/// Which GST lines an invoice carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaxRegime {
    /// Sale inside the home state: CGST + SGST
    IntraState,
    /// Sale to another Indian state: IGST
    InterState,
    /// Sale outside India: no GST
    Export,
}

/// Taxable value of an invoice and where it is billed to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxableLine {
    /// Taxable value before any tax is added, never negative
    pub base_amount: BigDecimal,
    pub country: String,
    /// Only meaningful for the home country; may be empty
    pub state: String,
}

impl TaxableLine {
    /// Create a taxable line. Negative amounts are clamped to zero.
    pub fn new(
        base_amount: BigDecimal,
        country: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        let base_amount = if base_amount < BigDecimal::from(0) {
            log::warn!("Negative base amount {} treated as zero", base_amount);
            BigDecimal::from(0)
        } else if !within_amount_bounds(&base_amount) {
            log::warn!("Base amount with {} digits treated as zero", base_amount.digits());
            BigDecimal::from(0)
        } else {
            base_amount
        };

        Self {
            base_amount,
            country: country.into(),
            state: state.into(),
        }
    }

    /// Create a taxable line billed by the hour
    pub fn from_hours(
        total_hours: &BigDecimal,
        rate: &BigDecimal,
        country: impl Into<String>,
        state: impl Into<String>,
    ) -> Self {
        Self::new(total_hours * rate, country, state)
    }
}

/// Raw invoice amount fields as entered on the invoice form.
///
/// Numeric fields are kept as text; resolving the request applies the lenient
/// coercion rules (blank or garbage becomes zero) and the hours-times-rate
/// override.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceAmountRequest {
    pub base_amount: Option<String>,
    pub total_hours: Option<String>,
    pub rate: Option<String>,
    pub country: String,
    pub state: Option<String>,
}

impl InvoiceAmountRequest {
    /// Request billed with a fixed base amount
    pub fn with_base_amount(base_amount: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            base_amount: Some(base_amount.into()),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Request billed by the hour
    pub fn with_hours(
        total_hours: impl Into<String>,
        rate: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            total_hours: Some(total_hours.into()),
            rate: Some(rate.into()),
            country: country.into(),
            ..Self::default()
        }
    }

    /// Set the billing state
    pub fn state(mut self, state: impl Into<String>) -> Self {
        self.state = Some(state.into());
        self
    }

    /// Strict check that the form carries a base amount or both hours and rate
    pub fn validate(&self) -> EngineResult<()> {
        validate_amount_fields(
            self.base_amount.as_deref(),
            self.total_hours.as_deref(),
            self.rate.as_deref(),
        )
    }

    /// Resolve the form fields into a taxable line
    pub fn resolve(&self) -> TaxableLine {
        let zero = BigDecimal::from(0);
        let hours = parse_optional_amount(self.total_hours.as_deref());
        let rate = parse_optional_amount(self.rate.as_deref());
        let state = self.state.clone().unwrap_or_default();

        if hours > zero && rate > zero {
            TaxableLine::from_hours(&hours, &rate, self.country.clone(), state)
        } else {
            TaxableLine::new(
                parse_optional_amount(self.base_amount.as_deref()),
                self.country.clone(),
                state,
            )
        }
    }
}

/// Tax lines computed for one invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxBreakdown {
    /// Base amount (before GST)
    pub base_amount: BigDecimal,
    pub regime: TaxRegime,
    /// Central GST, present only for intra-state sales
    pub cgst: Option<BigDecimal>,
    /// State GST, present only for intra-state sales
    pub sgst: Option<BigDecimal>,
    /// Integrated GST, present only for inter-state sales
    pub igst: Option<BigDecimal>,
    /// Sum of all populated tax lines
    pub tax_total: BigDecimal,
    /// Base plus tax, rounded to a whole number
    pub total_with_gst: BigDecimal,
}

/// GST calculation engine
#[derive(Debug, Clone, Default)]
pub struct GstCalculator {
    config: EngineConfig,
}

impl GstCalculator {
    /// Create a new GST calculator
    pub fn new(config: EngineConfig) -> EngineResult<Self> {
        config.validate()?;
        let calculator = Self { config };
        for regime in [TaxRegime::IntraState, TaxRegime::InterState] {
            calculator.rate_for(regime).validate()?;
        }
        Ok(calculator)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Decide which GST lines apply for a billing location
    pub fn regime_for(&self, country: &str, state: &str) -> TaxRegime {
        if !country.trim().eq_ignore_ascii_case(self.config.home_country.trim()) {
            TaxRegime::Export
        } else if state.trim().eq_ignore_ascii_case(self.config.home_state.trim()) {
            TaxRegime::IntraState
        } else {
            TaxRegime::InterState
        }
    }

    /// GST rate for a regime
    pub fn rate_for(&self, regime: TaxRegime) -> GstRate {
        match regime {
            TaxRegime::IntraState => GstRate::intra_state(self.config.gst_rate.clone()),
            TaxRegime::InterState => GstRate::inter_state(self.config.gst_rate.clone()),
            TaxRegime::Export => GstRate::exempt(),
        }
    }

    /// Calculate the tax lines for an invoice
    pub fn calculate(&self, line: &TaxableLine) -> TaxBreakdown {
        let regime = self.regime_for(&line.country, &line.state);
        let rate = self.rate_for(regime);
        let base = &line.base_amount;
        let places = self.config.tax_decimal_places;

        let portion = |pct: &BigDecimal| (base * pct) / BigDecimal::from(100);

        // CGST and SGST are printed in paise and the total is built from the
        // printed lines; IGST is kept exact.
        let (cgst, sgst, igst) = match regime {
            TaxRegime::IntraState => (
                Some(round_half_up(&portion(&rate.cgst_rate), places)),
                Some(round_half_up(&portion(&rate.sgst_rate), places)),
                None,
            ),
            TaxRegime::InterState => (None, None, Some(portion(&rate.igst_rate))),
            TaxRegime::Export => (None, None, None),
        };

        let tax_total: BigDecimal = [&cgst, &sgst, &igst].into_iter().flatten().sum();
        let total_with_gst = round_to_integer(&(base + &tax_total));

        log::debug!(
            "GST for {} ({:?}): tax {} total {}",
            base,
            regime,
            tax_total,
            total_with_gst
        );

        TaxBreakdown {
            base_amount: base.clone(),
            regime,
            cgst,
            sgst,
            igst,
            tax_total,
            total_with_gst,
        }
    }

    /// Resolve raw form fields and calculate the tax lines
    pub fn calculate_request(&self, request: &InvoiceAmountRequest) -> TaxBreakdown {
        self.calculate(&request.resolve())
    }
}

/// GST-related errors
#[derive(Debug, thiserror::Error)]
pub enum GstError {
    #[error("Invalid GST rate: {0}")]
    InvalidRate(String),
}

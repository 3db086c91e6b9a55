use crate::error::{BreakdownError, Result};
use crate::fulfillment::Fulfillment;
use crate::money::{self, CurrencyFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Separator between the low and high end of a range
pub const RANGE_SEPARATOR: &str = " - ";

/// Cost fields of a single order, in decimal currency units
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownInput {
    pub product_price: f64,
    pub shipping_cost: f64,
    pub estimated_tax: f64,
    pub fee: f64,
    pub total_cost: f64,
    pub fulfilled_by: Fulfillment,
}

/// JSON shape accepted by [`PriceBreakdownInput::from_json`]
///
/// `fulfilledBy` stays a string here so an unknown source surfaces as
/// `InvalidFulfillment` rather than a generic JSON error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawInput {
    product_price: f64,
    shipping_cost: f64,
    estimated_tax: f64,
    fee: f64,
    total_cost: f64,
    fulfilled_by: String,
}

impl PriceBreakdownInput {
    /// Parse an input document, e.g.
    /// `{"productPrice":20,"shippingCost":5,"estimatedTax":2,"fee":1,"totalCost":28,"fulfilledBy":"dreamship"}`
    pub fn from_json(json: &str) -> Result<Self> {
        let raw: RawInput = serde_json::from_str(json)?;
        Ok(Self {
            product_price: raw.product_price,
            shipping_cost: raw.shipping_cost,
            estimated_tax: raw.estimated_tax,
            fee: raw.fee,
            total_cost: raw.total_cost,
            fulfilled_by: raw.fulfilled_by.parse()?,
        })
    }

    /// Check every amount is finite, non-negative and in range, and that the
    /// total covers shipping once both are rounded to the format's precision
    pub fn validate(&self, format: &CurrencyFormat) -> Result<()> {
        money::validate_amount("product_price", self.product_price)?;
        money::validate_amount("shipping_cost", self.shipping_cost)?;
        money::validate_amount("estimated_tax", self.estimated_tax)?;
        money::validate_amount("fee", self.fee)?;
        money::validate_amount("total_cost", self.total_cost)?;

        if money::to_minor_units(self.total_cost, format)
            < money::to_minor_units(self.shipping_cost, format)
        {
            return Err(BreakdownError::invalid_amount(
                "total_cost",
                format!(
                    "must be at least shipping_cost ({}), got {}",
                    self.shipping_cost, self.total_cost
                ),
            ));
        }
        Ok(())
    }
}

/// Display strings and flags derived from a [`PriceBreakdownInput`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdownOutput {
    pub total_range_text: String,
    pub shipping_range_text: String,
    /// True when a single value is shown instead of a low-high range
    pub range_required: bool,
    /// True when the "shipping fees vary" affordance should be shown
    pub icon_needed: bool,
}

/// Computes breakdown display strings with a fixed currency format
#[derive(Debug, Clone, Default)]
pub struct PriceFormatter {
    format: CurrencyFormat,
}

impl PriceFormatter {
    pub fn new(format: CurrencyFormat) -> Self {
        Self { format }
    }

    pub fn currency_format(&self) -> &CurrencyFormat {
        &self.format
    }

    /// Format a single amount, rejecting non-finite, negative and oversized values
    pub fn format(&self, value: f64) -> Result<String> {
        money::format_currency(value, &self.format)
    }

    /// Compute the breakdown for one order
    ///
    /// Only Dreamship orders with non-zero shipping have a variable shipping
    /// cost; those get a range for shipping (`$0.00 - shipping`) and for the
    /// total (`total - shipping` to `total`). Everything else shows single
    /// values.
    pub fn compute_breakdown(&self, input: &PriceBreakdownInput) -> Result<PriceBreakdownOutput> {
        input.validate(&self.format)?;

        let variable_shipping =
            input.shipping_cost != 0.0 && input.fulfilled_by.has_variable_shipping();
        let range_required = !variable_shipping;

        let total_minor = money::to_minor_units(input.total_cost, &self.format);
        let shipping_minor = money::to_minor_units(input.shipping_cost, &self.format);
        let total_upper = money::format_minor_units(total_minor, &self.format);
        let shipping_upper = money::format_minor_units(shipping_minor, &self.format);

        let (total_range_text, shipping_range_text) = if range_required {
            (total_upper, shipping_upper)
        } else {
            // validate() guarantees total_minor >= shipping_minor
            let total_lower = money::format_minor_units(total_minor - shipping_minor, &self.format);
            let zero = money::format_minor_units(0, &self.format);
            (
                format!("{}{}{}", total_lower, RANGE_SEPARATOR, total_upper),
                format!("{}{}{}", zero, RANGE_SEPARATOR, shipping_upper),
            )
        };

        debug!(
            fulfilled_by = %input.fulfilled_by,
            range_required,
            total = %total_range_text,
            shipping = %shipping_range_text,
            "Computed price breakdown"
        );

        Ok(PriceBreakdownOutput {
            total_range_text,
            shipping_range_text,
            range_required,
            icon_needed: variable_shipping,
        })
    }
}

/// Compute a breakdown with the default US-dollar format
pub fn compute_breakdown(input: &PriceBreakdownInput) -> Result<PriceBreakdownOutput> {
    PriceFormatter::default().compute_breakdown(input)
}

//! Presentation model for the price breakdown panel
//!
//! Turns a computed [`PriceBreakdownOutput`] into the labelled rows, header and
//! popover copy a front end lays out. Nothing here knows about a particular UI
//! toolkit.

use crate::breakdown::{PriceBreakdownInput, PriceBreakdownOutput, PriceFormatter};
use crate::error::Result;
use serde::Serialize;

pub const HEADER_PREFIX: &str = "Price per Recipient:";
pub const POPOVER_TITLE: &str = "Shipping fees vary by country";

/// One labelled line of the breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownRow {
    pub label: &'static str,
    pub value: String,
    /// Draw a muted divider below this row
    pub divider_after: bool,
    /// Show the informational icon next to the label
    pub info_icon: bool,
}

/// Copy shown when hovering the informational icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShippingPopover {
    pub title: &'static str,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownView {
    pub header: String,
    pub show_info_icon: bool,
    pub rows: Vec<BreakdownRow>,
    pub popover: Option<ShippingPopover>,
}

impl BreakdownView {
    /// Build the view from an input and the breakdown computed for it
    pub fn build(
        input: &PriceBreakdownInput,
        output: &PriceBreakdownOutput,
        formatter: &PriceFormatter,
    ) -> Result<Self> {
        let rows = vec![
            BreakdownRow {
                label: "Item price:",
                value: formatter.format(input.product_price)?,
                divider_after: false,
                info_icon: false,
            },
            BreakdownRow {
                label: "Shipping & handling:",
                value: output.shipping_range_text.clone(),
                divider_after: true,
                info_icon: output.icon_needed,
            },
            BreakdownRow {
                label: "Fee:",
                value: formatter.format(input.fee)?,
                divider_after: false,
                info_icon: false,
            },
            BreakdownRow {
                label: "Estimated tax:",
                value: formatter.format(input.estimated_tax)?,
                divider_after: true,
                info_icon: false,
            },
            BreakdownRow {
                label: "Total per recipient:",
                value: output.total_range_text.clone(),
                divider_after: false,
                info_icon: false,
            },
        ];

        let popover = if output.icon_needed {
            Some(ShippingPopover {
                title: POPOVER_TITLE,
                lines: vec![
                    format!("US Shipping: {}", formatter.format(0.0)?),
                    format!(
                        "International Shipping: {}",
                        formatter.format(input.shipping_cost)?
                    ),
                ],
            })
        } else {
            None
        };

        Ok(Self {
            header: format!("{} {}", HEADER_PREFIX, output.total_range_text),
            show_info_icon: output.icon_needed,
            rows,
            popover,
        })
    }

    /// Compute the breakdown and build its view in one step
    pub fn from_input(input: &PriceBreakdownInput, formatter: &PriceFormatter) -> Result<Self> {
        let output = formatter.compute_breakdown(input)?;
        Self::build(input, &output, formatter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fulfillment::Fulfillment;

    fn input(fulfilled_by: Fulfillment) -> PriceBreakdownInput {
        PriceBreakdownInput {
            product_price: 20.0,
            shipping_cost: 5.0,
            estimated_tax: 2.0,
            fee: 1.0,
            total_cost: 28.0,
            fulfilled_by,
        }
    }

    #[test]
    fn test_rows_in_display_order() {
        let view =
            BreakdownView::from_input(&input(Fulfillment::Amazon), &PriceFormatter::default())
                .unwrap();

        let labels: Vec<_> = view.rows.iter().map(|r| r.label).collect();
        assert_eq!(
            labels,
            vec![
                "Item price:",
                "Shipping & handling:",
                "Fee:",
                "Estimated tax:",
                "Total per recipient:",
            ]
        );

        let values: Vec<_> = view.rows.iter().map(|r| r.value.as_str()).collect();
        assert_eq!(values, vec!["$20.00", "$5.00", "$1.00", "$2.00", "$28.00"]);

        let dividers: Vec<_> = view.rows.iter().map(|r| r.divider_after).collect();
        assert_eq!(dividers, vec![false, true, false, true, false]);
    }

    #[test]
    fn test_dreamship_view_has_popover() {
        let view =
            BreakdownView::from_input(&input(Fulfillment::Dreamship), &PriceFormatter::default())
                .unwrap();

        assert_eq!(view.header, "Price per Recipient: $23.00 - $28.00");
        assert!(view.show_info_icon);
        assert!(view.rows[1].info_icon);
        assert_eq!(view.rows[1].value, "$0.00 - $5.00");

        let popover = view.popover.expect("popover expected for dreamship shipping");
        assert_eq!(popover.title, "Shipping fees vary by country");
        assert_eq!(
            popover.lines,
            vec!["US Shipping: $0.00", "International Shipping: $5.00"]
        );
    }

    #[test]
    fn test_single_value_view_has_no_popover() {
        let view =
            BreakdownView::from_input(&input(Fulfillment::Manual), &PriceFormatter::default())
                .unwrap();

        assert_eq!(view.header, "Price per Recipient: $28.00");
        assert!(!view.show_info_icon);
        assert!(view.rows.iter().all(|r| !r.info_icon));
        assert!(view.popover.is_none());
    }
}

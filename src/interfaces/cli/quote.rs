use crate::application::engine::{CostEngine, CostRequest};
use crate::domain::inputs::{DiscountRate, TaxRate};
use crate::error::Result;
use crate::interfaces::currency::CurrencyFormat;
use rust_decimal::Decimal;
use std::io::Write;

/// A one-shot calculation as typed on the command line.
///
/// Rates are percentages (`8` for 8%); an absent tax rate means the standard
/// 8%, an absent discount means none.
#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub name: Option<String>,
    pub cost_per_item: Decimal,
    pub quantity: u32,
    pub delivery_cost: Decimal,
    pub tax_percent: Option<Decimal>,
    pub discount_percent: Option<Decimal>,
}

/// Prices `quote` and writes either the text report and summary or, with
/// `json`, the inputs and breakdown as a JSON document.
pub fn run_quote<W: Write>(
    quote: &Quote,
    currency: CurrencyFormat,
    json: bool,
    mut out: W,
) -> Result<()> {
    let mut request = CostRequest::new(quote.cost_per_item, quote.quantity).delivery(quote.delivery_cost);
    if let Some(percent) = quote.tax_percent {
        request = request.tax_rate(TaxRate::from_percentage(percent)?.value());
    }
    if let Some(percent) = quote.discount_percent {
        request = request.discount_rate(DiscountRate::from_percentage(percent)?.value());
    }

    let mut engine = CostEngine::with_currency(currency);
    engine.set_item_details(
        quote.name.as_deref(),
        quote.cost_per_item,
        quote.quantity,
        quote.delivery_cost,
    )?;
    engine.calculate(&request)?;

    if json {
        let document = serde_json::json!({
            "inputs": engine.inputs(),
            "breakdown": engine.breakdown(),
        });
        serde_json::to_writer_pretty(&mut out, &document)?;
        writeln!(out)?;
    } else {
        write!(out, "{}", engine.generate_detailed_report()?)?;
        writeln!(out, "{}", engine.generate_summary()?)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CostError;
    use rust_decimal_macros::dec;

    fn quote() -> Quote {
        Quote {
            name: Some("Chair".to_string()),
            cost_per_item: dec!(100),
            quantity: 3,
            delivery_cost: dec!(20),
            tax_percent: None,
            discount_percent: Some(dec!(10)),
        }
    }

    #[test]
    fn test_quote_text_uses_standard_tax_by_default() {
        let mut out = Vec::new();
        run_quote(&quote(), CurrencyFormat::default(), false, &mut out).unwrap();
        let out = String::from_utf8(out).unwrap();

        assert!(out.contains("Tax (8.0%)          : Rs 23.04"));
        assert!(out.ends_with("Total Cost: Rs 311.04 (Items: 3 × Rs 100.00 + Delivery: Rs 20.00)\n"));
    }

    #[test]
    fn test_quote_json() {
        let mut out = Vec::new();
        run_quote(&quote(), CurrencyFormat::default(), true, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["inputs"]["item_name"], "Chair");
        assert_eq!(value["inputs"]["quantity"], 3);
        let amount = |key: &str| {
            value["breakdown"][key]
                .as_str()
                .and_then(|raw| raw.parse::<Decimal>().ok())
                .unwrap()
        };
        assert_eq!(amount("total_cost"), dec!(311.04));
        assert_eq!(amount("discount_amount"), dec!(32));
    }

    #[test]
    fn test_quote_rejects_out_of_range_discount() {
        let quote = Quote {
            discount_percent: Some(dec!(75)),
            ..quote()
        };
        let mut out = Vec::new();
        let err = run_quote(&quote, CurrencyFormat::default(), false, &mut out).unwrap_err();
        assert!(matches!(err, CostError::Validation(_)));
        assert!(out.is_empty());
    }

    #[test]
    fn test_quote_overflow_is_an_error() {
        let quote = Quote {
            cost_per_item: Decimal::MAX,
            quantity: 2,
            ..quote()
        };
        let mut out = Vec::new();
        let err = run_quote(&quote, CurrencyFormat::default(), false, &mut out).unwrap_err();
        assert!(matches!(err, CostError::Overflow));
        assert!(out.is_empty());
    }
}

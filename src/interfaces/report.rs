use super::currency::{CurrencyFormat, format_money, format_percentage};
use crate::domain::calculation::{CostBreakdown, CostInputs};
use std::fmt::Write;

const REPORT_WIDTH: usize = 50;
const LABEL_WIDTH: usize = 20;
const REPORT_TITLE: &str = "DETAILED COST BREAKDOWN";
const TITLE_INDENT: usize = 15;

fn push_row(report: &mut String, label: &str, value: &str) {
    // Writing to a String cannot fail.
    let _ = writeln!(report, "{label:<width$}: {value}", width = LABEL_WIDTH);
}

/// Renders the multi-line breakdown of one calculation.
///
/// Delivery, discount and tax rows only appear when they contribute
/// something to the total.
pub fn render_detailed_report(
    inputs: &CostInputs,
    breakdown: &CostBreakdown,
    format: &CurrencyFormat,
) -> String {
    let heavy = "=".repeat(REPORT_WIDTH);
    let light = "-".repeat(REPORT_WIDTH);
    let money = |amount| format_money(amount, format);

    let mut report = String::new();
    report.push('\n');
    report.push_str(&heavy);
    report.push('\n');
    let _ = writeln!(report, "{:indent$}{REPORT_TITLE}", "", indent = TITLE_INDENT);
    report.push_str(&heavy);
    report.push('\n');

    if !inputs.item_name.as_str().is_empty() {
        push_row(&mut report, "Item Name", inputs.item_name.as_str());
    }
    push_row(&mut report, "Cost Per Item", &money(inputs.cost_per_item.value()));
    push_row(
        &mut report,
        "Quantity",
        &format!("{} items", inputs.quantity.value()),
    );
    push_row(&mut report, "Items Subtotal", &money(breakdown.items_subtotal));

    if !inputs.delivery_cost.is_free() {
        push_row(
            &mut report,
            "Delivery Charges",
            &money(inputs.delivery_cost.value()),
        );
    }

    push_row(&mut report, "Subtotal", &money(breakdown.subtotal));

    if !inputs.discount_rate.is_zero() {
        let label = format!("Discount ({})", format_percentage(inputs.discount_rate.value()));
        push_row(&mut report, &label, &money(-breakdown.discount_amount));
    }

    if !inputs.tax_rate.is_zero() {
        let label = format!("Tax ({})", format_percentage(inputs.tax_rate.value()));
        push_row(&mut report, &label, &money(breakdown.tax_amount));
    }

    report.push_str(&light);
    report.push('\n');
    push_row(&mut report, "TOTAL COST", &money(breakdown.total_cost));
    report.push_str(&heavy);
    report.push('\n');

    report
}

/// Renders the one-line summary: total, quantity, unit cost and delivery.
pub fn render_summary(inputs: &CostInputs, breakdown: &CostBreakdown, format: &CurrencyFormat) -> String {
    format!(
        "Total Cost: {} (Items: {} × {} + Delivery: {})",
        format_money(breakdown.total_cost, format),
        inputs.quantity.value(),
        format_money(inputs.cost_per_item.value(), format),
        format_money(inputs.delivery_cost.value(), format),
    )
}

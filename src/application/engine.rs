use crate::domain::calculation::{CostBreakdown, CostInputs};
use crate::domain::inputs::{
    DeliveryCost, DiscountRate, ItemName, Quantity, TaxRate, UnitCost,
};
use crate::error::{CostError, Result};
use crate::interfaces::currency::CurrencyFormat;
use crate::interfaces::report::{render_detailed_report, render_summary};
use rust_decimal::Decimal;
use tracing::debug;

/// The three ways the shell asks for a calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalculationMode {
    /// Items and delivery only, no tax or discount.
    Basic,
    /// Standard 8% tax, no discount.
    Standard,
    /// Caller-chosen tax and discount rates (fractions, not percentages).
    Custom {
        tax_rate: Decimal,
        discount_rate: Decimal,
    },
}

/// Arguments of a single calculation.
///
/// `tax_rate` and `discount_rate` left as `None` keep whatever rate the engine
/// already holds (8% tax and no discount on a fresh engine).
#[derive(Debug, Clone, PartialEq)]
pub struct CostRequest {
    pub cost_per_item: Decimal,
    pub quantity: u32,
    pub delivery_cost: Decimal,
    pub tax_rate: Option<Decimal>,
    pub discount_rate: Option<Decimal>,
}

impl CostRequest {
    /// A request with free delivery and the engine's current rates.
    pub fn new(cost_per_item: Decimal, quantity: u32) -> Self {
        Self {
            cost_per_item,
            quantity,
            delivery_cost: Decimal::ZERO,
            tax_rate: None,
            discount_rate: None,
        }
    }

    pub fn delivery(mut self, delivery_cost: Decimal) -> Self {
        self.delivery_cost = delivery_cost;
        self
    }

    pub fn tax_rate(mut self, tax_rate: Decimal) -> Self {
        self.tax_rate = Some(tax_rate);
        self
    }

    pub fn discount_rate(mut self, discount_rate: Decimal) -> Self {
        self.discount_rate = Some(discount_rate);
        self
    }

    /// Builds the request the shell issues for `mode`.
    pub fn for_mode(
        mode: CalculationMode,
        cost_per_item: Decimal,
        quantity: u32,
        delivery_cost: Decimal,
    ) -> Self {
        let (tax_rate, discount_rate) = match mode {
            CalculationMode::Basic => (Decimal::ZERO, Decimal::ZERO),
            CalculationMode::Standard => (TaxRate::STANDARD.value(), Decimal::ZERO),
            CalculationMode::Custom {
                tax_rate,
                discount_rate,
            } => (tax_rate, discount_rate),
        };
        Self::new(cost_per_item, quantity)
            .delivery(delivery_cost)
            .tax_rate(tax_rate)
            .discount_rate(discount_rate)
    }
}

/// A breakdown and the exact inputs it was computed from.
#[derive(Debug, Clone)]
struct Calculation {
    inputs: CostInputs,
    breakdown: CostBreakdown,
}

/// Holds the inputs of one calculation and the totals derived from them.
///
/// Every operation validates all of its arguments before writing anything,
/// so an `Err` leaves the engine exactly as it was. Totals are recomputed in
/// full from the stored inputs on every calculating call.
#[derive(Debug, Clone)]
pub struct CostEngine {
    item_name: ItemName,
    cost_per_item: Option<UnitCost>,
    quantity: Option<Quantity>,
    delivery_cost: DeliveryCost,
    tax_rate: TaxRate,
    discount_rate: DiscountRate,
    last: Option<Calculation>,
    currency: CurrencyFormat,
}

impl Default for CostEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl CostEngine {
    /// Creates an engine with no item inputs, 8% tax and no discount.
    pub fn new() -> Self {
        Self::with_currency(CurrencyFormat::default())
    }

    /// Creates an engine that renders reports with `currency`.
    pub fn with_currency(currency: CurrencyFormat) -> Self {
        Self {
            item_name: ItemName::default(),
            cost_per_item: None,
            quantity: None,
            delivery_cost: DeliveryCost::FREE,
            tax_rate: TaxRate::STANDARD,
            discount_rate: DiscountRate::ZERO,
            last: None,
            currency,
        }
    }

    /// Stores the item details without recomputing the totals.
    pub fn set_item_details(
        &mut self,
        name: Option<&str>,
        cost_per_item: Decimal,
        quantity: u32,
        delivery_cost: Decimal,
    ) -> Result<()> {
        let cost_per_item = UnitCost::new(cost_per_item)?;
        let quantity = Quantity::new(quantity)?;
        let delivery_cost = DeliveryCost::new(delivery_cost)?;

        self.item_name = ItemName::new(name);
        self.cost_per_item = Some(cost_per_item);
        self.quantity = Some(quantity);
        self.delivery_cost = delivery_cost;
        Ok(())
    }

    /// Validates and applies `request`, then recomputes.
    pub fn calculate(&mut self, request: &CostRequest) -> Result<&CostBreakdown> {
        let cost_per_item = UnitCost::new(request.cost_per_item)?;
        let quantity = Quantity::new(request.quantity)?;
        let delivery_cost = DeliveryCost::new(request.delivery_cost)?;
        let tax_rate = request.tax_rate.map(TaxRate::new).transpose()?;
        let discount_rate = request.discount_rate.map(DiscountRate::new).transpose()?;

        self.commit(CostInputs {
            item_name: self.item_name.clone(),
            cost_per_item,
            quantity,
            delivery_cost,
            tax_rate: tax_rate.unwrap_or(self.tax_rate),
            discount_rate: discount_rate.unwrap_or(self.discount_rate),
        })
    }

    /// Prices `cost_per_item × quantity` with free delivery, keeping the
    /// current tax and discount rates.
    pub fn calculate_cost(&mut self, cost_per_item: Decimal, quantity: u32) -> Result<&CostBreakdown> {
        self.calculate(&CostRequest::new(cost_per_item, quantity))
    }

    /// Like [`calculate_cost`](Self::calculate_cost) with an explicit delivery charge.
    pub fn calculate_cost_with_delivery(
        &mut self,
        cost_per_item: Decimal,
        quantity: u32,
        delivery_cost: Decimal,
    ) -> Result<&CostBreakdown> {
        self.calculate(&CostRequest::new(cost_per_item, quantity).delivery(delivery_cost))
    }

    /// Sets every pricing input, rates given as fractions, and recomputes.
    pub fn calculate_advanced_cost(
        &mut self,
        cost_per_item: Decimal,
        quantity: u32,
        delivery_cost: Decimal,
        tax_rate: Decimal,
        discount_rate: Decimal,
    ) -> Result<&CostBreakdown> {
        self.calculate(
            &CostRequest::new(cost_per_item, quantity)
                .delivery(delivery_cost)
                .tax_rate(tax_rate)
                .discount_rate(discount_rate),
        )
    }

    /// Sets the discount from a percentage (`10` for 10%) and recomputes.
    pub fn apply_discount(&mut self, percentage: Decimal) -> Result<&CostBreakdown> {
        let discount_rate = DiscountRate::from_percentage(percentage)?;
        let inputs = self.inputs().ok_or(CostError::MissingInputs)?;
        self.commit(CostInputs {
            discount_rate,
            ..inputs
        })
    }

    /// Sets the tax from a percentage (`8` for 8%) and recomputes.
    pub fn apply_tax(&mut self, percentage: Decimal) -> Result<&CostBreakdown> {
        let tax_rate = TaxRate::from_percentage(percentage)?;
        let inputs = self.inputs().ok_or(CostError::MissingInputs)?;
        self.commit(CostInputs { tax_rate, ..inputs })
    }

    /// Stores a tax rate (fraction) without recomputing.
    pub fn set_tax_rate(&mut self, rate: Decimal) -> Result<()> {
        self.tax_rate = TaxRate::new(rate)?;
        Ok(())
    }

    /// Stores a discount rate (fraction) without recomputing.
    pub fn set_discount_rate(&mut self, rate: Decimal) -> Result<()> {
        self.discount_rate = DiscountRate::new(rate)?;
        Ok(())
    }

    /// Recomputes the totals from the stored inputs.
    pub fn recalculate(&mut self) -> Result<&CostBreakdown> {
        let inputs = self.inputs().ok_or(CostError::MissingInputs)?;
        self.commit(inputs)
    }

    /// Prices `inputs` and, only if that succeeds, makes them the stored
    /// inputs and the reported calculation.
    fn commit(&mut self, inputs: CostInputs) -> Result<&CostBreakdown> {
        let breakdown = CostBreakdown::compute(&inputs)?;
        debug!(
            item = %inputs.item_name,
            subtotal = %breakdown.subtotal,
            discount = %breakdown.discount_amount,
            tax = %breakdown.tax_amount,
            total = %breakdown.total_cost,
            "recalculated cost breakdown"
        );
        self.cost_per_item = Some(inputs.cost_per_item);
        self.quantity = Some(inputs.quantity);
        self.delivery_cost = inputs.delivery_cost;
        self.tax_rate = inputs.tax_rate;
        self.discount_rate = inputs.discount_rate;
        let last = self.last.insert(Calculation { inputs, breakdown });
        Ok(&last.breakdown)
    }

    /// The stored inputs, once a unit cost and quantity have been set.
    pub fn inputs(&self) -> Option<CostInputs> {
        Some(CostInputs {
            item_name: self.item_name.clone(),
            cost_per_item: self.cost_per_item?,
            quantity: self.quantity?,
            delivery_cost: self.delivery_cost,
            tax_rate: self.tax_rate,
            discount_rate: self.discount_rate,
        })
    }

    /// Totals of the last calculation, `None` before the first one.
    pub fn breakdown(&self) -> Option<&CostBreakdown> {
        self.last.as_ref().map(|last| &last.breakdown)
    }

    pub fn item_name(&self) -> &str {
        self.item_name.as_str()
    }

    pub fn cost_per_item(&self) -> Option<Decimal> {
        self.cost_per_item.map(|cost| cost.value())
    }

    pub fn quantity(&self) -> Option<u32> {
        self.quantity.map(|quantity| quantity.value())
    }

    pub fn delivery_cost(&self) -> Decimal {
        self.delivery_cost.value()
    }

    pub fn tax_rate(&self) -> Decimal {
        self.tax_rate.value()
    }

    pub fn discount_rate(&self) -> Decimal {
        self.discount_rate.value()
    }

    pub fn subtotal(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.subtotal)
    }

    pub fn discount_amount(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.discount_amount)
    }

    pub fn tax_amount(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.tax_amount)
    }

    pub fn total_cost(&self) -> Option<Decimal> {
        self.breakdown().map(|b| b.total_cost)
    }

    pub fn currency(&self) -> &CurrencyFormat {
        &self.currency
    }

    fn reported(&self) -> Result<&Calculation> {
        self.last.as_ref().ok_or(CostError::NotCalculated)
    }

    /// Renders the multi-line breakdown of the last calculation.
    pub fn generate_detailed_report(&self) -> Result<String> {
        let last = self.reported()?;
        Ok(render_detailed_report(&last.inputs, &last.breakdown, &self.currency))
    }

    /// Renders the one-line summary of the last calculation.
    pub fn generate_summary(&self) -> Result<String> {
        let last = self.reported()?;
        Ok(render_summary(&last.inputs, &last.breakdown, &self.currency))
    }
}

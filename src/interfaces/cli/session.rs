use super::prompt::{DEFAULT_MAX_ATTEMPTS, Prompter};
use crate::application::engine::{CalculationMode, CostEngine, CostRequest};
use crate::domain::inputs::{MIN_COST_PER_ITEM, MIN_QUANTITY};
use crate::error::{CostError, Result};
use crate::interfaces::currency::{CurrencyFormat, format_percentage};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::io::{BufRead, Write};
use tracing::{info, warn};

const APP_TITLE: &str = "COST CALCULATOR";
const BANNER_WIDTH: usize = 60;
/// Highest tax percentage the interactive custom mode accepts.
const MAX_CUSTOM_TAX_PERCENT: Decimal = dec!(25);
const MAX_CUSTOM_DISCOUNT_PERCENT: Decimal = dec!(50);

/// Settings for an interactive session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub max_attempts: u32,
    pub currency: CurrencyFormat,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            currency: CurrencyFormat::default(),
        }
    }
}

fn banner<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>, lines: &[&str]) -> Result<()> {
    let rule = "=".repeat(BANNER_WIDTH);
    prompter.say(&rule)?;
    for line in lines {
        prompter.say(&format!("{line:^width$}", width = BANNER_WIDTH))?;
    }
    prompter.say(&rule)?;
    prompter.say("")
}

/// Runs calculations until the user declines to continue.
///
/// Engine validation errors are shown and the current calculation starts
/// over; I/O failures, closed input and exhausted retries end the session.
pub fn run_session<R: BufRead, W: Write>(input: R, output: W, config: &SessionConfig) -> Result<W> {
    let mut prompter = Prompter::new(input, output, config.max_attempts);
    banner(
        &mut prompter,
        &[APP_TITLE, "Tax calculation | Discounts | Detailed reports"],
    )?;

    let mut completed = 0usize;
    loop {
        match run_calculation(&mut prompter, config) {
            Ok(()) => completed += 1,
            Err(CostError::Validation(err)) => {
                warn!(error = %err, "calculation rejected");
                prompter.say(&format!("Validation Error: {err}"))?;
                prompter.say("Please try again with valid inputs.")?;
                prompter.say("")?;
                continue;
            }
            Err(CostError::Overflow) => {
                warn!("calculation overflowed");
                prompter.say(&format!("Calculation Error: {}", CostError::Overflow))?;
                prompter.say("Please try again with smaller amounts.")?;
                prompter.say("")?;
                continue;
            }
            Err(err) => return Err(err),
        }

        let again = prompter.ask_yes_no(
            "Would you like to perform another calculation? (y/n): ",
            "continue",
        )?;
        if !again {
            break;
        }
        prompter.say("")?;
    }

    info!(completed, "session finished");
    prompter.say("")?;
    let farewell = format!("Thank you for using {APP_TITLE}!");
    banner(&mut prompter, &[farewell.as_str()])?;
    Ok(prompter.into_output())
}

fn ask_mode<R: BufRead, W: Write>(prompter: &mut Prompter<R, W>) -> Result<u32> {
    prompter.say("Select Calculation Mode:")?;
    prompter.say("   1. Basic Calculation (Items + Delivery)")?;
    prompter.say("   2. Standard Calculation (with 8% Tax)")?;
    prompter.say("   3. Advanced Calculation (Custom Tax & Discount)")?;
    prompter.say("")?;
    let mode = prompter.ask_u32("Choose mode (1-3): ", "calculation mode", 1, Some(3))?;
    prompter.say("")?;
    Ok(mode)
}

fn run_calculation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &SessionConfig,
) -> Result<()> {
    let symbol = &config.currency.symbol;
    let mode = ask_mode(prompter)?;

    let name = prompter.ask_text("Item Name: ", "item name")?;
    let cost_per_item = prompter.ask_decimal(
        &format!("Cost Per Item ({symbol}): "),
        "cost per item",
        MIN_COST_PER_ITEM,
        None,
    )?;
    let quantity = prompter.ask_u32("Quantity: ", "quantity", MIN_QUANTITY, None)?;
    let delivery_cost = prompter.ask_decimal(
        &format!("Delivery Cost ({symbol}, 0 for free): "),
        "delivery cost",
        Decimal::ZERO,
        None,
    )?;

    let mode = match mode {
        1 => CalculationMode::Basic,
        2 => CalculationMode::Standard,
        _ => {
            let tax = prompter.ask_decimal(
                "Enter tax rate (0-25%): ",
                "tax rate",
                Decimal::ZERO,
                Some(MAX_CUSTOM_TAX_PERCENT),
            )?;
            let discount = prompter.ask_decimal(
                "Enter discount rate (0-50%): ",
                "discount rate",
                Decimal::ZERO,
                Some(MAX_CUSTOM_DISCOUNT_PERCENT),
            )?;
            CalculationMode::Custom {
                tax_rate: tax / dec!(100),
                discount_rate: discount / dec!(100),
            }
        }
    };

    let mut engine = CostEngine::with_currency(config.currency.clone());
    engine.set_item_details(Some(&name), cost_per_item, quantity, delivery_cost)?;
    engine.calculate(&CostRequest::for_mode(
        mode,
        cost_per_item,
        quantity,
        delivery_cost,
    ))?;

    prompter.say(&completion_note(mode))?;
    prompter.say("")?;
    prompter.say("Calculation completed successfully!")?;
    prompter.say(&engine.generate_detailed_report()?)?;
    prompter.say("Quick Summary:")?;
    prompter.say(&format!("   {}", engine.generate_summary()?))?;
    prompter.say("")
}

fn completion_note(mode: CalculationMode) -> String {
    match mode {
        CalculationMode::Basic => "Basic calculation completed (no tax applied)".to_string(),
        CalculationMode::Standard => "Standard calculation completed (8% tax applied)".to_string(),
        CalculationMode::Custom {
            tax_rate,
            discount_rate,
        } => format!(
            "Custom calculation completed ({} tax, {} discount applied)",
            format_percentage(tax_rate),
            format_percentage(discount_rate)
        ),
    }
}

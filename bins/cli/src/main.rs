//! Valor walkthrough runner.
//!
//! Loads configuration, installs logging and prints the result of each money
//! and quantity walkthrough.

use std::collections::HashMap;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use valor_core::currency::ConversionRegistry;
use valor_core::money::{
    AmountFormat, AmountFormatQuery, CurrencyStyle, MonetaryAmount, NumberConventions, Rounding,
    SymbolPosition, currency, currency_for_locale, summarize,
};
use valor_core::units::{
    Dimension, Quantity, centi, gram, hour, kilo, kilogram, kilometre_per_hour, litre, metre,
    milli, square_metre,
};
use valor_shared::AppConfig;
use valor_shared::types::{Locale, MonetaryContext};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.logging.filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let context = MonetaryContext::from(&config.money);
    let rates = ConversionRegistry::from_config(&config.rates);
    info!(
        max_scale = context.max_scale,
        fixed_scale = context.fixed_scale,
        providers = ?rates.provider_names(),
        "Configuration loaded"
    );

    money_walkthrough(context)?;
    conversion_walkthrough(&rates, context)?;
    format_walkthrough()?;
    quantity_walkthrough()?;

    Ok(())
}

fn money_walkthrough(context: MonetaryContext) -> anyhow::Result<()> {
    println!("== Money ==");
    let real = currency("BRL")?;
    let dollar = currency("USD")?;

    let total = MonetaryAmount::of_with_context(20, real, context)?
        .add(&MonetaryAmount::of_with_context(30, real, context)?)?;
    println!("20 BRL + 30 BRL = {total}");

    match MonetaryAmount::of(20, real)?.add(&MonetaryAmount::of(30, dollar)?) {
        Ok(amount) => println!("20 BRL + 30 USD = {amount}"),
        Err(err) => println!("20 BRL + 30 USD fails: {err} [{}]", err.error_code()),
    }

    let amounts = [42, 7, 18]
        .into_iter()
        .map(|n| MonetaryAmount::of_with_context(n, dollar, context))
        .collect::<Result<Vec<_>, _>>()?;
    let summary = summarize(&amounts, dollar)?;
    println!(
        "summary of [42, 7, 18] USD: count={} total={} min={} max={} average={}",
        summary.count,
        summary.total,
        summary.min.map(|m| m.to_string()).unwrap_or_default(),
        summary.max.map(|m| m.to_string()).unwrap_or_default(),
        summary.average.round(&Rounding::default_for(dollar)),
    );

    let yen = currency_for_locale(&Locale::japan())?;
    let price = MonetaryAmount::of_with_context(13.5, yen, context)?;
    println!("{price} rounded = {}", price.round_default());
    Ok(())
}

fn conversion_walkthrough(
    rates: &ConversionRegistry,
    context: MonetaryContext,
) -> anyhow::Result<()> {
    println!("== Conversion ==");
    let dollar = MonetaryAmount::of_with_context(10, currency("USD")?, context)?;

    for name in ["IMF", "ECB"] {
        let to_real = rates.provider_conversion(name, currency("BRL")?)?;
        println!("{dollar} via {name} = {}", dollar.convert(&to_real)?);
    }

    let to_yen = rates.conversion(currency("JPY")?)?;
    let rate = to_yen.exchange_rate(dollar.currency())?;
    println!(
        "{dollar} via default chain ({}) = {} [{} {:?}]",
        to_yen.provider_name(),
        dollar.convert(&to_yen)?.round_default(),
        rate.provider,
        rate.method,
    );

    if let Err(err) = rates.provider("BCB") {
        println!("provider BCB: {err}");
    }
    Ok(())
}

fn format_walkthrough() -> anyhow::Result<()> {
    println!("== Formatting ==");
    let conventions = HashMap::from([
        (
            Locale::us(),
            NumberConventions {
                grouping_separator: Some(','),
                decimal_separator: '.',
                position: SymbolPosition::Prefix,
                spaced: false,
            },
        ),
        (
            Locale::brazil(),
            NumberConventions {
                grouping_separator: Some('.'),
                decimal_separator: ',',
                position: SymbolPosition::Prefix,
                spaced: true,
            },
        ),
        (
            Locale::japan(),
            NumberConventions {
                grouping_separator: Some(','),
                decimal_separator: '.',
                position: SymbolPosition::Prefix,
                spaced: false,
            },
        ),
    ]);

    let number = 1234.567_8;
    for locale in [Locale::us(), Locale::brazil(), Locale::japan()] {
        let amount = MonetaryAmount::of(number, currency_for_locale(&locale)?)?;
        for style in [CurrencyStyle::Symbol, CurrencyStyle::Code] {
            let query = AmountFormatQuery::of(locale.clone()).with_style(style);
            let format = AmountFormat::new(query, &conventions)?;
            println!("{locale} {style:?}: {}", format.format(&amount));
        }
    }
    Ok(())
}

fn quantity_walkthrough() -> anyhow::Result<()> {
    println!("== Quantities ==");
    let km = kilo(&metre())?;

    let sheet = Quantity::of(0.21, metre())?
        .multiply(&Quantity::of(0.297, metre())?)?
        .as_type(Dimension::Area)?;
    println!("0.21 m x 0.297 m = {sheet} (is square metre: {})", sheet.unit() == &square_metre());

    let efficiency = Quantity::of(1000, km.clone())?.divide(&Quantity::of(70, litre())?)?;
    println!("1000 km / 70 l = {} {}", efficiency.int_value(), efficiency.unit());

    let speed = Quantity::of(100, km.clone())?
        .divide(&Quantity::of(1, hour())?)?
        .as_type(Dimension::Speed)?;
    println!("100 km / 1 h = {speed} (is km/h: {})", speed.unit() == &kilometre_per_hour());

    let distance = speed.multiply(&Quantity::of(2, hour())?)?.as_type(Dimension::Length)?;
    println!("{speed} x 2 h = {distance}");

    let grammage = Quantity::of(200, gram().divide(&square_metre())?)?;
    let weight = grammage.multiply(&sheet)?.to(&kilogram())?;
    println!("{grammage} x {sheet} = {weight}");

    let width = Quantity::of(0.21, metre())?;
    println!(
        "{width} = {} = {}",
        width.to(&centi(&metre())?)?,
        width.to(&milli(&metre())?)?
    );

    if let Err(err) = width.to(&hour()) {
        println!("{width} to h: {err}");
    }
    Ok(())
}

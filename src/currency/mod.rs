//! Currency and date formatting used by statement projections.

use chrono::{DateTime, Datelike, Local, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Minor units rendered for every amount.
pub const CURRENCY_PRECISION: u32 = 2;

/// Formatting contract consumed by the statement store.
pub trait ValueFormatter {
    fn format_currency(&self, amount: Decimal) -> String;
    fn format_date(&self, date: DateTime<Utc>) -> String;
}

/// Locale-aware formatting preferences.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleConfig {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub date_format: DateFormatStyle,
}

impl Default for LocaleConfig {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            date_format: DateFormatStyle::Long,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum NegativeStyle {
    #[default]
    Sign,
    Parentheses,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum DateFormatStyle {
    Short,
    Medium,
    Long,
}

/// Default [`ValueFormatter`]: symbol-prefixed amounts with grouped digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleFormatter {
    pub symbol: String,
    pub locale: LocaleConfig,
    pub negative_style: NegativeStyle,
}

impl Default for LocaleFormatter {
    fn default() -> Self {
        Self {
            symbol: "$".into(),
            locale: LocaleConfig::default(),
            negative_style: NegativeStyle::Sign,
        }
    }
}

impl LocaleFormatter {
    pub fn new(symbol: impl Into<String>, locale: LocaleConfig, negative_style: NegativeStyle) -> Self {
        Self {
            symbol: symbol.into(),
            locale,
            negative_style,
        }
    }
}

impl ValueFormatter for LocaleFormatter {
    fn format_currency(&self, amount: Decimal) -> String {
        let body = format!(
            "{}{}",
            self.symbol,
            format_number(&self.locale, amount.abs(), CURRENCY_PRECISION)
        );
        if amount.is_sign_negative() && !amount.is_zero() {
            match self.negative_style {
                NegativeStyle::Sign => format!("-{body}"),
                NegativeStyle::Parentheses => format!("({body})"),
            }
        } else {
            body
        }
    }

    fn format_date(&self, date: DateTime<Utc>) -> String {
        let local = date.with_timezone(&Local);
        match self.locale.date_format {
            DateFormatStyle::Short => local.format("%Y-%m-%d").to_string(),
            DateFormatStyle::Medium => format!(
                "{:02} {} {}",
                local.day(),
                month_label(local.month()),
                local.year()
            ),
            DateFormatStyle::Long => local.format("%B %-d, %Y").to_string(),
        }
    }
}

/// Renders `value` with exactly `precision` fraction digits and grouped thousands.
pub fn format_number(locale: &LocaleConfig, value: Decimal, precision: u32) -> String {
    let mut rounded =
        value.round_dp_with_strategy(precision, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(precision);
    let raw = rounded.to_string();
    let (sign, digits) = match raw.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", raw.as_str()),
    };
    let (int_part, frac_part) = digits.split_once('.').unwrap_or((digits, ""));
    let grouped = group_digits(int_part, locale.grouping_separator);
    if frac_part.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}{}{frac_part}", locale.decimal_separator)
    }
}

fn group_digits(digits: &str, separator: char) -> String {
    let mut grouped = String::new();
    for (count, ch) in digits.chars().rev().enumerate() {
        if count != 0 && count % 3 == 0 {
            grouped.insert(0, separator);
        }
        grouped.insert(0, ch);
    }
    grouped
}

fn month_label(month: u32) -> &'static str {
    match month {
        1 => "Jan",
        2 => "Feb",
        3 => "Mar",
        4 => "Apr",
        5 => "May",
        6 => "Jun",
        7 => "Jul",
        8 => "Aug",
        9 => "Sep",
        10 => "Oct",
        11 => "Nov",
        12 => "Dec",
        _ => "",
    }
}

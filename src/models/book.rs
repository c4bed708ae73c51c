//! Book (catalog entry) model and the raw row it is built from.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{AppError, AppResult};

/// One title's catalog entry.
///
/// `total_copies` counts copies on the shelf and `borrowed_count` copies out on
/// loan. The two counters are updated side by side by the lending desk but are
/// not required to add up to a fixed stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: Decimal,
    pub total_copies: u32,
    pub borrowed_count: u32,
}

impl Book {
    pub fn new(
        isbn: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        price: Decimal,
        total_copies: u32,
    ) -> Self {
        Self {
            isbn: isbn.into(),
            title: title.into(),
            author: author.into(),
            price,
            total_copies,
            borrowed_count: 0,
        }
    }

    /// Whether `query` names this book, ignoring case and surrounding whitespace
    pub fn title_matches(&self, query: &str) -> bool {
        normalize_title(&self.title) == normalize_title(query)
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "ISBN: {}, Title: {}, Author: {}, Price: {}, Quantity: {}",
            self.isbn, self.title, self.author, self.price, self.total_copies
        )
    }
}

fn normalize_title(title: &str) -> String {
    title.trim().to_lowercase()
}

/// A delimited input row split into its fields but not yet validated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRecord {
    pub isbn: String,
    pub title: String,
    pub author: String,
    pub price: String,
    pub quantity: String,
}

impl RawRecord {
    /// Split one `isbn, title, author, price, quantity` line.
    ///
    /// Fields past the fifth are ignored and absent ones are left empty.
    pub fn from_line(line: &str) -> Self {
        let mut fields = line.trim_end_matches('\r').split(',').map(str::trim);
        let mut next = || fields.next().unwrap_or_default().to_string();
        Self {
            isbn: next(),
            title: next(),
            author: next(),
            price: next(),
            quantity: next(),
        }
    }
}

impl TryFrom<RawRecord> for Book {
    type Error = AppError;

    fn try_from(raw: RawRecord) -> AppResult<Self> {
        if raw.price.is_empty() {
            return Err(AppError::MissingField("price"));
        }
        if raw.quantity.is_empty() {
            return Err(AppError::MissingField("quantity"));
        }

        let price = parse_price(&raw.price)?;
        let quantity = parse_quantity(&raw.quantity)?;

        Ok(Book::new(raw.isbn, raw.title, raw.author, price, quantity))
    }
}

fn parse_price(value: &str) -> AppResult<Decimal> {
    let price = Decimal::from_str(value).map_err(|e| AppError::InvalidNumber {
        field: "price",
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if price < Decimal::ZERO {
        return Err(AppError::NegativeValue {
            field: "price",
            value: value.to_string(),
        });
    }
    Ok(price)
}

fn parse_quantity(value: &str) -> AppResult<u32> {
    let quantity = value.parse::<i64>().map_err(|e| AppError::InvalidNumber {
        field: "quantity",
        value: value.to_string(),
        reason: e.to_string(),
    })?;
    if quantity < 0 {
        return Err(AppError::NegativeValue {
            field: "quantity",
            value: value.to_string(),
        });
    }
    u32::try_from(quantity).map_err(|e| AppError::InvalidNumber {
        field: "quantity",
        value: value.to_string(),
        reason: e.to_string(),
    })
}

use core::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use stockroom_core::{
    DATE_FORMAT, DomainError, DomainResult, Entity, ValueObject, parse_date, parse_integer,
    parse_non_negative,
};

/// Stock-keeping unit identifier.
///
/// Input is trimmed and upper-cased on construction, so two IDs compare equal
/// exactly when their spellings match case-insensitively.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let canonical = raw.trim().to_uppercase();
        if canonical.is_empty() {
            return Err(DomainError::invalid("item ID cannot be empty"));
        }
        Ok(Self(canonical))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for ItemId {}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for ItemId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<ItemId> for String {
    fn from(value: ItemId) -> Self {
        value.0
    }
}

/// Expiration date, always a real calendar date written `YYYY-MM-DD`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ExpirationDate(NaiveDate);

impl ExpirationDate {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl ValueObject for ExpirationDate {}

impl core::fmt::Display for ExpirationDate {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for ExpirationDate {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_date(s).map(Self)
    }
}

impl TryFrom<String> for ExpirationDate {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ExpirationDate> for String {
    fn from(value: ExpirationDate) -> Self {
        value.to_string()
    }
}

/// An inventory record.
///
/// Serializes to the flat `item_id` / `item_name` / `stock_quantity` / `price` /
/// `expiration_date` record used at any durability boundary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub item_id: ItemId,
    pub item_name: String,
    pub stock_quantity: u64,
    /// Price in smallest currency unit.
    pub price: i64,
    pub expiration_date: ExpirationDate,
}

impl Item {
    pub fn new(
        item_id: ItemId,
        item_name: impl Into<String>,
        stock_quantity: u64,
        price: i64,
        expiration_date: ExpirationDate,
    ) -> Self {
        Self {
            item_id,
            item_name: item_name.into(),
            stock_quantity,
            price,
            expiration_date,
        }
    }

    /// Build an item from raw text fields using the creation rules: the
    /// quantity must be a non-negative integer, the price any integer.
    pub fn parse(
        item_id: &str,
        item_name: &str,
        stock_quantity: &str,
        price: &str,
        expiration_date: &str,
    ) -> DomainResult<Self> {
        Ok(Self {
            item_id: ItemId::parse(item_id)?,
            item_name: item_name.to_string(),
            stock_quantity: parse_non_negative(stock_quantity)?,
            price: parse_integer(price)?,
            expiration_date: expiration_date.parse()?,
        })
    }

    /// Replace exactly one field with an already validated value.
    pub fn apply(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.item_name = name,
            FieldUpdate::Quantity(quantity) => self.stock_quantity = quantity,
            FieldUpdate::Price(price) => self.price = price,
            FieldUpdate::ExpirationDate(date) => self.expiration_date = date,
        }
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.item_id
    }
}

/// The fields that may be changed after creation. The ID is not one of them.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ItemField {
    Name,
    Quantity,
    Price,
    ExpirationDate,
}

impl ItemField {
    pub const ALL: [ItemField; 4] = [
        ItemField::Name,
        ItemField::Quantity,
        ItemField::Price,
        ItemField::ExpirationDate,
    ];

    pub fn label(self) -> &'static str {
        match self {
            ItemField::Name => "Item Name",
            ItemField::Quantity => "Stock",
            ItemField::Price => "Price",
            ItemField::ExpirationDate => "Expiration Date",
        }
    }
}

impl core::fmt::Display for ItemField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// A validated single-field replacement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Quantity(u64),
    Price(i64),
    ExpirationDate(ExpirationDate),
}

impl FieldUpdate {
    /// Validate `raw` for `field` using the update rules.
    ///
    /// Quantity and price must both be integers >= 0 here (creation is laxer
    /// for price). Names are taken verbatim.
    pub fn parse(field: ItemField, raw: &str) -> DomainResult<Self> {
        match field {
            ItemField::Name => Ok(FieldUpdate::Name(raw.to_string())),
            ItemField::Quantity => parse_non_negative(raw).map(FieldUpdate::Quantity),
            ItemField::Price => {
                let price = parse_non_negative(raw)?;
                i64::try_from(price)
                    .map(FieldUpdate::Price)
                    .map_err(|_| DomainError::invalid(format!("price {price} is out of range")))
            }
            ItemField::ExpirationDate => raw.parse().map(FieldUpdate::ExpirationDate),
        }
    }

    pub fn field(&self) -> ItemField {
        match self {
            FieldUpdate::Name(_) => ItemField::Name,
            FieldUpdate::Quantity(_) => ItemField::Quantity,
            FieldUpdate::Price(_) => ItemField::Price,
            FieldUpdate::ExpirationDate(_) => ItemField::ExpirationDate,
        }
    }
}

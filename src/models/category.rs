//! Line items and expense categories
//!
//! A category is a named, ordered list of line items. Categories carry no
//! identity beyond their name and contents; they are rebuilt from the plan
//! inputs on every evaluation pass.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;

/// Maximum length for category and item names
const MAX_NAME_LEN: usize = 60;

/// A single named amount (e.g., "Electricity": Rp 800,000)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name, unique within its owning list
    pub name: String,

    /// Monthly amount
    pub amount: Money,
}

impl LineItem {
    /// Create a new line item
    pub fn new(name: impl Into<String>, amount: impl Into<Money>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

/// A named group of expense line items (e.g., "Housing", "Transportation")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Category name
    pub name: String,

    /// Items in display order
    #[serde(default)]
    pub items: Vec<LineItem>,
}

impl Category {
    /// Create an empty category
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            items: Vec::new(),
        }
    }

    /// Builder-style helper that appends an item
    pub fn with_item(mut self, name: impl Into<String>, amount: impl Into<Money>) -> Self {
        self.set_item(name, amount);
        self
    }

    /// Set an item's amount, replacing any existing item with the same name
    ///
    /// Replacing keeps the item's original position.
    pub fn set_item(&mut self, name: impl Into<String>, amount: impl Into<Money>) {
        let name = name.into();
        let amount = amount.into();
        match self.items.iter_mut().find(|item| item.name == name) {
            Some(existing) => existing.amount = amount,
            None => self.items.push(LineItem { name, amount }),
        }
    }

    /// Look up an item's amount by name
    pub fn get(&self, name: &str) -> Option<Money> {
        self.items
            .iter()
            .find(|item| item.name == name)
            .map(|item| item.amount)
    }

    /// Sum of all item amounts; zero for an empty category
    pub fn total(&self) -> Money {
        total_of(&self.items)
    }

    /// Check if the category has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        validate_name(&self.name)?;
        validate_items(&self.items)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Sum a list of line items
pub fn total_of(items: &[LineItem]) -> Money {
    items.iter().map(|item| item.amount).sum()
}

/// Validate a free-standing list of items (names unique, amounts non-negative)
pub fn validate_items(items: &[LineItem]) -> Result<(), CategoryValidationError> {
    for (i, item) in items.iter().enumerate() {
        validate_name(&item.name)?;

        if item.amount.is_negative() {
            return Err(CategoryValidationError::NegativeAmount(item.name.clone()));
        }

        if items[..i].iter().any(|other| other.name == item.name) {
            return Err(CategoryValidationError::DuplicateItem(item.name.clone()));
        }
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), CategoryValidationError> {
    if name.trim().is_empty() {
        return Err(CategoryValidationError::EmptyName);
    }

    if name.chars().count() > MAX_NAME_LEN {
        return Err(CategoryValidationError::NameTooLong(name.chars().count()));
    }

    Ok(())
}

/// Default expense categories of the household plan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultCategory {
    Essentials,
    Transportation,
    PersonalCare,
    HealthInsurance,
    Household,
    ChildEducation,
    Lifestyle,
    Charity,
}

impl DefaultCategory {
    /// Get all default categories in display order
    pub fn all() -> &'static [Self] {
        &[
            Self::Essentials,
            Self::Transportation,
            Self::PersonalCare,
            Self::HealthInsurance,
            Self::Household,
            Self::ChildEducation,
            Self::Lifestyle,
            Self::Charity,
        ]
    }

    /// Get the name for this default category
    pub fn name(&self) -> &'static str {
        match self {
            Self::Essentials => "Essentials",
            Self::Transportation => "Transportation",
            Self::PersonalCare => "Personal Care",
            Self::HealthInsurance => "Health & Insurance",
            Self::Household => "Household",
            Self::ChildEducation => "Children's Education",
            Self::Lifestyle => "Lifestyle & Entertainment",
            Self::Charity => "Charity",
        }
    }

    /// Default items and monthly amounts
    pub fn items(&self) -> &'static [(&'static str, i64)] {
        match self {
            Self::Essentials => &[
                ("Mortgage / Rent", 6_000_000),
                ("Electricity", 800_000),
                ("Water", 300_000),
                ("Internet & Cable TV", 600_000),
                ("Groceries & Kitchen", 5_500_000),
                ("Dining Out / Delivery", 1_500_000),
            ],
            Self::Transportation => &[
                ("Fuel / Public Transport", 1_200_000),
                ("Vehicle Maintenance", 300_000),
            ],
            Self::PersonalCare => &[
                ("Skincare & Cosmetics", 1_500_000),
                ("Hair & Body Care", 500_000),
            ],
            Self::HealthInsurance => &[
                ("Health Insurance", 1_200_000),
                ("Medicine & Check-ups", 600_000),
            ],
            Self::Household => &[
                ("Cleaning & Supplies", 500_000),
                ("Home Maintenance & Repairs", 300_000),
            ],
            Self::ChildEducation => &[("Education Savings", 2_000_000)],
            Self::Lifestyle => &[
                ("Outings & Hangouts", 3_000_000),
                ("Hobbies & Sports", 1_000_000),
            ],
            Self::Charity => &[("Charity & Donations", 2_500_000)],
        }
    }

    /// Create a Category populated with the default items
    pub fn to_category(&self) -> Category {
        self.items()
            .iter()
            .fold(Category::new(self.name()), |category, (name, amount)| {
                category.with_item(*name, *amount)
            })
    }
}

/// Validation errors for categories and item lists
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NameTooLong(usize),
    NegativeAmount(String),
    DuplicateItem(String),
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Name cannot be empty"),
            Self::NameTooLong(len) => {
                write!(f, "Name too long ({} chars, max {})", len, MAX_NAME_LEN)
            }
            Self::NegativeAmount(name) => write!(f, "Amount for '{}' cannot be negative", name),
            Self::DuplicateItem(name) => write!(f, "Duplicate item name: {}", name),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

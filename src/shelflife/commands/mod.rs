use crate::config::Settings;
use crate::model::Product;
use crate::urgency::Urgency;
use std::collections::BTreeSet;

pub mod add;
pub mod check;
pub mod classify;
pub mod delete;
pub mod helpers;
pub mod list;
pub mod settings;
pub mod update;

pub use helpers::ListedProduct;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Which slice of a listing was returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageInfo {
    pub page: usize,
    pub pages: usize,
    pub matching: usize,
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_products: Vec<Product>,
    pub listed_products: Vec<ListedProduct>,
    /// Size of the whole store, regardless of filters
    pub total_products: usize,
    pub page: Option<PageInfo>,
    pub alerted: BTreeSet<u64>,
    pub settings: Option<Settings>,
    pub classification: Option<Urgency>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_products(mut self, products: Vec<ListedProduct>) -> Self {
        self.listed_products = products;
        self
    }

    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = Some(settings);
        self
    }

    pub fn with_classification(mut self, urgency: Urgency) -> Self {
        self.classification = Some(urgency);
        self
    }
}

/// Field changes for an existing product; `None` leaves a field alone.
#[derive(Debug, Clone, Default)]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<u32>,
    pub unit: Option<String>,
    pub manufacture_date: Option<chrono::NaiveDate>,
    pub expiry_date: Option<chrono::NaiveDate>,
}

impl ProductUpdate {
    /// The quantity/unit pair edited from the listing.
    pub fn stock(quantity: u32, unit: impl Into<String>) -> Self {
        Self {
            quantity: Some(quantity),
            unit: Some(unit.into()),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.quantity.is_none()
            && self.unit.is_none()
            && self.manufacture_date.is_none()
            && self.expiry_date.is_none()
    }
}

//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! operation, whatever the front end.
//!
//! The facade owns its collaborators: the product store, the loaded
//! [`Settings`], and the message sender (absent when no gateway is
//! configured). They are built once by the caller and passed in; nothing is
//! looked up from global state.
//!
//! It does not read the clock either. Every date-dependent call takes `today`.
//!
//! `InventoryApi<S, M>` is generic over both collaborators:
//! - Production: `InventoryApi<FileStore, TwilioSender>`
//! - Testing: `InventoryApi<InMemoryStore, RecordingSender>`

use crate::commands;
use crate::config::Settings;
use crate::error::{InventoryError, Result};
use crate::model::ProductDraft;
use crate::sms::MessageSender;
use crate::store::ProductStore;
use chrono::NaiveDate;
use std::path::PathBuf;

pub struct InventoryApi<S: ProductStore, M: MessageSender> {
    store: S,
    sender: Option<M>,
    settings: Settings,
    data_dir: PathBuf,
}

impl<S: ProductStore, M: MessageSender> InventoryApi<S, M> {
    pub fn new(store: S, sender: Option<M>, settings: Settings, data_dir: PathBuf) -> Self {
        Self {
            store,
            sender,
            settings,
            data_dir,
        }
    }

    pub fn add_product(&mut self, draft: ProductDraft, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::add::run(
            &mut self.store,
            draft,
            today,
            &self.settings,
            self.sender.as_mut(),
        )
    }

    pub fn list_products(
        &self,
        today: NaiveDate,
        search: Option<String>,
        page: Option<usize>,
    ) -> Result<commands::CmdResult> {
        let query = ListQuery {
            search,
            page,
            per_page: self.settings.items_per_page,
        };
        commands::list::run(&self.store, today, &query)
    }

    pub fn update_product(
        &mut self,
        id: u64,
        update: &commands::ProductUpdate,
    ) -> Result<commands::CmdResult> {
        commands::update::run(&mut self.store, id, update)
    }

    pub fn delete_products(&mut self, ids: &[u64]) -> Result<commands::CmdResult> {
        if ids.is_empty() {
            return Err(InventoryError::Api("No product ids given".into()));
        }
        commands::delete::run(&mut self.store, ids)
    }

    pub fn check_alerts(&mut self, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::check::run(&self.store, today, &self.settings, self.sender.as_mut())
    }

    /// Settings changes are written to disk and picked up by this instance.
    pub fn settings(&mut self, action: SettingsAction) -> Result<commands::CmdResult> {
        let result = commands::settings::run(&self.data_dir, action)?;
        if let Some(updated) = &result.settings {
            self.settings = updated.clone();
        }
        Ok(result)
    }

    pub fn classify(&self, raw_expiry: &str, today: NaiveDate) -> Result<commands::CmdResult> {
        commands::classify::run(raw_expiry, today)
    }
}

pub use commands::list::ListQuery;
pub use commands::settings::SettingsAction;
pub use commands::{CmdMessage, CmdResult, ListedProduct, MessageLevel, PageInfo, ProductUpdate};

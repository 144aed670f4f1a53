use super::logging;
use super::render::{
    print_messages, render_classification, render_page_footer, render_product_list,
    render_settings,
};
use super::setup::{Cli, Commands};
use chrono::{Local, NaiveDate};
use clap::Parser;
use directories::ProjectDirs;
use shelflife::api::{InventoryApi, ProductUpdate, SettingsAction};
use shelflife::config::{GatewayConfig, Settings};
use shelflife::error::{InventoryError, Result};
use shelflife::model::ProductDraft;
use shelflife::sms::twilio::TwilioSender;
use shelflife::store::fs::FileStore;
use std::path::PathBuf;
use tracing::debug;

struct AppContext {
    api: InventoryApi<FileStore, TwilioSender>,
    today: NaiveDate,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut ctx = init_context(&cli)?;

    match cli.command {
        Some(Commands::Add {
            name,
            quantity,
            unit,
            manufacture_date,
            expiry_date,
        }) => handle_add(
            &mut ctx,
            ProductDraft {
                name,
                quantity,
                unit,
                manufacture_date,
                expiry_date,
            },
        ),
        Some(Commands::List { search, page, all }) => handle_list(&mut ctx, search, page, all),
        Some(Commands::Update {
            id,
            quantity,
            unit,
            name,
            manufacture_date,
            expiry_date,
        }) => handle_update(
            &mut ctx,
            id,
            ProductUpdate {
                name,
                quantity,
                unit,
                manufacture_date,
                expiry_date,
            },
        ),
        Some(Commands::Delete { ids }) => handle_delete(&mut ctx, ids),
        Some(Commands::Check) => handle_check(&mut ctx),
        Some(Commands::Settings { key, value }) => handle_settings(&mut ctx, key, value),
        Some(Commands::Classify { date }) => handle_classify(&ctx, date),
        None => handle_list(&mut ctx, None, None, false),
    }
}

fn data_dir(cli: &Cli) -> Result<PathBuf> {
    if let Some(dir) = &cli.data_dir {
        return Ok(dir.clone());
    }
    ProjectDirs::from("com", "shelflife", "shelflife")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| InventoryError::Config("Could not determine data directory".into()))
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = data_dir(cli)?;
    let today = cli.today.unwrap_or_else(|| Local::now().date_naive());
    debug!(data_dir = %data_dir.display(), %today, "starting");

    let settings = Settings::load(&data_dir)?;
    let gateway = GatewayConfig::load_with_env(&data_dir)?;
    let sender = if gateway.is_complete() {
        Some(TwilioSender::new(&gateway)?)
    } else {
        debug!("SMS gateway credentials incomplete; alerts will not be sent");
        None
    };

    let store = FileStore::new(data_dir.clone());
    let api = InventoryApi::new(store, sender, settings, data_dir);

    Ok(AppContext { api, today })
}

fn handle_add(ctx: &mut AppContext, draft: ProductDraft) -> Result<()> {
    let result = ctx.api.add_product(draft, ctx.today)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(
    ctx: &mut AppContext,
    search: Option<String>,
    page: Option<usize>,
    all: bool,
) -> Result<()> {
    let page = if all { None } else { Some(page.unwrap_or(1)) };
    let result = ctx.api.list_products(ctx.today, search, page)?;

    print!("{}", render_product_list(&result.listed_products));
    if result.total_products > 0 {
        print!(
            "{}",
            render_page_footer(
                result.page,
                result.listed_products.len(),
                result.total_products
            )
        );
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(ctx: &mut AppContext, id: u64, update: ProductUpdate) -> Result<()> {
    let result = ctx.api.update_product(id, &update)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(ctx: &mut AppContext, ids: Vec<u64>) -> Result<()> {
    let result = ctx.api.delete_products(&ids)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_check(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.check_alerts(ctx.today)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_settings(ctx: &mut AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => SettingsAction::ShowAll,
        (Some(key), None) => SettingsAction::ShowKey(key),
        (Some(key), Some(value)) => SettingsAction::Set(key, value),
    };
    let show_all = matches!(action, SettingsAction::ShowAll);

    let result = ctx.api.settings(action)?;
    if show_all {
        if let Some(settings) = &result.settings {
            print!("{}", render_settings(settings));
        }
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_classify(ctx: &AppContext, date: String) -> Result<()> {
    let result = ctx.api.classify(&date, ctx.today)?;
    if let Some(urgency) = &result.classification {
        print!("{}", render_classification(urgency));
    }
    Ok(())
}

//! Terminal output. Layout math (widths, truncation) happens here; nothing
//! below the CLI formats text for people.

use colored::{ColoredString, Colorize};
use shelflife::api::{CmdMessage, ListedProduct, MessageLevel, PageInfo};
use shelflife::config::Settings;
use shelflife::model::DISPLAY_DATE_FORMAT;
use shelflife::urgency::{Tier, Urgency};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 4;
const NAME_WIDTH: usize = 28;
const STOCK_WIDTH: usize = 12;
const DATE_WIDTH: usize = 10;

pub fn print_messages(messages: &[CmdMessage]) {
    let output = render_messages(messages);
    if !output.is_empty() {
        print!("{}", output);
    }
}

pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|message| {
            let styled = match message.level {
                MessageLevel::Info => message.content.dimmed(),
                MessageLevel::Success => message.content.green(),
                MessageLevel::Warning => message.content.yellow(),
                MessageLevel::Error => message.content.red(),
            };
            format!("{}\n", styled)
        })
        .collect()
}

pub fn render_product_list(products: &[ListedProduct]) -> String {
    if products.is_empty() {
        return "No products found.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{}\n",
        format!(
            "{:>id$}  {}  {}  {:<date$}  Status",
            "ID",
            pad_to_width("Name", NAME_WIDTH),
            pad_to_width("Stock", STOCK_WIDTH),
            "Expiry",
            id = ID_WIDTH,
            date = DATE_WIDTH
        )
        .bold()
    ));

    for lp in products {
        let product = &lp.product;
        let stock = format!("{} {}", product.quantity, product.unit);
        out.push_str(&format!(
            "{:>id$}  {}  {}  {:<date$}  {}\n",
            product.id,
            pad_to_width(&truncate_to_width(&product.name, NAME_WIDTH), NAME_WIDTH),
            pad_to_width(&truncate_to_width(&stock, STOCK_WIDTH), STOCK_WIDTH),
            product.expiry_date.format(DISPLAY_DATE_FORMAT).to_string(),
            styled_status(&lp.urgency),
            id = ID_WIDTH,
            date = DATE_WIDTH
        ));
    }

    out
}

pub fn render_page_footer(page: Option<PageInfo>, shown: usize, total_products: usize) -> String {
    let line = match page {
        Some(info) => format!(
            "Page {} of {} ({} matching, {} total)",
            info.page, info.pages, info.matching, total_products
        ),
        None => format!("{} of {} products", shown, total_products),
    };
    format!("{}\n", line.dimmed())
}

pub fn render_settings(settings: &Settings) -> String {
    Settings::KEYS
        .iter()
        .map(|key| format!("{} = {}\n", key, settings.get(key).unwrap_or_default()))
        .collect()
}

pub fn render_classification(urgency: &Urgency) -> String {
    format!("{}: {}\n", urgency.tier, styled_status(urgency))
}

fn styled_status(urgency: &Urgency) -> ColoredString {
    let text = urgency.status_text.as_str();
    match urgency.tier {
        Tier::Expired => text.red().bold(),
        Tier::Urgent => text.red(),
        Tier::Soon => text.yellow(),
        Tier::Normal => text.green(),
        Tier::Error => text.magenta(),
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    let limit = max_width.saturating_sub(1);

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > limit {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

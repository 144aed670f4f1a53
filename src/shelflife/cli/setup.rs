use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use shelflife::model::parse_date;
use std::path::PathBuf;

fn date_arg(raw: &str) -> Result<NaiveDate, String> {
    parse_date(raw).map_err(|e| e.to_string())
}

#[derive(Parser, Debug)]
#[command(name = "shelflife", bin_name = "shelflife", version)]
#[command(about = "Track perishable stock and get an SMS before it expires", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding products.json, settings.json and config.json
    #[arg(long, global = true, env = "SHELFLIFE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Pretend today is this date (YYYY-MM-DD)
    #[arg(long, global = true, env = "SHELFLIFE_TODAY", value_parser = date_arg, hide = true)]
    pub today: Option<NaiveDate>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a product
    #[command(alias = "a")]
    Add {
        /// Product name
        name: String,

        /// How many units are in stock
        quantity: u32,

        /// Unit of the quantity (kg, l, pcs, ...)
        unit: String,

        /// Manufacture date (YYYY-MM-DD)
        #[arg(long = "made", value_parser = date_arg)]
        manufacture_date: NaiveDate,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long = "expires", value_parser = date_arg)]
        expiry_date: NaiveDate,
    },

    /// List products, most urgent first
    #[command(alias = "ls")]
    List {
        /// Only products whose name contains this text
        #[arg(short, long)]
        search: Option<String>,

        /// Page to show (size set by items-per-page)
        #[arg(short, long, conflicts_with = "all")]
        page: Option<usize>,

        /// Show every matching product on one page
        #[arg(long)]
        all: bool,
    },

    /// Change a product's stock, name or dates
    #[command(alias = "u")]
    Update {
        id: u64,

        #[arg(short, long)]
        quantity: Option<u32>,

        #[arg(long)]
        unit: Option<String>,

        #[arg(long)]
        name: Option<String>,

        /// Manufacture date (YYYY-MM-DD)
        #[arg(long = "made", value_parser = date_arg)]
        manufacture_date: Option<NaiveDate>,

        /// Expiry date (YYYY-MM-DD)
        #[arg(long = "expires", value_parser = date_arg)]
        expiry_date: Option<NaiveDate>,
    },

    /// Delete one or more products
    #[command(alias = "rm")]
    Delete {
        /// Product ids (e.g. 1 3 5)
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u64>,
    },

    /// Send SMS alerts for products due today
    Check,

    /// Get or set settings
    Settings {
        /// Setting key (sms-alerts, phone-number, alert-days, items-per-page)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Show how an expiry date would be classified today
    Classify {
        /// Expiry date (YYYY-MM-DD)
        date: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_with_dates() {
        let cli = Cli::try_parse_from([
            "shelflife",
            "add",
            "Milk",
            "2",
            "l",
            "--made",
            "2024-06-01",
            "--expires",
            "2024-06-20",
        ])
        .unwrap();

        match cli.command {
            Some(Commands::Add {
                name,
                quantity,
                expiry_date,
                ..
            }) => {
                assert_eq!(name, "Milk");
                assert_eq!(quantity, 2);
                assert_eq!(expiry_date, NaiveDate::from_ymd_opt(2024, 6, 20).unwrap());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn rejects_bad_dates_at_parse_time() {
        let parsed = Cli::try_parse_from([
            "shelflife",
            "add",
            "Milk",
            "2",
            "l",
            "--made",
            "yesterday",
            "--expires",
            "2024-06-20",
        ]);
        assert!(parsed.is_err());
    }

    #[test]
    fn page_and_all_conflict() {
        let parsed = Cli::try_parse_from(["shelflife", "ls", "--page", "2", "--all"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["shelflife", "check", "--today", "2024-01-31", "-v"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.today, NaiveDate::from_ymd_opt(2024, 1, 31));
    }
}

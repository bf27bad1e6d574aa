pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use super::toml_config::TomlConfig;
    use crate::domain::model::{parse_account_number, PurchaseRequest, TicketRequest};
    use crate::utils::error::Result;
    use crate::utils::validation::{validate_required_field, Validate};
    use clap::Parser;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "cinema-tickets")]
    #[command(about = "Validate, price and purchase cinema tickets")]
    pub struct CliConfig {
        #[arg(long, allow_negative_numbers = true)]
        pub account_id: Option<String>,

        #[arg(
            long = "ticket",
            value_delimiter = ',',
            help = "Tickets as CATEGORY=COUNT, e.g. ADULT=2,CHILD=1"
        )]
        pub tickets: Vec<String>,

        #[arg(long, help = "Price the purchase without paying or reserving seats")]
        pub dry_run: bool,

        #[arg(short, long, help = "Path to a TOML order file")]
        pub config: Option<String>,

        #[arg(long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Log as JSON lines")]
        pub json_logs: bool,
    }

    impl CliConfig {
        /// Combines the order file, if any, with the command line. Command
        /// line values win; `--dry-run` cannot be switched off by the file.
        pub fn resolve(&self) -> Result<(PurchaseRequest, bool)> {
            let file = match &self.config {
                Some(path) => {
                    tracing::info!("📁 Loading order from: {}", path);
                    let config = TomlConfig::from_file(path)?;
                    config.validate()?;
                    Some(config)
                }
                None => None,
            };

            let from_file = file
                .as_ref()
                .map(TomlConfig::to_purchase_request)
                .transpose()?;
            let dry_run = self.dry_run || file.as_ref().is_some_and(TomlConfig::dry_run);

            let account_id = match &self.account_id {
                Some(raw) => Some(parse_account_number(raw)?),
                None => from_file.as_ref().map(|r| r.account_id),
            };
            let account_id = *validate_required_field("account_id", &account_id)?;

            let tickets = if self.tickets.is_empty() {
                from_file.map(|r| r.tickets).unwrap_or_default()
            } else {
                self.tickets
                    .iter()
                    .map(|t| t.parse::<TicketRequest>())
                    .collect::<Result<Vec<_>>>()?
            };

            Ok((PurchaseRequest::new(account_id, tickets), dry_run))
        }
    }

}

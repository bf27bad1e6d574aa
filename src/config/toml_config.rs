use crate::domain::model::{parse_account_number, PurchaseRequest, TicketRequest};
use crate::utils::error::{Result, TicketError};
use crate::utils::validation::{validate_non_empty_string, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

/// An order file:
///
/// ```toml
/// [service]
/// dry_run = true
///
/// [order]
/// account_id = 1
///
/// [[order.tickets]]
/// type = "ADULT"
/// count = 2
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub service: Option<ServiceConfig>,
    pub order: OrderConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub dry_run: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderConfig {
    /// Kept as a raw value so a non-integer id is reported as an invalid account.
    pub account_id: toml::Value,
    #[serde(default)]
    pub tickets: Vec<TicketLine>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketLine {
    pub r#type: String,
    pub count: i64,
}

impl OrderConfig {
    /// Integer ids are passed through, including non-positive ones, so the
    /// ticket service reports them; strings must hold an integer.
    pub fn account_id(&self) -> Result<i64> {
        match &self.account_id {
            toml::Value::Integer(raw) => Ok(*raw),
            toml::Value::String(raw) => parse_account_number(raw),
            other => Err(TicketError::invalid_account(other)),
        }
    }
}

impl TicketLine {
    pub fn to_ticket_request(&self) -> Result<TicketRequest> {
        TicketRequest::new(self.r#type.parse()?, self.count)
    }
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content)
            .map_err(|e| TicketError::config("toml_parsing", format!("TOML parsing error: {}", e)))
    }

    /// Replaces `${VAR}` with the environment value; unknown variables are left as written.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex")
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }

    pub fn dry_run(&self) -> bool {
        self.service
            .as_ref()
            .and_then(|s| s.dry_run)
            .unwrap_or(false)
    }

    /// Builds the purchase. The account's type and the ticket lines are
    /// checked here, the account's sign and purchase-wide rules by the
    /// ticket service.
    pub fn to_purchase_request(&self) -> Result<PurchaseRequest> {
        let account_id = self.order.account_id()?;
        let tickets = self
            .order
            .tickets
            .iter()
            .map(TicketLine::to_ticket_request)
            .collect::<Result<Vec<_>>>()?;

        Ok(PurchaseRequest::new(account_id, tickets))
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        for (i, line) in self.order.tickets.iter().enumerate() {
            validate_non_empty_string(&format!("order.tickets[{}].type", i), &line.r#type)?;
        }
        Ok(())
    }
}

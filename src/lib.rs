pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{payment_gateway::TicketPaymentGateway, seat_booking::SeatBookingService};
pub use config::toml_config::TomlConfig;
pub use crate::core::ticket_service::{TicketService, MAX_TICKETS_PER_PURCHASE};
pub use domain::model::{
    AccountId, PurchaseOutcome, PurchaseRequest, TicketCategory, TicketRequest,
};
pub use domain::ports::{PaymentService, ReservationService};
pub use utils::error::{Result, TicketError};

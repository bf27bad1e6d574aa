pub mod ticket_service;

pub use crate::domain::model::{
    AccountId, PurchaseOutcome, PurchaseRequest, TicketCategory, TicketRequest, TicketTally,
};
pub use crate::domain::ports::{PaymentService, ReservationService};
pub use crate::utils::error::Result;

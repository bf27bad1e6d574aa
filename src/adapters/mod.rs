// Adapters layer: stand-ins for the third-party payment gateway and seat booking system.

pub mod payment_gateway;
pub mod seat_booking;

use crate::utils::error::{Result, TicketError};

/// Both third-party systems take 32-bit integers on the wire.
fn to_wire_u32(field: &str, value: u64) -> Result<u32> {
    u32::try_from(value).map_err(|_| TicketError::TypeMismatch {
        field: field.to_string(),
        value: value.to_string(),
        expected: "u32".to_string(),
    })
}

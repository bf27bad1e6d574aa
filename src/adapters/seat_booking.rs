use crate::adapters::to_wire_u32;
use crate::domain::model::AccountId;
use crate::domain::ports::ReservationService;
use crate::utils::error::Result;

/// Seat booking client. Reservations are logged rather than sent anywhere.
#[derive(Debug, Clone, Default)]
pub struct SeatBookingService;

impl SeatBookingService {
    pub fn new() -> Self {
        Self
    }
}

impl ReservationService for SeatBookingService {
    fn reserve_seats(&self, account_id: AccountId, total_seats: u64) -> Result<()> {
        let account = to_wire_u32("account_id", account_id.get().unsigned_abs())?;
        let seats = to_wire_u32("total_seats", total_seats)?;

        tracing::info!(account, seats, "Seat booking reserved seats");
        Ok(())
    }
}

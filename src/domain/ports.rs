use crate::domain::model::AccountId;
use crate::utils::error::Result;
use std::sync::Arc;

/// Takes payment for a purchase. Implemented by the payment gateway.
pub trait PaymentService: Send + Sync {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<()>;
}

/// Reserves seats for a purchase. Implemented by the seat booking system.
pub trait ReservationService: Send + Sync {
    fn reserve_seats(&self, account_id: AccountId, total_seats: u64) -> Result<()>;
}

impl<T: PaymentService + ?Sized> PaymentService for Arc<T> {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<()> {
        (**self).make_payment(account_id, total_amount)
    }
}

impl<T: ReservationService + ?Sized> ReservationService for Arc<T> {
    fn reserve_seats(&self, account_id: AccountId, total_seats: u64) -> Result<()> {
        (**self).reserve_seats(account_id, total_seats)
    }
}

use crate::core::{
    AccountId, PaymentService, PurchaseOutcome, PurchaseRequest, ReservationService, Result,
    TicketRequest, TicketTally,
};
use crate::utils::error::TicketError;

/// Most tickets a single purchase may contain.
pub const MAX_TICKETS_PER_PURCHASE: u64 = 20;

/// Validates and prices ticket purchases, then hands payment and seat
/// reservation to the collaborators.
///
/// Holds no per-purchase state: totals are computed for each call and
/// returned, so one service can be shared across callers.
pub struct TicketService<P: PaymentService, R: ReservationService> {
    payment: P,
    reservation: R,
    dry_run: bool,
}

impl<P: PaymentService, R: ReservationService> TicketService<P, R> {
    pub fn new(payment: P, reservation: R) -> Self {
        Self::new_with_dry_run(payment, reservation, false)
    }

    /// In dry-run mode purchases are priced and returned, never dispatched.
    pub fn new_with_dry_run(payment: P, reservation: R, dry_run: bool) -> Self {
        Self {
            payment,
            reservation,
            dry_run,
        }
    }

    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }

    /// Validates and prices a purchase without touching the collaborators.
    pub fn quote(&self, account_id: i64, requests: &[TicketRequest]) -> Result<PurchaseOutcome> {
        let account_id = AccountId::new(account_id)?;
        validate_tickets(requests)?;

        let mut total_amount = 0;
        let mut total_seats = 0;
        for request in requests {
            tracing::debug!(
                "🎟️ {} x{}: amount {}, seats {}",
                request.category(),
                request.count(),
                request.amount(),
                request.seats()
            );
            total_amount += request.amount();
            total_seats += request.seats();
        }

        Ok(PurchaseOutcome {
            account_id,
            total_amount,
            total_seats,
        })
    }

    /// Purchases tickets for an account.
    ///
    /// Returns the priced outcome in dry-run mode. Otherwise takes payment,
    /// then reserves seats, and returns `None`. A reservation failure after
    /// a successful payment is returned as is; the payment is not reversed.
    pub fn purchase_tickets(
        &self,
        account_id: i64,
        requests: &[TicketRequest],
    ) -> Result<Option<PurchaseOutcome>> {
        let outcome = match self.quote(account_id, requests) {
            Ok(outcome) => outcome,
            Err(e) => {
                tracing::warn!("❌ Purchase rejected for account {}: {}", account_id, e);
                return Err(e);
            }
        };

        if self.dry_run {
            tracing::info!(
                "🔍 Dry run for account {}: amount {}, seats {}",
                outcome.account_id,
                outcome.total_amount,
                outcome.total_seats
            );
            return Ok(Some(outcome));
        }

        self.payment
            .make_payment(outcome.account_id, outcome.total_amount)?;
        tracing::info!(
            "💳 Payment of {} taken for account {}",
            outcome.total_amount,
            outcome.account_id
        );

        self.reservation
            .reserve_seats(outcome.account_id, outcome.total_seats)?;
        tracing::info!(
            "💺 {} seats reserved for account {}",
            outcome.total_seats,
            outcome.account_id
        );

        Ok(None)
    }

    pub fn purchase(&self, request: &PurchaseRequest) -> Result<Option<PurchaseOutcome>> {
        self.purchase_tickets(request.account_id, &request.tickets)
    }
}

/// Checks the purchase-wide rules against the complete tally.
fn validate_tickets(requests: &[TicketRequest]) -> Result<()> {
    if requests.is_empty() {
        return Err(TicketError::NoTickets);
    }

    let tally = TicketTally::from_requests(requests);

    if (tally.child > 0 || tally.infant > 0) && tally.adult == 0 {
        return Err(TicketError::AdultRequired);
    }

    if tally.total() > MAX_TICKETS_PER_PURCHASE {
        return Err(TicketError::TicketLimitExceeded {
            requested: tally.total(),
            limit: MAX_TICKETS_PER_PURCHASE,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::TicketCategory;

    struct Unused;

    impl PaymentService for Unused {
        fn make_payment(&self, _: AccountId, _: u64) -> Result<()> {
            panic!("payment must not be called in dry run");
        }
    }

    impl ReservationService for Unused {
        fn reserve_seats(&self, _: AccountId, _: u64) -> Result<()> {
            panic!("reservation must not be called in dry run");
        }
    }

    fn dry_run_service() -> TicketService<Unused, Unused> {
        TicketService::new_with_dry_run(Unused, Unused, true)
    }

    fn ticket(category: TicketCategory, count: i64) -> TicketRequest {
        TicketRequest::new(category, count).unwrap()
    }

    #[test]
    fn test_validate_tickets_empty() {
        assert!(matches!(validate_tickets(&[]), Err(TicketError::NoTickets)));
    }

    #[test]
    fn test_adult_rule_checked_before_limit() {
        let requests = [ticket(TicketCategory::Child, 15), ticket(TicketCategory::Infant, 10)];
        assert!(matches!(
            validate_tickets(&requests),
            Err(TicketError::AdultRequired)
        ));
    }

    #[test]
    fn test_validate_tickets_accepts_twenty() {
        let requests = [ticket(TicketCategory::Adult, 1), ticket(TicketCategory::Infant, 19)];
        assert!(validate_tickets(&requests).is_ok());
    }

    #[test]
    fn test_limit_counts_tickets_across_lines() {
        let requests = [
            ticket(TicketCategory::Adult, 10),
            ticket(TicketCategory::Child, 10),
            ticket(TicketCategory::Infant, 1),
        ];
        assert!(matches!(
            validate_tickets(&requests),
            Err(TicketError::TicketLimitExceeded {
                requested: 21,
                limit: 20
            })
        ));
    }

    #[test]
    fn test_quote_worked_example() {
        let service = dry_run_service();
        let requests = [
            ticket(TicketCategory::Adult, 2),
            ticket(TicketCategory::Child, 1),
            ticket(TicketCategory::Infant, 1),
        ];

        let outcome = service.quote(1, &requests).unwrap();
        assert_eq!(outcome.account_id.get(), 1);
        assert_eq!(outcome.total_amount, 50);
        assert_eq!(outcome.total_seats, 3);
    }

    #[test]
    fn test_account_checked_before_tickets() {
        let service = dry_run_service();
        assert!(matches!(
            service.quote(0, &[]),
            Err(TicketError::InvalidAccount { ref account_id }) if account_id == "0"
        ));
    }

    #[test]
    fn test_dry_run_never_dispatches() {
        let service = dry_run_service();
        assert!(service.is_dry_run());

        let outcome = service
            .purchase_tickets(9, &[ticket(TicketCategory::Adult, 1)])
            .unwrap();
        assert_eq!(
            outcome,
            Some(PurchaseOutcome {
                account_id: AccountId::new(9).unwrap(),
                total_amount: 20,
                total_seats: 1,
            })
        );
    }
}

use crate::adapters::to_wire_u32;
use crate::domain::model::AccountId;
use crate::domain::ports::PaymentService;
use crate::utils::error::Result;

/// Payment gateway client. Charges are logged rather than sent anywhere.
#[derive(Debug, Clone, Default)]
pub struct TicketPaymentGateway;

impl TicketPaymentGateway {
    pub fn new() -> Self {
        Self
    }
}

impl PaymentService for TicketPaymentGateway {
    fn make_payment(&self, account_id: AccountId, total_amount: u64) -> Result<()> {
        let account = to_wire_u32("account_id", account_id.get().unsigned_abs())?;
        let amount = to_wire_u32("total_amount", total_amount)?;

        tracing::info!(account, amount, "Payment gateway charged account");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::TicketError;

    #[test]
    fn test_make_payment() {
        let gateway = TicketPaymentGateway::new();
        assert!(gateway.make_payment(AccountId::new(1).unwrap(), 50).is_ok());
        assert!(gateway.make_payment(AccountId::new(1).unwrap(), 0).is_ok());
    }

    #[test]
    fn test_amount_outside_wire_range() {
        let gateway = TicketPaymentGateway::new();
        let err = gateway
            .make_payment(AccountId::new(1).unwrap(), u64::from(u32::MAX) + 1)
            .unwrap_err();

        assert!(matches!(err, TicketError::TypeMismatch { ref field, .. } if field == "total_amount"));
    }

    #[test]
    fn test_account_outside_wire_range() {
        let gateway = TicketPaymentGateway::new();
        let err = gateway
            .make_payment(AccountId::new(i64::from(u32::MAX) + 1).unwrap(), 20)
            .unwrap_err();

        assert!(matches!(err, TicketError::TypeMismatch { ref field, .. } if field == "account_id"));
    }
}

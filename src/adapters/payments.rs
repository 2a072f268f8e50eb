use crate::core::{PaymentMethod, PaymentReceipt};
use crate::utils::error::{Result, SolidError};
use rust_decimal::Decimal;

macro_rules! payment_method {
    ($ty:ident, $label:literal) => {
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $ty;

        impl PaymentMethod for $ty {
            fn name(&self) -> &'static str {
                $label
            }

            fn process(&self, value: Decimal) -> PaymentReceipt {
                PaymentReceipt {
                    method: self.name(),
                    value,
                }
            }
        }
    };
}

payment_method!(CashPayment, "Cash");
payment_method!(CreditCardPayment, "Credit card");
payment_method!(DebitCardPayment, "Debit card");

/// Resolves a command-line name to a payment method.
pub fn payment_method_by_name(name: &str) -> Result<Box<dyn PaymentMethod>> {
    match name.trim().to_ascii_lowercase().as_str() {
        "cash" => Ok(Box::new(CashPayment)),
        "credit" | "credit-card" => Ok(Box::new(CreditCardPayment)),
        "debit" | "debit-card" => Ok(Box::new(DebitCardPayment)),
        _ => Err(SolidError::UnknownPaymentMethod {
            name: name.to_string(),
        }),
    }
}

//! Open/closed: `PaymentProcessor` delegates unconditionally through the
//! `PaymentMethod` capability. Supporting a new payment kind means writing a
//! new impl; the processor's source does not change.

use crate::core::PaymentMethod;

pub struct CreditCardPayment;

impl PaymentMethod for CreditCardPayment {
    fn process_payment(&self, amount: f64) {
        println!("Processing credit card payment: {}", amount);
    }
}

pub struct PaypalPayment;

impl PaymentMethod for PaypalPayment {
    fn process_payment(&self, amount: f64) {
        println!("Processing PayPal payment: {}", amount);
    }
}

pub struct PaymentProcessor;

impl PaymentProcessor {
    pub fn pay<M: PaymentMethod>(&self, method: &M, amount: f64) {
        method.process_payment(amount);
    }
}

/// Pays the same amount through each reference method.
pub fn demonstrate(amount: f64) {
    let processor = PaymentProcessor;

    tracing::debug!(amount, "paying by credit card");
    processor.pay(&CreditCardPayment, amount);

    tracing::debug!(amount, "paying by PayPal");
    processor.pay(&PaypalPayment, amount);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingMethod {
        amounts: Mutex<Vec<f64>>,
    }

    impl PaymentMethod for RecordingMethod {
        fn process_payment(&self, amount: f64) {
            self.amounts.lock().unwrap().push(amount);
        }
    }

    #[test]
    fn processor_delegates_amount_unchanged() {
        let method = RecordingMethod {
            amounts: Mutex::new(Vec::new()),
        };
        PaymentProcessor.pay(&method, 100.0);

        let amounts = method.amounts.lock().unwrap();
        assert_eq!(*amounts, vec![100.0]);
    }

    #[test]
    fn new_method_impls_need_no_processor_change() {
        // A third kind added after the fact goes through the same call site.
        struct GiftCardPayment;
        impl PaymentMethod for GiftCardPayment {
            fn process_payment(&self, _amount: f64) {}
        }

        let processor = PaymentProcessor;
        processor.pay(&CreditCardPayment, 10.0);
        processor.pay(&PaypalPayment, 10.0);
        processor.pay(&GiftCardPayment, 10.0);
    }
}

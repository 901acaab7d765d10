//! Dependency inversion: the notification manager depends on the
//! `CommunicationService` capability, not on a concrete transport. The caller
//! picks the transport at construction time.

use crate::core::CommunicationService;

pub struct EmailService;

impl CommunicationService for EmailService {
    fn send_notification(&self, recipient: &str, message: &str) {
        println!("Sending email to {}: {}", recipient, message);
    }
}

pub struct SmsService;

impl CommunicationService for SmsService {
    fn send_notification(&self, recipient: &str, message: &str) {
        println!("Sending SMS to {}: {}", recipient, message);
    }
}

pub struct NotificationManager<C: CommunicationService> {
    communication_service: C,
}

impl<C: CommunicationService> NotificationManager<C> {
    pub fn new(communication_service: C) -> Self {
        Self {
            communication_service,
        }
    }

    /// Forwards verbatim to the held transport.
    pub fn send_notification(&self, recipient: &str, message: &str) {
        self.communication_service
            .send_notification(recipient, message);
    }
}

/// Exercises the demo once per transport with the given parameters.
pub fn demonstrate(recipient: &str, message: &str) {
    tracing::debug!(recipient, "routing notification through email transport");
    let manager = NotificationManager::new(EmailService);
    manager.send_notification(recipient, message);

    tracing::debug!(recipient, "routing notification through SMS transport");
    let manager = NotificationManager::new(SmsService);
    manager.send_notification(recipient, message);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingTransport {
        calls: Mutex<Vec<(String, String)>>,
    }

    impl RecordingTransport {
        fn new() -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
            }
        }
    }

    impl CommunicationService for RecordingTransport {
        fn send_notification(&self, recipient: &str, message: &str) {
            self.calls
                .lock()
                .unwrap()
                .push((recipient.to_string(), message.to_string()));
        }
    }

    #[test]
    fn manager_forwards_exactly_once_with_arguments_unchanged() {
        let manager = NotificationManager::new(RecordingTransport::new());
        manager.send_notification("alice@example.com", "order shipped");

        let calls = manager.communication_service.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(
            calls[0],
            ("alice@example.com".to_string(), "order shipped".to_string())
        );
    }

    #[test]
    fn manager_works_with_any_transport_impl() {
        // Substituting the transport requires no change to the manager.
        let email = NotificationManager::new(EmailService);
        email.send_notification("bob", "hi");

        let sms = NotificationManager::new(SmsService);
        sms.send_notification("bob", "hi");
    }
}

//! Single responsibility: the order service keeps only order-processing
//! logic; persistence and communication live behind injected collaborators.
//! No method touches more than one concern.

use crate::core::{OrderCommunication, OrderPersistence};

pub struct OrderDatabase;

impl OrderPersistence for OrderDatabase {
    fn save_order(&self, order_id: u64) {
        println!("Saving order {} to database", order_id);
    }
}

pub struct OrderMailer;

impl OrderCommunication for OrderMailer {
    fn send_order_email(&self, order_id: u64) {
        println!("Sending order email for order: {}", order_id);
    }
}

pub struct OrderService<D: OrderPersistence, C: OrderCommunication> {
    order_db: D,
    order_comm: C,
}

impl<D: OrderPersistence, C: OrderCommunication> OrderService<D, C> {
    pub fn new(order_db: D, order_comm: C) -> Self {
        Self {
            order_db,
            order_comm,
        }
    }

    pub fn process_order(&self, order_id: u64) {
        println!("Processing order: {}", order_id);
    }

    pub fn save_order_to_database(&self, order_id: u64) {
        self.order_db.save_order(order_id);
    }

    pub fn send_order_email(&self, order_id: u64) {
        self.order_comm.send_order_email(order_id);
    }
}

/// Walks one order through processing, persistence and communication.
pub fn demonstrate(order_id: u64) {
    let service = OrderService::new(OrderDatabase, OrderMailer);
    service.process_order(order_id);
    service.save_order_to_database(order_id);
    service.send_order_email(order_id);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct RecordingStore {
        saved: Mutex<Vec<u64>>,
    }

    impl RecordingStore {
        fn new() -> Self {
            Self {
                saved: Mutex::new(Vec::new()),
            }
        }
    }

    impl OrderPersistence for RecordingStore {
        fn save_order(&self, order_id: u64) {
            self.saved.lock().unwrap().push(order_id);
        }
    }

    struct RecordingMailer {
        sent: Mutex<Vec<u64>>,
    }

    impl RecordingMailer {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
            }
        }
    }

    impl OrderCommunication for RecordingMailer {
        fn send_order_email(&self, order_id: u64) {
            self.sent.lock().unwrap().push(order_id);
        }
    }

    #[test]
    fn save_hits_only_the_persistence_collaborator() {
        let service = OrderService::new(RecordingStore::new(), RecordingMailer::new());
        service.save_order_to_database(7);

        assert_eq!(*service.order_db.saved.lock().unwrap(), vec![7]);
        assert!(service.order_comm.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn send_email_hits_only_the_communication_collaborator() {
        let service = OrderService::new(RecordingStore::new(), RecordingMailer::new());
        service.send_order_email(42);

        assert_eq!(*service.order_comm.sent.lock().unwrap(), vec![42]);
        assert!(service.order_db.saved.lock().unwrap().is_empty());
    }

    #[test]
    fn processing_touches_neither_collaborator() {
        let service = OrderService::new(RecordingStore::new(), RecordingMailer::new());
        service.process_order(1);

        assert!(service.order_db.saved.lock().unwrap().is_empty());
        assert!(service.order_comm.sent.lock().unwrap().is_empty());
    }
}

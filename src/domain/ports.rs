//! Capability traits for the five demos. Each trait is a stateless contract
//! implemented by one or more variants in `core`; orchestrators hold a trait
//! impl chosen by the caller and delegate, never branching on the concrete
//! type behind it.

/// Message transport capability (dependency inversion demo).
pub trait CommunicationService: Send + Sync {
    fn send_notification(&self, recipient: &str, message: &str);
}

// Segregated device capabilities (interface segregation demo). A device
// implements exactly the subset it supports, so calling an unsupported
// operation is a type error rather than a runtime failure.

pub trait Printable: Send + Sync {
    fn print_document(&self);
}

pub trait Scannable: Send + Sync {
    fn scan_document(&self);
}

pub trait Faxable: Send + Sync {
    fn fax_document(&self);
}

/// Area-computing capability (Liskov substitution demo). Variants are
/// siblings; there is deliberately no subtype relationship between them.
pub trait Shape {
    fn area(&self) -> f64;
}

/// Payment capability (open/closed demo). New payment kinds are new impls;
/// the orchestrator in `core::payment` never changes.
pub trait PaymentMethod: Send + Sync {
    fn process_payment(&self, amount: f64);
}

// Order collaborators (single responsibility demo): persistence and
// communication are separate capabilities injected into the order service.

pub trait OrderPersistence: Send + Sync {
    fn save_order(&self, order_id: u64);
}

pub trait OrderCommunication: Send + Sync {
    fn send_order_email(&self, order_id: u64);
}

pub mod notification;
pub mod order;
pub mod payment;
pub mod printer;
pub mod runner;
pub mod shape;

pub use crate::domain::ports::{
    CommunicationService, Faxable, OrderCommunication, OrderPersistence, PaymentMethod, Printable,
    Scannable, Shape,
};

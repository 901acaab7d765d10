//! Interface segregation: print, scan and fax are independent capabilities,
//! so a basic device simply does not implement the ones it lacks. There is no
//! "unsupported operation" error path anywhere; the compiler rejects the call
//! instead.

use crate::core::{Faxable, Printable, Scannable};

pub struct BasicPrinter;

impl Printable for BasicPrinter {
    fn print_document(&self) {
        println!("Printing document...");
    }
}

pub struct AdvancedPrinter;

impl Printable for AdvancedPrinter {
    fn print_document(&self) {
        println!("Printing document...");
    }
}

impl Scannable for AdvancedPrinter {
    fn scan_document(&self) {
        println!("Scanning document...");
    }
}

impl Faxable for AdvancedPrinter {
    fn fax_document(&self) {
        println!("Faxing document...");
    }
}

/// Drives each device through every capability it declares.
pub fn demonstrate() {
    tracing::debug!("running basic printer through its only capability");
    let basic = BasicPrinter;
    basic.print_document();

    tracing::debug!("running advanced printer through all three capabilities");
    let advanced = AdvancedPrinter;
    advanced.print_document();
    advanced.scan_document();
    advanced.fax_document();
}

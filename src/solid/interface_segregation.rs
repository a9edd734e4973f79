//! Pattern 4: Interface Segregation
//!
//! No code should be forced to depend on methods it does not use.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub name: String,
}

impl Document {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeviceError {
    #[error("{device} cannot {operation}")]
    Unsupported {
        device: String,
        operation: &'static str,
    },
}

// =============================================================================
// Before: one trait for every capability
// =============================================================================

pub trait Machine {
    fn print(&self, doc: &Document) -> Result<String, DeviceError>;
    fn fax(&self, doc: &Document) -> Result<String, DeviceError>;
    fn scan(&self, doc: &Document) -> Result<String, DeviceError>;
}

pub struct MultiFunctionPrinter;

impl Machine for MultiFunctionPrinter {
    fn print(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("MultiFunctionPrinter printed '{}'", doc.name))
    }

    fn fax(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("MultiFunctionPrinter faxed '{}'", doc.name))
    }

    fn scan(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("MultiFunctionPrinter scanned '{}'", doc.name))
    }
}

/// Can only print, yet `Machine` makes it expose fax and scan anyway.
pub struct OldFashionedPrinter;

impl OldFashionedPrinter {
    fn refuse(operation: &'static str) -> DeviceError {
        tracing::warn!(operation, "operation not supported by OldFashionedPrinter");
        DeviceError::Unsupported {
            device: "OldFashionedPrinter".to_string(),
            operation,
        }
    }
}

impl Machine for OldFashionedPrinter {
    fn print(&self, doc: &Document) -> Result<String, DeviceError> {
        Ok(format!("OldFashionedPrinter printed '{}'", doc.name))
    }

    fn fax(&self, _doc: &Document) -> Result<String, DeviceError> {
        Err(Self::refuse("fax"))
    }

    fn scan(&self, _doc: &Document) -> Result<String, DeviceError> {
        Err(Self::refuse("scan"))
    }
}

// =============================================================================
// After: one trait per capability
// =============================================================================

pub trait Printer {
    fn print(&self, doc: &Document) -> String;
}

pub trait Scanner {
    fn scan(&self, doc: &Document) -> String;
}

pub trait Faxer {
    fn fax(&self, doc: &Document) -> String;
}

pub struct OnlyPrinter;

impl Printer for OnlyPrinter {
    fn print(&self, doc: &Document) -> String {
        format!("OnlyPrinter printed '{}'", doc.name)
    }
}

pub struct Photocopier;

impl Printer for Photocopier {
    fn print(&self, doc: &Document) -> String {
        format!("Photocopier printed '{}'", doc.name)
    }
}

impl Scanner for Photocopier {
    fn scan(&self, doc: &Document) -> String {
        format!("Photocopier scanned '{}'", doc.name)
    }
}

/// Small traits compose back into a bigger one when a caller really needs
/// both capabilities.
pub trait MultiFunctionDevice: Printer + Scanner {
    fn copy(&self, doc: &Document) -> Vec<String> {
        vec![self.scan(doc), self.print(doc)]
    }
}

impl<T: Printer + Scanner> MultiFunctionDevice for T {}

/// Decorator that assembles a multi-function device out of separate parts.
pub struct PhotocopierMachine {
    printer: Box<dyn Printer>,
    scanner: Box<dyn Scanner>,
}

impl PhotocopierMachine {
    pub fn new(printer: impl Printer + 'static, scanner: impl Scanner + 'static) -> Self {
        Self {
            printer: Box::new(printer),
            scanner: Box::new(scanner),
        }
    }
}

impl Printer for PhotocopierMachine {
    fn print(&self, doc: &Document) -> String {
        tracing::debug!(document = %doc.name, "delegating print");
        self.printer.print(doc)
    }
}

impl Scanner for PhotocopierMachine {
    fn scan(&self, doc: &Document) -> String {
        tracing::debug!(document = %doc.name, "delegating scan");
        self.scanner.scan(doc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> Document {
        Document::new("report.pdf")
    }

    #[test]
    fn test_multi_function_printer_does_everything() {
        let machine = MultiFunctionPrinter;
        assert!(machine.print(&report()).is_ok());
        assert!(machine.fax(&report()).is_ok());
        assert!(machine.scan(&report()).is_ok());
    }

    #[test]
    fn test_old_fashioned_printer_refuses_fax_and_scan() {
        let machine = OldFashionedPrinter;
        assert_eq!(
            Machine::print(&machine, &report()).unwrap(),
            "OldFashionedPrinter printed 'report.pdf'"
        );

        let err = machine.fax(&report()).unwrap_err();
        assert_eq!(
            err,
            DeviceError::Unsupported {
                device: "OldFashionedPrinter".to_string(),
                operation: "fax",
            }
        );
        assert_eq!(err.to_string(), "OldFashionedPrinter cannot fax");
        assert!(machine.scan(&report()).is_err());
    }

    #[test]
    fn test_only_printer() {
        assert_eq!(OnlyPrinter.print(&report()), "OnlyPrinter printed 'report.pdf'");
    }

    #[test]
    fn test_photocopier_copy_scans_then_prints() {
        let jobs = Photocopier.copy(&report());
        assert_eq!(
            jobs,
            [
                "Photocopier scanned 'report.pdf'",
                "Photocopier printed 'report.pdf'",
            ]
        );
    }

    struct TestScanner;

    impl Scanner for TestScanner {
        fn scan(&self, doc: &Document) -> String {
            format!("TestScanner scanned '{}'", doc.name)
        }
    }

    #[test]
    fn test_photocopier_machine_delegates() {
        let machine = PhotocopierMachine::new(OnlyPrinter, TestScanner);

        assert_eq!(machine.print(&report()), "OnlyPrinter printed 'report.pdf'");
        assert_eq!(machine.scan(&report()), "TestScanner scanned 'report.pdf'");
        assert_eq!(machine.copy(&report()).len(), 2);
    }

    #[test]
    fn test_devices_behind_capability_trait_objects() {
        let printers: Vec<Box<dyn Printer>> = vec![
            Box::new(OnlyPrinter),
            Box::new(Photocopier),
            Box::new(PhotocopierMachine::new(Photocopier, Photocopier)),
        ];
        let jobs: Vec<String> = printers.iter().map(|p| p.print(&report())).collect();
        assert_eq!(jobs.len(), 3);
        assert!(jobs.iter().all(|job| job.ends_with("printed 'report.pdf'")));
    }
}

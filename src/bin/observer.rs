// Observer pattern: a subject broadcasts messages to its attached listeners.

use colored::Colorize;
use std::rc::Rc;
use thiserror::Error;

// =============================================================================
// The Observer trait
// =============================================================================

trait Observer {
    /// Receive an update from the subject.
    fn update(&self, message: &str);
}

// =============================================================================
// The Subject (the thing being watched)
// =============================================================================

#[derive(Error, Debug, PartialEq)]
enum SubjectError {
    #[error("observer is not attached to this subject")]
    NotAttached,
}

struct Subject {
    // Attachment order is notification order.
    observers: Vec<Rc<dyn Observer>>,
}

impl Subject {
    fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    /// Adds a subscriber. Attaching the same observer twice is a no-op.
    fn attach(&mut self, observer: Rc<dyn Observer>) {
        let already_attached = self.observers.iter().any(|o| Rc::ptr_eq(o, &observer));
        if !already_attached {
            self.observers.push(observer);
        }
    }

    /// Removes a subscriber that was previously attached.
    fn detach(&mut self, observer: &Rc<dyn Observer>) -> Result<(), SubjectError> {
        let position = self
            .observers
            .iter()
            .position(|o| Rc::ptr_eq(o, observer))
            .ok_or(SubjectError::NotAttached)?;
        self.observers.remove(position);
        Ok(())
    }

    /// Alerts all subscribers, synchronously, in attachment order.
    fn notify(&self, message: &str) {
        for observer in &self.observers {
            observer.update(message);
        }
    }
}

// =============================================================================
// Concrete observers (the listeners)
// =============================================================================

struct EmailAlert;

impl Observer for EmailAlert {
    fn update(&self, message: &str) {
        println!("Email Alert: Sending email with message -> {message}");
    }
}

struct SmsAlert;

impl Observer for SmsAlert {
    fn update(&self, message: &str) {
        println!("SMS Alert: Sending text message -> {message}");
    }
}

// =============================================================================
// Demo
// =============================================================================

fn main() {
    // The subject here stands in for a stock market tracker.
    let mut stock_market = Subject::new();

    let email: Rc<dyn Observer> = Rc::new(EmailAlert);
    let sms: Rc<dyn Observer> = Rc::new(SmsAlert);

    stock_market.attach(Rc::clone(&email));
    stock_market.attach(Rc::clone(&sms));

    println!("{}", "=== First update ===".bold());
    stock_market.notify("Apple stock rose by 5%");

    // One subscriber drops out.
    if let Err(err) = stock_market.detach(&sms) {
        println!("{}", err.to_string().red());
    }

    println!("\n{}", "=== Second update ===".bold());
    stock_market.notify("Tesla stock fell by 2%");
}

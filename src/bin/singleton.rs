// Singleton pattern: one lazily-created shared instance handed to every caller.

use colored::Colorize;
use lazy_static::lazy_static;
use std::sync::{Arc, Mutex};

// =============================================================================
// The shared instance
// =============================================================================

lazy_static! {
    // Created once, on first access. Every instance() call hands out a
    // clone of this same Arc.
    static ref INSTANCE: Arc<Mutex<AppConfig>> = Arc::new(Mutex::new(AppConfig { value: None }));
}

#[derive(Debug)]
struct AppConfig {
    value: Option<String>,
}

impl AppConfig {
    /// Returns the one shared instance.
    ///
    /// NOTE: the initialization logic below re-runs on every call, so a
    /// `Some` payload overwrites state seen through every earlier handle.
    /// Identity is shared; state follows the most recent caller.
    fn instance(value: Option<&str>) -> Arc<Mutex<AppConfig>> {
        let handle = Arc::clone(&INSTANCE);
        if let Some(value) = value {
            handle.lock().unwrap().value = Some(value.to_string());
        }
        println!("Singleton instance initialized.");
        handle
    }

    fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }
}

// =============================================================================
// Demo
// =============================================================================

fn main() {
    let s1 = AppConfig::instance(Some("First Instance"));
    println!("s1 value: {:?}", s1.lock().unwrap().value());

    let s2 = AppConfig::instance(Some("Second Instance"));
    println!("s2 value: {:?}", s2.lock().unwrap().value());

    let identical = Arc::ptr_eq(&s1, &s2);
    println!(
        "s1 is s2: {}",
        if identical {
            "true".green()
        } else {
            "false".red()
        }
    );

    // s2's construction overwrote the state behind s1 as well.
    println!("s1 value after s2 creation: {:?}", s1.lock().unwrap().value());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_share_identity() {
        let s1 = AppConfig::instance(None);
        let s2 = AppConfig::instance(None);
        assert!(Arc::ptr_eq(&s1, &s2));
    }

    #[test]
    fn test_state_follows_most_recent_construction() {
        let s1 = AppConfig::instance(Some("first"));
        assert_eq!(s1.lock().unwrap().value(), Some("first"));

        let s2 = AppConfig::instance(Some("second"));
        assert_eq!(s2.lock().unwrap().value(), Some("second"));
        // the earlier handle observes the overwrite
        assert_eq!(s1.lock().unwrap().value(), Some("second"));

        // a payload-less construction call leaves the value alone
        let s3 = AppConfig::instance(None);
        assert_eq!(s3.lock().unwrap().value(), Some("second"));
    }
}

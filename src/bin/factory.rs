// Factory Method pattern: a string key decides which vehicle gets built.

use colored::Colorize;
use thiserror::Error;

// ============================================================================
// Step 1: Product trait
// ============================================================================

trait Vehicle: std::fmt::Debug {
    fn ride(&self) -> String;
}

// ============================================================================
// Step 2: Concrete products
// ============================================================================

#[derive(Debug)]
struct Car;

impl Vehicle for Car {
    fn ride(&self) -> String {
        "Riding a car on land.".to_string()
    }
}

#[derive(Debug)]
struct Bike;

impl Vehicle for Bike {
    fn ride(&self) -> String {
        "Riding a bike on land.".to_string()
    }
}

#[derive(Debug)]
struct Cycle;

impl Vehicle for Cycle {
    fn ride(&self) -> String {
        "Riding a cycle on land.".to_string()
    }
}

// ============================================================================
// Step 3: The factory
// ============================================================================

#[derive(Error, Debug, PartialEq)]
enum VehicleError {
    #[error("Unknown vehicle type: {0}")]
    UnknownType(String),
}

fn vehicle_factory(kind: &str) -> Result<Box<dyn Vehicle>, VehicleError> {
    match kind {
        "car" => Ok(Box::new(Car)),
        "bike" => Ok(Box::new(Bike)),
        "cycle" => Ok(Box::new(Cycle)),
        other => Err(VehicleError::UnknownType(other.to_string())),
    }
}

// ============================================================================
// Step 4: Client code
// ============================================================================

fn main() {
    // The client talks to the factory, never to the concrete types.
    for kind in ["car", "bike", "cycle", "plane"] {
        match vehicle_factory(kind) {
            Ok(vehicle) => println!("Created {kind}: {}", vehicle.ride()),
            Err(err) => println!("{}", err.to_string().red()),
        }
    }
}

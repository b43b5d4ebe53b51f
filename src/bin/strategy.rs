use colored::Colorize;

// ============================================================================
// Step 1: The Strategy trait
// ============================================================================

trait PaymentStrategy {
    /// Runs the payment and returns the confirmation line.
    fn pay(&self, amount: f64) -> String;
}

// ============================================================================
// Step 2: Concrete strategies
// ============================================================================

struct CreditCardPayment {
    card_number: String,
}

impl CreditCardPayment {
    fn new(card_number: impl Into<String>) -> Self {
        Self {
            card_number: card_number.into(),
        }
    }

    fn last_four(&self) -> &str {
        let split = self.card_number.len().saturating_sub(4);
        &self.card_number[split..]
    }
}

impl PaymentStrategy for CreditCardPayment {
    fn pay(&self, amount: f64) -> String {
        // Only the last four digits ever appear in output.
        format!(
            "Paid {amount:.2} using Credit Card ending with {}",
            self.last_four()
        )
    }
}

struct PayPalPayment {
    email: String,
}

impl PayPalPayment {
    fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl PaymentStrategy for PayPalPayment {
    fn pay(&self, amount: f64) -> String {
        format!("Paid {amount:.2} using PayPal account {}", self.email)
    }
}

// ============================================================================
// Step 3: The Context
// ============================================================================

struct PaymentContext {
    strategy: Box<dyn PaymentStrategy>,
}

impl PaymentContext {
    fn new(strategy: Box<dyn PaymentStrategy>) -> Self {
        Self { strategy }
    }

    /// Replaces the active strategy at runtime. The previous one is dropped.
    fn set_strategy(&mut self, strategy: Box<dyn PaymentStrategy>) {
        self.strategy = strategy;
    }

    /// Delegates to the active strategy. The amount is forwarded as-is;
    /// nothing here inspects it.
    fn process_payment(&self, amount: f64) {
        println!("Processing payment...");
        println!("{}", self.strategy.pay(amount).green());
    }
}

// ============================================================================
// Step 4: Client code
// ============================================================================

fn main() {
    // Option 1: pay with a credit card.
    let credit_card = CreditCardPayment::new("1234567890123456");
    let mut context = PaymentContext::new(Box::new(credit_card));
    context.process_payment(100.00);

    println!("{}", "-".repeat(20));

    // Option 2: switch to PayPal at runtime.
    context.set_strategy(Box::new(PayPalPayment::new("user@example.com")));
    context.process_payment(50.50);
}

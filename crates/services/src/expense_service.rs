use tracing::{debug, info};

use finance_core::model::{Expense, ExpenseCategory};
use finance_core::{CategoryShare, CategoryTotal, Clock, ExpenseLedger};

use crate::error::ExpenseServiceError;

/// Presentation-facing expense tracker.
///
/// Owns the ledger and the time source; the UI only supplies raw input.
#[derive(Debug, Clone, Default)]
pub struct ExpenseService {
    clock: Clock,
    ledger: ExpenseLedger,
}

impl ExpenseService {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ledger: ExpenseLedger::new(),
        }
    }

    /// Record an expense from raw user input.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseServiceError::Expense` for a non-positive or non-finite
    /// amount, or a blank/unknown category.
    pub fn add(&mut self, amount: f64, category: &str) -> Result<Expense, ExpenseServiceError> {
        let expense = self.ledger.add(amount, category, self.clock.now())?;
        debug!(id = %expense.id(), amount, category = %expense.category(), "expense added");
        Ok(expense)
    }

    /// Record an expense in a known category.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseServiceError::Expense` for a non-positive or non-finite amount.
    pub fn add_in(
        &mut self,
        amount: f64,
        category: ExpenseCategory,
    ) -> Result<Expense, ExpenseServiceError> {
        let expense = self.ledger.add_in(amount, category, self.clock.now())?;
        debug!(id = %expense.id(), amount, %category, "expense added");
        Ok(expense)
    }

    pub fn clear(&mut self) {
        let removed = self.ledger.len();
        self.ledger.clear();
        info!(removed, "expenses cleared");
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        self.ledger.expenses()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.ledger.total()
    }

    #[must_use]
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        self.ledger.breakdown()
    }

    #[must_use]
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        self.ledger.category_totals()
    }
}

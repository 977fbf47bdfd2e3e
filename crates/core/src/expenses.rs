use std::collections::HashMap;

use chrono::{DateTime, Utc};

use crate::model::{Expense, ExpenseCategory, ExpenseError, ExpenseId, validate_amount};

/// Share of the grand total held by one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryShare {
    pub category: ExpenseCategory,
    /// In `[0, 1]`.
    pub share: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    pub category: ExpenseCategory,
    pub amount: f64,
}

/// Append-only list of expenses with a per-category breakdown.
#[derive(Debug, Clone, Default)]
pub struct ExpenseLedger {
    expenses: Vec<Expense>,
}

impl ExpenseLedger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and record an expense.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::InvalidAmount` unless `amount` is finite and
    /// positive and keeps the ledger total finite, and
    /// `ExpenseError::InvalidCategory` if `category` is blank or not a known
    /// category. The ledger is unchanged on error.
    pub fn add(
        &mut self,
        amount: f64,
        category: &str,
        recorded_at: DateTime<Utc>,
    ) -> Result<Expense, ExpenseError> {
        let amount = validate_amount(amount)?;
        let category: ExpenseCategory = category.parse()?;
        self.add_in(amount, category, recorded_at)
    }

    /// Record an expense in an already-typed category.
    ///
    /// # Errors
    ///
    /// Returns `ExpenseError::InvalidAmount` unless `amount` is finite and
    /// positive and keeps the ledger total finite.
    pub fn add_in(
        &mut self,
        amount: f64,
        category: ExpenseCategory,
        recorded_at: DateTime<Utc>,
    ) -> Result<Expense, ExpenseError> {
        let expense = Expense::new(ExpenseId::generate(), amount, category, recorded_at)?;
        // Shares are computed against the total, so it must stay finite.
        if !(self.total() + expense.amount()).is_finite() {
            return Err(ExpenseError::InvalidAmount(amount));
        }
        self.expenses.push(expense);
        Ok(expense)
    }

    pub fn clear(&mut self) {
        self.expenses.clear();
    }

    #[must_use]
    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(Expense::amount).sum()
    }

    /// Sum of amounts per category present, sorted by category name.
    #[must_use]
    pub fn category_totals(&self) -> Vec<CategoryTotal> {
        let mut sums: HashMap<ExpenseCategory, f64> = HashMap::new();
        for expense in &self.expenses {
            *sums.entry(expense.category()).or_default() += expense.amount();
        }

        let mut totals: Vec<CategoryTotal> = sums
            .into_iter()
            .map(|(category, amount)| CategoryTotal { category, amount })
            .collect();
        totals.sort_by(|a, b| a.category.as_str().cmp(b.category.as_str()));
        totals
    }

    /// Each present category's share of the grand total, sorted by category
    /// name. Empty when no expenses are recorded.
    #[must_use]
    pub fn breakdown(&self) -> Vec<CategoryShare> {
        let total = self.total();
        if self.expenses.is_empty() || total <= 0.0 {
            return Vec::new();
        }

        self.category_totals()
            .into_iter()
            .map(|CategoryTotal { category, amount }| CategoryShare {
                category,
                share: amount / total,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    const EPS: f64 = 1e-9;

    #[test]
    fn breakdown_of_empty_ledger_is_empty() {
        let ledger = ExpenseLedger::new();
        assert!(ledger.breakdown().is_empty());
        assert_eq!(ledger.total(), 0.0);
    }

    #[test]
    fn breakdown_groups_and_sorts_by_category() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(25.0, "Food", fixed_now()).unwrap();
        ledger.add(50.0, "Transportation", fixed_now()).unwrap();
        ledger.add(75.0, "Food", fixed_now()).unwrap();

        let breakdown = ledger.breakdown();
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, ExpenseCategory::Food);
        assert!((breakdown[0].share - 2.0 / 3.0).abs() < EPS);
        assert_eq!(breakdown[1].category, ExpenseCategory::Transportation);
        assert!((breakdown[1].share - 1.0 / 3.0).abs() < EPS);
    }

    #[test]
    fn shares_sum_to_one() {
        let mut ledger = ExpenseLedger::new();
        for (amount, category) in [
            (12.34, "Food"),
            (1200.0, "Housing"),
            (0.99, "Entertainment"),
            (87.5, "Utilities"),
            (3.0, "Food"),
        ] {
            ledger.add(amount, category, fixed_now()).unwrap();
        }
        let sum: f64 = ledger.breakdown().iter().map(|s| s.share).sum();
        assert!((sum - 1.0).abs() < EPS);
    }

    #[test]
    fn amount_overflowing_total_is_rejected() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(f64::MAX, "Food", fixed_now()).unwrap();
        assert_eq!(
            ledger.add(f64::MAX, "Housing", fixed_now()),
            Err(ExpenseError::InvalidAmount(f64::MAX))
        );
        assert_eq!(ledger.len(), 1);
        assert!(ledger.total().is_finite());

        ledger.add(1.0, "Housing", fixed_now()).unwrap();
        let sum: f64 = ledger.breakdown().iter().map(|s| s.share).sum();
        assert!((sum - 1.0).abs() < EPS);
    }

    #[test]
    fn invalid_input_leaves_ledger_unchanged() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(10.0, "Food", fixed_now()).unwrap();

        assert!(matches!(
            ledger.add(-5.0, "Food", fixed_now()),
            Err(ExpenseError::InvalidAmount(_))
        ));
        assert!(matches!(
            ledger.add(5.0, "", fixed_now()),
            Err(ExpenseError::InvalidCategory(_))
        ));
        assert!(matches!(
            ledger.add(f64::NAN, "Food", fixed_now()),
            Err(ExpenseError::InvalidAmount(_))
        ));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn clear_empties_the_ledger() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(10.0, "Food", fixed_now()).unwrap();
        ledger.add_in(10.0, ExpenseCategory::Housing, fixed_now()).unwrap();
        ledger.clear();
        assert!(ledger.is_empty());
        assert!(ledger.breakdown().is_empty());
    }

    #[test]
    fn every_expense_gets_its_own_id() {
        let mut ledger = ExpenseLedger::new();
        let a = ledger.add(1.0, "Food", fixed_now()).unwrap().id();
        let b = ledger.add(1.0, "Food", fixed_now()).unwrap().id();
        assert_ne!(a, b);
    }
}

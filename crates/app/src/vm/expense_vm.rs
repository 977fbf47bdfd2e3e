use finance_core::CategoryShare;
use finance_core::model::Expense;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BreakdownRowVm {
    pub label: String,
    pub bar: String,
    pub percent: String,
}

/// Bar chart rows, one per category; a full bar is `width` cells.
#[must_use]
pub fn map_breakdown(shares: &[CategoryShare], width: usize) -> Vec<BreakdownRowVm> {
    shares
        .iter()
        .map(|share| {
            #[allow(
                clippy::cast_possible_truncation,
                clippy::cast_sign_loss,
                clippy::cast_precision_loss
            )]
            let cells = (share.share * width as f64).round() as usize;
            BreakdownRowVm {
                label: share.category.as_str().to_string(),
                bar: "█".repeat(cells.min(width)),
                percent: format!("{:.1}%", share.share * 100.0),
            }
        })
        .collect()
}

#[must_use]
pub fn map_expense_rows(expenses: &[Expense]) -> Vec<String> {
    expenses
        .iter()
        .map(|expense| format!("{}: ${:.2}", expense.category(), expense.amount()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use finance_core::ExpenseLedger;
    use finance_core::time::fixed_now;

    #[test]
    fn bars_scale_with_share() {
        let mut ledger = ExpenseLedger::new();
        ledger.add(25.0, "Food", fixed_now()).unwrap();
        ledger.add(75.0, "Housing", fixed_now()).unwrap();

        let rows = map_breakdown(&ledger.breakdown(), 20);
        assert_eq!(rows[0].label, "Food");
        assert_eq!(rows[0].bar.chars().count(), 5);
        assert_eq!(rows[0].percent, "25.0%");
        assert_eq!(rows[1].bar.chars().count(), 15);

        assert_eq!(
            map_expense_rows(ledger.expenses()),
            vec!["Food: $25.00".to_string(), "Housing: $75.00".to_string()]
        );
    }

    #[test]
    fn empty_breakdown_has_no_rows() {
        assert!(map_breakdown(&[], 30).is_empty());
    }
}

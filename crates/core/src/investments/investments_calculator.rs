use std::collections::HashMap;

use log::debug;
use rust_decimal::Decimal;

use super::{Dividend, Investment, InvestmentReturn, InvestmentSummary};
use crate::period::Period;
use crate::utils::percent_of;

/// Summarizes dividend income per investment for the given period.
///
/// Dividends whose investment is not in `investments` are ignored. Rows keep
/// the order of `investments`.
pub fn calculate_investment_summary(
    investments: &[Investment],
    dividends: &[Dividend],
    period: &Period,
) -> InvestmentSummary {
    let mut dividends_by_investment: HashMap<&str, Decimal> = HashMap::new();
    for dividend in dividends
        .iter()
        .filter(|d| period.contains_date(d.year, d.month))
    {
        *dividends_by_investment
            .entry(dividend.investment_id.as_str())
            .or_insert(Decimal::ZERO) += dividend.amount;
    }

    let rows: Vec<InvestmentReturn> = investments
        .iter()
        .map(|investment| {
            let received = dividends_by_investment
                .get(investment.id.as_str())
                .copied()
                .unwrap_or(Decimal::ZERO);
            InvestmentReturn {
                investment_id: investment.id.clone(),
                name: investment.name.clone(),
                principal_amount: investment.principal_amount,
                dividends: received,
                dividend_yield: percent_of(received, investment.principal_amount),
            }
        })
        .collect();

    let total_principal: Decimal = rows.iter().map(|r| r.principal_amount).sum();
    let total_dividends: Decimal = rows.iter().map(|r| r.dividends).sum();

    debug!(
        "Investment summary: {} investments, principal {}, dividends {}",
        rows.len(),
        total_principal,
        total_dividends
    );

    InvestmentSummary {
        total_principal,
        total_dividends,
        overall_yield: percent_of(total_dividends, total_principal),
        investments: rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn investment(id: &str, principal: Decimal) -> Investment {
        Investment {
            id: id.to_string(),
            name: format!("Fund {}", id),
            principal_amount: principal,
        }
    }

    fn dividend(id: &str, month: u32, amount: Decimal) -> Dividend {
        Dividend {
            investment_id: id.to_string(),
            year: 2024,
            month,
            amount,
        }
    }

    #[test]
    fn test_summary_filters_period_and_computes_yield() {
        let investments = vec![investment("i1", dec!(100000)), investment("i2", dec!(50000))];
        let dividends = vec![
            dividend("i1", 1, dec!(1000)),
            dividend("i1", 5, dec!(9999)),
            dividend("i2", 2, dec!(500)),
            dividend("ghost", 2, dec!(700)),
        ];
        let period = Period::new(2024, 1, 3).unwrap();

        let summary = calculate_investment_summary(&investments, &dividends, &period);

        assert_eq!(summary.total_principal, dec!(150000));
        assert_eq!(summary.total_dividends, dec!(1500));
        assert_eq!(summary.overall_yield, dec!(1500) / dec!(150000) * dec!(100));
        assert_eq!(summary.investments[0].dividends, dec!(1000));
        assert_eq!(summary.investments[0].dividend_yield, dec!(1));
        assert_eq!(summary.investments[1].dividend_yield, dec!(1));
    }

    #[test]
    fn test_zero_principal_yields_zero() {
        let investments = vec![investment("i1", Decimal::ZERO)];
        let dividends = vec![dividend("i1", 1, dec!(250))];
        let summary =
            calculate_investment_summary(&investments, &dividends, &Period::full_year(2024));

        assert_eq!(summary.investments[0].dividend_yield, Decimal::ZERO);
        assert_eq!(summary.overall_yield, Decimal::ZERO);
    }

    #[test]
    fn test_empty_inputs() {
        let summary = calculate_investment_summary(&[], &[], &Period::full_year(2024));
        assert_eq!(summary, InvestmentSummary::default());
    }
}

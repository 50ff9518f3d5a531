//! Folding of small category slices for pie and bar charts.

use rust_decimal::Decimal;

use super::{CategoryBreakdown, ChartSlice};
use crate::constants::OTHER_SLICE_LABEL;
use crate::settings::EngineSettings;
use crate::utils::percent_of;

/// Turns a breakdown into chart slices.
///
/// Non-positive amounts are dropped. Slices holding at least
/// `threshold_percent` of the total are kept in descending order, up to
/// `max_slices` of them; everything else is summed into one trailing "Other"
/// slice. The result is deterministic for a given breakdown order.
pub fn bucket_small_slices(
    breakdown: &[CategoryBreakdown],
    threshold_percent: Decimal,
    max_slices: usize,
) -> Vec<ChartSlice> {
    let mut positive: Vec<&CategoryBreakdown> = breakdown
        .iter()
        .filter(|b| b.amount > Decimal::ZERO)
        .collect();
    positive.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.category_id.cmp(&b.category_id))
    });

    let total: Decimal = positive.iter().map(|b| b.amount).sum();
    let mut slices = Vec::new();
    let mut other_amount = Decimal::ZERO;

    for item in positive {
        let percentage = percent_of(item.amount, total);
        if percentage >= threshold_percent && slices.len() < max_slices {
            slices.push(ChartSlice {
                category_id: Some(item.category_id.clone()),
                name: item.name.clone(),
                amount: item.amount,
                percentage,
            });
        } else {
            other_amount += item.amount;
        }
    }

    if other_amount > Decimal::ZERO {
        slices.push(ChartSlice {
            category_id: None,
            name: OTHER_SLICE_LABEL.to_string(),
            amount: other_amount,
            percentage: percent_of(other_amount, total),
        });
    }

    slices
}

/// [`bucket_small_slices`] with the threshold and cap from settings.
pub fn chart_slices(breakdown: &[CategoryBreakdown], settings: &EngineSettings) -> Vec<ChartSlice> {
    bucket_small_slices(
        breakdown,
        settings.small_slice_threshold_percent,
        settings.max_visible_slices,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn item(id: &str, amount: Decimal) -> CategoryBreakdown {
        CategoryBreakdown {
            category_id: id.to_string(),
            name: id.to_uppercase(),
            amount,
        }
    }

    #[test]
    fn test_small_slices_fold_into_other() {
        let breakdown = vec![item("a", dec!(900)), item("b", dec!(85)), item("c", dec!(15))];
        let slices = bucket_small_slices(&breakdown, dec!(2), 8);

        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].name, "A");
        assert_eq!(slices[0].percentage, dec!(90));
        assert_eq!(slices[1].name, "B");
        // 15 of 1000 is 1.5%, below the 2% threshold
        assert!(slices[2].is_other());
        assert_eq!(slices[2].name, "Other");
        assert_eq!(slices[2].amount, dec!(15));
        assert_eq!(slices[2].percentage, dec!(1.5));
    }

    #[test]
    fn test_cap_on_visible_slices() {
        let breakdown: Vec<CategoryBreakdown> = (0..10)
            .map(|i| item(&format!("c{}", i), Decimal::from(100 - i)))
            .collect();
        let slices = bucket_small_slices(&breakdown, dec!(2), 8);

        assert_eq!(slices.len(), 9);
        assert!(slices[..8].iter().all(|s| !s.is_other()));
        assert_eq!(slices[8].amount, dec!(91) + dec!(92));
        let amounts: Vec<Decimal> = slices[..8].iter().map(|s| s.amount).collect();
        let mut sorted = amounts.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(amounts, sorted);
    }

    #[test]
    fn test_no_other_when_everything_is_significant() {
        let breakdown = vec![item("a", dec!(50)), item("b", dec!(50))];
        let slices = bucket_small_slices(&breakdown, dec!(2), 8);
        assert_eq!(slices.len(), 2);
        assert!(slices.iter().all(|s| !s.is_other()));
        // Equal amounts are ordered by name.
        assert_eq!(slices[0].name, "A");
    }

    #[test]
    fn test_non_positive_and_empty() {
        assert!(bucket_small_slices(&[], dec!(2), 8).is_empty());
        let breakdown = vec![item("a", Decimal::ZERO), item("b", dec!(-5))];
        assert!(bucket_small_slices(&breakdown, dec!(2), 8).is_empty());
    }

    #[test]
    fn test_uses_settings() {
        let breakdown = vec![item("a", dec!(97)), item("b", dec!(3))];
        let settings = EngineSettings {
            small_slice_threshold_percent: dec!(5),
            ..Default::default()
        };
        let slices = chart_slices(&breakdown, &settings);
        assert_eq!(slices.len(), 2);
        assert!(slices[1].is_other());
    }
}

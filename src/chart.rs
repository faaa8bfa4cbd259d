//! Weekly chart data: the wire payload, its validated in-app form and the
//! scale helpers the bar chart view builds its geometry from.
//!
//! The backend answers `GET /dados_grafico` with three parallel arrays
//! (`labels`, `entradas`, `saidas`), oldest day first and today last.
//! Conversion into [`WeeklyChart`] checks the parallel-array shape once, so
//! the view never has to index defensively.

use serde::Deserialize;
use thiserror::Error;

use crate::money::{format_brl, from_reais};

/// Payload of `GET /dados_grafico`, exactly as the backend serialises it.
/// Amounts are in reais with decimal fractions.
#[derive(Debug, Clone, Deserialize)]
pub struct WeeklyChartResponse {
    pub labels: Vec<String>,
    pub entradas: Vec<f64>,
    pub saidas: Vec<f64>,
}

/// The payload parsed as JSON but with arrays that do not line up.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("chart arrays have mismatched lengths: {labels} labels, {entradas} incomes, {saidas} expenses")]
    MismatchedLengths {
        labels: usize,
        entradas: usize,
        saidas: usize,
    },
}

/// One day of the week, amounts in centavos.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayTotals {
    /// Axis label, `dd/mm`.
    pub label: String,
    pub income: i64,
    pub expense: i64,
}

/// Validated week of totals, oldest first, today last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeeklyChart {
    days: Vec<DayTotals>,
}

impl TryFrom<WeeklyChartResponse> for WeeklyChart {
    type Error = ShapeError;

    fn try_from(response: WeeklyChartResponse) -> Result<Self, Self::Error> {
        if response.labels.len() != response.entradas.len()
            || response.labels.len() != response.saidas.len()
        {
            return Err(ShapeError::MismatchedLengths {
                labels: response.labels.len(),
                entradas: response.entradas.len(),
                saidas: response.saidas.len(),
            });
        }

        let days = response
            .labels
            .into_iter()
            .zip(response.entradas)
            .zip(response.saidas)
            .map(|((label, income), expense)| DayTotals {
                label,
                income: from_reais(income),
                expense: from_reais(expense),
            })
            .collect();

        Ok(Self { days })
    }
}

impl WeeklyChart {
    pub fn days(&self) -> &[DayTotals] {
        &self.days
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The most recent day. The backend orders days oldest first.
    pub fn today(&self) -> Option<&DayTotals> {
        self.days.last()
    }

    /// Largest single bar of the week, in centavos.
    #[must_use]
    pub fn max_amount(&self) -> i64 {
        self.days
            .iter()
            .map(|d| d.income.max(d.expense))
            .max()
            .unwrap_or(0)
    }

    #[must_use]
    pub fn total_income(&self) -> i64 {
        self.days.iter().map(|d| d.income).sum()
    }

    #[must_use]
    pub fn total_expense(&self) -> i64 {
        self.days.iter().map(|d| d.expense).sum()
    }
}

/// Axis ceiling used when the week has no movement: R$ 100,00.
const EMPTY_AXIS_MAX: i64 = 10_000;

/// Smallest axis ceiling, R$ 1,00. Keeps every tick an integer number of
/// centavos (all 1/2/5 ceilings at or above it divide evenly by 4).
const MIN_AXIS_MAX: i64 = 100;

/// Picks the axis ceiling for a week whose largest bar is `max_amount`
/// centavos: the smallest 1, 2 or 5 times a power of ten at or above it.
/// A week with no movement still gets a readable zero-based scale.
#[must_use]
pub fn nice_axis_max(max_amount: i64) -> i64 {
    if max_amount <= 0 {
        return EMPTY_AXIS_MAX;
    }

    let target = max_amount.max(MIN_AXIS_MAX);
    let mut magnitude = MIN_AXIS_MAX;
    loop {
        for factor in [1, 2, 5] {
            let candidate = magnitude.saturating_mul(factor);
            if candidate >= target {
                return candidate;
            }
        }
        magnitude = magnitude.saturating_mul(10);
    }
}

/// Gridline values from zero up to `axis_max`, evenly spaced.
#[must_use]
pub fn axis_ticks(axis_max: i64) -> [i64; 5] {
    let quarter = axis_max / 4;
    [0, quarter, quarter * 2, quarter * 3, axis_max]
}

/// Compact axis label: whole-real ticks drop the `,00` so the gutter stays
/// narrow.
#[must_use]
pub fn tick_label(centavos: i64) -> String {
    let full = format_brl(centavos);
    if centavos % 100 == 0 {
        full.trim_end_matches(",00").to_string()
    } else {
        full
    }
}

/// Height in pixels of a bar worth `amount` on a plot `plot_height` tall.
/// Out-of-range amounts clamp to the plot instead of overflowing it.
#[must_use]
pub fn bar_height(amount: i64, axis_max: i64, plot_height: f64) -> f64 {
    if axis_max <= 0 {
        return 0.0;
    }
    let ratio = (amount as f64 / axis_max as f64).clamp(0.0, 1.0);
    ratio * plot_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(labels: &[&str], entradas: &[f64], saidas: &[f64]) -> WeeklyChartResponse {
        WeeklyChartResponse {
            labels: labels.iter().map(|s| s.to_string()).collect(),
            entradas: entradas.to_vec(),
            saidas: saidas.to_vec(),
        }
    }

    #[test]
    fn decodes_the_backend_payload() {
        let json = r#"{
            "labels": ["17/08", "18/08", "19/08"],
            "entradas": [120.0, 0.0, 85.5],
            "saidas": [30.0, 25.9, 0.0]
        }"#;

        let parsed: WeeklyChartResponse =
            serde_json::from_str(json).expect("payload should deserialise");
        let chart = WeeklyChart::try_from(parsed).expect("shape should validate");

        assert_eq!(chart.days().len(), 3);
        assert_eq!(chart.days()[0].income, 12_000);
        assert_eq!(chart.days()[1].expense, 2_590);
        assert_eq!(chart.today().map(|d| d.label.as_str()), Some("19/08"));
    }

    #[test]
    fn rejects_a_record_array_payload() {
        // Some endpoints ship one object per day instead of parallel arrays.
        let json = r#"[{"dia": "17/08", "entrada": 120.0, "saida": 30.0}]"#;
        assert!(serde_json::from_str::<WeeklyChartResponse>(json).is_err());
    }

    #[test]
    fn rejects_mismatched_array_lengths() {
        let err = WeeklyChart::try_from(response(&["17/08", "18/08"], &[1.0], &[2.0, 3.0]))
            .expect_err("shape check should fail");
        assert_eq!(
            err,
            ShapeError::MismatchedLengths {
                labels: 2,
                entradas: 1,
                saidas: 2,
            }
        );
    }

    #[test]
    fn an_empty_week_is_valid_but_empty() {
        let chart = WeeklyChart::try_from(response(&[], &[], &[])).expect("empty arrays line up");
        assert!(chart.is_empty());
        assert_eq!(chart.today(), None);
        assert_eq!(chart.max_amount(), 0);
    }

    #[test]
    fn aggregates_totals_and_peak() {
        let chart = WeeklyChart::try_from(response(
            &["17/08", "18/08", "19/08"],
            &[120.0, 0.0, 85.5],
            &[30.0, 250.9, 0.0],
        ))
        .expect("shape should validate");

        assert_eq!(chart.total_income(), 20_550);
        assert_eq!(chart.total_expense(), 28_090);
        assert_eq!(chart.max_amount(), 25_090);
        // The backend sends days oldest first, so "today" is the last entry.
        assert_eq!(chart.today().map(|day| day.label.as_str()), Some("19/08"));
    }

    #[test]
    fn axis_ceiling_follows_the_one_two_five_ladder() {
        assert_eq!(nice_axis_max(0), 10_000);
        assert_eq!(nice_axis_max(-5), 10_000);
        assert_eq!(nice_axis_max(1), 100);
        assert_eq!(nice_axis_max(100), 100);
        assert_eq!(nice_axis_max(101), 200);
        assert_eq!(nice_axis_max(12_345), 20_000);
        assert_eq!(nice_axis_max(50_000), 50_000);
        assert_eq!(nice_axis_max(50_001), 100_000);
        assert_eq!(nice_axis_max(1_000_000), 1_000_000);
    }

    #[test]
    fn ticks_are_even_and_span_the_axis() {
        assert_eq!(axis_ticks(10_000), [0, 2_500, 5_000, 7_500, 10_000]);
        assert_eq!(axis_ticks(50_000), [0, 12_500, 25_000, 37_500, 50_000]);
    }

    #[test]
    fn tick_labels_drop_whole_real_centavos() {
        assert_eq!(tick_label(0), "R$ 0");
        assert_eq!(tick_label(2_500), "R$ 25");
        assert_eq!(tick_label(1_000_000), "R$ 10.000");
        assert_eq!(tick_label(125), "R$ 1,25");
    }

    #[test]
    fn bar_heights_scale_and_clamp() {
        assert_eq!(bar_height(5_000, 10_000, 220.0), 110.0);
        assert_eq!(bar_height(0, 10_000, 220.0), 0.0);
        assert_eq!(bar_height(20_000, 10_000, 220.0), 220.0);
        assert_eq!(bar_height(-50, 10_000, 220.0), 0.0);
        assert_eq!(bar_height(5_000, 0, 220.0), 0.0);
    }
}

//! Summary statistics over a list of records and their table rendering.

use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ColumnConstraint, Table, Width};
use rust_decimal::{Decimal, RoundingStrategy};

/// Minimum width of the value column.
pub const MIN_VALUE_WIDTH: u16 = 6;

/// Count, min, max and mean of a non-empty list of values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub min: Decimal,
    pub max: Decimal,
    pub average: Decimal,
}

impl Summary {
    /// Returns `None` for an empty list.
    pub fn from_values(values: &[Decimal]) -> Option<Self> {
        let first = *values.first()?;
        let (mut min, mut max) = (first, first);
        for &v in values {
            min = min.min(v);
            max = max.max(v);
        }

        Some(Self {
            count: values.len(),
            min,
            max,
            average: mean(values),
        })
    }

    /// Average rounded half away from zero to one fractional digit.
    pub fn average_display(&self) -> String {
        format_one_decimal(self.average)
    }

    /// Bordered table with one row per statistic.
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL)
            .add_row(vec!["# of Entries".to_string(), self.count.to_string()])
            .add_row(vec!["Min. value".to_string(), self.min.to_string()])
            .add_row(vec!["Max. value".to_string(), self.max.to_string()])
            .add_row(vec!["Avg. value".to_string(), self.average_display()]);

        if let Some(column) = table.column_mut(1) {
            column
                .set_constraint(ColumnConstraint::LowerBoundary(Width::Fixed(MIN_VALUE_WIDTH)))
                .set_cell_alignment(CellAlignment::Right);
        }
        table
    }
}

/// Arithmetic mean of a non-empty list.
///
/// Sums exactly when the total fits in a `Decimal`; otherwise falls back to a
/// running mean whose steps stay within range.
fn mean(values: &[Decimal]) -> Decimal {
    let n = Decimal::from(values.len());
    let exact = values
        .iter()
        .try_fold(Decimal::ZERO, |sum, &v| sum.checked_add(v));
    if let Some(sum) = exact {
        return sum / n;
    }

    let mut avg = Decimal::ZERO;
    for (i, &v) in values.iter().enumerate() {
        let k = Decimal::from(i + 1);
        avg += v / k - avg / k;
    }
    avg
}

/// Round half away from zero at one fractional digit and render with exactly
/// one digit after the point (`0.65` -> `0.7`, `-1.25` -> `-1.3`, `5` -> `5.0`).
pub fn format_one_decimal(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    format!("{rounded:.1}")
}

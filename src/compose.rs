//! Series composition: merging tagged tables into a renderable chart
//! description.
//!
//! The compositor resolves the union of plottable column names across all
//! tables, coerces selected columns to numeric series (a cell that does not
//! parse becomes a gap, never an error), computes the shared Y extent and
//! assembles a [`ChartSpec`] for the rendering layer.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::ingest::{TaggedTable, SOURCE_COLUMN, TIME_COLUMN};

/// Which Y scale a trace is drawn against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YAxis {
    Primary,
    Secondary,
}

/// One drawable series.
///
/// `xs` and `ys` have equal length; `None` marks a cell that failed numeric
/// coercion and renders as a gap in the line.
#[derive(Debug, Clone, PartialEq)]
pub struct TraceSpec {
    /// Display label, `"{source} - {column}"`, suffixed `" (y2)"` for
    /// secondary-axis traces.
    pub label: String,
    pub xs: Vec<Option<f64>>,
    pub ys: Vec<Option<f64>>,
    pub axis: YAxis,
}

/// Layout parameters handed to the renderer together with the traces.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub y2_title: String,
    /// `[min, max]` over every successfully parsed value of every selected
    /// column, primary and secondary combined, across all tables. Declared
    /// for the primary axis only; the secondary axis is left to renderer
    /// auto-scaling. `None` when no cell parsed.
    pub y_range: Option<[f64; 2]>,
}

/// A fully specified figure: traces plus computed layout. Built fresh on
/// every plot request; nothing is cached or mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub traces: Vec<TraceSpec>,
    pub layout: ChartLayout,
}

impl ChartSpec {
    pub fn has_secondary(&self) -> bool {
        self.traces.iter().any(|t| t.axis == YAxis::Secondary)
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ComposeError {
    /// The render was triggered with zero primary columns chosen.
    #[error("no data columns selected for the primary axis")]
    NoSeriesSelected,
}

/// Union of all tables' column names, sorted for display, minus the time and
/// source-tag columns.
pub fn column_universe(tables: &[TaggedTable]) -> Vec<String> {
    let mut set = BTreeSet::new();
    for table in tables {
        for col in &table.columns {
            if col != TIME_COLUMN && col != SOURCE_COLUMN {
                set.insert(col.clone());
            }
        }
    }
    set.into_iter().collect()
}

/// Lenient numeric coercion: `None` for anything that is not a number.
fn coerce(cell: &str) -> Option<f64> {
    let s = cell.trim();
    if s.is_empty() {
        return None;
    }
    s.parse::<f64>().ok()
}

fn coerced_column(table: &TaggedTable, name: &str) -> Option<Vec<Option<f64>>> {
    table.column(name).map(|cells| cells.map(coerce).collect())
}

/// Build the chart specification for the given tables and column selections.
///
/// Tables are visited in upload order; within a table, primary columns first
/// and then secondary columns, each in the order the caller supplied them. A
/// selected column absent from a given table is skipped for that table only,
/// which is how heterogeneous per-file schemas are tolerated. An empty table
/// list is not an error; the result simply carries no traces.
pub fn compose(
    tables: &[TaggedTable],
    primary: &[String],
    secondary: &[String],
) -> Result<ChartSpec, ComposeError> {
    if primary.is_empty() {
        return Err(ComposeError::NoSeriesSelected);
    }

    // Shared Y extent over every parsed value of every selected column,
    // primary and secondary combined (see DESIGN.md on the shared range).
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for table in tables {
        for col in primary.iter().chain(secondary.iter()) {
            if let Some(cells) = table.column(col) {
                for v in cells.filter_map(coerce) {
                    y_min = y_min.min(v);
                    y_max = y_max.max(v);
                }
            }
        }
    }
    let y_range = (y_min <= y_max).then_some([y_min, y_max]);

    let mut traces = Vec::new();
    for table in tables {
        let xs: Vec<Option<f64>> = coerced_column(table, TIME_COLUMN).unwrap_or_default();

        for col in primary {
            if let Some(ys) = coerced_column(table, col) {
                traces.push(TraceSpec {
                    label: format!("{} - {}", table.source, col),
                    xs: xs.clone(),
                    ys,
                    axis: YAxis::Primary,
                });
            }
        }
        for col in secondary {
            if let Some(ys) = coerced_column(table, col) {
                traces.push(TraceSpec {
                    label: format!("{} - {} (y2)", table.source, col),
                    xs: xs.clone(),
                    ys,
                    axis: YAxis::Secondary,
                });
            }
        }
    }

    Ok(ChartSpec {
        traces,
        layout: ChartLayout {
            title: "Combined Plot".to_string(),
            x_title: TIME_COLUMN.to_string(),
            y_title: "Data Value".to_string(),
            y2_title: "Second Data Value".to_string(),
            y_range,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coerce_parses_plain_and_scientific_numbers() {
        assert_eq!(coerce("1.5"), Some(1.5));
        assert_eq!(coerce("-3"), Some(-3.0));
        assert_eq!(coerce(" 2e3 "), Some(2000.0));
    }

    #[test]
    fn coerce_yields_gap_for_non_numeric() {
        assert_eq!(coerce("N/A"), None);
        assert_eq!(coerce(""), None);
        assert_eq!(coerce("12,5"), None);
    }
}

//! Report building and rendering.
//!
//! Turns a ranked backlog into the serialisable [`PortfolioReport`] and
//! renders it as tables, JSON or CSV. Single-curve output lives here too.

use initiative_core::curves::Curve;
use initiative_core::types::InitiativeParams;
use initiative_portfolio::{Backlog, BacklogEntry, InitiativeId, PortfolioSelection};
use serde::Serialize;

use crate::chart;
use crate::error::Result;

/// One backlog row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BacklogRow {
    /// Display identifier
    pub id: InitiativeId,
    /// Initiative parameters
    #[serde(flatten)]
    pub params: InitiativeParams,
    /// Cumulative net benefit at the horizon month
    pub horizon_bna: f64,
}

/// One selected initiative.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SelectionRow {
    /// 1-based ranking
    pub ranking: usize,
    /// The backlog row
    #[serde(flatten)]
    pub row: BacklogRow,
}

/// Full prioritisation report.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct PortfolioReport {
    pub horizon_month: usize,
    pub horizon_months: usize,
    pub backlog_size: usize,
    pub selected_count: usize,
    pub backlog: Vec<BacklogRow>,
    pub selection: Vec<SelectionRow>,
    pub aggregate_curve: Vec<f64>,
    pub aggregate_value_at_horizon: f64,
}

impl PortfolioReport {
    /// Builds the report for `selection` over `backlog`.
    pub fn build(backlog: &Backlog, selection: &PortfolioSelection<'_, BacklogEntry>) -> Self {
        let horizon_month = selection.horizon_month();
        let row = |entry: &BacklogEntry, horizon_bna: f64| BacklogRow {
            id: entry.id(),
            params: *entry.params(),
            horizon_bna,
        };

        // the ranking covers every backlog entry
        let mut horizon_values = vec![0.0; backlog.len()];
        for r in selection.ranked() {
            if let Some(slot) = horizon_values.get_mut(r.backlog_index) {
                *slot = r.horizon_value;
            }
        }

        Self {
            horizon_month,
            horizon_months: backlog.horizon_months(),
            backlog_size: backlog.len(),
            selected_count: selection.count(),
            backlog: backlog
                .iter()
                .zip(&horizon_values)
                .map(|(entry, &value)| row(entry, value))
                .collect(),
            selection: selection
                .selected()
                .iter()
                .map(|r| SelectionRow {
                    ranking: r.rank,
                    row: row(r.entry, r.horizon_value),
                })
                .collect(),
            aggregate_curve: selection.aggregate_curve().to_vec(),
            aggregate_value_at_horizon: selection.aggregate_value_at_horizon(),
        }
    }

    /// Closing summary line.
    pub fn summary_line(&self) -> String {
        format!(
            "Portfolio net accumulated benefit at month {}: {:.2}",
            self.horizon_month, self.aggregate_value_at_horizon
        )
    }

    /// Backlog table, selection table, optional chart and summary line.
    pub fn render_text(&self, with_chart: bool) -> String {
        let bna_header = format!("BNA @ month {}", self.horizon_month);
        let mut out = String::new();

        out.push_str(&format!("Backlog ({} initiatives)\n", self.backlog_size));
        let headers = ["ID", "Type", "CF", "CV", "Revenue speed", "Impact", bna_header.as_str()];
        let rows: Vec<Vec<String>> = self.backlog.iter().map(backlog_cells).collect();
        out.push_str(&render_table(&headers, &rows));

        out.push_str(&format!(
            "\nTop {} initiatives at month {}\n",
            self.selected_count, self.horizon_month
        ));
        let headers = [
            "Ranking",
            "ID",
            "Type",
            "CF",
            "CV",
            "Revenue speed",
            "Impact",
            bna_header.as_str(),
        ];
        let rows: Vec<Vec<String>> = self
            .selection
            .iter()
            .map(|s| {
                let mut cells = vec![s.ranking.to_string()];
                cells.extend(backlog_cells(&s.row));
                cells
            })
            .collect();
        out.push_str(&render_table(&headers, &rows));

        if with_chart {
            out.push('\n');
            out.push_str(&chart::render(
                &self.aggregate_curve,
                self.horizon_month,
                chart::CHART_WIDTH,
                chart::CHART_HEIGHT,
            ));
        }

        out.push('\n');
        out.push_str(&self.summary_line());
        out.push('\n');
        out
    }

    /// Report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Aggregate curve as `month,aggregate_bna` CSV.
    pub fn to_csv(&self) -> Result<Vec<u8>> {
        #[derive(Serialize)]
        struct Row {
            month: usize,
            aggregate_bna: f64,
        }

        let mut writer = csv::Writer::from_writer(Vec::new());
        for (month, &aggregate_bna) in self.aggregate_curve.iter().enumerate() {
            writer.serialize(Row {
                month,
                aggregate_bna,
            })?;
        }
        writer.into_inner().map_err(|e| e.into_error().into())
    }
}

fn backlog_cells(row: &BacklogRow) -> Vec<String> {
    let p = &row.params;
    vec![
        row.id.to_string(),
        p.initiative_type().to_string(),
        p.fixed_cost_tier().to_string(),
        p.variable_cost_profile().to_string(),
        p.revenue_speed().to_string(),
        p.impact_tier().to_string(),
        format!("{:.2}", row.horizon_bna),
    ]
}

/// Monthly series of one curve.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CurveRow {
    pub month: usize,
    pub fixed_costs: f64,
    pub variable_costs: f64,
    pub revenue: f64,
    pub net_benefit_monthly: f64,
    pub net_benefit_cumulative: f64,
}

/// Flattens `curve` into one row per month.
pub fn curve_rows(curve: &Curve) -> Vec<CurveRow> {
    (0..curve.horizon_months())
        .map(|m| CurveRow {
            month: m,
            fixed_costs: curve.fixed_costs()[m],
            variable_costs: curve.variable_costs()[m],
            revenue: curve.revenue()[m],
            net_benefit_monthly: curve.net_benefit_monthly()[m],
            net_benefit_cumulative: curve.net_benefit_cumulative()[m],
        })
        .collect()
}

/// Monthly table of one curve.
pub fn render_curve_table(rows: &[CurveRow]) -> String {
    let headers = ["Month", "Fixed", "Variable", "Revenue", "Net", "Cumulative"];
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|r| {
            vec![
                r.month.to_string(),
                format!("{:.2}", r.fixed_costs),
                format!("{:.2}", r.variable_costs),
                format!("{:.2}", r.revenue),
                format!("{:.2}", r.net_benefit_monthly),
                format!("{:.2}", r.net_benefit_cumulative),
            ]
        })
        .collect();
    render_table(&headers, &cells)
}

/// Curve rows as CSV.
pub fn curve_csv(rows: &[CurveRow]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }
    writer.into_inner().map_err(|e| e.into_error().into())
}

/// Box-drawn table with columns sized to their widest cell.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let rule = |left: &str, mid: &str, right: &str| {
        let segments: Vec<String> = widths.iter().map(|w| "─".repeat(w + 2)).collect();
        format!("{}{}{}\n", left, segments.join(mid), right)
    };
    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!(" {:<w$} ", c, w = *w))
            .collect();
        format!("│{}│\n", padded.join("│"))
    };

    let mut out = rule("┌", "┬", "┐");
    out.push_str(&line(headers.to_vec()));
    out.push_str(&rule("├", "┼", "┤"));
    for row in rows {
        out.push_str(&line(row.iter().map(String::as_str).collect()));
    }
    out.push_str(&rule("└", "┴", "┘"));
    out
}

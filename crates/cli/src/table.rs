//! The run comparison table: pure presentation over a series of reports.

use stocksim_core::ProductId;
use stocksim_runner::{RunPlan, RunReport};

/// The two cells the comparison table tracks, one from each product group of
/// the standard workload.
pub const TRACKED_PRODUCTS: [ProductId; 2] = [ProductId(0), ProductId(5)];

/// Render the per-run results plus a summary row.
///
/// Carries no invariant of its own; it only formats what the coordinator
/// reported.
pub fn render(plan: &RunPlan, reports: &[RunReport]) -> String {
    let mut out = String::new();

    let headers: Vec<String> = TRACKED_PRODUCTS
        .iter()
        .map(|&p| match plan.expected_stock(p) {
            Some(expected) => format!("product {p} (expected {expected})"),
            None => format!("product {p}"),
        })
        .collect();

    push_row(
        &mut out,
        &format!("{:>5}", "run"),
        &headers[0],
        &headers[1],
        "matches",
        &format!("{:>10}", "elapsed"),
    );
    push_row(
        &mut out,
        &"-".repeat(5),
        &"-".repeat(headers[0].len()),
        &"-".repeat(headers[1].len()),
        &"-".repeat(7),
        &"-".repeat(10),
    );

    for report in reports {
        let cells: Vec<String> = TRACKED_PRODUCTS
            .iter()
            .enumerate()
            .map(|(column, &p)| {
                let value = report.stock_of(p).unwrap_or_default();
                format!("{value:>width$}", width = headers[column].len())
            })
            .collect();

        push_row(
            &mut out,
            &format!("{:>5}", report.run_index),
            &cells[0],
            &cells[1],
            if report.matches_expected { "yes" } else { "no " },
            &format!("{:>9}s", format_secs(report.elapsed_ms)),
        );
    }

    out.push('\n');
    out.push_str(&summary(reports));
    out
}

fn push_row(out: &mut String, run: &str, a: &str, b: &str, matches: &str, elapsed: &str) {
    out.push_str(&format!("| {run} | {a} | {b} | {matches} | {elapsed} |\n"));
}

fn summary(reports: &[RunReport]) -> String {
    let matched = reports.iter().filter(|r| r.matches_expected).count();
    let mut lines = vec![format!("matched runs: {matched}/{}", reports.len())];

    for &product in &TRACKED_PRODUCTS {
        let values: Vec<i64> = reports
            .iter()
            .filter_map(|r| r.stock_of(product))
            .collect();
        if let (Some(min), Some(max)) = (values.iter().min(), values.iter().max()) {
            lines.push(format!("product {product} range: {min}-{max}"));
        }
    }

    lines.join("\n") + "\n"
}

fn format_secs(elapsed_ms: u64) -> String {
    format!("{}.{:03}", elapsed_ms / 1000, elapsed_ms % 1000)
}

#[cfg(test)]
mod tests {
    use super::*;
    use stocksim_inventory::LockedInventory;
    use stocksim_runner::RunCoordinator;

    fn locked_reports(runs: u32) -> (RunPlan, Vec<RunReport>) {
        let plan = RunPlan::standard();
        let coordinator = RunCoordinator::new(plan.clone());
        let reports = (1..=runs)
            .map(|i| {
                let engine = LockedInventory::new(plan.product_count, plan.initial_stock);
                coordinator.execute(&engine, i)
            })
            .collect();
        (plan, reports)
    }

    #[test]
    fn table_lists_every_run_and_the_summary() {
        let (plan, reports) = locked_reports(3);
        let table = render(&plan, &reports);

        assert!(table.contains("product 0 (expected 200)"));
        assert!(table.contains("product 5 (expected 150)"));
        assert!(table.contains("matched runs: 3/3"));
        assert!(table.contains("product 0 range: 200-200"));
        // Header + separator + 3 runs + blank + 3 summary lines.
        assert_eq!(table.lines().count(), 9);
    }

    #[test]
    fn elapsed_formats_as_seconds_with_millis() {
        assert_eq!(format_secs(0), "0.000");
        assert_eq!(format_secs(65), "0.065");
        assert_eq!(format_secs(1234), "1.234");
    }
}

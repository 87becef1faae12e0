//! Report module: the fixed-format comparison block printed to stdout.

use crate::driver::{BenchResult, Comparison};
use std::fmt::Write;

pub const REPORT_TITLE: &str = "RUST PERFORMANCE TEST";
const RULE_WIDTH: usize = 60;

/// Render the report exactly as it is printed.
pub fn render_report(cmp: &Comparison) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut out = String::new();

    // Writing into a String cannot fail.
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "{REPORT_TITLE}");
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out, "Record Type: {}", cmp.record_type);
    let _ = writeln!(out, "Iterations: {}", cmp.iterations);

    write_strategy(&mut out, &cmp.array);
    write_strategy(&mut out, &cmp.object);

    let speedup = cmp.speedup();
    let _ = writeln!(
        out,
        "\nSpeedup: {speedup:.2}x (object is {speedup:.2}x faster)"
    );
    let _ = writeln!(out, "{rule}");
    let _ = writeln!(out);

    out
}

fn write_strategy(out: &mut String, result: &BenchResult) {
    let _ = writeln!(out, "\n{} Approach:", result.strategy);
    let _ = writeln!(out, "  TTL Retrieved: {}", result.retrieved());
    let _ = writeln!(out, "  Total Time: {:.2} ms", result.total_ms());
    let _ = writeln!(out, "  Avg Time: {:.4} µs/op", result.avg_us_per_op());
}

/// Print the formatted report to stdout.
pub fn print_report(cmp: &Comparison) {
    print!("{}", render_report(cmp));
}

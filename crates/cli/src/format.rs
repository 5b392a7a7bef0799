//! Output formatting for benchmark results.

use stockbench::{BenchResult, Comparison};

/// How results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Aligned key/value lines.
    Human,
    /// Pretty-printed JSON.
    Json,
}

pub fn print_result(result: &BenchResult, mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(result).expect("result serializes")
            );
        }
        OutputMode::Human => {
            println!("strategy             {}", result.strategy);
            println!("duration_ms          {}", result.duration_ms);
            println!("initial_stock        {}", result.initial_stock);
            println!("final_stock          {}", result.final_stock);
            println!("expected_final_stock {}", result.expected_final_stock);
            println!("is_consistent        {}", result.is_consistent);
            println!("success_count        {}", result.success_count);
            println!("fail_count           {}", result.fail_count);
        }
    }
}

pub fn print_comparison(comparison: &Comparison, mode: OutputMode) {
    match mode {
        OutputMode::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(comparison).expect("comparison serializes")
            );
        }
        OutputMode::Human => {
            println!("== optimistic ==");
            print_result(&comparison.optimistic, mode);
            println!();
            println!("== pessimistic ==");
            print_result(&comparison.pessimistic, mode);
            println!();
            println!("expected_final_stock {}", comparison.expected_final_stock);
            println!("winner               {}", comparison.winner);
        }
    }
}

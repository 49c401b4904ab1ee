//! Output formatting for solver results

use crate::executor::SolverResult;
use chrono::TimeDelta;
use itertools::Itertools;

/// Output formatter for solver results
pub struct OutputFormatter {
    quiet: bool,
    start_time: std::time::Instant,
}

impl OutputFormatter {
    /// Create a new output formatter
    pub fn new(quiet: bool) -> Self {
        Self {
            quiet,
            start_time: std::time::Instant::now(),
        }
    }

    /// Format and print a single result
    pub fn print_result(&self, result: &SolverResult) {
        if self.quiet {
            self.print_quiet(result);
        } else {
            self.print_full(result);
        }
    }

    /// Print in quiet mode (just the answer)
    fn print_quiet(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", answer),
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    /// Print full output with timing info
    fn print_full(&self, result: &SolverResult) {
        match &result.answer {
            Ok(answer) => println!("{}", format_line(result, answer)),
            Err(e) => eprintln!("{}: Error - {}", prefix(result), e),
        }
    }

    /// Print a summary after all results
    pub fn print_summary(&self, results: &[SolverResult]) {
        if self.quiet {
            return;
        }

        let total = results.len();
        let successes = results.iter().filter(|r| r.answer.is_ok()).count();
        let failures = total - successes;
        let days = results.iter().map(|r| (r.year, r.day)).unique().count();

        let total_parse_time: TimeDelta = results.iter().filter_map(|r| r.parse_duration).sum();
        let total_solve_time: TimeDelta = results
            .iter()
            .filter(|r| r.answer.is_ok())
            .map(|r| r.solve_duration)
            .sum();

        println!();
        println!("--- Summary ---");
        println!(
            "Parts: {} solved, {} failed across {} day(s)",
            successes, failures, days
        );
        println!("Total parse time: {}", format_duration(total_parse_time));
        println!("Total solve time: {}", format_duration(total_solve_time));
        println!(
            "Elapsed wall-clock time: {}",
            format_std_duration(self.start_time.elapsed())
        );
    }
}

fn prefix(result: &SolverResult) -> String {
    format!("{}/{:02} Part {}", result.year, result.day, result.part)
}

/// `YYYY/DD Part P: answer (parse: t, solve: t)`, with multi-line answers
/// moved below the timing
fn format_line(result: &SolverResult, answer: &str) -> String {
    let parse_timing = result
        .parse_duration
        .map(|d| format!("parse: {}, ", format_duration(d)))
        .unwrap_or_default();
    let timing = format!(
        "({}solve: {})",
        parse_timing,
        format_duration(result.solve_duration)
    );

    if answer.contains('\n') {
        format!("{}: {}\n{}", prefix(result), timing, answer)
    } else {
        format!("{}: {} {}", prefix(result), answer, timing)
    }
}

/// Format a TimeDelta for display
fn format_duration(d: TimeDelta) -> String {
    let Some(micros) = d.num_microseconds() else {
        return "N/A".to_string();
    };

    if micros < 0 {
        return format!("-{}", format_duration(-d));
    }

    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", micros as f64 / 1_000_000.0)
    }
}

/// Format a std::time::Duration for display (used for wall-clock time)
fn format_std_duration(d: std::time::Duration) -> String {
    let micros = d.as_micros();
    if micros < 1000 {
        format!("{}µs", micros)
    } else if micros < 1_000_000 {
        format!("{:.2}ms", micros as f64 / 1000.0)
    } else {
        format!("{:.2}s", d.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(part: u8, answer: &str, parse_micros: Option<i64>) -> SolverResult {
        SolverResult {
            year: 2022,
            day: 10,
            part,
            answer: Ok(answer.to_string()),
            parse_duration: parse_micros.map(TimeDelta::microseconds),
            solve_duration: TimeDelta::microseconds(1500),
        }
    }

    #[test]
    fn test_format_duration_units() {
        assert_eq!(format_duration(TimeDelta::microseconds(42)), "42µs");
        assert_eq!(format_duration(TimeDelta::microseconds(1500)), "1.50ms");
        assert_eq!(format_duration(TimeDelta::milliseconds(2500)), "2.50s");
        assert_eq!(format_duration(TimeDelta::microseconds(-7)), "-7µs");
    }

    #[test]
    fn test_single_line_answer() {
        let r = result(1, "13140", Some(12));
        assert_eq!(
            format_line(&r, "13140"),
            "2022/10 Part 1: 13140 (parse: 12µs, solve: 1.50ms)"
        );
    }

    #[test]
    fn test_multi_line_answer_on_own_lines() {
        let screen = "##..\n..##";
        let r = result(2, screen, None);
        assert_eq!(
            format_line(&r, screen),
            "2022/10 Part 2: (solve: 1.50ms)\n##..\n..##"
        );
    }
}

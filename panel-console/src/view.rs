//! Terminal rendering and input helpers
//!
//! The employee table is rendered as fixed-width text from the typed
//! records, replacing the HTML string concatenation of the original panel.

use std::io::{self, Write};

use shared::models::EmployeeRecord;

const NAME_WIDTH: usize = 18;
const ROLE_WIDTH: usize = 14;
const FEEDBACK_WIDTH: usize = 28;

/// Render the employee table
pub fn render_table(employees: &[EmployeeRecord]) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "{:>5}  {:<18}  {:<14}  {:>6}  {:>6}  {:<28}  {}\n",
        "ID", "NAME", "ROLE", "PROD%", "RATING", "FEEDBACK", "UPDATED"
    ));
    out.push_str(&format!("{}\n", "-".repeat(100)));

    for e in employees {
        let rating = e
            .rating
            .map(|r| format!("{:.1}", r))
            .unwrap_or_else(|| "-".to_string());
        out.push_str(&format!(
            "{:>5}  {:<18}  {:<14}  {:>6.1}  {:>6}  {:<28}  {}\n",
            e.id,
            truncate(&e.name, NAME_WIDTH),
            truncate(&e.role, ROLE_WIDTH),
            e.productivity,
            rating,
            truncate(e.feedback.as_deref().unwrap_or("-"), FEEDBACK_WIDTH),
            e.last_updated.as_deref().unwrap_or("-"),
        ));
    }

    if employees.is_empty() {
        out.push_str("(no employees)\n");
    }
    out
}

/// Truncate a value to a column width, marking the cut with an ellipsis
fn truncate(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        value.to_string()
    } else {
        let cut: String = value.chars().take(width.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

pub fn get_input(prompt: &str) -> String {
    print!("{}", prompt);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    input.trim().to_string()
}

pub fn get_input_with_default(prompt: &str, default: &str) -> String {
    print!("{} [{}]: ", prompt, default);
    let _ = io::stdout().flush();
    let mut input = String::new();
    let _ = io::stdin().read_line(&mut input);
    let input = input.trim();
    if input.is_empty() {
        default.to_string()
    } else {
        input.to_string()
    }
}

/// Ask for explicit confirmation (y/yes)
pub fn confirm(prompt: &str) -> bool {
    let answer = get_input(&format!("{} (y/N): ", prompt));
    matches!(answer.to_lowercase().as_str(), "y" | "yes")
}

/// Prompt for an optional float, re-asking until the input parses
pub fn prompt_optional_f64(prompt: &str) -> Option<f64> {
    loop {
        let input = get_input(prompt);
        if input.is_empty() {
            return None;
        }
        match input.parse::<f64>() {
            Ok(v) => return Some(v),
            Err(_) => println!("❌ Not a number, try again (or leave blank)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> EmployeeRecord {
        EmployeeRecord {
            id: 1,
            name: "Bob".to_string(),
            role: "Eng".to_string(),
            productivity: 80.0,
            rating: Some(4.0),
            feedback: Some("good".to_string()),
            last_updated: Some("2025-01-01 10:00:00".to_string()),
        }
    }

    #[test]
    fn table_contains_record_fields() {
        let table = render_table(&[sample_record()]);
        assert!(table.contains("Bob"));
        assert!(table.contains("Eng"));
        assert!(table.contains("80.0"));
        assert!(table.contains("4.0"));
        assert!(table.contains("2025-01-01 10:00:00"));
    }

    #[test]
    fn table_renders_placeholder_for_missing_optionals() {
        let record = EmployeeRecord {
            rating: None,
            feedback: None,
            last_updated: None,
            ..sample_record()
        };
        let table = render_table(&[record]);
        // One dash per missing column
        assert!(table.matches(" -").count() >= 2);
    }

    #[test]
    fn empty_table_is_marked() {
        let table = render_table(&[]);
        assert!(table.contains("(no employees)"));
    }

    #[test]
    fn long_values_are_truncated() {
        let record = EmployeeRecord {
            name: "An Unreasonably Long Employee Name".to_string(),
            ..sample_record()
        };
        let table = render_table(&[record]);
        assert!(table.contains('…'));
        assert!(!table.contains("An Unreasonably Long Employee Name"));
    }
}

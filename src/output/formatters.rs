//! Formatting utilities for terminal output

use crate::core::{Number, Target};
use crate::game::Step;

/// Format numbers in ascending order, or "none" when empty
#[must_use]
pub fn format_numbers(numbers: &[Number]) -> String {
    if numbers.is_empty() {
        return "none".to_string();
    }
    let mut sorted = numbers.to_vec();
    sorted.sort_unstable();
    let parts: Vec<String> = sorted.iter().map(ToString::to_string).collect();
    parts.join(" ")
}

/// Format an applied move as `7 × 3 = 21`
#[must_use]
pub fn format_step(step: &Step) -> String {
    format!("{} = {}", step.mv, step.result)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// How close `value` is to the target, as a percentage (100 = exact)
///
/// Falls linearly to 0 once the gap reaches the target itself.
#[must_use]
pub fn closeness_percent(value: Number, target: Target) -> u16 {
    let target = target.value();
    let gap = value.abs_diff(target).min(target);
    (100 - gap * 100 / target) as u16
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Move, Operator};

    #[test]
    fn format_numbers_sorted() {
        assert_eq!(format_numbers(&[25, 3, 8, 3]), "3 3 8 25");
        assert_eq!(format_numbers(&[]), "none");
    }

    #[test]
    fn format_step_shows_equation() {
        let step = Step {
            mv: Move::new(7, 3, Operator::Mul),
            result: 21,
        };
        assert_eq!(format_step(&step), "7 × 3 = 21");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn closeness() {
        let target = Target::new(400).unwrap();
        assert_eq!(closeness_percent(400, target), 100);
        assert_eq!(closeness_percent(300, target), 75);
        assert_eq!(closeness_percent(500, target), 75);
        assert_eq!(closeness_percent(0, target), 0);
        assert_eq!(closeness_percent(5_000, target), 0);
    }
}

//! Human-readable rendering of a search result.

use vdcalc_core::{format_resistance, Goal};

use crate::search::Solution;

/// Render the winning pair and achieved-vs-goal error as a report block.
///
/// Output shape:
///
/// ```text
/// Best solution:
///        R1 =   1.50 kΩ
///        R2 =   1.50 kΩ
///       Sum =   3.00 kΩ
///
///     Goal:     divide by   2.000
///     Achieved: divide by   2.000 (0.0 % error)
/// ```
pub fn render(solution: &Solution) -> String {
    let mut out = String::new();
    out.push_str("Best solution:\n");
    out.push_str(&format!("    {:>5} = {}\n", "R1", format_resistance(solution.r1)));
    out.push_str(&format!("    {:>5} = {}\n", "R2", format_resistance(solution.r2)));
    out.push_str(&format!("    {:>5} = {}\n", "Sum", format_resistance(solution.sum())));
    out.push('\n');

    let label = match solution.goal {
        Goal::DivideBy(_) => "divide by",
        Goal::RatioTo(_) => "R1 / R2 =",
    };
    out.push_str(&format!("    Goal:     {label} {:7.3}\n", solution.goal.value()));
    out.push_str(&format!(
        "    Achieved: {label} {:7.3} ({:.1} % error)\n",
        solution.achieved,
        solution.percent_error()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use vdcalc_core::{Catalog, Constraints};

    use crate::search::find_best;

    #[test]
    fn test_render_divide_report() {
        let catalog: Catalog = [1500.0].into_iter().collect();
        let goal = Goal::divide_by(2.0).unwrap();
        let best = find_best(&catalog, goal, &Constraints::new()).unwrap();

        let report = render(&best);
        assert_eq!(
            report,
            "Best solution:\n\
             \x20      R1 =   1.50 kΩ\n\
             \x20      R2 =   1.50 kΩ\n\
             \x20     Sum =   3.00 kΩ\n\
             \n\
             \x20   Goal:     divide by   2.000\n\
             \x20   Achieved: divide by   2.000 (0.0 % error)\n"
        );
    }

    #[test]
    fn test_render_ratio_report() {
        let catalog: Catalog = [1000.0, 2200.0].into_iter().collect();
        let goal = Goal::ratio_to(2.0).unwrap();
        let best = find_best(&catalog, goal, &Constraints::new()).unwrap();
        assert_eq!((best.r1, best.r2), (2200.0, 1000.0));

        let report = render(&best);
        assert!(report.contains("Goal:     R1 / R2 =   2.000"));
        assert!(report.contains("Achieved: R1 / R2 =   2.200 (10.0 % error)"));
    }
}

use crate::types::report::ProfileReport;
use crate::types::scoring::StyleScore;

pub fn to_markdown(report: &ProfileReport) -> String {
    let mut output = String::new();
    output.push_str("# Closy Style Profile\n\n");
    output.push_str(&format!("{}\n\n", report.greeting));

    output.push_str("## Progress\n\n");
    output.push_str(&format!(
        "- block 1: {}\n- block 2: {}\n- block 3: {}\n- next: {}\n\n",
        done(report.progress.block1_complete),
        done(report.progress.block2_complete),
        done(report.progress.block3_complete),
        report.progress.current_block
    ));

    output.push_str(&format!("## Style Scores ({:?})\n\n", report.mode));
    if report.scores.is_empty() {
        output.push_str("- none\n\n");
    } else {
        output.push_str("| Style | Average | Total | Responses | % |\n");
        output.push_str("|---|---|---|---|---|\n");
        for (style, point) in report.scores.iter().zip(&report.chart) {
            output.push_str(&format!(
                "| {} | {:.2} | {:.2} | {} | {:.1} |\n",
                style.style_name,
                style.average_score,
                style.total_score,
                style.response_count,
                point.percentage
            ));
        }
        output.push('\n');
    }

    output.push_str("## Statistics\n\n");
    output.push_str(&format!(
        "- styles: {}\n- responses: {}\n- average: {:.2}\n- highest: {:.2}\n- lowest: {:.2}\n\n",
        report.statistics.total_styles,
        report.statistics.total_responses,
        report.statistics.average_score,
        report.statistics.highest_score,
        report.statistics.lowest_score
    ));

    output.push_str("## Preferences\n\n");
    output.push_str(&format!("- loved: {}\n", names(&report.bands.loved)));
    output.push_str(&format!("- liked: {}\n", names(&report.bands.liked)));
    output.push_str(&format!("- neutral: {}\n", names(&report.bands.neutral)));
    output.push_str(&format!("- disliked: {}\n\n", names(&report.bands.disliked)));

    output.push_str("## Recommendations\n\n");
    output.push_str(&format!("{}\n\n", report.recommendations.message));
    output.push_str(&format!(
        "- recommended: {}\n- secondary: {}\n- avoid: {}\n",
        names(&report.recommendations.recommended),
        names(&report.recommendations.secondary),
        names(&report.recommendations.avoid)
    ));

    output
}

fn done(complete: bool) -> &'static str {
    if complete {
        "complete"
    } else {
        "pending"
    }
}

fn names(styles: &[StyleScore]) -> String {
    if styles.is_empty() {
        return "none".to_string();
    }
    styles
        .iter()
        .map(|style| style.style_name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{build, fixtures};
    use crate::session::Session;

    #[test]
    fn markdown_report_contains_sections() {
        let rendered = to_markdown(&build(&fixtures::rated_session()));
        assert!(rendered.contains("# Closy Style Profile"));
        assert!(rendered.contains("## Style Scores (Simple)"));
        assert!(rendered.contains("| Boho | 5.00 | 5.00 | 1 | 100.0 |"));
        assert!(rendered.contains("- loved: Boho, ST"));
        assert!(rendered.contains("- next: block 2"));
    }

    #[test]
    fn empty_sections_say_none() {
        let rendered = to_markdown(&build(&Session::new()));
        assert!(rendered.contains("## Style Scores (Simple)\n\n- none"));
        assert!(rendered.contains("- disliked: none"));
    }
}

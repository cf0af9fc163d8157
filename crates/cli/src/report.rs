use anyhow::Result;
use console::style;
use domain::{Course, DiscountKind};
use serde::Serialize;
use std::io::Write;

use crate::demos::{CartScenario, CourseScenario};

fn scenario_icon(kind: DiscountKind) -> &'static str {
    match kind {
        DiscountKind::Regular => "📋",
        DiscountKind::Vip => "👑",
        DiscountKind::Promotional => "🎉",
        DiscountKind::NoDiscount => "💰",
    }
}

pub fn render_cart_report(scenarios: &[CartScenario]) -> String {
    let mut out = format!(
        "{}\n\n",
        style("🛒 DISCOUNT SYSTEM - STRATEGY PATTERN").bold()
    );
    for s in scenarios {
        out.push_str(&format!(
            "{}\n{}\n\n",
            style(format!(
                "{} Scenario {}: {}",
                scenario_icon(s.policy),
                s.scenario,
                s.policy.scenario_title()
            ))
            .cyan(),
            s.summary
        ));
    }
    out
}

pub fn render_course_report(course: &Course, scenarios: &[CourseScenario]) -> String {
    let (score1, score2) = course.scores();
    let mut out = format!(
        "{}\n\nCourse: {} (scores {:.2} and {:.2})\n\n",
        style("🎓 GRADE CALCULATOR - STRATEGY PATTERN").bold(),
        course.name(),
        score1,
        score2
    );
    for s in scenarios {
        out.push_str(&format!(
            "{}\n",
            style(format!("📐 Scenario {}: {}", s.scenario, s.strategy_label)).cyan()
        ));
        match (s.outcome(), &s.error) {
            (Some(outcome), _) => {
                out.push_str(&format!("Average: {:.2}\n", outcome.average));
                out.push_str(&format!("Status: {}\n\n", outcome.status));
            }
            (None, Some(error)) => {
                out.push_str(&format!("{} {}\n\n", style("Error:").red(), error));
            }
            (None, None) => out.push('\n'),
        }
    }
    out
}

/// Write one JSON object per line
pub fn write_json_lines<T: Serialize>(mut writer: impl Write, items: &[T]) -> Result<()> {
    for item in items {
        serde_json::to_writer(&mut writer, item)?;
        writeln!(writer)?;
    }
    Ok(())
}

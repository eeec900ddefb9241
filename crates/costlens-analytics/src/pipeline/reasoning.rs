//! Human-readable summary of an analysis.

use costlens_core::constants::CURRENCY_SYMBOL;

use super::report::AnalysisReport;

/// Round to whole rupees and group thousands with commas: `22213.28` → `"22,213"`.
pub fn format_amount(value: f64) -> String {
    let rounded = format!("{:.0}", value);
    let (sign, digits) = match rounded.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", rounded.as_str()),
    };

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{sign}{grouped}")
}

/// `₹` followed by the grouped amount.
pub fn format_inr(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{}", format_amount(value))
}

pub(crate) fn build_reasoning(report: &AnalysisReport) -> String {
    let tier = report.complexity.tier;
    let price = &report.price_prediction;
    let acceptance = &report.acceptance_model;

    let mut text = format!(
        "{tier} project (score {}/25). Estimated {}h at {}/hr (market rate: {}/hr for {tier}). \
         Risk {:.1}%. Predicted price {} (benchmark range: {} – {}). Acceptance {:.1}% ({}).",
        report.complexity.total_score,
        report.hours.estimated_hours,
        format_inr(report.market_context.applied_rate),
        format_inr(report.market_context.suggested_rate),
        report.risk.risk_percent,
        format_inr(price.predicted_price),
        format_inr(price.benchmark_range.low),
        format_inr(price.benchmark_range.high),
        acceptance.probability_pct,
        acceptance.verdict,
    );
    if let Some(nearest) = report.similar_projects.first() {
        text.push_str(&format!(
            " Similar: {} (score {}).",
            nearest.name, nearest.score
        ));
    }
    text
}

use is_terminal::IsTerminal;
use leadgen_types::ScoreTier;
use owo_colors::OwoColorize;

/// Reasons shown inline before collapsing the rest into "+N".
pub const INLINE_REASONS: usize = 2;

/// Colour only when stdout is a terminal and NO_COLOR is unset.
pub fn color_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && std::io::stdout().is_terminal()
}

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Drop the trailing "(+30)" weight from a rank reason.
pub fn reason_label(reason: &str) -> &str {
    reason.split('(').next().unwrap_or(reason).trim()
}

/// "High Value Role, In Biotech Hub +2"
pub fn summarize_reasons(reasons: &[String]) -> String {
    let mut summary = reasons
        .iter()
        .take(INLINE_REASONS)
        .map(|r| reason_label(r))
        .collect::<Vec<_>>()
        .join(", ");

    if reasons.len() > INLINE_REASONS {
        summary.push_str(&format!(" +{}", reasons.len() - INLINE_REASONS));
    }
    summary
}

pub fn format_score(score: f64) -> String {
    leadgen_engine::export::format_score(score)
}

/// Pad first, then colour, so escape codes do not break column alignment.
pub fn paint_score(score: f64, width: usize, color: bool) -> String {
    let text = format!("{:>width$}", format_score(score), width = width);
    if !color {
        return text;
    }
    match ScoreTier::from_score(score) {
        ScoreTier::High => text.green().bold().to_string(),
        ScoreTier::Medium => text.yellow().to_string(),
        ScoreTier::Low => text.dimmed().to_string(),
    }
}

pub fn paint_funding(stage: &str, growth: bool, color: bool) -> String {
    if growth && color {
        stage.magenta().bold().to_string()
    } else {
        stage.to_string()
    }
}

pub fn paint_heading(text: &str, color: bool) -> String {
    if color {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

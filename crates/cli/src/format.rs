//! Output → human/json/raw string formatting.
//!
//! Three modes:
//! - **Human** (default): labelled lines, amounts as `50 000,00 €`, `(nil)` for misses
//! - **JSON** (`--json`): `serde_json::to_string_pretty`
//! - **Raw** (`--raw`): bare values, one record per line, tab-separated fields

use serde::{Deserialize, Serialize};
use uniag_executor::{
    Distribution, Error, MemberInfo, Output, ProjectDetail, ProjectInfo,
};

/// Output formatting mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Human,
    Json,
    Raw,
}

/// Renders outputs in one mode with one currency symbol.
#[derive(Debug, Clone)]
pub struct Formatter {
    mode: OutputMode,
    currency: String,
}

impl Formatter {
    pub fn new(mode: OutputMode, currency: impl Into<String>) -> Self {
        Self {
            mode,
            currency: currency.into(),
        }
    }

    /// Format a successful output.
    pub fn output(&self, output: &Output) -> String {
        match self.mode {
            OutputMode::Json => format_json(output),
            OutputMode::Raw => format_raw(output),
            OutputMode::Human => self.human(output),
        }
    }

    /// Format an error.
    pub fn error(&self, err: &Error) -> String {
        match self.mode {
            OutputMode::Json => serde_json::to_string_pretty(&serde_json::json!({
                "error": err.to_string()
            }))
            .unwrap_or_else(|_| format!("{{\"error\": \"{}\"}}", err)),
            OutputMode::Raw => err.to_string(),
            OutputMode::Human => format!("(error) {}", err),
        }
    }

    /// An amount in the configured currency.
    pub fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency)
    }

    /// One-line member summary.
    pub fn member_line(&self, m: &MemberInfo) -> String {
        let mut line = format!("ID: {} | Name: {} | Type: {}", m.id, m.name, m.kind.label());
        if let Some(balance) = m.balance {
            line.push_str(&format!(" | Balance: {}", self.money(balance)));
        }
        line
    }

    /// One-line project summary.
    pub fn project_line(&self, p: &ProjectInfo) -> String {
        format!(
            "ID: {} | Title: {} | Funding: {} | Participants: {}",
            p.id,
            p.title,
            self.money(p.funding),
            p.participants.len()
        )
    }

    /// Multi-line project description with participants.
    pub fn project_detail(&self, d: &ProjectDetail) -> String {
        let mut out = format!(
            "Project ID: {}\nTitle: {}\nFunding: {}\nParticipants ({}):",
            d.project.id,
            d.project.title,
            self.money(d.project.funding),
            d.members.len()
        );
        if d.members.is_empty() {
            out.push_str("\n  (no members associated yet)");
        }
        for m in &d.members {
            out.push_str("\n  -> ");
            out.push_str(&self.member_line(m));
        }
        out
    }

    /// Sentence describing a distribution outcome.
    pub fn distribution(&self, outcome: &Distribution) -> String {
        match outcome {
            Distribution::Distributed {
                recipients,
                share,
                total,
            } => format!(
                "Distributed {} among {} integrated researcher(s): {} each",
                self.money(*total),
                recipients,
                self.money(*share)
            ),
            Distribution::NoEligibleRecipients => {
                "No integrated researchers on this project; nothing was distributed".to_string()
            }
        }
    }

    // =========================================================================
    // Human mode
    // =========================================================================

    fn human(&self, output: &Output) -> String {
        match output {
            Output::Member(m) => format!("(member) {}", self.member_line(m)),
            Output::Project(p) => format!("(project) {}", self.project_line(p)),
            Output::Bool(b) => format!("(boolean) {}", b),
            Output::Distribution(None) => "(nil)".to_string(),
            Output::Distribution(Some(d)) => self.distribution(d),
            Output::Members(members) => {
                numbered(members.iter().map(|m| self.member_line(m)).collect())
            }
            Output::Projects(projects) => {
                numbered(projects.iter().map(|p| self.project_line(p)).collect())
            }
            Output::MaybeMember(None) | Output::MaybeProject(None) => "(nil)".to_string(),
            Output::MaybeMember(Some(m)) => self.member_line(m),
            Output::MaybeProject(Some(d)) => self.project_detail(d),
        }
    }
}

fn numbered(lines: Vec<String>) -> String {
    if lines.is_empty() {
        return "(empty list)".to_string();
    }
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}) {}", i + 1, line))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format an amount as `1 234 567,89 €`: two decimals, comma separator,
/// thousands grouped with spaces.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, c) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }

    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    if symbol.is_empty() {
        format!("{}{},{}", sign, grouped, frac_part)
    } else {
        format!("{}{},{} {}", sign, grouped, frac_part, symbol)
    }
}

// =========================================================================
// JSON mode
// =========================================================================

fn format_json(output: &Output) -> String {
    serde_json::to_string_pretty(output).unwrap_or_else(|e| format!("{{\"error\": \"{}\"}}", e))
}

// =========================================================================
// Raw mode
// =========================================================================

/// Escape a free-text field so it cannot split a raw record.
///
/// Backslash, tab, newline and carriage return become `\\`, `\t`, `\n`
/// and `\r`; other control characters become `\u{..}`.
fn raw_field(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            c if c.is_control() => out.push_str(&c.escape_unicode().to_string()),
            c => out.push(c),
        }
    }
    out
}

fn raw_member(m: &MemberInfo) -> String {
    let balance = m.balance.map(|b| format!("{:.2}", b)).unwrap_or_default();
    format!(
        "{}\t{}\t{}\t{}",
        m.id,
        m.kind.as_str(),
        raw_field(&m.name),
        balance
    )
}

fn raw_project(p: &ProjectInfo) -> String {
    format!(
        "{}\t{}\t{:.2}\t{}",
        p.id,
        raw_field(&p.title),
        p.funding,
        p.participants.len()
    )
}

fn format_raw(output: &Output) -> String {
    match output {
        Output::Member(m) => m.id.to_string(),
        Output::Project(p) => p.id.to_string(),
        Output::Bool(b) => {
            if *b {
                "1".to_string()
            } else {
                "0".to_string()
            }
        }
        Output::Distribution(None) => String::new(),
        Output::Distribution(Some(Distribution::Distributed {
            recipients, share, ..
        })) => format!("{}\t{:.2}", recipients, share),
        Output::Distribution(Some(Distribution::NoEligibleRecipients)) => "0\t0.00".to_string(),
        Output::Members(members) => members
            .iter()
            .map(raw_member)
            .collect::<Vec<_>>()
            .join("\n"),
        Output::Projects(projects) => projects
            .iter()
            .map(raw_project)
            .collect::<Vec<_>>()
            .join("\n"),
        Output::MaybeMember(None) | Output::MaybeProject(None) => String::new(),
        Output::MaybeMember(Some(m)) => raw_member(m),
        Output::MaybeProject(Some(d)) => std::iter::once(raw_project(&d.project))
            .chain(d.members.iter().map(raw_member))
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

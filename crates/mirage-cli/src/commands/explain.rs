//! Explain command - provides detailed explanation of a rule

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mirage_core::rules::{Rule, library};
use mirage_core::{Language, Severity};

#[derive(Args, Debug)]
pub struct ExplainArgs {
    #[arg(
        value_name = "RULE_ID",
        help = "Rule ID to explain (e.g., \"eval-usage\", \"js-isempty\")"
    )]
    pub rule_id: String,
}

impl ExplainArgs {
    pub fn run(&self) -> Result<()> {
        match library().find_rule(&self.rule_id) {
            Some(rule) => {
                print!("{}", render(rule));
                Ok(())
            }
            None => {
                eprintln!("Available rules:");
                for group in library().groups() {
                    let ids: Vec<&str> = group.rules().map(|r| r.id).collect();
                    eprintln!("  {}: {}", group.name(), ids.join(", "));
                }
                anyhow::bail!("Unknown rule '{}'", self.rule_id)
            }
        }
    }
}

fn render(rule: &Rule) -> String {
    let languages: Vec<&str> = Language::ALL
        .iter()
        .filter(|&&language| library().rules_for(language).any(|r| r.id == rule.id))
        .map(|language| language.as_str())
        .collect();
    let structural = library().structural().get(rule.id).is_some();

    let mut lines = vec![
        String::new(),
        format!("Rule {}", rule.id).bold().to_string(),
        String::new(),
        format!("  {}: {}", "Description".cyan(), rule.description),
        format!("  {}: {}", "Category".cyan(), rule.category),
        format!("  {}: {}", "Severity".cyan(), format_severity(&rule.severity)),
        format!("  {}: {}", "Languages".cyan(), languages.join(", ")),
    ];
    if !structural {
        lines.push(format!("  {}: {}", "Pattern".cyan(), rule.pattern));
    }
    lines.push(String::new());
    lines.push(format!("  {}: {}", "Fix".cyan(), rule.fix_description));
    lines.push(format!("  {}: {}", "Why".cyan(), rule.rationale));
    if structural {
        lines.push(format!(
            "  {}: structural check, no automatic replacement",
            "Note".cyan()
        ));
    }
    lines.push(String::new());

    lines.join("\n")
}

fn format_severity(severity: &Severity) -> String {
    match severity {
        Severity::Critical => "critical".red().to_string(),
        Severity::Warning => "warning".yellow().to_string(),
        Severity::Info => "info".blue().to_string(),
    }
}

//! Rules command - lists the pattern library

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use mirage_core::Language;
use mirage_core::rules::{RuleGroup, library};

#[derive(Args, Debug)]
pub struct RulesArgs {
    /// Only list the rules that apply to this language
    #[arg(short, long, value_name = "LANGUAGE")]
    pub language: Option<Language>,
}

impl RulesArgs {
    pub fn run(&self) -> Result<()> {
        print!("{}", self.render());
        Ok(())
    }

    fn render(&self) -> String {
        let library = library();
        let groups: Vec<&RuleGroup> = match self.language {
            Some(language @ (Language::JavaScript | Language::TypeScript)) => library
                .groups_for(language)
                .into_iter()
                .chain([library.structural()])
                .collect(),
            Some(language) => library.groups_for(language).into_iter().collect(),
            None => library.groups().collect(),
        };

        let mut output = String::new();
        for group in groups {
            output.push_str(&format!("{} ({})\n", group.name().bold(), group.len()));
            for rule in group.rules() {
                output.push_str(&format!(
                    "  {:<28} {:<9} {:<22} {}\n",
                    rule.id, rule.severity, rule.category, rule.description
                ));
            }
            output.push('\n');
        }
        output
    }
}

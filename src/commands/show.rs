//! Implementation of the `forge show` command.
//!
//! Prints a human-readable summary of a decoded configuration document,
//! or a JSON dump of the full model with `--json`.

use crate::cli::ShowArgs;
use crate::config::types::BUCKET_KEYS;
use crate::config::{self, Conditions, Template};
use crate::error::{ForgeError, Result};

/// Execute the `forge show` command.
pub fn cmd_show(args: ShowArgs) -> Result<()> {
    let config = config::read(&args.path)?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&config)
            .map_err(|e| ForgeError::UserError(format!("failed to render config as JSON: {e}")))?;
        println!("{rendered}");
        return Ok(());
    }

    println!("================================================================================");
    println!("{}", config.name);
    println!("================================================================================");
    println!();

    if !config.include.is_empty() {
        println!("Includes:");
        for path in &config.include {
            println!("  {}", path.display());
        }
        println!();
    }

    if !config.conditions.is_empty() {
        println!("Conditions:");
        for (name, condition) in &config.conditions {
            match condition {
                Conditions::Single(value) => println!("  {name}: {value}"),
                Conditions::Group(group) => println!("  {name}: {} sub-conditions", group.len()),
            }
        }
        println!();
    }

    if !config.templates.is_empty() {
        println!("Templates:");
        for (name, template) in &config.templates {
            print_template(name, template, "");
        }
        println!();
    }

    if !config.targets.is_empty() {
        println!("Targets:");
        for (name, target) in &config.targets {
            print_template(name, &target.template, "");
            if !target.templates.is_empty() {
                println!("      composes: {}", target.templates.join(", "));
            }
        }
        println!();
    }

    Ok(())
}

fn print_template(name: &str, template: &Template, indent: &str) {
    let project = &template.project.project;
    println!("{indent}  {name} [{}]", project.project_type.as_str());

    if !template.path.as_os_str().is_empty() {
        println!("{indent}      path: {}", template.path.display());
    }
    if !template.repository.url.is_empty() {
        println!("{indent}      repository: {}", template.repository.url);
    }
    if !project.sources.is_empty() {
        println!("{indent}      sources: {}", project.sources.len());
    }
    if !project.includes.is_empty() {
        let counts: Vec<String> = BUCKET_KEYS
            .iter()
            .map(|&v| format!("{} {}", project.includes.bucket(v).len(), v.key()))
            .collect();
        println!("{indent}      includes: {}", counts.join(", "));
    }
    if !template.project.switch.cases.is_empty() {
        println!("{indent}      cases: {}", template.project.switch.cases.len());
    }
}

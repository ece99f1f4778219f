//! Dependency tree visualization.
//!
//! Walks the `dependencies` of a project recursively and renders them in
//! a hierarchical ASCII tree.
//!
//! ## Example Output
//!
//! ```text
//! app (velux.json)
//! ├── libs/core -> libcore.a
//! │   └── ../base -> libbase.a
//! └── libs/gone (missing)
//! ```

use crate::config::{CONFIG_FILE, ProjectConfig, load_config};
use crate::deps::chain_key;
use anyhow::Result;
use colored::*;
use std::path::{Path, PathBuf};

pub fn print_tree(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)?;
    let project_dir = crate::project_dir(config_path);

    let name = config_path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| CONFIG_FILE.to_string());
    println!("{} ({})", config.output.bold().cyan(), name);

    let lines = render_tree(&config, &project_dir);
    if lines.is_empty() {
        println!("└── (no dependencies)");
    }
    for line in lines {
        println!("{}", line);
    }
    Ok(())
}

/// Render every dependency below the root, one line per node.
pub fn render_tree(config: &ProjectConfig, project_dir: &Path) -> Vec<String> {
    let mut lines = Vec::new();
    let mut chain = vec![chain_key(project_dir)];
    render_children(config, project_dir, "", &mut chain, &mut lines);
    lines
}

fn render_children(
    config: &ProjectConfig,
    project_dir: &Path,
    indent: &str,
    chain: &mut Vec<PathBuf>,
    lines: &mut Vec<String>,
) {
    let count = config.dependencies.len();
    for (i, dep) in config.dependencies.iter().enumerate() {
        let is_last = i == count - 1;
        let prefix = if is_last { "└──" } else { "├──" };
        let child_indent = format!("{}{}", indent, if is_last { "    " } else { "│   " });
        let dep_dir = project_dir.join(dep);

        if !dep_dir.exists() {
            lines.push(format!("{}{} {} {}", indent, prefix, dep, "(missing)".red()));
            continue;
        }
        let dep_config = match load_config(&dep_dir.join(CONFIG_FILE)) {
            Ok(c) => c,
            Err(_) => {
                lines.push(format!(
                    "{}{} {} {}",
                    indent,
                    prefix,
                    dep,
                    "(no valid velux.json)".yellow()
                ));
                continue;
            }
        };

        let key = chain_key(&dep_dir);
        if chain.contains(&key) {
            lines.push(format!("{}{} {} {}", indent, prefix, dep, "(cycle)".red()));
            continue;
        }

        lines.push(format!(
            "{}{} {} -> {}",
            indent,
            prefix,
            dep.bold(),
            dep_config.output.green()
        ));

        chain.push(key);
        render_children(&dep_config, &dep_dir, &child_indent, chain, lines);
        chain.pop();
    }
}

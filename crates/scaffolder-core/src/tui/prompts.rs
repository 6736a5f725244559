//! Charm-style CLI prompts using cliclack

use crate::config::ScaffoldLayout;
use crate::product::ProductConfig;
use crate::scaffold::{self, CreatedFile, ModuleName};
use anyhow::Result;
use colored::Colorize;
use std::io::Write;

/// Run the CLI with the interactive module name prompt
pub async fn run<C: ProductConfig>(config: &C) -> Result<()> {
    cliclack::intro(config.display_name())?;

    // Step 1: Ask for the module name
    let name = prompt_module_name(config)?;

    // Step 2: Write the scaffold, one notice per file
    let layout = config.layout();
    write_scaffold(&layout, &name, &mut std::io::stdout()).await?;

    // Step 3: Completion line
    cliclack::outro(config.completion_message().blue())?;

    Ok(())
}

fn prompt_module_name<C: ProductConfig>(config: &C) -> Result<ModuleName> {
    let input: String = cliclack::input(config.prompt_label())
        .placeholder("Users")
        .validate(|input: &String| ModuleName::parse(input.as_str()).map(|_| ()))
        .interact()?;

    Ok(ModuleName::parse(input)?)
}

async fn write_scaffold<W: Write>(
    layout: &ScaffoldLayout,
    name: &ModuleName,
    out: &mut W,
) -> Result<Vec<CreatedFile>> {
    scaffold::create_module(layout, name, |file| {
        writeln!(out, "{}", file.notice(layout))?;
        Ok(())
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_prints_only_created_lines() {
        colored::control::set_override(false);
        let dir = TempDir::new().unwrap();
        let layout = ScaffoldLayout::default().with_root(dir.path());
        let name = ModuleName::parse("Users").unwrap();
        let mut out = Vec::new();

        write_scaffold(&layout, &name, &mut out).await.unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "✔ Created: src/components/Users/UsersList.tsx",
                "✔ Created: src/components/Users/UsersForm.tsx",
                "✔ Created: src/components/Users/UsersDetails.tsx",
                "✔ Created: src/components/Users/UsersEdit.tsx",
                "✔ Created: src/redux/usersSlice.ts",
            ]
        );
    }
}

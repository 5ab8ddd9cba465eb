//! `jdtpath projects` command

use anyhow::Result;

use crate::cli::ProjectsArgs;
use crate::commands::GlobalArgs;
use jdtpath::ops::{format_projects, list_projects};

pub fn execute(global: &GlobalArgs, args: ProjectsArgs) -> Result<()> {
    let open = global.open()?;
    let projects = list_projects(&open.workspace);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&projects)?);
    } else {
        print!("{}", format_projects(&projects, open.workspace.root()));
    }
    Ok(())
}

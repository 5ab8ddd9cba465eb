//! `jdtpath classpath` command

use std::io::Write;

use anyhow::Result;

use crate::cli::ClasspathArgs;
use crate::commands::GlobalArgs;
use jdtpath::ops::{format_classpath, resolve_classpath, ClasspathRequest};

pub fn execute(global: &GlobalArgs, args: ClasspathArgs) -> Result<()> {
    let open = global.open()?;

    let request = ClasspathRequest {
        project: args.project,
        runtime: args.runtime,
        workspace_relative: args.relative,
        strict: args.strict,
        arguments: args.arguments.into_iter().collect(),
    };

    let resolved = resolve_classpath(&open, &request)?;
    tracing::debug!(
        "referenced projects: {}",
        resolved.referenced_projects().join(", ")
    );

    let output = format_classpath(&resolved, args.format, args.boot)?;
    std::io::stdout().write_all(output.as_bytes())?;
    Ok(())
}

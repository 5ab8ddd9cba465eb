//! `jdtpath runtimes` command

use anyhow::Result;

use crate::cli::RuntimesArgs;
use crate::commands::GlobalArgs;
use jdtpath::ops::{format_runtimes, list_runtimes};

pub fn execute(global: &GlobalArgs, args: RuntimesArgs) -> Result<()> {
    let open = global.open()?;
    let runtimes = list_runtimes(open.session.runtimes());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&runtimes)?);
    } else {
        print!(
            "{}",
            format_runtimes(&runtimes, args.libraries || global.verbose)
        );
    }
    Ok(())
}

use std::io::{self, BufRead, Write};

use anyhow::Context;
use vendor6_common::config::Config;
use vendor6_core::{OuiRegistry, VendorResolver};

use crate::terminal::print;

const EXIT_COMMAND: &str = "exit";

/// Resolves every address given on the command line.
pub fn batch(addresses: &[String], registry: &OuiRegistry, cfg: &Config) -> anyhow::Result<()> {
    let resolver = VendorResolver::new(registry);
    let mut out = io::stdout().lock();
    for address in addresses {
        let answer = resolver.resolve(address);
        writeln!(out, "{}", print::render_answer(&answer, cfg.verbose))?;
    }
    Ok(())
}

/// Reads addresses from stdin until `exit` or end of input.
pub fn interactive(registry: &OuiRegistry, cfg: &Config) -> anyhow::Result<()> {
    let resolver = VendorResolver::new(registry);
    let attended: bool = console::user_attended();
    if attended {
        print::usage();
    }
    session(io::stdin().lock(), io::stdout().lock(), &resolver, cfg.verbose, attended)
}

fn session<I, O>(
    input: I,
    mut out: O,
    resolver: &VendorResolver<'_, OuiRegistry>,
    verbose: bool,
    show_prompt: bool,
) -> anyhow::Result<()>
where
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    loop {
        if show_prompt {
            write!(out, "{}", print::PROMPT)?;
            out.flush()?;
        }

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("reading address from stdin")?;

        match line.trim() {
            "" => continue,
            EXIT_COMMAND => break,
            address => {
                let answer = resolver.resolve(address);
                writeln!(out, "{}", print::render_answer(&answer, verbose))?;
            }
        }
    }
    Ok(())
}

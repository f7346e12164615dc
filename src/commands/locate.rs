use anyhow::{Result, anyhow};
use find_root::{Environment, Locator, Lookup, ProcessEnvironment, Report, WithWorkingDir, paths};

use crate::cli::Cli;

pub fn run_locate(cli: &Cli) -> Result<()> {
    let locator = build_locator(cli);
    let lookup = lookup_for(cli, &locator, ProcessEnvironment)?;

    println!("{}", render(&lookup, &locator, cli.json)?);

    Ok(())
}

fn build_locator(cli: &Cli) -> Locator {
    let mut locator = Locator::new();
    locator.marker(cli.marker.as_str()).depth(cli.depth);
    locator
}

fn lookup_for<E: Environment>(cli: &Cli, locator: &Locator, env: E) -> Result<Lookup> {
    match &cli.from {
        Some(dir) => {
            let start = paths::absolutize(dir)?;
            if !start.is_dir() {
                anyhow::bail!(
                    "🛑 Start directory not found: {}\n\
                     → Pass an existing directory to --from.",
                    start.display()
                );
            }
            resolve(locator, &WithWorkingDir::new(env, start), cli.strict)
        }
        None => resolve(locator, &env, cli.strict),
    }
}

/// The text printed on stdout: the bare root path, or the JSON report.
fn render(lookup: &Lookup, locator: &Locator, json: bool) -> Result<String> {
    if json {
        let report = Report::new(lookup, locator.marker_name());
        Ok(serde_json::to_string_pretty(&report)?)
    } else {
        Ok(lookup.root.display().to_string())
    }
}

fn resolve<E: Environment>(locator: &Locator, env: &E, strict: bool) -> Result<Lookup> {
    if !strict {
        return locator.locate(env);
    }

    let matched = locator.find(env)?.ok_or_else(|| {
        anyhow!(
            "🛑 Couldn't find a {}/ directory in the working directory, the executable's directory, or up to {} parents of either.\n\
             → Run from inside the project, or pass --from <DIR>.",
            locator.marker_name(),
            locator.ancestor_depth()
        )
    })?;

    Ok(Lookup {
        root: matched.path.clone(),
        matched: Some(matched),
    })
}

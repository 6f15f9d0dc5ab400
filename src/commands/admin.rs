use crate::*;
use std::path::Path;

/// Catalog commands run without opening a session, so they never touch the
/// stored configuration.
pub fn handle_catalog_commands(cli: &Cli) -> anyhow::Result<bool> {
    let Commands::Catalog { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        CatalogCommands::List => {
            let summaries = [CatalogKind::Classic, CatalogKind::Extended]
                .into_iter()
                .map(|k| Registry::builtin(k).map(|r| r.summary()))
                .collect::<anyhow::Result<Vec<_>>>()?;
            print_out(cli.json, &summaries, summary_line)?;
        }
        CatalogCommands::Validate { path } => {
            let registry = Registry::from_path(Path::new(path))?;
            print_one(cli.json, registry.summary(), |s| {
                format!("catalog valid: {}", summary_line(s))
            })?;
        }
    }

    Ok(true)
}

pub fn handle_config_commands<S: ConfigStore>(
    cli: &Cli,
    session: &mut Session<S>,
) -> anyhow::Result<bool> {
    let Commands::Config { command } = &cli.command else {
        return Ok(false);
    };

    match command {
        ConfigCommands::Show => {
            let config = session.config().clone();
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: config
                    })?
                );
            } else {
                println!("{}", serde_json::to_string_pretty(&config)?);
            }
        }
        ConfigCommands::Reset => {
            session.reset();
            print_one(
                cli.json,
                MutationReport {
                    status: "Configuration reset to defaults.".to_string(),
                    configuration: session.config().clone(),
                },
                |r| r.status.clone(),
            )?;
        }
        ConfigCommands::Path => {
            print_one(cli.json, session.store().location(), |p| p.to_string())?;
        }
    }

    Ok(true)
}

fn summary_line(s: &CatalogSummary) -> String {
    format!(
        "{}\t{} sections\t{} recommended\t{} sensitive",
        s.name, s.total, s.recommended, s.sensitive
    )
}

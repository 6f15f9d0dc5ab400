use crate::*;

pub fn handle_runtime_commands<S: ConfigStore>(
    cli: &Cli,
    session: &mut Session<S>,
    settings: &SettingsFile,
    style: PromptStyle,
) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Prompt { copy } => {
            let rendered = session.render(style);
            let copy_status = if *copy {
                let sink = CommandClipboard::from_command(&settings.clipboard.command);
                Some(copy_to_clipboard(&sink, &rendered.text))
            } else {
                None
            };
            let report = PromptReport {
                ready: rendered.ready,
                style: style.as_str().to_string(),
                catalog: session.registry().name().to_string(),
                section_ids: session.selected().iter().map(|c| c.id.clone()).collect(),
                sha256: document_digest(&rendered.text),
                text: rendered.text,
                copy_status,
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: report
                    })?
                );
            } else {
                println!("{}", report.text);
                if let Some(status) = report.copy_status {
                    eprintln!("{}", status.message);
                }
            }
        }
        Commands::Sections {
            filter,
            selected_only,
        } => {
            let visible = session.visible(filter.as_deref().unwrap_or(""), *selected_only);
            let listing = SectionListing {
                shown: visible.len(),
                total: session.registry().len(),
                selected: session.selected().len(),
                summary: session.section_count(visible.len()),
                sections: section_rows(session.config(), &visible),
            };
            if cli.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&JsonOut {
                        ok: true,
                        data: listing
                    })?
                );
            } else {
                if listing.sections.is_empty() {
                    println!("{}", NO_MATCHING_SECTIONS_MESSAGE);
                }
                for s in &listing.sections {
                    println!("{}", section_line(s));
                }
                println!("{}", listing.summary);
            }
        }
        Commands::Select { ids } => {
            session.toggle_many(ids, true)?;
            let status = format!("Selected {}.", ids.join(", "));
            print_mutation(cli.json, status, session.config())?;
        }
        Commands::Deselect { ids } => {
            session.toggle_many(ids, false)?;
            let status = format!("Deselected {}.", ids.join(", "));
            print_mutation(cli.json, status, session.config())?;
        }
        Commands::Preset { preset } => {
            let status = session.apply_preset(*preset);
            print_mutation(cli.json, status.to_string(), session.config())?;
        }
        Commands::Set {
            include_inferred,
            include_confidence,
            exclude_sensitive,
            max_items,
        } => {
            session.update_flags(&FlagUpdate {
                include_inferred: *include_inferred,
                include_confidence: *include_confidence,
                exclude_sensitive: *exclude_sensitive,
                max_items: max_items.clone(),
            });
            let c = session.config();
            let status = format!(
                "include_inferred={} include_confidence={} exclude_sensitive={} max_items={}",
                c.include_inferred, c.include_confidence, c.exclude_sensitive, c.max_items
            );
            print_mutation(cli.json, status, c)?;
        }
        Commands::Config { .. } | Commands::Catalog { .. } => {
            anyhow::bail!("command is handled before a session is opened");
        }
    }
    Ok(())
}

fn section_line(s: &SectionRow) -> String {
    let mut tags = Vec::new();
    if s.recommended {
        tags.push("recommended");
    }
    if s.sensitive {
        tags.push("may be sensitive");
    }
    let mark = if s.selected { "x" } else { " " };
    if tags.is_empty() {
        format!("[{}] {}\t{}", mark, s.id, s.title)
    } else {
        format!("[{}] {}\t{}\t({})", mark, s.id, s.title, tags.join(", "))
    }
}

fn print_mutation(json: bool, status: String, config: &Configuration) -> anyhow::Result<()> {
    print_one(
        json,
        MutationReport {
            status,
            configuration: config.clone(),
        },
        |r| r.status.clone(),
    )
}

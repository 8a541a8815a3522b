use crate::{
    aggregate::ExpenseSummary,
    cli::{
        context::{CommandError, CommandResult, ShellContext},
        output,
        registry::{CommandEntry, CommandRegistry},
        views::{self, Panel},
    },
    domain::Displayable,
    utils::build_info,
};

/// Builds the command table in the order `help` lists it.
pub fn registry() -> CommandRegistry {
    let mut registry = CommandRegistry::new();
    registry.register(CommandEntry::new(
        "list",
        "List every expense, highlighting the highest and lowest",
        "list",
        cmd_list,
    ));
    registry.register(CommandEntry::new(
        "show",
        "Show the details of one expense",
        "show <id>",
        cmd_show,
    ));
    registry.register(CommandEntry::new(
        "summary",
        "Show transaction count, total, highest and lowest expense",
        "summary",
        cmd_summary,
    ));
    registry.register(CommandEntry::new(
        "config",
        "Show the effective configuration",
        "config",
        cmd_config,
    ));
    registry.register(CommandEntry::new(
        "version",
        "Show version and build information",
        "version",
        cmd_version,
    ));
    registry.register(CommandEntry::new(
        "help",
        "List commands or describe one",
        "help [command]",
        cmd_help,
    ));
    registry.register(CommandEntry::new("exit", "Leave the shell", "exit", cmd_exit));
    registry.register(CommandEntry::new("quit", "Leave the shell", "quit", cmd_exit));
    registry
}

fn cmd_list(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let records = context.store().all();
    if records.is_empty() {
        output::info("No expense records to display.");
        return Ok(());
    }
    let rendered = views::render_list(records, &context.config().currency_code())?;
    println!("{rendered}");
    Ok(())
}

fn cmd_show(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let raw = args
        .first()
        .ok_or_else(|| CommandError::InvalidArguments("usage: show <id>".into()))?;
    let id: u32 = raw
        .parse()
        .map_err(|_| CommandError::InvalidArguments(format!("invalid record id `{}`", raw)))?;

    let store = context.store();
    let record = store.find_by_id(id)?;
    tracing::debug!(record = %record.display_label(), "rendering expense detail");
    let rendered = views::render_detail(record, store.all(), &context.config().currency_code())?;
    println!("{rendered}");
    Ok(())
}

fn cmd_summary(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let summary = ExpenseSummary::from_records(context.store().all())?;
    println!(
        "{}",
        views::render_summary(&summary, &context.config().currency_code())
    );
    Ok(())
}

fn cmd_config(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let config = context.config();
    let rendered = Panel::new("Configuration")
        .with_field("Currency", config.currency_code().as_str())
        .with_field("Dataset", context.source())
        .with_field("Records", context.store().len().to_string())
        .with_field("Color", if config.color { "on" } else { "off" })
        .render();
    println!("{rendered}");
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output::info(build_info::current().summary());
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let registry = context.registry();
    if let Some(name) = args.first() {
        let entry = registry
            .get(&name.to_lowercase())
            .ok_or_else(|| CommandError::UnknownCommand(name.to_string()))?;
        println!("{}\n  usage: {}", entry.description, entry.usage);
        return Ok(());
    }

    output::section("Available commands");
    let width = registry.entries().map(|e| e.usage.len()).max().unwrap_or(0);
    for entry in registry.entries() {
        println!("  {:<width$}  {}", entry.usage, entry.description);
    }
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    Err(CommandError::ExitRequested)
}

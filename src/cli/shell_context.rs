use std::str::FromStr;

use dialoguer::{theme::ColorfulTheme, Input, Select};
use rust_decimal::Decimal;
use strsim::levenshtein;

use crate::{
    config::{store_dir_in, ConfigManager},
    currency::CURRENCY_PRECISION,
    form::{TransactionDraft, MAX_AMOUNT},
    statement::{Category, StatementStore, TransactionPosition},
    storage::{FileByteStore, KeyValueDatasource},
};

use super::{output, render, CliError, CliMode, CommandError, LoopControl};

const COMMANDS: &[(&str, &str)] = &[
    ("list", "Show the statement grouped by day"),
    ("totals", "Show income, expenses, balance and progress"),
    ("add", "add [income|expense] [description] [amount]"),
    ("remove", "remove <section> <row> (numbers as shown by `list`)"),
    ("version", "Show build information"),
    ("help", "List available commands"),
    ("exit", "Leave the shell"),
];

pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    store: StatementStore,
    theme: ColorfulTheme,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;
        let bytes = FileByteStore::new(store_dir_in(config_manager.base_dir()))?;
        let datasource = KeyValueDatasource::with_key(bytes, config.storage_key.clone());
        let store =
            StatementStore::load(Box::new(datasource)).with_formatter(Box::new(config.formatter()));
        tracing::debug!(
            base = %config_manager.base_dir().display(),
            groups = store.number_of_groups(),
            "shell context ready"
        );
        Ok(Self::with_store(mode, store))
    }

    pub fn with_store(mode: CliMode, store: StatementStore) -> Self {
        Self {
            mode,
            running: true,
            store,
            theme: ColorfulTheme::default(),
        }
    }

    pub fn store(&self) -> &StatementStore {
        &self.store
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        let mut names: Vec<_> = COMMANDS.iter().map(|(name, _)| *name).collect();
        names.push("quit");
        names
    }

    pub fn prompt(&self) -> String {
        let balance = self.store.formatter().format_currency(self.store.balance());
        format!("wallet [{balance}] > ")
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "list" | "ls" => {
                output::section("Statement");
                println!("{}", render::statement(&self.store));
            }
            "totals" => {
                output::section("Totals");
                println!("{}", render::summary(&self.store));
            }
            "add" => self.add(args)?,
            "remove" | "rm" => self.remove(args)?,
            "version" => self.version(),
            "help" => self.help(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            other => self.suggest_command(other),
        }
        Ok(LoopControl::Continue)
    }

    fn suggest_command(&self, input: &str) {
        output::warning(format!(
            "Unknown command `{input}`. Type `help` to see available commands."
        ));
        if let Some(best) = closest_command(input) {
            output::info(format!("Suggestion: `{best}`?"));
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        output::error(&err);
        if matches!(err, CommandError::Usage(_)) {
            output::info("Type `help` for usage details.");
        }
        Ok(())
    }

    fn add(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let mut draft = TransactionDraft::new();

        match args.first() {
            Some(raw) => {
                let category = Category::parse(raw).ok_or_else(|| {
                    CommandError::Usage(format!("`{raw}` is not a category (income or expense)"))
                })?;
                draft.set_category(category);
            }
            None => {
                self.require_interactive("add [income|expense] [description] [amount]")?;
                let labels: Vec<_> = TransactionDraft::categories()
                    .iter()
                    .map(Category::to_string)
                    .collect();
                let index = Select::with_theme(&self.theme)
                    .with_prompt("Category")
                    .items(&labels)
                    .default(0)
                    .interact()?;
                draft.select_category(index);
            }
        }

        match args.get(1) {
            Some(label) => draft.set_label(*label),
            None => {
                self.require_interactive("add <category> <description> <amount>")?;
                let label: String = Input::with_theme(&self.theme)
                    .with_prompt("Description")
                    .interact_text()?;
                draft.set_label(label);
            }
        }

        match args.get(2) {
            Some(raw) => draft.set_amount(parse_amount(raw)?),
            None => {
                self.require_interactive("add <category> <description> <amount>")?;
                let raw: String = Input::with_theme(&self.theme)
                    .with_prompt("Amount")
                    .validate_with(|value: &String| -> Result<(), String> {
                        parse_amount(value).map(|_| ()).map_err(|err| err.to_string())
                    })
                    .interact_text()?;
                draft.set_amount(parse_amount(&raw)?);
            }
        }

        let record = draft.build()?;
        let message = format!(
            "Added {} `{}` ({})",
            record.category.as_str(),
            record.label,
            self.store.formatter().format_currency(record.amount)
        );
        self.store.record_transaction(record)?;
        output::success(message);
        Ok(())
    }

    fn remove(&mut self, args: &[&str]) -> Result<(), CommandError> {
        let [group, row] = args else {
            return Err(CommandError::Usage(
                "usage: remove <section> <row>".to_string(),
            ));
        };
        let position = TransactionPosition::new(parse_index(group)?, parse_index(row)?);
        let removed = self.store.remove_transaction(position)?;
        let dropped_section = self.store.remove_group_if_empty(position.group)?;
        output::success(format!("Removed `{}`", removed.label));
        if dropped_section {
            output::info(format!("Section {} is now empty and was removed", *group));
        }
        Ok(())
    }

    fn version(&self) {
        println!(
            "wallet_core {} ({} {})",
            env!("CARGO_PKG_VERSION"),
            env!("WALLET_BUILD_HASH"),
            env!("WALLET_BUILD_STATUS")
        );
        println!("built {}", env!("WALLET_BUILD_TIMESTAMP"));
        println!(
            "target {} [{}]",
            env!("WALLET_BUILD_TARGET"),
            env!("WALLET_BUILD_PROFILE")
        );
        println!("{}", env!("WALLET_BUILD_RUSTC"));
    }

    fn help(&self) {
        output::section("Commands");
        for (name, description) in COMMANDS {
            println!("  {name:<10} {description}");
        }
    }

    fn require_interactive(&self, usage: &str) -> Result<(), CommandError> {
        match self.mode {
            CliMode::Interactive => Ok(()),
            CliMode::Script => Err(CommandError::Usage(format!("usage: {usage}"))),
        }
    }
}

fn closest_command(input: &str) -> Option<&'static str> {
    COMMANDS
        .iter()
        .map(|(name, _)| (levenshtein(name, input), *name))
        .min_by_key(|(distance, _)| *distance)
        .filter(|(distance, _)| *distance <= 3)
        .map(|(_, name)| name)
}

/// Amounts are decimal currency units: `7` and `7.00` are the same value.
/// Fractions finer than the displayed precision are rejected.
fn parse_amount(raw: &str) -> Result<Decimal, CommandError> {
    let amount = Decimal::from_str(raw.trim())
        .map_err(|_| CommandError::Usage(format!("`{raw}` is not a valid amount")))?;
    if amount.normalize().scale() > CURRENCY_PRECISION {
        return Err(CommandError::Usage(format!(
            "`{raw}` has more than {CURRENCY_PRECISION} decimal places"
        )));
    }
    if amount > MAX_AMOUNT {
        return Err(CommandError::Usage(format!(
            "`{raw}` exceeds the largest allowed amount ({MAX_AMOUNT})"
        )));
    }
    Ok(amount)
}

/// Converts a one-based index as printed by `list`.
fn parse_index(raw: &str) -> Result<usize, CommandError> {
    match raw.parse::<usize>() {
        Ok(value) if value > 0 => Ok(value - 1),
        _ => Err(CommandError::Usage(format!(
            "`{raw}` is not a valid position (numbers start at 1)"
        ))),
    }
}

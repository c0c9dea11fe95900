//! Command-line front end for the field validator.
//! Validates single values, JSON form documents, or forms entered interactively.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inquire::{Confirm, InquireError, Password, PasswordDisplayMode, Select, Text};
use log::info;
use strum::IntoEnumIterator;

use fieldcheck::consts::STDIN_PATH;
use fieldcheck::form;
use fieldcheck::{Field, FieldKind, FieldValidator, FormReport, NamedField, ValidationResult, ValidatorConfig};

const EXIT_INVALID: u8 = 1;
const EXIT_ERROR: u8 = 2;

#[derive(Debug, Parser)]
#[command(name = "fieldcheck", version, about = "Validate form fields", long_about = None)]
struct Cli {
    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Override the minimum password length.
    #[arg(long, global = true)]
    min_password_length: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate a single value.
    Field {
        /// The raw input value. May start with '-'.
        #[arg(allow_hyphen_values = true)]
        value: String,
        /// Input type: text, email, password or anything else.
        #[arg(long, default_value = "text")]
        kind: String,
        /// Treat an empty value as invalid.
        #[arg(long)]
        required: bool,
    },
    /// Validate a JSON form document. Reads stdin when no path or "-" is given.
    Form {
        path: Option<PathBuf>,
    },
    /// Enter a form field by field, then validate it.
    Interactive,
}

type MenuExit = Option<()>;
const MENU_EXIT: MenuExit = None;
const MENU_LOOP: MenuExit = Some(());

/// A prompt that runs until it asks to stop
trait Menu {
    /// Runs one round. `None` ends the loop, `Some(())` runs it again.
    fn enter(&mut self) -> Result<MenuExit>;

    /// Runs rounds in a loop, reporting errors instead of stopping on them.
    /// A cancelled prompt ends the loop. A terminal that cannot prompt is
    /// returned as an error.
    fn enter_loop(&mut self) -> Result<()> {
        while let Some(result) = self.enter().transpose() {
            if let Err(error) = result {
                match prompt_failure(&error) {
                    Some(PromptFailure::Cancelled) => break,
                    Some(PromptFailure::NoTerminal) => {
                        return Err(error.context("Cannot prompt for input"))
                    }
                    None => eprintln!("Error: {error}"),
                }
            }
        }
        Ok(())
    }
}

enum PromptFailure {
    Cancelled,
    NoTerminal,
}

fn prompt_failure(error: &anyhow::Error) -> Option<PromptFailure> {
    match error.downcast_ref::<InquireError>()? {
        InquireError::OperationCanceled | InquireError::OperationInterrupted => {
            Some(PromptFailure::Cancelled)
        }
        InquireError::NotTTY | InquireError::IO(_) => Some(PromptFailure::NoTerminal),
        _ => None,
    }
}

/// Collects fields one at a time, showing each result as it is entered.
struct FormBuilder<'v> {
    validator: &'v FieldValidator,
    fields: Vec<NamedField>,
}

impl Menu for FormBuilder<'_> {
    fn enter(&mut self) -> Result<MenuExit> {
        let name = Text::new("Field name:").prompt()?;
        if self.fields.iter().any(|named| named.name == name) {
            println!("[!] A field named {name:?} already exists");
            return Ok(MENU_LOOP);
        }

        let kind = Select::new("Input type:", FieldKind::iter().collect()).prompt()?;
        let required = Confirm::new("Required?").with_default(false).prompt()?;
        let value = match kind {
            FieldKind::Password => Password::new("Value:")
                .without_confirmation()
                .with_display_mode(PasswordDisplayMode::Masked)
                .prompt()?,
            _ => Text::new("Value:").prompt()?,
        };

        let field = Field::new(value, kind, required);
        match self.validator.validate(&field) {
            ValidationResult::Valid => println!("[*] ok"),
            ValidationResult::Invalid(failure) => println!("[!] {failure}"),
        }
        self.fields.push(NamedField::new(name, field));

        if Confirm::new("Add another field?").with_default(true).prompt()? {
            Ok(MENU_LOOP)
        } else {
            Ok(MENU_EXIT)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("Error: {error:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    env_logger::builder()
        .filter_level(config.log_level())
        .init();

    match run(cli, &config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(EXIT_INVALID),
        Err(error) => {
            eprintln!("Error: {error:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}

fn load_config(cli: &Cli) -> Result<ValidatorConfig> {
    let config = ValidatorConfig::from_env().context("Failed to load configuration")?;
    match cli.min_password_length {
        Some(length) => config
            .with_min_password_length(length)
            .context("Invalid --min-password-length"),
        None => Ok(config),
    }
}

/// Returns whether everything validated
fn run(cli: Cli, config: &ValidatorConfig) -> Result<bool> {
    let validator = FieldValidator::new(config);

    match cli.command {
        Commands::Field { value, kind, required } => {
            let field = Field::new(value, FieldKind::from(kind.as_str()), required);
            let result = validator.validate(&field);
            print_field(&result, cli.json)?;
            Ok(result.is_valid())
        }
        Commands::Form { path } => {
            let document = match path {
                Some(path) if path.as_os_str() != STDIN_PATH => form::load_from_path(&path)
                    .with_context(|| format!("Failed to load form from {}", path.display()))?,
                _ => form::load_from_reader(io::stdin().lock())
                    .context("Failed to load form from stdin")?,
            };
            let report = validator.report(&document.fields);
            print_report(&report, cli.json)?;
            Ok(report.is_valid())
        }
        Commands::Interactive => {
            let mut builder = FormBuilder {
                validator: &validator,
                fields: Vec::new(),
            };
            builder.enter_loop()?;
            info!("Collected {} field(s) interactively", builder.fields.len());

            let report = validator.report(&builder.fields);
            print_report(&report, cli.json)?;
            Ok(report.is_valid())
        }
    }
}

fn print_field(result: &ValidationResult, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(result)?);
    } else {
        match result.message() {
            Some(message) => println!("invalid: {message}"),
            None => println!("valid"),
        }
    }
    Ok(())
}

fn print_report(report: &FormReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    for entry in report.fields() {
        match entry.result.message() {
            Some(message) => println!("{}: {message}", entry.name),
            None => println!("{}: ok", entry.name),
        }
    }
    if let Some(summary) = report.summary() {
        println!("\n{summary}");
    }
    Ok(())
}

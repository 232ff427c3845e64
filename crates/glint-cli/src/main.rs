//! `glint`: render ampersand-coded chat markup from the command line.
//!
//! ```text
//! glint "&6[Shop] &rWelcome, &l&bAlex"
//! echo "&cError: &7disk full" | glint --format legacy
//! glint --lang en_us.json --translate menu.title --format json "&e> "
//! ```

use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use clap::{Parser, ValueEnum};
use glint::{
    AnsiSerializer, ChatSerializer, Component, Context, LegacySerializer, MarkupConfig,
    MarkupParser, OutputMode, TextSerializer, Translations,
};

#[derive(Parser, Debug)]
#[command(name = "glint", version)]
#[command(about = "Render ampersand-coded chat markup as legacy codes, ANSI, plain text or chat JSON")]
struct Args {
    /// Markup to render. Reads stdin line by line when omitted.
    markup: Vec<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Ansi)]
    format: Format,

    /// Character introducing a format code
    #[arg(long)]
    control: Option<char>,

    /// Character making the next character literal
    #[arg(long)]
    escape: Option<char>,

    /// JSON file with parser settings (control, escape, palette)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON object mapping translation keys to text
    #[arg(long)]
    lang: Option<PathBuf>,

    /// Translation key appended after the markup (repeatable)
    #[arg(short, long = "translate", value_name = "KEY")]
    translate: Vec<String>,

    /// Replace true colors with the nearest named color
    #[arg(long)]
    no_true_color: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Format {
    /// `§` format codes
    Legacy,
    /// ANSI escapes when the terminal supports color
    Ansi,
    /// Text only
    Plain,
    /// Chat JSON
    Json,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let args = Args::parse();
    let parser = MarkupParser::new(markup_config(&args)?);
    let services = services(&args)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.markup.is_empty() && args.translate.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let component = build(&parser, &line, &[])?;
            writeln!(out, "{}", render(&args, &component, &services)?)?;
        }
    } else {
        let component = build(&parser, &args.markup.join(" "), &args.translate)?;
        writeln!(out, "{}", render(&args, &component, &services)?)?;
    }
    Ok(())
}

fn markup_config(args: &Args) -> Result<MarkupConfig> {
    let mut config = match &args.config {
        Some(path) => serde_json::from_str(&read(path)?)
            .with_context(|| format!("invalid parser config in {}", path.display()))?,
        None => MarkupConfig::default(),
    };
    if let Some(control) = args.control {
        config = config.control(control);
    }
    if let Some(escape) = args.escape {
        config = config.escape(escape);
    }
    Ok(config)
}

fn services(args: &Args) -> Result<Context> {
    let mut services = Context::new();
    if let Some(path) = &args.lang {
        let translations: Translations = serde_json::from_str(&read(path)?)
            .with_context(|| format!("invalid translation file {}", path.display()))?;
        log::debug!("loaded {} translations from {}", translations.len(), path.display());
        services.add_service(translations);
    }
    Ok(services)
}

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Parses `markup` and appends one translatable component per key.
fn build(parser: &MarkupParser, markup: &str, keys: &[String]) -> Result<Component> {
    let mut compound = parser
        .parse(markup)
        .with_context(|| format!("invalid markup {:?}", markup))?;
    for key in keys {
        compound.append(Component::translatable(key.as_str()));
    }
    Ok(compound.into())
}

fn render(args: &Args, component: &Component, services: &Context) -> Result<String> {
    let true_color = !args.no_true_color;
    let output = match args.format {
        Format::Legacy => LegacySerializer::new()
            .true_color(true_color)
            .serialize_with(component, services),
        Format::Ansi => AnsiSerializer::new(OutputMode::Auto).serialize_with(component, services),
        Format::Plain => AnsiSerializer::new(OutputMode::Text).serialize_with(component, services),
        Format::Json => ChatSerializer::new()
            .true_color(true_color)
            .to_json_with(component, services)
            .context("failed to encode chat JSON")?,
    };
    Ok(output)
}

use anyhow::{Context, Result, bail};
use context_help_config::Config;
use context_help_engine::help::{SyncCommand, SyncEvent, TooltipSync};
use context_help_engine::{Catalog, ContentResolver, LinkParsing, Segment, segment_with};
use std::{env, process};

const USAGE: &str = "[--raw] [--json] [--key] [--icons on|off] [--] <text-or-key>";

#[derive(Debug, Default, PartialEq)]
struct Args {
    /// Keep the content as one text segment.
    raw: bool,
    json: bool,
    /// Treat the content as a catalog key.
    key: bool,
    /// Persist the help icon switch.
    icons: Option<bool>,
    content: Option<String>,
}

fn parse_switch(value: Option<String>) -> Result<bool> {
    match value.as_deref() {
        Some("on") => Ok(true),
        Some("off") => Ok(false),
        Some(other) => bail!("--icons expects on or off, got {other}"),
        None => bail!("--icons expects on or off"),
    }
}

fn parse_args<I: IntoIterator<Item = String>>(args: I) -> Result<Args> {
    let mut parsed = Args::default();
    let mut options_done = false;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--" if !options_done => options_done = true,
            "--raw" if !options_done => parsed.raw = true,
            "--json" if !options_done => parsed.json = true,
            "--key" if !options_done => parsed.key = true,
            "--icons" if !options_done => parsed.icons = Some(parse_switch(args.next())?),
            flag if !options_done && flag.starts_with("--") => bail!("Unknown option: {flag}"),
            _ if parsed.content.is_some() => bail!("Expected a single text or key argument"),
            _ => parsed.content = Some(arg),
        }
    }

    if parsed.content.is_none() && parsed.icons.is_none() {
        bail!("Missing text or key argument");
    }
    Ok(parsed)
}

fn load_catalog(config: &Config) -> Result<Catalog> {
    let Some(catalog_path) = &config.catalog_path else {
        bail!(
            "--key needs a catalog_path in {}",
            Config::config_path().display()
        );
    };
    Catalog::load_from_path(catalog_path)
        .context("Could not load catalog for key lookup")
}

/// Clicks the help icon for `id` and checks the tooltip opens.
fn open_tooltip(config: &Config, id: &str) -> Result<()> {
    let mut store = config.help_store();
    if !store.show_icons() {
        bail!("Help icons are switched off; run with --icons on to enable them");
    }
    store.add(id);

    let mut sync = TooltipSync::new(id);
    match sync.dispatch(&mut store, SyncEvent::Click)? {
        Some(SyncCommand::OpenWidget) => {
            log::debug!("Opened tooltip for {id}");
            Ok(())
        }
        other => bail!("Tooltip for {id} did not open: {other:?}"),
    }
}

fn resolve(args: &Args, config: &Config, content: &str) -> Result<Vec<Segment>> {
    let parsing = if args.raw {
        LinkParsing::Disabled
    } else {
        config.link_parsing()
    };

    if args.key {
        open_tooltip(config, content)?;
        let catalog = load_catalog(config)?;
        let resolver = ContentResolver::new(catalog).with_link_parsing(parsing);
        Ok(resolver.resolve(content))
    } else {
        Ok(segment_with(content, parsing))
    }
}

fn render_plain(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| match segment {
            Segment::Text { value } => format!("text  {value:?}"),
            Segment::Link { text, href } => format!("link  {text:?} -> {href:?}"),
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn render(segments: &[Segment], json: bool) -> Result<String> {
    if json {
        Ok(serde_json::to_string_pretty(segments)?)
    } else {
        Ok(render_plain(segments))
    }
}

fn run(args: &Args) -> Result<String> {
    let mut config = match Config::load()? {
        Some(config) => {
            log::info!("Loaded config from {}", Config::config_path().display());
            config
        }
        None => {
            log::debug!("No config file found, using defaults");
            Config::default()
        }
    };

    let mut output = Vec::new();
    if let Some(icons) = args.icons {
        config.show_icons = icons;
        config.save().context("Could not save config")?;
        let state = if icons { "on" } else { "off" };
        log::info!("Help icons switched {state}");
        output.push(format!(
            "Help icons {state} ({})",
            Config::config_path().display()
        ));
    }

    if let Some(content) = &args.content {
        let segments = resolve(args, &config, content)?;
        log::debug!("Resolved {} segments", segments.len());
        output.push(render(&segments, args.json)?);
    }
    Ok(output.join("\n"))
}

fn main() {
    // Quiet by default; RUST_LOG overrides.
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    let program_name = env::args()
        .next()
        .unwrap_or_else(|| "context-help-cli".to_string());

    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!("Usage: {program_name} {USAGE}");
            process::exit(1);
        }
    };

    match run(&args) {
        Ok(output) => println!("{output}"),
        Err(e) => {
            log::error!("{e:#}");
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}

// SPDX-License-Identifier: MIT
//
// tincture: nine colors in, a themed file out.
//
// This is the command-line front end over the two library crates:
//
//   tincture-color → color values, CIE conversions, the contrast-aware mixer
//   tincture-theme → palette codec, role search, color tree, formats
//
// Every subcommand runs the same pipeline and stops at a different point:
//
//   palette → build (shades, roles, todo, semantic) → format → render
//                                                       │         │
//                                                     dump     render
//
// `roles` stops right after the role search.
//
// Logs go to stderr so they never mix with rendered output. The level is
// `warn` unless RUST_LOG or -v says otherwise.

use std::fmt::Write as _;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use tincture_theme::role::slot_name;
use tincture_theme::{
    Palette, RoleAssignment, SemanticConfig, ThemeConfig, assign_roles, build, format,
    render_palette,
};

// ─── Command line ───────────────────────────────────────────────────────────

#[derive(Debug, Parser)]
#[command(
    name = "tincture",
    about = "Expand a nine-color palette into a named color tree and render templates from it",
    version
)]
struct Cli {
    /// More logging on stderr: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Substitute {{ path.format }} tokens in a template.
    Render(RenderArgs),

    /// Print the formatted color tree as JSON.
    Dump(DumpArgs),

    /// Print which accent each hue role was given.
    Roles(RolesArgs),
}

#[derive(Debug, Clone, Default, Args)]
struct ConfigArgs {
    /// JSON file overriding shades, roles and the todo group.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// JSON semantic document used instead of the built-in one.
    #[arg(long, value_name = "FILE")]
    semantic: Option<PathBuf>,
}

#[derive(Debug, Args)]
struct RenderArgs {
    /// Nine 6-digit hex groups joined by '-' (background, foreground, c1..c7).
    palette: Palette,

    /// Template file; read from stdin when omitted.
    #[arg(short, long, value_name = "FILE")]
    template: Option<PathBuf>,

    /// Write here instead of stdout.
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Debug, Args)]
struct DumpArgs {
    /// Nine 6-digit hex groups joined by '-' (background, foreground, c1..c7).
    palette: Palette,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Debug, Args)]
struct RolesArgs {
    /// Nine 6-digit hex groups joined by '-' (background, foreground, c1..c7).
    palette: Palette,

    /// JSON file overriding the role targets or metric.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,
}

// ─── Setup ──────────────────────────────────────────────────────────────────

fn init_logging(verbose: u8) {
    let filter = match verbose {
        0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn load_config(args: &ConfigArgs) -> Result<ThemeConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let config = ThemeConfig::from_json(&read_file(path)?)
                .with_context(|| format!("invalid config file {}", path.display()))?;
            tracing::info!(path = %path.display(), "loaded config");
            config
        }
        None => ThemeConfig::default(),
    };
    if let Some(path) = &args.semantic {
        let semantic = SemanticConfig::from_json(&read_file(path)?)
            .with_context(|| format!("invalid semantic document {}", path.display()))?;
        tracing::info!(path = %path.display(), entries = semantic.len(), "loaded semantic document");
        config = config.with_semantic(semantic);
    }
    Ok(config)
}

// ─── Subcommands ────────────────────────────────────────────────────────────

fn dump(palette: &Palette, config: &ThemeConfig) -> Result<String> {
    let tree = build(palette, config).context("failed to build the color tree")?;
    let mut json = serde_json::to_string_pretty(&format(&tree))?;
    json.push('\n');
    Ok(json)
}

fn render_template(template: &str, palette: &Palette, config: &ThemeConfig) -> Result<String> {
    render_palette(template, palette, config).context("failed to build the color tree")
}

fn describe_roles(palette: &Palette, roles: &RoleAssignment) -> String {
    let mut out = String::new();
    for (role, slot) in roles.iter() {
        let _ = writeln!(
            out,
            "{:<8} {}  {}",
            role.name(),
            slot_name(slot),
            palette.accents[slot]
        );
    }
    let unused = roles.unused();
    let _ = writeln!(
        out,
        "{:<8} {}  {}",
        "unused",
        slot_name(unused),
        palette.accents[unused]
    );
    let _ = writeln!(out, "distance {}", roles.distance());
    out
}

fn write_output(path: Option<&Path>, text: &str) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("failed to write {}", path.display()))
        }
        None => io::stdout()
            .write_all(text.as_bytes())
            .context("failed to write to stdout"),
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Render(args) => {
            let config = load_config(&args.config)?;
            let template = match &args.template {
                Some(path) => read_file(path)?,
                None => {
                    let mut text = String::new();
                    io::stdin()
                        .read_to_string(&mut text)
                        .context("failed to read template from stdin")?;
                    text
                }
            };
            let rendered = render_template(&template, &args.palette, &config)?;
            tracing::info!(palette = %args.palette, bytes = rendered.len(), "rendered template");
            write_output(args.output.as_deref(), &rendered)
        }
        Commands::Dump(args) => {
            let config = load_config(&args.config)?;
            write_output(None, &dump(&args.palette, &config)?)
        }
        Commands::Roles(args) => {
            let config = load_config(&ConfigArgs {
                config: args.config,
                semantic: None,
            })?;
            let roles = assign_roles(&args.palette.accents, &config.roles);
            write_output(None, &describe_roles(&args.palette, &roles))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

// ─── Tests ──────────────────────────────────────────────────────────────────

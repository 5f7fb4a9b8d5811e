use std::{io::Write as _, path::PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "reveal", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the initial style, target overlay and inline CSS of a config.
    Style(StyleArgs),
    /// Replay a scripted page and print every style change.
    Replay(ReplayArgs),
}

#[derive(Parser, Debug)]
struct StyleArgs {
    /// Input config JSON (prop-style keys).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Reject out-of-range values instead of passing them through.
    #[arg(long)]
    strict: bool,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input scenario JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Emit the replay as JSON instead of text lines.
    #[arg(long)]
    json: bool,

    /// Write output to this file instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Style(args) => cmd_style(args),
        Command::Replay(args) => cmd_replay(args),
    }
}

fn cmd_style(args: StyleArgs) -> anyhow::Result<()> {
    let config = reveal::RevealConfig::from_path(&args.in_path)?;
    if args.strict {
        config
            .validate()
            .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    }

    let initial = reveal::InlineStyle {
        snapshot: config.initial_style(),
        transition: config.transition().css(),
        max_width: reveal::CONTAINER_MAX_WIDTH,
    };
    let target = reveal::InlineStyle {
        snapshot: config.initial_style().overlay(&config.target_patch()),
        ..initial.clone()
    };

    let mut out = std::io::stdout().lock();
    writeln!(out, "initial: {}", initial.css())?;
    writeln!(out, "target:  {}", target.css())?;
    writeln!(
        out,
        "trigger: {}",
        if config.on_scroll {
            format!("scroll, top < {} x viewport height", config.view_port)
        } else {
            format!("mount, after {}ms", config.schedule_delay_ms(true))
        }
    )?;
    if let Some(affine) = config.transform().to_affine() {
        writeln!(out, "affine:  {:?}", affine.as_coeffs())?;
    }
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let scenario = reveal::Scenario::from_path(&args.in_path)?;
    tracing::debug!(
        path = %args.in_path.display(),
        instances = scenario.instances.len(),
        events = scenario.events.len(),
        "loaded scenario"
    );
    let replay = scenario
        .replay()
        .with_context(|| format!("replay '{}'", args.in_path.display()))?;

    let text = if args.json {
        serde_json::to_string_pretty(&replay).context("serialize replay")?
    } else {
        render_text(&replay)
    };

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, text)
                .with_context(|| format!("write replay '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => {
            let mut out = std::io::stdout().lock();
            out.write_all(text.as_bytes())?;
        }
    }
    Ok(())
}

fn render_text(replay: &reveal::Replay) -> String {
    let mut s = String::new();
    for e in &replay.timeline {
        let css = e
            .style
            .declarations()
            .into_iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        s.push_str(&format!(
            "{:>8.1}ms  {:<12} {:<8} {:<21} {}\n",
            e.at_ms,
            replay.label(e.instance),
            format!("{:?}", e.cause).to_lowercase(),
            e.phase.name(),
            css
        ));
    }
    s.push_str(&format!("-- end at {}ms\n", replay.until_ms));
    for f in &replay.finals {
        match &f.style {
            Some(style) => s.push_str(&format!("{}: {} | {}\n", f.label, f.phase, style.css())),
            None => s.push_str(&format!("{}: {}\n", f.label, f.phase)),
        }
    }
    s
}

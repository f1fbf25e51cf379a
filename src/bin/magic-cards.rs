use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use magic_cards::{Command, ElementId, Session, SessionConfig};

/// Magic card board in the terminal
#[derive(Parser, Debug)]
#[command(name = "magic-cards")]
#[command(about = "Generate magic cards, click them for points")]
struct Args {
    /// JSON session config (seed, initial_cards, timing, ...)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// RNG seed (defaults to the config's seed, or the clock)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Cards placed on the board at start and after a reset
    #[arg(short, long)]
    initial_cards: Option<usize>,
}

fn load_config(args: &Args) -> anyhow::Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            SessionConfig::from_json(&json)?
        }
        None => {
            let nanos = SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_nanos() as u64)
                .unwrap_or_default();
            SessionConfig::new(nanos)
        }
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(count) = args.initial_cards {
        config.initial_cards = count;
    }
    Ok(config)
}

fn print_board(session: &Session, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "theme: {}  score: {}", session.theme(), session.board().score().value)?;
    for (position, (_, el)) in session.board().elements().enumerate() {
        writeln!(
            out,
            "  [{}] {} {:<24} {:<10} {}",
            position + 1,
            el.icon,
            el.title,
            el.power_label,
            el.description
        )?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> io::Result<()> {
    for command in Command::ALL {
        writeln!(out, "  {}  {}", command.key(), command.label())?;
    }
    writeln!(out, "  k N  click card N")?;
    writeln!(out, "  h N  hover card N")?;
    writeln!(out, "  q    quit")
}

/// Element at 1-based board position `arg`.
fn element_at(session: &Session, arg: &str) -> Option<ElementId> {
    let position: usize = arg.trim().parse().ok()?;
    session.board().order().get(position.checked_sub(1)?).copied()
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;
    tracing::info!(seed = config.seed, "starting session");

    let mut session = Session::new(config)?;
    session.initialize();
    session.run_until_idle();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_help(&mut out)?;
    print_board(&session, &mut out)?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let line = line.trim();

        if line == "q" {
            break;
        } else if let Some(arg) = line.strip_prefix("k ") {
            match element_at(&session, arg).and_then(|el| session.click(el)) {
                Some(delta) => writeln!(out, "+{}", delta)?,
                None => writeln!(out, "no card at {}", arg.trim())?,
            }
        } else if let Some(arg) = line.strip_prefix("h ") {
            if let Some(el) = element_at(&session, arg) {
                session.hover(el);
            }
        } else {
            for key in line.chars() {
                if session.handle_key(key).is_none() {
                    tracing::debug!(%key, "unbound key");
                }
            }
        }

        session.run_until_idle();
        print_board(&session, &mut out)?;
    }

    Ok(())
}

use std::io::{BufRead, Write};

use clap::Parser;
use othello_oracle::{EvaluatorConfig, MoveRequest, respond};
use tracing::warn;
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Answers one Othello move request per line of stdin.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "info")]
    log_level: LevelFilter,

    /// Below this many pieces the opening heuristic is used.
    #[arg(long, default_value_t = EvaluatorConfig::default().opening_until)]
    opening_until: u8,

    /// From this many pieces on the endgame heuristic is used.
    #[arg(long, default_value_t = EvaluatorConfig::default().endgame_from)]
    endgame_from: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    initialize_logging(args.log_level);
    let config = EvaluatorConfig::new(args.opening_until, args.endgame_from)?;

    // Requests arrive on stdin, replies go to stdout, logs to stderr.
    let stdin = std::io::stdin().lock();
    let mut stdout = std::io::stdout().lock();

    for line in stdin.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let reply = match MoveRequest::from_json(line.trim_end()) {
            Ok(mut request) => {
                request.config.get_or_insert(config);
                respond(&request).map(|reply| reply.to_string())
            }
            Err(err) => Err(err),
        };
        let text = reply.unwrap_or_else(|err| {
            warn!("{}", err);
            err.to_string()
        });
        writeln!(stdout, "{text}")?;
        stdout.flush()?;
    }
    Ok(())
}

fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .init();
}

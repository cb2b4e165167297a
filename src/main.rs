use anyhow::{Context, Result};
use degreeverify::{
    config::{Config, OutputFormat},
    fetch::HttpCsvSource,
    process::lookup::Record,
    render::{render, Display},
    Outcome, Verifier,
};
use serde::Serialize;
use std::{
    env,
    io::{self, BufRead},
    process::ExitCode,
};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Serialize)]
struct JsonReply<'a> {
    #[serde(flatten)]
    display: &'a Display,
    #[serde(skip_serializing_if = "Option::is_none")]
    record: Option<&'a Record>,
}

fn format_outcome(output: OutputFormat, outcome: &Outcome) -> Result<String> {
    let display = render(outcome);
    match output {
        OutputFormat::Html => Ok(display.to_fragment()),
        OutputFormat::Json => {
            let reply = JsonReply {
                display: &display,
                record: outcome.record(),
            };
            serde_json::to_string(&reply).context("encoding reply")
        }
    }
}

/// 0 when every submission verified, 1 otherwise, 2 when startup failed.
fn exit_status(result: &Result<bool>) -> u8 {
    match result {
        Ok(true) => 0,
        Ok(false) => 1,
        Err(_) => 2,
    }
}

fn main() -> ExitCode {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,degreeverify=info"));
    fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let result = run();
    if let Err(e) = &result {
        error!("{:#}", e);
    }
    ExitCode::from(exit_status(&result))
}

/// Returns whether every submission was verified.
fn run() -> Result<bool> {
    // ─── 2) configure source ─────────────────────────────────────────
    let config = Config::from_env().context("loading configuration")?;
    let source = HttpCsvSource::with_timeout(config.sheet_url.clone(), config.timeout)
        .context("building HTTP client")?;
    info!(url = %source.url(), timeout = ?config.timeout, "startup");
    let verifier = Verifier::new(source);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("starting runtime")?;

    // the info state goes to the log; stdout only gets the settled result
    let mut sink = |d: &Display| debug!(kind = ?d.kind, "{}", d.html);

    // ─── 3) one-shot or line-per-ID from stdin ───────────────────────
    if let Some(id) = env::args().nth(1) {
        let outcome = runtime.block_on(verifier.submit(&mut sink, &id));
        println!("{}", format_outcome(config.output, &outcome)?);
        return Ok(outcome.is_found());
    }

    let mut all_found = true;
    for line in io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let outcome = runtime.block_on(verifier.submit(&mut sink, &line));
        println!("{}", format_outcome(config.output, &outcome)?);
        all_found &= outcome.is_found();
    }
    Ok(all_found)
}

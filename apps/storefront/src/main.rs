use std::{
    fs,
    io::{self, BufRead},
    path::PathBuf,
    thread,
};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossbeam_channel::{bounded, Sender};
use serde::Serialize;
use shared::{
    domain::Rupees,
    protocol::{ReplayStep, StateSnapshot, UiCommand},
};
use storefront_core::{MemorySurface, NoopAnimation, Storefront, StorefrontConfig};
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod runtime;

use controller::{
    events::{parse_fields, parse_line, UiInput, HELP},
    orchestration::{apply_command, dispatch_ui_command},
};
use runtime::{run_loop, LoopOptions, TraceAnimation};

#[derive(Parser, Debug)]
#[command(name = "storefront", about = "Order modal and notification simulator")]
struct Cli {
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Orders three Herbal Teas on the wall clock and prints the final state.
    Demo {
        #[arg(long, default_value_t = 1.0)]
        speed: f64,
    },
    /// Replays a JSON array of commands on the virtual clock.
    Replay {
        path: PathBuf,
        /// Run every pending timer before printing the snapshot.
        #[arg(long)]
        settle: bool,
    },
    /// Reads commands from stdin; type `help` for the list.
    Interactive {
        #[arg(long, default_value_t = 50)]
        frame_ms: u64,
    },
}

#[derive(Serialize)]
struct ReplayReport {
    steps: Vec<ReplayStep>,
    snapshot: StateSnapshot,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();
    let settings = config::load_settings(&cli.config)?;

    match cli.command {
        Command::Demo { speed } => demo(settings, speed).await,
        Command::Replay { path, settle } => replay(settings, &path, settle),
        Command::Interactive { frame_ms } => interactive(settings, frame_ms).await,
    }
}

async fn demo(settings: StorefrontConfig, speed: f64) -> Result<()> {
    let mut storefront = Storefront::new(settings, TraceAnimation::default(), MemorySurface::new());
    let (cmd_tx, cmd_rx) = bounded(16);
    let mut status = String::new();

    let script = [
        UiCommand::OpenOrder {
            name: "Herbal Tea".into(),
            price: Rupees(199),
            original_price: Some(Rupees(249)),
        },
        UiCommand::ChangeQuantity { delta: 1 },
        UiCommand::ChangeQuantity { delta: 1 },
        UiCommand::SubmitOrder {
            fields: parse_fields(
                "fullName=Asha Verma phone=9876543210 address=12 MG Road city=Pune \
                 state=Maharashtra pincode=411001 paymentMethod=cod",
            ),
        },
    ];
    for cmd in script {
        dispatch_ui_command(&cmd_tx, cmd, &mut status);
    }
    drop(cmd_tx);
    if !status.is_empty() {
        anyhow::bail!(status);
    }

    let options = LoopOptions {
        speed,
        ..LoopOptions::default()
    };
    run_loop(&mut storefront, cmd_rx, options, |store, cmd, err| {
        if let Some(err) = err {
            eprintln!("{}: {err}", cmd.name());
        }
        println!("after {}:\n{}", cmd.name(), store.surface().dump());
    })
    .await;

    println!("{}", serde_json::to_string_pretty(&storefront.snapshot())?);
    Ok(())
}

fn replay(settings: StorefrontConfig, path: &PathBuf, settle: bool) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read replay file '{}'", path.display()))?;
    let commands: Vec<UiCommand> = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse replay file '{}'", path.display()))?;

    let mut storefront = Storefront::new(settings, NoopAnimation, MemorySurface::new());
    let steps = commands
        .iter()
        .map(|cmd| ReplayStep {
            command: cmd.name().to_string(),
            error: apply_command(&mut storefront, cmd).err(),
        })
        .collect();
    if settle {
        storefront.run_until_idle();
    }

    let report = ReplayReport {
        steps,
        snapshot: storefront.snapshot(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

async fn interactive(settings: StorefrontConfig, frame_ms: u64) -> Result<()> {
    let mut storefront = Storefront::new(settings, TraceAnimation::default(), MemorySurface::new());
    let (cmd_tx, cmd_rx) = bounded(64);

    println!("{HELP}");
    thread::Builder::new()
        .name("stdin-reader".into())
        .spawn(move || read_commands(cmd_tx))
        .context("failed to spawn stdin reader")?;

    let options = LoopOptions {
        frame: std::time::Duration::from_millis(frame_ms.max(1)),
        drain_on_disconnect: false,
        ..LoopOptions::default()
    };
    run_loop(&mut storefront, cmd_rx, options, |store, _cmd, err| {
        if let Some(err) = err {
            println!("! {}", err.message);
        }
        print!("{}", store.surface().dump());
    })
    .await;
    Ok(())
}

fn read_commands(cmd_tx: Sender<UiCommand>) {
    let mut status = String::new();
    for line in io::stdin().lock().lines() {
        let Ok(line) = line else {
            break;
        };
        match parse_line(&line) {
            Ok(Some(UiInput::Command(cmd))) => dispatch_ui_command(&cmd_tx, cmd, &mut status),
            // A zero advance re-renders without moving the clock.
            Ok(Some(UiInput::Show)) => {
                dispatch_ui_command(&cmd_tx, UiCommand::Advance { ms: 0 }, &mut status)
            }
            Ok(Some(UiInput::Help)) => println!("{HELP}"),
            Ok(Some(UiInput::Quit)) => break,
            Ok(None) => {}
            Err(err) => println!("! {err}"),
        }
        if !status.is_empty() {
            println!("! {status}");
            status.clear();
        }
    }
}

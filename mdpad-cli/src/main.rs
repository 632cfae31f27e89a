mod logger;
mod replay;
mod trace;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use mdpad::{Buttons, DeviceType, Pad, Port, StrobeCodes};
use std::fs;

use replay::ReplayBus;

#[derive(Parser)]
#[command(name = "mdpad-cli")]
#[command(about = "Mega Drive pad decoder tools")]
struct Cli {
    /// Print decoder traces to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a state word as MZYXSCBARLDU binary
    Format {
        /// State bits, decimal or 0x-prefixed hex
        bits: String,
    },
    /// Run the decoder against a captured bus trace
    Replay {
        /// Path to the trace file
        trace: String,
        #[arg(long, value_enum, default_value_t = PortArg::A)]
        port: PortArg,
        #[arg(long, value_enum, default_value_t = Mode::Auto)]
        mode: Mode,
        /// Number of transactions to run back to back
        #[arg(long, default_value_t = 1)]
        frames: usize,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PortArg {
    A,
    B,
}

impl From<PortArg> for Port {
    fn from(arg: PortArg) -> Self {
        match arg {
            PortArg::A => Port::A,
            PortArg::B => Port::B,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Detect, then read with the matching decoder
    Auto,
    /// Only detect the pad type
    Detect,
    /// Force the 3-button decoder
    Three,
    /// Force the 6-button decoder
    Six,
    /// Dump the six raw 6-button samples
    Raw,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match cli.command {
        Command::Format { bits } => {
            let state = parse_state(&bits)?;
            println!("{}", Buttons::BINARY_HEADER);
            println!("{}", state.to_binary());
        }
        Command::Replay {
            trace,
            port,
            mode,
            frames,
        } => {
            let contents =
                fs::read_to_string(&trace).with_context(|| format!("reading {}", trace))?;
            let steps = trace::parse_trace(&contents).context("parsing bus trace")?;

            let port = Port::from(port);
            let bus = ReplayBus::new(port, StrobeCodes::PPI_BSR, steps);
            let mut pad = Pad::new(bus, StrobeCodes::PPI_BSR);

            if mode != Mode::Raw && mode != Mode::Detect {
                println!("           {}", Buttons::BINARY_HEADER);
                println!("------------------------");
            }
            for _ in 0..frames {
                replay_frame(&mut pad, port, mode);
            }

            let bus = pad.bus();
            println!(
                "trace: {} of {} steps used, {} reads",
                bus.writes().min(bus.steps()),
                bus.steps(),
                bus.reads()
            );
            if bus.writes() > bus.steps() {
                eprintln!(
                    "warning: {} strobe writes ran past the end of the trace",
                    bus.writes() - bus.steps()
                );
            }
        }
    }

    Ok(())
}

/// One transaction, printed like the on-target demo's status line.
fn replay_frame(pad: &mut Pad<ReplayBus>, port: Port, mode: Mode) {
    match mode {
        Mode::Auto => {
            let kind = pad.detect(port);
            let state = match kind {
                DeviceType::Six => pad.read_six(port),
                DeviceType::Three | DeviceType::Legacy2 => pad.read_three(port),
            };
            println!("[{}][{}][{}]", port.label(), kind, state.to_binary());
        }
        Mode::Detect => {
            println!("[{}][{}]", port.label(), pad.detect(port));
        }
        Mode::Three => {
            let state = pad.read_three(port);
            println!(
                "[{}][{}][{}]",
                port.label(),
                DeviceType::Three,
                state.to_binary()
            );
        }
        Mode::Six => {
            let state = pad.read_six(port);
            println!(
                "[{}][{}][{}]",
                port.label(),
                DeviceType::Six,
                state.to_binary()
            );
        }
        Mode::Raw => {
            let raw = pad.read_six_raw(port);
            println!("[{}] samples {:02X?}", port.label(), raw.samples);
        }
    }
}

/// Parse a state word given as decimal or `0x` hex.
fn parse_state(text: &str) -> Result<Buttons> {
    let text = text.trim();
    let bits = match text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {
        Some(hex) => u16::from_str_radix(hex, 16),
        None => text.parse::<u16>(),
    }
    .with_context(|| format!("invalid state word '{}'", text))?;

    match Buttons::from_bits(bits) {
        Some(state) => Ok(state),
        None => bail!(
            "state word 0x{:04X} has bits outside {}",
            bits,
            Buttons::BINARY_HEADER
        ),
    }
}

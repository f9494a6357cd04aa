use anyhow::{Context, Result};
use clap::{ArgAction, Args, Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, trace};
use tracing_subscriber::EnvFilter;
use zab::core::initial_state;
use zab::oracle::{FailingOracle, TextOracle};
use zab::registry::Registry;
use zab::session::{apply_calls, catalog, GameConfig, OracleConfig, Session, TurnOutcome};

/// Work out what the Zab functions do from their history
#[derive(Parser)]
#[command(name = "zab", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a game, one stdin line per turn
    Play {
        /// Path to a TOML configuration file
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        /// Turn budget
        #[arg(long)]
        turns: Option<u32>,

        /// Pool of functions to draw from (comma separated)
        #[arg(long, value_delimiter = ',')]
        functions: Option<Vec<String>>,

        /// How many functions to offer
        #[arg(long)]
        pick: Option<usize>,

        /// Seed for function selection
        #[arg(long)]
        seed: Option<u64>,

        #[command(flatten)]
        oracle: OracleArgs,
    },
    /// Apply calls such as "mox(3)" to a fresh Zab and print the history
    Run {
        #[arg(long, default_value_t = 10)]
        turns: u32,

        /// Print the final state as JSON
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        oracle: OracleArgs,

        /// Calls to apply, in order
        #[arg(required = true)]
        calls: Vec<String>,
    },
    /// List the registered functions
    Functions,
}

#[derive(Args, Debug)]
struct OracleArgs {
    /// Program that answers oracle prompts on stdin/stdout
    #[arg(long)]
    oracle_cmd: Option<String>,

    /// Argument passed to the oracle program (repeatable)
    #[arg(long = "oracle-arg", allow_hyphen_values = true)]
    oracle_args: Vec<String>,
}

impl From<OracleArgs> for OracleConfig {
    fn from(args: OracleArgs) -> Self {
        OracleConfig {
            command: args.oracle_cmd,
            args: args.oracle_args,
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("zab started with verbosity level: {}", verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play {
            config,
            turns,
            functions,
            pick,
            seed,
            oracle,
        } => {
            let mut game = match &config {
                Some(path) => GameConfig::load(path)
                    .with_context(|| format!("Failed to load config {}", path.display()))?,
                None => GameConfig::default(),
            };
            if let Some(turns) = turns {
                game.turns = turns;
            }
            if let Some(functions) = functions {
                game.functions = functions;
            }
            if let Some(pick) = pick {
                game.pick = pick;
            }
            if seed.is_some() {
                game.seed = seed;
            }
            if oracle.oracle_cmd.is_some() {
                game.oracle = oracle.into();
            }
            play(&game)
        }
        Commands::Run {
            turns,
            json,
            oracle,
            calls,
        } => run(turns, json, OracleConfig::from(oracle).build(), &calls),
        Commands::Functions => {
            list_functions();
            Ok(())
        }
    }
}

fn play(config: &GameConfig) -> Result<()> {
    let registry = Registry::standard(config.oracle.build());
    let mut session = Session::new(registry, config).context("Failed to start session")?;

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    while !session.is_over() {
        println!("{}\n", session.briefing());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read response")?;

        match session.play_turn(&line)? {
            TurnOutcome::Applied { call, state } => println!("Action executed: {call}\n{state}\n"),
            TurnOutcome::Rejected { call, error } => println!("Error executing {call}: {error}\n"),
            TurnOutcome::NoAction => println!("No valid action found in response. Skipping turn.\n"),
        }
    }

    println!("GAME COMPLETE");
    println!("{}\n", session.final_prompt());
    print!("> ");
    io::stdout().flush()?;
    if let Some(guess) = lines.next() {
        let guess = guess.context("Failed to read final analysis")?;
        debug!(session = %session.id(), guess = %guess, "Final analysis received");
    }

    println!("\nActual function effects:");
    for (name, effect) in session.reveal() {
        println!("- {name}: {effect}");
    }
    Ok(())
}

fn run(turns: u32, json: bool, oracle: Arc<dyn TextOracle>, calls: &[String]) -> Result<()> {
    let registry = Registry::standard(oracle);
    let zab = apply_calls(&registry, initial_state(turns), calls)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&zab)?);
    } else {
        for line in zab.history().lines() {
            println!("{line}");
        }
        println!("{}", zab.describe());
    }
    Ok(())
}

fn list_functions() {
    let registry = Registry::standard(Arc::new(FailingOracle));
    for name in registry.names() {
        match catalog::lookup(name) {
            Some(info) => println!("{:<5} {} (e.g. {})", name, info.hint, info.example),
            None => println!("{name:<5} placeholder, never offered in games"),
        }
    }
}

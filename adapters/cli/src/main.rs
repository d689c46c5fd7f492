#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Headless command-line driver for the Kaiju simulation.
//!
//! Runs a scripted round for a bounded number of ticks, routing the AI
//! policy's intents into the world before each step, and prints a JSON
//! report with the final snapshot and the sound cues the round produced.

mod scenario;

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use kaiju_core::{snapshot::RoundSnapshot, Command, Event, GameMode, RoundState};
use kaiju_rendering::{audio, SpriteCatalog};
use kaiju_system_ai::BrawlerPolicy;
use kaiju_world::{apply, query, World};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use scenario::Scenario;
use serde::Serialize;

const DEFAULT_SEED: u64 = 7;
const DEFAULT_TICKS: u64 = 1800;

#[derive(Parser, Debug)]
#[command(name = "kaiju", about = "Runs headless Kaiju rampage rounds")]
struct Args {
    /// Scenario file providing defaults for the round setup.
    #[arg(long)]
    scenario: Option<PathBuf>,
    /// Player configuration for the round.
    #[arg(long, value_enum)]
    mode: Option<ModeArg>,
    /// Master seed for the world and AI sub-generators.
    #[arg(long)]
    seed: Option<u64>,
    /// Number of ticks to simulate.
    #[arg(long)]
    ticks: Option<u64>,
    /// Pretty-print the JSON report.
    #[arg(long)]
    pretty: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Solo,
    VersusAi,
    TwoPlayer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Solo => Self::Solo,
            ModeArg::VersusAi => Self::VersusAi,
            ModeArg::TwoPlayer => Self::TwoPlayer,
        }
    }
}

/// Outcome of a headless run, printed as JSON.
#[derive(Debug, Serialize)]
struct RunReport {
    ticks_simulated: u64,
    final_state: RoundState,
    score: u32,
    sound_cues: BTreeMap<&'static str, u32>,
    snapshot: RoundSnapshot,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let scenario = match &args.scenario {
        Some(path) => Scenario::load(path)?,
        None => Scenario::default(),
    };
    let mode: GameMode = args
        .mode
        .map(GameMode::from)
        .or(scenario.mode.map(GameMode::from))
        .unwrap_or(GameMode::VersusAi);
    let master_seed = args.seed.or(scenario.seed).unwrap_or(DEFAULT_SEED);
    let ticks = args.ticks.or(scenario.ticks).unwrap_or(DEFAULT_TICKS);

    // One master seed fans out into independent sub-seeds so the world and
    // the policy never share a generator.
    let mut seeder = ChaCha8Rng::seed_from_u64(master_seed);
    let world_seed: u64 = seeder.gen();
    let policy_seed: u64 = seeder.gen();

    let mut world = World::new();
    let mut events: Vec<Event> = Vec::new();
    let mut cue_counts: BTreeMap<&'static str, u32> = BTreeMap::new();

    // Headless runs load no sheets; the world falls back to declared
    // collision boxes, exactly as a windowed adapter without assets would.
    let catalog = SpriteCatalog::default();
    apply(
        &mut world,
        Command::ConfigureSprites {
            frames: catalog.frames(),
        },
        &mut events,
    );
    if let Some(viewport) = scenario.viewport {
        apply(
            &mut world,
            Command::ConfigureViewport {
                width: viewport.width,
                height: viewport.height,
            },
            &mut events,
        );
    }
    apply(
        &mut world,
        Command::StartRound {
            mode,
            seed: world_seed,
        },
        &mut events,
    );
    collect_cues(&mut events, &mut cue_counts);

    let mut policy = BrawlerPolicy::new(policy_seed);
    let mut intents: Vec<Command> = Vec::new();
    for _ in 0..ticks {
        if query::round_state(&world) != RoundState::Playing {
            break;
        }
        intents.clear();
        policy.handle(&query::monster_view(&world), &mut intents);
        for command in intents.drain(..) {
            apply(&mut world, command, &mut events);
        }
        apply(&mut world, Command::Tick, &mut events);
        collect_cues(&mut events, &mut cue_counts);
    }

    let report = RunReport {
        ticks_simulated: query::tick_index(&world),
        final_state: query::round_state(&world),
        score: query::score(&world),
        sound_cues: cue_counts,
        snapshot: query::round_snapshot(&world),
    };
    let rendered = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{rendered}");
    Ok(())
}

/// Drains the event buffer, tallying the sound cues a windowed adapter
/// would have played.
fn collect_cues(events: &mut Vec<Event>, cue_counts: &mut BTreeMap<&'static str, u32>) {
    for event in events.drain(..) {
        if let Some(cue) = audio::cue_for(&event) {
            log::debug!("sound cue: {}", cue.file_name());
            *cue_counts.entry(cue.file_name()).or_insert(0) += 1;
        }
    }
}

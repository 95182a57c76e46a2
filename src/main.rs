mod config;
mod engine;
mod generator;
mod morse;
mod session;
mod store;

use std::io::{self, BufRead, Lines, StdinLock, Write};
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::SmallRng;

use config::Config;
use engine::feedback::TrainerState;
use engine::scheduler::TextScheduler;
use generator::default_registry;
use session::player::{GlyphPlayer, MorsePlayer};
use session::round::RoundRecord;
use store::json_store::JsonStore;
use store::schema::{HistoryData, TrainerData};

#[derive(Parser)]
#[command(
    name = "cwdr",
    version,
    about = "Terminal Morse copy trainer with adaptive practice scheduling"
)]
struct Cli {
    #[arg(short, long, help = "Seed the scheduler for reproducible rounds")]
    seed: Option<u64>,

    #[arg(long, help = "Character speed in words per minute")]
    speed: Option<u32>,

    #[arg(long, help = "Maximum plays per round")]
    max_repeats: Option<u32>,

    #[arg(long, help = "Print per-item results and exit")]
    stats: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = Config::load()?;
    if let Some(speed) = cli.speed {
        config.speed_wpm = speed;
    }
    if let Some(max_repeats) = cli.max_repeats {
        config.max_repeats = max_repeats;
    }
    config.validate();

    let store = JsonStore::new()?;
    let data = store.load_trainer().unwrap_or_else(|| {
        eprintln!("warning: saved trainer state is unreadable, starting fresh");
        TrainerData::default()
    });
    let state = if data.needs_reset() {
        eprintln!("warning: saved trainer state has an old schema, starting fresh");
        TrainerState::default()
    } else {
        data.state
    };

    if cli.stats {
        print_stats(&state);
        return Ok(());
    }

    let rng = match cli.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let scheduler = TextScheduler::with_state(default_registry(), state, rng);

    if let Err(err) = run_session(scheduler, &store, &config) {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_session(mut scheduler: TextScheduler, store: &JsonStore, config: &Config) -> Result<()> {
    let mut history = store.load_history();
    let mut player = GlyphPlayer;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!(
        "cwdr: copy practice at {} wpm, {} Hz tone",
        config.speed_wpm, config.frequency_hz
    );
    println!("Copy each transmission, then judge yourself.");

    loop {
        let round = scheduler.generate_round()?;
        println!();
        player.play(&round.text)?;
        let mut listens: u32 = 1;

        // Hidden phase: the learner may replay until the cap, then reveal.
        loop {
            let Some(input) = prompt(&mut lines, "[r]epeat  [s]how  [q]uit > ")? else {
                return save(store, scheduler.state(), &history);
            };
            match input.as_str() {
                "r" => {
                    if listens < config.max_repeats {
                        thread::sleep(Duration::from_millis(config.replay_delay_ms));
                        player.play(&round.text)?;
                        listens += 1;
                    } else {
                        println!("no repeats left");
                    }
                }
                "s" => break,
                "q" => return save(store, scheduler.state(), &history),
                _ => {}
            }
        }

        println!("The text was: {}", round.text);

        let success = loop {
            let Some(input) = prompt(&mut lines, "Copied correctly? [y]es  [n]o  [q]uit > ")?
            else {
                return save(store, scheduler.state(), &history);
            };
            match input.as_str() {
                "y" => break true,
                "n" => break false,
                "q" => return save(store, scheduler.state(), &history),
                _ => {}
            }
        };

        scheduler.pattern_feedback(&round.pattern, success, listens)?;
        history.rounds.push(RoundRecord::new(&round, success, listens));
        save(store, scheduler.state(), &history)?;
    }
}

fn prompt(lines: &mut Lines<StdinLock<'_>>, message: &str) -> Result<Option<String>> {
    print!("{message}");
    io::stdout().flush()?;
    match lines.next() {
        Some(line) => Ok(Some(line?.trim().to_ascii_lowercase())),
        None => {
            println!();
            Ok(None)
        }
    }
}

fn save(store: &JsonStore, state: &TrainerState, history: &HistoryData) -> Result<()> {
    store.save_trainer(&TrainerData::snapshot(state))?;
    store.save_history(history)
}

fn print_stats(state: &TrainerState) {
    if state.repeaters.is_empty() && state.producers.is_empty() {
        println!("No results yet.");
        return;
    }
    println!("Repeats:");
    for (id, tracker) in &state.repeaters {
        println!(
            "  {id}: {:.2} ({}/{})",
            tracker.ratio(),
            tracker.success,
            tracker.total
        );
    }
    println!("Producers:");
    for (name, sizes) in &state.producers {
        println!("  {name}:");
        for (size, tracker) in sizes {
            println!(
                "    {size}: {:.2} ({}/{})",
                tracker.ratio(),
                tracker.success,
                tracker.total
            );
        }
    }
}

//! kennel-day: headless run of the dog pension for a few in-game days.
//!
//! Dogs roam, get hungry, walk to the shared bowl and eat.  Each day the
//! pension is paid according to how satisfied its dogs were, and buys a bowl
//! refill whenever the food runs low.

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use serde_json::json;

use kn_behavior::{BehaviorEvent, StateTag};
use kn_core::{DogId, Frame, KennelConfig};
use kn_pension::{DayRewards, Pension, PensionError};
use kn_sim::{KennelBuilder, KennelObserver};

#[derive(Parser, Debug)]
#[command(name = "kennel-day")]
#[command(about = "Run the dog pension simulation for a number of in-game days")]
struct Args {
    /// TOML configuration file (built-in defaults when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of in-game days to simulate
    #[arg(long, default_value_t = 3)]
    days: u64,

    /// Random seed (overrides the configuration)
    #[arg(long)]
    seed: Option<u64>,

    /// Price of a full bowl refill, paid from the pension's money
    #[arg(long, default_value_t = 150)]
    food_price: i64,

    /// Print every state change
    #[arg(long)]
    verbose: bool,

    /// Print a JSON summary instead of the table
    #[arg(long)]
    json: bool,
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct DayLog {
    verbose:      bool,
    quiet:        bool,
    meals:        u64,
    interrupted:  u64,
    transitions:  u64,
    satisfaction: f32,
    days:         Vec<DayRewards>,
}

impl KennelObserver for DayLog {
    fn on_dog_event(&mut self, frame: Frame, dog: DogId, event: &BehaviorEvent) {
        match event {
            BehaviorEvent::StateChanged { from, to } => {
                self.transitions += 1;
                if self.verbose && !self.quiet {
                    println!("{:>8}  {:<10} {from} -> {to}", frame.to_string(), dog.to_string());
                }
            }
            BehaviorEvent::MealStarted { .. } => self.meals += 1,
            BehaviorEvent::MealInterrupted => self.interrupted += 1,
            _ => {}
        }
    }

    fn on_frame_end(&mut self, _frame: Frame, satisfaction: f32) {
        self.satisfaction = satisfaction;
    }

    fn on_day_end(&mut self, day: u64, rewards: &DayRewards, pension: &Pension) {
        self.days.push(*rewards);
        if self.quiet {
            return;
        }
        println!(
            "day {:>2}: satisfaction {:>5.1}%  +${:<4} +{} prestige  -> {}",
            day + 1,
            rewards.satisfaction * 100.0,
            rewards.money,
            rewards.prestige,
            pension,
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Args::parse();

    let builder = match &args.config {
        Some(path) => KennelBuilder::from_file(path)?,
        None => KennelBuilder::new(KennelConfig::default()),
    };
    let builder = match args.seed {
        Some(seed) => builder.seed(seed),
        None => builder,
    };
    let mut kennel = builder.build()?;

    let frames_per_day = kennel.clock.frames_for_secs(kennel.config.sim.day_length_secs);
    if frames_per_day == 0 {
        anyhow::bail!("day_length_secs must be positive to run whole days");
    }

    if !args.json {
        println!("=== kennel-day: {} ===", kennel.pension);
        println!(
            "Dogs: {}  |  Days: {}  |  Seed: {}  |  {} frames/day",
            kennel.dog_count(),
            args.days,
            kennel.config.sim.seed,
            frames_per_day,
        );
        println!();
    }

    let mut log = DayLog { verbose: args.verbose, quiet: args.json, ..DayLog::default() };
    let mut refills = 0u32;
    let t0 = Instant::now();

    for _ in 0..args.days {
        kennel.run_frames(frames_per_day, &mut log)?;

        if kennel.bowl.quantity() < kennel.config.hunger.eat_cost as f32 {
            match kennel.pension.spend_money(args.food_price) {
                Ok(()) => {
                    kennel.refill_bowl();
                    refills += 1;
                }
                Err(PensionError::InsufficientFunds { balance, requested }) => {
                    eprintln!("cannot afford food: ${balance} < ${requested}");
                }
                Err(e @ PensionError::NegativeAmount { .. }) => return Err(e.into()),
            }
        }
    }
    let elapsed = t0.elapsed();

    if args.json {
        let dogs: Vec<_> = kennel
            .roster
            .iter()
            .map(|k| {
                json!({
                    "id":    k.dog.id().0,
                    "state": k.dog.state(),
                    "needs": k.dog.needs().needs().iter().map(|n| n.snapshot()).collect::<Vec<_>>(),
                })
            })
            .collect();
        let summary = json!({
            "pension":      kennel.pension.summary(),
            "days":         log.days,
            "meals":        log.meals,
            "interrupted":  log.interrupted,
            "transitions":  log.transitions,
            "refills":      refills,
            "satisfaction": log.satisfaction,
            "bowl":         kennel.bowl.quantity(),
            "dogs":         dogs,
        });
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  meals: {}  interrupted: {}  state changes: {}  refills: {}",
        log.meals, log.interrupted, log.transitions, refills
    );
    println!("  bowl: {}", kennel.bowl);
    println!();

    println!("{:<10} {:<12} {:>8}", "Dog", "State", "Hunger");
    println!("{}", "-".repeat(32));
    for k in kennel.roster.iter() {
        let hunger = k.dog.needs().hunger().map_or(0.0, |n| n.normalized());
        let state: StateTag = k.dog.state();
        println!("{:<10} {:<12} {:>7.1}%", k.dog.id().to_string(), state.name(), hunger * 100.0);
    }
    println!();
    println!("Final: {}", kennel.pension);

    Ok(())
}

//! Mini Golf headless runner
//!
//! Plays a course with the seeded aim bot and prints the scorecard.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use mini_golf::autoplay::{AimBot, run_course};
use mini_golf::consts::FPS;
use mini_golf::sim::GameState;
use mini_golf::{Course, Tuning};

#[derive(Parser)]
#[command(name = "mini-golf")]
#[command(about = "Play a mini golf course headlessly with a seeded aim bot")]
struct Args {
    /// Course JSON file (defaults to the built-in classic course)
    #[arg(long)]
    course: Option<PathBuf>,
    /// Tuning JSON file (missing fields keep their defaults)
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Seed for the aim bot
    #[arg(long, default_value_t = 1)]
    seed: u64,
    /// Give up after this many frames (defaults to ten simulated minutes)
    #[arg(long, default_value_t = u64::from(FPS) * 60 * 10)]
    max_frames: u64,
    /// Print the run summary as JSON
    #[arg(long)]
    json: bool,
}

fn load_tuning(path: Option<&PathBuf>) -> Result<Tuning> {
    let Some(path) = path else {
        return Ok(Tuning::default());
    };
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Tuning::from_json(&json).with_context(|| format!("loading tuning from {}", path.display()))
}

fn load_course(path: Option<&PathBuf>, tuning: &Tuning) -> Result<Course> {
    let Some(path) = path else {
        return Course::classic(tuning).context("building the classic course");
    };
    let json = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Course::from_json(&json, tuning)
        .with_context(|| format!("loading course from {}", path.display()))
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let tuning = load_tuning(args.tuning.as_ref())?;
    let course = load_course(args.course.as_ref(), &tuning)?;
    log::info!("Mini Golf starting: course '{}', seed {}", course.name, args.seed);

    let mut state = GameState::new(course, tuning);
    let mut bot = AimBot::new(args.seed);
    let summary = run_course(&mut state, &mut bot, args.seed, args.max_frames);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("Course: {} (seed {})", summary.course, summary.seed);
    println!("{}", summary.scorecard.summary());
    if let Some(best) = summary.scorecard.best_hole() {
        println!("Best hole: {} in {} strokes", best.hole + 1, best.strokes);
    }
    if summary.completed {
        println!("Good job! Finished in {} frames.", summary.frames);
    } else {
        println!(
            "Gave up on hole {} after {} strokes ({} frames).",
            summary.hole_reached + 1,
            summary.pending_strokes,
            summary.frames
        );
    }

    Ok(())
}

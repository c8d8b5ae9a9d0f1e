//! `climb`: walk, count and rank the mountains of a trail from the terminal.
//!
//! Without a subcommand, the demo trail is printed together with the walk of every personality.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use climb_api::climb::{
    MountainManagerSupport, OrganiserSupport, TrailPathSupport, TrailWalkSupport,
};
use climb_api::personality::{BottomWalker, LazyWalker, TopWalker, WalkerPersonality};
use climb_api::types::Mountain;
use climb_sol::c_trail::Trail;
use climb_sol::e_mountain_manager::MountainManager;
use climb_sol::g_mountain_organiser::MountainOrganiser;
use climb_sol::logging;
use climb_sol::trail_file::{demo_trail, load_trail, save_trail};

#[derive(Parser)]
#[command(name = "climb", version, about = "Walk, count and rank the mountains of a trail")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Print a trail, one mountain per line.
    Show {
        /// Trail file (JSON, or bincode if it ends in `.bin`).
        trail: PathBuf,
    },
    /// Let a walker follow a trail and list the mountains it climbs.
    Walk {
        trail: PathBuf,
        /// How the walker picks a branch at every split.
        #[arg(short, long, value_enum, default_value_t = Personality::Top)]
        personality: Personality,
    },
    /// List every walk through a trail that climbs exactly K mountains.
    Paths {
        trail: PathBuf,
        #[arg(short)]
        k: usize,
    },
    /// Rank every mountain of a trail by length.
    Rank { trail: PathBuf },
    /// Group every mountain of a trail by difficulty level.
    Groups { trail: PathBuf },
    /// Rewrite a trail file in another format, chosen by the output extension.
    Convert { input: PathBuf, output: PathBuf },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Personality {
    Top,
    Bottom,
    Lazy,
}

fn main() {
    logging::init();
    if let Err(err) = run() {
        eprintln!("{:#}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        None => cmd_demo(),
        Some(Command::Show { trail }) => cmd_show(&trail),
        Some(Command::Walk { trail, personality }) => cmd_walk(&trail, personality),
        Some(Command::Paths { trail, k }) => cmd_paths(&trail, k),
        Some(Command::Rank { trail }) => cmd_rank(&trail),
        Some(Command::Groups { trail }) => cmd_groups(&trail),
        Some(Command::Convert { input, output }) => cmd_convert(&input, &output),
    }
}

fn read(path: &Path) -> Result<Trail> {
    load_trail(path).with_context(|| format!("read trail {}", path.display()))
}

fn walk_with<P: WalkerPersonality + Default>(trail: &Trail) -> Vec<Mountain> {
    let mut walker = P::default();
    trail.follow_path(&mut walker);
    walker.mountains().to_vec()
}

fn walk(trail: &Trail, personality: Personality) -> Vec<Mountain> {
    match personality {
        Personality::Top => walk_with::<TopWalker>(trail),
        Personality::Bottom => walk_with::<BottomWalker>(trail),
        Personality::Lazy => walk_with::<LazyWalker>(trail),
    }
}

fn names(mountains: &[Mountain]) -> String {
    if mountains.is_empty() {
        return "(no mountains)".to_string();
    }
    mountains
        .iter()
        .map(|m| m.name.as_str())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn cmd_demo() -> Result<()> {
    let trail = demo_trail();
    print!("{}", trail);
    println!();
    for personality in [Personality::Top, Personality::Bottom, Personality::Lazy].iter() {
        println!("{:?}: {}", personality, names(&walk(&trail, *personality)));
    }
    Ok(())
}

fn cmd_show(path: &Path) -> Result<()> {
    print!("{}", read(path)?);
    Ok(())
}

fn cmd_walk(path: &Path, personality: Personality) -> Result<()> {
    let trail = read(path)?;
    for mountain in walk(&trail, personality) {
        println!("{}", mountain);
    }
    Ok(())
}

fn cmd_paths(path: &Path, k: usize) -> Result<()> {
    let trail = read(path)?;
    let paths = trail.length_k_paths(k);
    for p in &paths {
        println!("{}", names(p));
    }
    println!("{} path(s) with {} mountain(s)", paths.len(), k);
    Ok(())
}

fn cmd_rank(path: &Path) -> Result<()> {
    let trail = read(path)?;
    let mut organiser = MountainOrganiser::new();
    organiser.add_mountains(trail.collect_all_mountains());
    for mountain in organiser.mountains() {
        let rank = organiser
            .cur_position(mountain)
            .with_context(|| format!("rank {}", mountain.name))?;
        println!("{:>3}. {}", rank + 1, mountain);
    }
    Ok(())
}

fn cmd_groups(path: &Path) -> Result<()> {
    let trail = read(path)?;
    let mut manager = MountainManager::new().context("create mountain manager")?;
    for mountain in trail.collect_all_mountains() {
        let name = mountain.name.clone();
        manager
            .add_mountain(mountain)
            .with_context(|| format!("add {}", name))?;
    }
    for group in manager.group_by_difficulty() {
        if let Some(first) = group.first() {
            println!("difficulty {}: {}", first.difficulty_level, names(&group));
        }
    }
    Ok(())
}

fn cmd_convert(input: &Path, output: &Path) -> Result<()> {
    let trail = read(input)?;
    save_trail(output, &trail).with_context(|| format!("write trail {}", output.display()))?;
    println!("{} -> {}", input.display(), output.display());
    Ok(())
}

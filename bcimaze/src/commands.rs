use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use bcimaze_control::{ControllerKind, HeldKeys, LogSink, Session, SessionSummary};
use bcimaze_level::loader::MAZE_EXTENSION;
use bcimaze_level::{GenConfig, Level, LevelLoader, LevelPool, MazeGen, Tile};
use bcimaze_paths::Router;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{info, warn};

pub fn rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Generate `count` mazes into `out_dir`, named `random-<n>.maze`.
pub fn generate(
    mapgen: &mut MazeGen<StdRng>,
    cfg: &GenConfig,
    out_dir: &Path,
    count: usize,
) -> Result<Vec<Level>> {
    std::fs::create_dir_all(out_dir)
        .with_context(|| format!("failed to create {}", out_dir.display()))?;
    let mut router = Router::default();
    let mut levels = Vec::with_capacity(count);
    for n in 0..count {
        let (level, report) = mapgen
            .generate_with_report(cfg)
            .context("failed to generate maze")?;
        if !report.is_complete() {
            warn!(unconnected = report.unconnected.len(), "maze is only partly connected");
        }
        let path = out_dir.join(format!("random-{n}.{MAZE_EXTENSION}"));
        level
            .save(&path, &mut router)
            .with_context(|| format!("failed to save {}", path.display()))?;
        println!("{} ({}x{}) -> {}", level.name, level.width(), level.height(), path.display());
        levels.push(level);
    }
    Ok(levels)
}

pub fn list(dir: &Path) -> Result<()> {
    let pool = LevelPool::from_dir(dir)
        .with_context(|| format!("failed to load levels from {}", dir.display()))?;
    if pool.is_empty() {
        println!("no levels in {}", dir.display());
    }
    for (i, level) in pool.iter().enumerate() {
        println!("{i:>3}  {:<32} {}x{}", level.name, level.width(), level.height());
    }
    Ok(())
}

pub fn annotate(input: &Path, output: &Path) -> Result<()> {
    let level = LevelLoader::default()
        .load_file(input)
        .with_context(|| format!("failed to load {}", input.display()))?;
    level
        .save(output, &mut Router::default())
        .with_context(|| format!("failed to save {}", output.display()))?;
    info!(name = %level.name, output = %output.display(), "annotated");
    Ok(())
}

pub struct PlayOptions<'a> {
    pub level_dir: Option<&'a Path>,
    pub level: usize,
    pub controller: ControllerKind,
    pub annotate: bool,
    pub max_ticks: u64,
}

pub fn play(
    mapgen: &mut MazeGen<StdRng>,
    cfg: &GenConfig,
    opts: &PlayOptions<'_>,
) -> Result<SessionSummary> {
    let pool = match opts.level_dir {
        Some(dir) => LevelPool::from_dir(dir)
            .with_context(|| format!("failed to load levels from {}", dir.display()))?,
        None => {
            let mut pool = LevelPool::new();
            pool.generate(mapgen, cfg).context("failed to generate maze")?;
            pool
        }
    };
    let mut level = pool
        .checkout(opts.level)
        .with_context(|| format!("no level {} to play", opts.level))?;
    if opts.annotate {
        level = level.annotate(&mut Router::default());
    }

    if opts.controller.is_manual() {
        warn!(controller = %opts.controller, "no keys are held in headless play");
    }
    if opts.controller == ControllerKind::AutoPilot && level.count(Tile::Route) == 0 {
        bail!("the auto-pilot follows route tiles; pass --annotate or play an annotated level");
    }

    info!(name = %level.name, controller = %opts.controller, "playing");
    let controller = opts
        .controller
        .build(Rc::new(HeldKeys::new()), Rc::new(LogSink));
    let mut session = Session::new(level, controller);
    let summary = session.run(opts.max_ticks);
    println!(
        "{}: {} after {} move(s) in {} tick(s)",
        session.level().name,
        if summary.reached_goal { "goal reached" } else { "goal not reached" },
        summary.moves,
        summary.ticks
    );
    Ok(summary)
}

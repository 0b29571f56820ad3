//! Burden sandbox
//!
//! Generates a world, then replays a fixed input script (walk, jump, break,
//! place, fly) at a 60 Hz step against the headless mesh backend and logs
//! what happened.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p burden-sandbox -- [OPTIONS]
//! ```
//!
//! Run with `--help` for the option list. `RUST_LOG` controls log verbosity
//! (`RUST_LOG=debug` shows block edits and remeshes).

mod args;
mod script;

use anyhow::Context;
use burden_game::Game;
use burden_world::HeadlessBackend;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::args::{print_help, SandboxArgs};

const FRAME_DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = SandboxArgs::parse(std::env::args().skip(1))?;
    if args.help {
        print_help();
        return Ok(());
    }
    for arg in &args.ignored {
        warn!("ignoring unknown argument {arg}");
    }

    info!(
        "seed {}, {}x{} chunks, render distance {}, {} frames",
        args.seed, args.world_size, args.world_size, args.render_distance, args.frames
    );

    let mut game = Game::new(args.game_config(), HeadlessBackend::new())
        .context("failed to create game")?;

    let mut total_drawn = 0usize;
    let mut targeted_frames = 0u64;
    for frame in 0..args.frames {
        script::apply(frame, game.input_mut());
        let report = game.frame(FRAME_DT);

        total_drawn += report.chunks_drawn;
        if let Some(target) = report.target {
            targeted_frames += 1;
            debug!("frame {frame}: targeting {} at {:.2}", target.voxel, target.distance);
        }
        game.world_mut().backend_mut().take_draws();
    }

    let stats = game.world().backend().stats();
    let camera = game.camera();
    info!(
        "simulated {} frames: {} chunk draws, {} frames with a target",
        game.frame_number(),
        total_drawn,
        targeted_frames
    );
    info!(
        "meshes: {} created, {} uploads, {} live",
        stats.created,
        stats.uploads,
        game.world().backend().live_meshes()
    );
    info!(
        "player at {:.2} ({:?}), holding block {}",
        camera.position,
        camera.mode,
        game.controller().selected_block().0
    );

    Ok(())
}

//! Command-line options.

use burden_core::{Error, Result};
use burden_game::GameConfig;
use burden_world::{TerrainConfig, WorldConfig, WorldSeed};

/// Sandbox options, parsed by hand from the argument list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SandboxArgs {
    pub seed: WorldSeed,
    pub world_size: i32,
    pub render_distance: i32,
    pub frames: u64,
    pub help: bool,
    /// Arguments that were not recognized, in order.
    pub ignored: Vec<String>,
}

impl Default for SandboxArgs {
    fn default() -> Self {
        let world = WorldConfig::default();
        Self {
            seed: TerrainConfig::default().seed,
            world_size: world.world_size,
            render_distance: world.render_distance,
            frames: 360,
            help: false,
            ignored: Vec::new(),
        }
    }
}

impl SandboxArgs {
    /// Parse arguments, excluding the program name.
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "-h" | "--help" => parsed.help = true,
                "--seed" => parsed.seed = value(&arg, args.next())?,
                "--world-size" => parsed.world_size = value(&arg, args.next())?,
                "--render-distance" => parsed.render_distance = value(&arg, args.next())?,
                "--frames" => parsed.frames = value(&arg, args.next())?,
                other => parsed.ignored.push(other.to_string()),
            }
        }

        Ok(parsed)
    }

    pub fn game_config(&self) -> GameConfig {
        GameConfig::default()
            .with_world(
                WorldConfig::default()
                    .with_world_size(self.world_size)
                    .with_render_distance(self.render_distance),
            )
            .with_terrain(TerrainConfig::default().with_seed(self.seed))
    }
}

fn value<T: std::str::FromStr>(name: &str, raw: Option<String>) -> Result<T> {
    let raw = raw.unwrap_or_default();
    raw.parse().map_err(|_| Error::InvalidArgument {
        name: name.to_string(),
        value: raw,
    })
}

pub fn print_help() {
    eprintln!(
        "Burden sandbox: generates a world and replays a scripted play session headlessly

USAGE:
    cargo run -p burden-sandbox -- [OPTIONS]

OPTIONS:
    --seed <N>              Terrain seed (default: 0)
    --world-size <N>        Chunks per side of the world, 1-256 (default: 5)
    --render-distance <N>   Chunk render distance (default: 8)
    --frames <N>            Frames to simulate at 60 Hz (default: 360)
    -h, --help              Print this help message

ENVIRONMENT VARIABLES:
    RUST_LOG                Set log level (e.g., info, debug, trace)"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<SandboxArgs> {
        SandboxArgs::parse(args.iter().map(|s| (*s).to_string()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args, SandboxArgs::default());
        assert_eq!(args.world_size, 5);
        assert_eq!(args.render_distance, 8);
        assert!(args.game_config().validate().is_ok());
    }

    #[test]
    fn all_options() {
        let args = parse(&[
            "--seed",
            "42",
            "--world-size",
            "3",
            "--render-distance",
            "2",
            "--frames",
            "10",
            "-h",
        ])
        .unwrap();
        assert_eq!(args.seed, 42);
        assert_eq!(args.world_size, 3);
        assert_eq!(args.render_distance, 2);
        assert_eq!(args.frames, 10);
        assert!(args.help);

        let config = args.game_config();
        assert_eq!(config.world.world_size, 3);
        assert_eq!(config.terrain.seed, 42);
    }

    #[test]
    fn malformed_value() {
        let err = parse(&["--world-size", "big"]).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidArgument {
                name: "--world-size".into(),
                value: "big".into(),
            }
        );
    }

    #[test]
    fn missing_value() {
        assert!(matches!(
            parse(&["--frames"]),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn unknown_arguments_are_skipped() {
        let args = parse(&["--fullscreen", "--seed", "7", "extra"]).unwrap();
        assert_eq!(args.seed, 7);
        assert_eq!(args.ignored, vec!["--fullscreen".to_string(), "extra".to_string()]);
    }
}

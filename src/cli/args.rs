//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Stages packaged assets and launches the renderer over them
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: pge.toml)
    #[arg(short = 'C', long, global = true, default_value = "pge.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Copy the asset tree into the deployment root and exit
    #[command(visible_alias = "d")]
    Deploy {
        #[command(flatten)]
        args: DeployArgs,
    },

    /// Deploy assets, then start the renderer and read host events from stdin
    #[command(visible_alias = "r")]
    Run {
        #[command(flatten)]
        args: DeployArgs,

        /// Resolution scale: 0 logical, 1 native, other positive values custom
        #[arg(long, allow_negative_numbers = true)]
        scale: Option<f32>,
    },
}

/// Shared deployment arguments for Deploy and Run commands
#[derive(clap::Args, Debug, Clone, Default)]
pub struct DeployArgs {
    /// Directory served as the packaged asset store
    #[arg(short = 's', long, value_hint = clap::ValueHint::DirPath)]
    pub source: Option<PathBuf>,

    /// App-private files directory receiving the deployment root
    #[arg(short = 'f', long = "files-dir", value_hint = clap::ValueHint::DirPath)]
    pub files_dir: Option<PathBuf>,

    /// Copy buffer size in bytes
    #[arg(short = 'b', long = "buffer-size")]
    pub buffer_size: Option<usize>,
}

impl Cli {
    pub fn deploy_args(&self) -> &DeployArgs {
        match &self.command {
            Commands::Deploy { args } | Commands::Run { args, .. } => args,
        }
    }

    pub fn scale(&self) -> Option<f32> {
        match &self.command {
            Commands::Run { scale, .. } => *scale,
            Commands::Deploy { .. } => None,
        }
    }

    pub const fn is_run(&self) -> bool {
        matches!(self.command, Commands::Run { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deploy() {
        let cli = Cli::try_parse_from(["pge-runner", "deploy", "--source", "res", "-b", "64"]).unwrap();
        assert!(!cli.is_run());
        let args = cli.deploy_args();
        assert_eq!(args.source, Some(PathBuf::from("res")));
        assert_eq!(args.buffer_size, Some(64));
        assert!(args.files_dir.is_none());
        assert_eq!(cli.scale(), None);
        assert_eq!(cli.config, PathBuf::from("pge.toml"));
    }

    #[test]
    fn test_parse_run_with_scale() {
        let cli = Cli::try_parse_from([
            "pge-runner",
            "--verbose",
            "run",
            "--files-dir",
            "/tmp/app",
            "--scale",
            "1.5",
        ])
        .unwrap();
        assert!(cli.is_run());
        assert!(cli.verbose);
        assert_eq!(cli.scale(), Some(1.5));
        assert_eq!(cli.deploy_args().files_dir, Some(PathBuf::from("/tmp/app")));
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["pge-runner", "run", "-C", "other.toml", "--color", "never"]).unwrap();
        assert_eq!(cli.config, PathBuf::from("other.toml"));
        assert_eq!(cli.color, ColorChoice::Never);
    }

    #[test]
    fn test_scale_only_on_run() {
        assert!(Cli::try_parse_from(["pge-runner", "deploy", "--scale", "1"]).is_err());
    }
}

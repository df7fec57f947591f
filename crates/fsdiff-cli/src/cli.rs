use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "fsdiff",
    about = "Compare two directory trees by size and modification time",
    version,
)]
pub struct Cli {
    /// Source tree (the reference side)
    pub source: PathBuf,

    /// Destination tree (checked for staleness against the source)
    pub dest: PathBuf,

    #[arg(short, long)]
    pub verbose: bool,

    #[arg(long, default_value = "text")]
    pub format: OutputFormat,

    /// Walk both trees concurrently
    #[arg(long)]
    pub parallel: bool,

    /// Apply the size/mtime check to directories too
    #[arg(long)]
    pub compare_dirs: bool,

    /// TOML file with diff settings; flags override it
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_positional_roots() {
        let cli = Cli::try_parse_from(["fsdiff", "src", "dst"]).unwrap();
        assert_eq!(cli.source, PathBuf::from("src"));
        assert_eq!(cli.dest, PathBuf::from("dst"));
        assert!(!cli.verbose);
        assert!(!cli.parallel);
        assert!(!cli.compare_dirs);
        assert!(cli.config.is_none());
        assert!(matches!(cli.format, OutputFormat::Text));
    }

    #[test]
    fn missing_dest_is_rejected() {
        assert!(Cli::try_parse_from(["fsdiff", "src"]).is_err());
    }

    #[test]
    fn parse_json_format() {
        let cli = Cli::try_parse_from(["fsdiff", "--format", "json", "a", "b"]).unwrap();
        assert!(matches!(cli.format, OutputFormat::Json));
    }

    #[test]
    fn parse_flags() {
        let cli = Cli::try_parse_from([
            "fsdiff",
            "-v",
            "--parallel",
            "--compare-dirs",
            "--config",
            "fsdiff.toml",
            "a",
            "b",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert!(cli.parallel);
        assert!(cli.compare_dirs);
        assert_eq!(cli.config, Some(PathBuf::from("fsdiff.toml")));
    }

    #[test]
    fn unknown_format_is_rejected() {
        assert!(Cli::try_parse_from(["fsdiff", "--format", "xml", "a", "b"]).is_err());
    }
}

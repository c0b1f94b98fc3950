use clap::Parser;

/// Render Transit sequence diagrams to SVG.
#[derive(Debug, Clone, Parser)]
#[command(name = "transit", version, about)]
pub struct Args {
    /// Path to the sequence diagram source file
    pub input: String,

    /// Path of the SVG file to write
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["transit", "flow.seq"]).unwrap();
        assert_eq!(args.input, "flow.seq");
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.config, None);
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn test_all_options() {
        let args = Args::try_parse_from([
            "transit",
            "flow.seq",
            "-o",
            "flow.svg",
            "--config",
            "my.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.output, "flow.svg");
        assert_eq!(args.config.as_deref(), Some("my.toml"));
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["transit"]).is_err());
    }
}

//! CLI argument definitions using clap derive macros.

use clap::{Parser, ValueEnum};
use shadcn_mdc::{AverageAlgorithm, AverageOptions, FetchConfig, ResolverConfig};
use std::time::Duration;

/// Derive light and dark shadcn themes from a color or an image
#[derive(Parser, Debug)]
#[command(name = "shadcn-mdc", about, version)]
pub struct Cli {
    /// Hex color (#3b82f6), image URL, or path to a local image
    pub input: String,

    /// Corner radius, strictly between 0 and 1
    #[arg(short, long, default_value_t = 0.5, allow_negative_numbers = true)]
    pub radius: f64,

    /// Output format
    #[arg(short, long, default_value = "json")]
    pub format: OutputFormat,

    /// Give up on remote images after this many seconds
    #[arg(long, env = "SHADCN_MDC_TIMEOUT")]
    pub timeout: Option<u64>,

    /// How image pixels are averaged
    #[arg(long, default_value = "sqrt")]
    pub algorithm: Algorithm,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    /// Theme as JSON
    #[default]
    Json,
    /// `globals.css` variable blocks
    Css,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum Algorithm {
    /// Root mean square of each channel
    #[default]
    Sqrt,
    /// Arithmetic mean of each channel
    Simple,
}

impl From<Algorithm> for AverageAlgorithm {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Sqrt => AverageAlgorithm::Sqrt,
            Algorithm::Simple => AverageAlgorithm::Simple,
        }
    }
}

impl Cli {
    /// Resolver configuration assembled from the flags
    pub fn resolver_config(&self) -> ResolverConfig {
        let mut fetch = FetchConfig::default();
        if let Some(secs) = self.timeout {
            fetch = fetch.with_timeout(Duration::from_secs(secs));
        }
        ResolverConfig::default()
            .with_fetch(fetch)
            .with_average(AverageOptions::default().with_algorithm(self.algorithm.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["shadcn-mdc", "#3b82f6"]).unwrap();
        assert_eq!(cli.input, "#3b82f6");
        assert_eq!(cli.radius, 0.5);
        assert!(matches!(cli.format, OutputFormat::Json));
        assert!(!cli.verbose);

        let config = cli.resolver_config();
        assert_eq!(config.average.algorithm, AverageAlgorithm::Sqrt);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::try_parse_from([
            "shadcn-mdc",
            "logo.png",
            "--radius",
            "0.3",
            "--format",
            "css",
            "--timeout",
            "7",
            "--algorithm",
            "simple",
            "-v",
        ])
        .unwrap();

        assert_eq!(cli.radius, 0.3);
        assert!(matches!(cli.format, OutputFormat::Css));
        assert!(cli.verbose);

        let config = cli.resolver_config();
        assert_eq!(config.fetch.timeout, Some(Duration::from_secs(7)));
        assert_eq!(config.average.algorithm, AverageAlgorithm::Simple);
    }

    #[test]
    fn test_negative_radius_parses() {
        let cli = Cli::try_parse_from(["shadcn-mdc", "#fff", "--radius", "-1"]).unwrap();
        assert_eq!(cli.radius, -1.0);
    }
}

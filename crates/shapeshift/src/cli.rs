//! Command line arguments.

use clap::Parser;
use shapeshift_config::Config;
use shapeshift_core::Theme;
use shapeshift_flock::Mode;

/// Particles that morph between text labels in your terminal.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Cli {
    /// Pipe-delimited labels to show, e.g. "HELLO|WORLD"
    pub labels: Option<String>,

    /// Show each label once instead of looping
    #[arg(long)]
    pub once: bool,

    /// Seed for a reproducible animation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use the light theme
    #[arg(long)]
    pub light: bool,

    /// Write the default config file and exit
    #[arg(long)]
    pub write_config: bool,
}

impl Cli {
    /// Sequencer mode requested on the command line.
    pub fn mode(&self) -> Mode {
        if self.once { Mode::Once } else { Mode::Loop }
    }

    /// Let command line flags override the config file.
    pub fn apply(&self, config: &mut Config) {
        if let Some(labels) = &self.labels {
            config.labels = Some(labels.split('|').map(str::to_string).collect());
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if self.light {
            config.theme = Theme::Light;
        }
    }
}

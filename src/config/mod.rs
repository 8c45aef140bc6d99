pub mod cli;

use crate::core::{InputProvider, Value};

/// The compiled-in sequence the binary filters.
pub const DEFAULT_INPUT: [Value; 8] = [3, -1, 4, -2, 5, -3, 6, -4];

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(feature = "cli", command(name = "neg-filter", version))]
#[cfg_attr(
    feature = "cli",
    command(about = "Prints the negative values of a fixed integer sequence")
)]
pub struct CliConfig {
    #[cfg_attr(feature = "cli", arg(skip = DEFAULT_INPUT.to_vec()))]
    pub input: Vec<Value>,
}

impl CliConfig {
    pub fn with_input(input: Vec<Value>) -> Self {
        Self { input }
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self::with_input(DEFAULT_INPUT.to_vec())
    }
}

impl InputProvider for CliConfig {
    fn input(&self) -> &[Value] {
        &self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_uses_literal_input() {
        assert_eq!(CliConfig::default().input(), &DEFAULT_INPUT);
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_without_arguments() {
        use clap::Parser;

        let config = CliConfig::try_parse_from(["neg-filter"]).unwrap();
        assert_eq!(config, CliConfig::default());
    }

    #[cfg(feature = "cli")]
    #[test]
    fn test_parse_rejects_arguments() {
        use clap::Parser;

        assert!(CliConfig::try_parse_from(["neg-filter", "--input", "1"]).is_err());
        assert!(CliConfig::try_parse_from(["neg-filter", "5"]).is_err());
    }
}

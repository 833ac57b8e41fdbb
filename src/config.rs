// ⚙️ Runtime configuration - command-line flags with environment fallbacks

use crate::menu::Limits;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "fitness-club")]
#[command(author, version, about = "Smart Fitness Management System", long_about = None)]
pub struct Config {
    /// Start with a small sample club already registered
    #[arg(long, env = "FITNESS_DEMO")]
    pub demo: bool,

    /// Largest class capacity the menu accepts
    #[arg(long, env = "FITNESS_MAX_CAPACITY", default_value_t = 30)]
    pub max_capacity: u32,

    /// Largest single payment the menu accepts
    #[arg(long, env = "FITNESS_MAX_PAYMENT", default_value_t = 10_000)]
    pub max_payment: u32,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    pub fn limits(&self) -> Limits {
        Limits {
            max_capacity: self.max_capacity,
            max_payment: self.max_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["fitness-club"]).unwrap();

        assert!(!config.demo);
        assert!(!config.verbose);
        assert_eq!(config.limits(), Limits::default());
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "fitness-club",
            "--demo",
            "--max-capacity",
            "12",
            "--max-payment",
            "250",
            "-v",
        ])
        .unwrap();

        assert!(config.demo);
        assert!(config.verbose);
        assert_eq!(config.limits(), Limits { max_capacity: 12, max_payment: 250 });
    }

    #[test]
    fn test_rejects_negative_capacity() {
        assert!(Config::try_parse_from(["fitness-club", "--max-capacity", "-1"]).is_err());
    }
}

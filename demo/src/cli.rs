use clap::Parser;

/// Blocks used when none are given on the command line.
pub const SAMPLE_BLOCKS: [&str; 9] = [
    "alice-test-20",
    "bob-test-20",
    "carol-test-20",
    "dave-test-20",
    "eric-test-20",
    "fill-test-20",
    "g-test-20",
    "h-test-20",
    "i-test-20",
];

/// Probes used when neither `--probe` nor `--probe-hex` is given.
pub const SAMPLE_PROBES: [&str; 2] = ["WRONG-bob-test-20", "bob-test-20"];

#[derive(Parser, Debug, Clone)]
#[command(about = "Build a Merkle tree over data blocks and look up probes in it")]
pub struct DemoCli {
    /// Data blocks, in order. Defaults to the nine sample blocks.
    pub blocks: Vec<String>,

    /// Data whose hash is looked up in the tree (repeatable)
    #[arg(long = "probe")]
    pub probes: Vec<String>,

    /// Raw digest in hex to look up in the tree (repeatable)
    #[arg(long = "probe-hex")]
    pub hex_probes: Vec<String>,

    /// Only match leaf digests instead of any node digest
    #[arg(long)]
    pub leaves_only: bool,

    /// Default log filter, overridden by RUST_LOG
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl DemoCli {
    pub fn blocks(&self) -> Vec<String> {
        if self.blocks.is_empty() {
            SAMPLE_BLOCKS.iter().map(|b| b.to_string()).collect()
        } else {
            self.blocks.clone()
        }
    }

    pub fn probes(&self) -> Vec<String> {
        if self.probes.is_empty() && self.hex_probes.is_empty() {
            SAMPLE_PROBES.iter().map(|p| p.to_string()).collect()
        } else {
            self.probes.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cli = DemoCli::try_parse_from(["blocktree-demo"]).expect("parse");
        assert_eq!(cli.blocks(), SAMPLE_BLOCKS);
        assert_eq!(cli.probes(), SAMPLE_PROBES);
        assert!(!cli.leaves_only);
        assert_eq!(cli.log_level, "info");
    }

    #[test]
    fn test_explicit_arguments() {
        let cli = DemoCli::try_parse_from([
            "blocktree-demo",
            "a",
            "b",
            "--probe",
            "a",
            "--probe-hex",
            "00ff",
            "--leaves-only",
        ])
        .expect("parse");
        assert_eq!(cli.blocks(), ["a", "b"]);
        assert_eq!(cli.probes(), ["a"]);
        assert_eq!(cli.hex_probes, ["00ff"]);
        assert!(cli.leaves_only);
    }

    #[test]
    fn test_hex_probe_alone_disables_sample_probes() {
        let cli = DemoCli::try_parse_from(["blocktree-demo", "--probe-hex", "00ff"]).expect("parse");
        assert!(cli.probes().is_empty());
    }
}

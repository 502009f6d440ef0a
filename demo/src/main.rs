mod cli;

use std::process::ExitCode;

use blocktree::{Digest, MerkleTree, hash, walker};
use clap::Parser;
use cli::DemoCli;
use log::{error, info};

fn init_logging(max_level: &str) {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or(max_level));
}

fn main() -> ExitCode {
    let cli = DemoCli::parse();
    init_logging(&cli.log_level);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &DemoCli) -> anyhow::Result<()> {
    let tree = MerkleTree::from_data(cli.blocks())?;

    let root_hash = tree.root_hash();
    info!(
        "root hash {} ({} hash calls)",
        root_hash.value(),
        root_hash.cost().hash_node_calls
    );
    info!("tree:");
    walker::print_stdout(tree.root())?;

    for probe in cli.probes() {
        let digest = hash(probe.as_bytes()).unwrap();
        info!("probe {probe:?} hashes to {digest}");
        lookup(&tree, &digest, cli.leaves_only);
    }
    for encoded in &cli.hex_probes {
        let digest = Digest::from_hex(encoded)?;
        lookup(&tree, &digest, cli.leaves_only);
    }

    let leaves = tree.collect_leaves();
    let names: Vec<String> = leaves.iter().map(|leaf| leaf.to_string()).collect();
    info!("leaves: {names:?}");
    let digests: Vec<String> = walker::digests_of(leaves)
        .iter()
        .map(Digest::to_hex)
        .collect();
    info!("leaf digests: {digests:?}");

    Ok(())
}

fn lookup(tree: &MerkleTree, digest: &Digest, leaves_only: bool) {
    let (found, scope) = if leaves_only {
        (tree.scan_leaves(digest), "leaf")
    } else {
        (tree.scan(digest), "node")
    };
    info!("{digest} is a {scope} digest in the tree: {found}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> DemoCli {
        DemoCli::try_parse_from(std::iter::once("blocktree-demo").chain(args.iter().copied()))
            .expect("parse")
    }

    #[test]
    fn test_run_single_block() {
        run(&parse(&["a"])).expect("demo run");
    }

    #[test]
    fn test_run_sample_data_with_probes() {
        let encoded = hash(b"bob-test-20").unwrap().to_hex();
        run(&parse(&["--probe", "bob-test-20", "--probe-hex", encoded.as_str()]))
            .expect("demo run");
        run(&parse(&["--leaves-only"])).expect("demo run");
    }

    #[test]
    fn test_run_rejects_malformed_hex_probe() {
        let err = run(&parse(&["a", "--probe-hex", "not-hex"])).expect_err("bad hex");
        assert!(matches!(
            err.downcast_ref::<blocktree::Error>(),
            Some(blocktree::Error::InvalidDigest(_))
        ));
    }
}

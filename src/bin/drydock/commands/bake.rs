//! `drydock bake` command

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::cli::BakeArgs;
use drydock::ops::{bake_run, BakeRunOptions};
use drydock::{BakeInputs, Outputs, StateFile};

pub fn execute(args: BakeArgs, state_file: PathBuf) -> Result<()> {
    let inputs = BakeInputs {
        files: args.file,
        targets: args.targets,
        build_args: parse_build_args(&args.build_args)?,
        load: args.load,
        push: args.push,
        provenance: args.provenance,
        sbom: args.sbom,
        workdir: args.workdir,
    };

    bake_run(BakeRunOptions {
        inputs,
        state: StateFile::new(state_file),
        outputs: Outputs::new(args.output_file),
    })
}

/// Parse repeated `NAME=VALUE` overrides into a map.
fn parse_build_args(raw: &[String]) -> Result<BTreeMap<String, String>> {
    let mut build_args = BTreeMap::new();
    for entry in raw {
        let Some((name, value)) = entry.split_once('=') else {
            bail!("invalid build-arg `{}`: expected NAME=VALUE", entry);
        };
        if name.is_empty() {
            bail!("invalid build-arg `{}`: empty name", entry);
        }
        build_args.insert(name.to_string(), value.to_string());
    }
    Ok(build_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_args() {
        let map = parse_build_args(&["FOO=bar".to_string(), "BAZ=a=b".to_string()]).unwrap();
        assert_eq!(map.get("FOO").unwrap(), "bar");
        // Only the first `=` splits; values may contain their own.
        assert_eq!(map.get("BAZ").unwrap(), "a=b");
    }

    #[test]
    fn test_parse_build_args_rejects_malformed() {
        assert!(parse_build_args(&["NOVALUE".to_string()]).is_err());
        assert!(parse_build_args(&["=value".to_string()]).is_err());
    }
}

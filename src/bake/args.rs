//! Argument synthesis for `docker buildx bake`.
//!
//! Flag syntax varies across buildx releases, so synthesis is gated on the
//! detected tool version: a requested flag below its minimum version is
//! silently omitted rather than rejected. The result is a pure function of
//! (inputs, version, metadata path) with no I/O.

use std::path::Path;

use semver::Version;

use super::inputs::BakeInputs;

/// Minimum buildx version for `--metadata-file`.
const METADATA_FILE_MIN: Version = Version::new(0, 6, 0);

/// Minimum buildx version for `--provenance` and `--sbom`.
const ATTESTATION_MIN: Version = Version::new(0, 10, 0);

/// Synthesize the full argument vector for one bake invocation.
///
/// The returned tokens are passed to `docker`; the leading `buildx bake`
/// subcommand is always present. Token order: definition files, build-arg
/// overrides, version-gated flags, load/push toggles, target names last.
pub fn synthesize(
    inputs: &BakeInputs,
    version: &Version,
    metadata_file: Option<&Path>,
) -> Vec<String> {
    let mut args = vec!["buildx".to_string(), "bake".to_string()];

    for file in &inputs.files {
        if !file.is_empty() {
            args.push("--file".to_string());
            args.push(file.clone());
        }
    }

    for (key, value) in &inputs.build_args {
        args.push("--set".to_string());
        args.push(format!("*.args.{}={}", key, value));
    }

    if let Some(path) = metadata_file {
        if *version >= METADATA_FILE_MIN {
            args.push("--metadata-file".to_string());
            args.push(path.display().to_string());
        }
    }

    if let Some(provenance) = inputs.provenance_value() {
        if *version >= ATTESTATION_MIN {
            args.push("--provenance".to_string());
            args.push(provenance.to_string());
        }
    }

    if let Some(sbom) = inputs.sbom_value() {
        if *version >= ATTESTATION_MIN {
            args.push("--sbom".to_string());
            args.push(sbom.to_string());
        }
    }

    if inputs.load {
        args.push("--load".to_string());
    }

    if inputs.push {
        args.push("--push".to_string());
    }

    args.extend(inputs.resolved_targets());

    args
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    use super::*;

    fn version(s: &str) -> Version {
        Version::parse(s).unwrap()
    }

    fn position(args: &[String], token: &str) -> usize {
        args.iter()
            .position(|a| a == token)
            .unwrap_or_else(|| panic!("token `{}` not in {:?}", token, args))
    }

    #[test]
    fn test_always_starts_with_bake_subcommand() {
        let args = synthesize(&BakeInputs::default(), &version("0.10.0"), None);
        assert_eq!(&args[..2], &["buildx".to_string(), "bake".to_string()]);
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let mut build_args = BTreeMap::new();
        build_args.insert("ZEBRA".to_string(), "1".to_string());
        build_args.insert("ALPHA".to_string(), "2".to_string());
        let inputs = BakeInputs {
            files: vec!["docker-bake.hcl".to_string()],
            targets: vec!["web".to_string()],
            build_args,
            load: true,
            ..Default::default()
        };
        let v = version("0.10.4");

        let first = synthesize(&inputs, &v, None);
        let second = synthesize(&inputs, &v, None);
        assert_eq!(first, second);
    }

    #[test]
    fn test_files_in_input_order() {
        let inputs = BakeInputs {
            files: vec!["a.hcl".to_string(), "b.hcl".to_string()],
            ..Default::default()
        };
        let args = synthesize(&inputs, &version("0.10.0"), None);
        assert!(position(&args, "a.hcl") < position(&args, "b.hcl"));
    }

    #[test]
    fn test_empty_file_entry_emits_nothing() {
        let inputs = BakeInputs {
            files: vec![String::new()],
            ..Default::default()
        };
        let args = synthesize(&inputs, &version("0.10.0"), None);
        assert!(!args.contains(&"--file".to_string()));
        assert!(!args.iter().any(|a| a.is_empty()));
    }

    #[test]
    fn test_provenance_gated_below_minimum() {
        let inputs = BakeInputs {
            files: vec!["a.hcl".to_string()],
            targets: vec!["web".to_string()],
            build_args: BTreeMap::from([("FOO".to_string(), "bar".to_string())]),
            provenance: Some("true".to_string()),
            ..Default::default()
        };

        let args = synthesize(&inputs, &version("0.9.0"), None);
        assert!(!args.contains(&"--provenance".to_string()));
        assert!(
            position(&args, "a.hcl") < position(&args, "*.args.FOO=bar")
                && position(&args, "*.args.FOO=bar") < position(&args, "web")
        );

        let args = synthesize(&inputs, &version("0.10.0"), None);
        let idx = position(&args, "--provenance");
        assert_eq!(args[idx + 1], "true");
    }

    #[test]
    fn test_sbom_gated_below_minimum() {
        let inputs = BakeInputs {
            sbom: Some("true".to_string()),
            ..Default::default()
        };
        assert!(!synthesize(&inputs, &version("0.9.9"), None).contains(&"--sbom".to_string()));
        assert!(synthesize(&inputs, &version("0.10.0"), None).contains(&"--sbom".to_string()));
    }

    #[test]
    fn test_metadata_file_gated_below_minimum() {
        let path = PathBuf::from("/tmp/metadata.json");
        let inputs = BakeInputs::default();

        let args = synthesize(&inputs, &version("0.5.1"), Some(&path));
        assert!(!args.contains(&"--metadata-file".to_string()));

        let args = synthesize(&inputs, &version("0.6.0"), Some(&path));
        let idx = position(&args, "--metadata-file");
        assert_eq!(args[idx + 1], "/tmp/metadata.json");
    }

    #[test]
    fn test_absent_optionals_emit_no_empty_tokens() {
        let inputs = BakeInputs {
            provenance: Some(String::new()),
            sbom: None,
            ..Default::default()
        };
        let args = synthesize(&inputs, &version("0.12.0"), None);
        assert!(!args.contains(&"--provenance".to_string()));
        assert!(!args.contains(&"--sbom".to_string()));
        assert!(!args.iter().any(|a| a.is_empty() || a.ends_with('=')));
    }

    #[test]
    fn test_load_and_push_toggles() {
        let inputs = BakeInputs {
            load: true,
            push: true,
            ..Default::default()
        };
        let args = synthesize(&inputs, &version("0.4.0"), None);
        assert!(args.contains(&"--load".to_string()));
        assert!(args.contains(&"--push".to_string()));

        let args = synthesize(&BakeInputs::default(), &version("0.4.0"), None);
        assert!(!args.contains(&"--load".to_string()));
        assert!(!args.contains(&"--push".to_string()));
    }

    #[test]
    fn test_targets_come_last() {
        let inputs = BakeInputs {
            files: vec!["a.hcl".to_string()],
            targets: vec!["web".to_string(), "api".to_string()],
            load: true,
            ..Default::default()
        };
        let args = synthesize(&inputs, &version("0.10.0"), None);
        assert_eq!(&args[args.len() - 2..], &["web".to_string(), "api".to_string()]);
    }

    #[test]
    fn test_default_target_when_none_requested() {
        let args = synthesize(&BakeInputs::default(), &version("0.10.0"), None);
        assert_eq!(args.last().map(String::as_str), Some("default"));
    }
}

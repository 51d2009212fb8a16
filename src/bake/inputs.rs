//! Validated build inputs for a bake invocation.

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Everything the host supplies for one bake run.
///
/// Constructed once at the start of the run phase and never mutated;
/// argument synthesis reads it by shared reference only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BakeInputs {
    /// Bake definition files, in input order. Empty means the tool's
    /// default file lookup applies and no `--file` flag is emitted.
    pub files: Vec<String>,

    /// Target names to build, in input order. Empty resolves to the
    /// implicit `default` target.
    pub targets: Vec<String>,

    /// Build-argument overrides applied to every target. BTreeMap keeps
    /// iteration order stable so synthesized argv is snapshot-testable.
    pub build_args: BTreeMap<String, String>,

    /// Load build results into the local image store (`--load`).
    pub load: bool,

    /// Push build results to the registry (`--push`).
    pub push: bool,

    /// Provenance attestation parameter (`true`, `false`, `mode=max,...`).
    /// None or empty means the flag is omitted entirely.
    pub provenance: Option<String>,

    /// SBOM attestation parameter. Same omission rules as provenance.
    pub sbom: Option<String>,

    /// Working directory for the bake invocations.
    pub workdir: Option<PathBuf>,
}

impl BakeInputs {
    /// Target names with the implicit default applied.
    pub fn resolved_targets(&self) -> Vec<String> {
        if self.targets.is_empty() {
            vec!["default".to_string()]
        } else {
            self.targets.clone()
        }
    }

    /// Provenance value, treating the empty string as absent.
    pub fn provenance_value(&self) -> Option<&str> {
        self.provenance.as_deref().filter(|v| !v.is_empty())
    }

    /// SBOM value, treating the empty string as absent.
    pub fn sbom_value(&self) -> Option<&str> {
        self.sbom.as_deref().filter(|v| !v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target_when_none_given() {
        let inputs = BakeInputs::default();
        assert_eq!(inputs.resolved_targets(), vec!["default".to_string()]);
    }

    #[test]
    fn test_explicit_targets_kept_in_order() {
        let inputs = BakeInputs {
            targets: vec!["web".to_string(), "api".to_string()],
            ..Default::default()
        };
        assert_eq!(
            inputs.resolved_targets(),
            vec!["web".to_string(), "api".to_string()]
        );
    }

    #[test]
    fn test_empty_provenance_is_absent() {
        let inputs = BakeInputs {
            provenance: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(inputs.provenance_value(), None);

        let inputs = BakeInputs {
            provenance: Some("mode=max".to_string()),
            ..Default::default()
        };
        assert_eq!(inputs.provenance_value(), Some("mode=max"));
    }
}

//! Semantic validation for guard configurations.
//!
//! This module provides validation beyond structural encoding checks.
//! The codec itself is payload-opaque and accepts anything it can lay out;
//! these checks catch configurations that encode fine but would misbehave
//! when the guards are evaluated.
//!
//! Validation is never run implicitly by decoding. Encoding runs it only
//! when [`EncodeOptions::validate`](crate::codec::EncodeOptions) is set.

use rustc_hash::FxHashSet;

use crate::error::ValidationError;
use crate::limits::MAX_ADDITIONAL_PROGRAMS;
use crate::model::{GuardConfiguration, GuardKind, GuardSet};

/// Validates a configuration.
///
/// Checks that:
/// - group labels are non-empty and unique (ignoring padding)
/// - MintLimit and Allocation counter ids are not shared between groups
/// - ProgramGate lists fit the fixed record
///
/// The default guard set is exempt from the id checks: its guards apply to
/// every group that does not override them, so sharing an id with a group
/// is expected.
pub fn validate_config(config: &GuardConfiguration) -> Result<(), ValidationError> {
    validate_guard_set(&config.default)?;

    let groups = config.groups();
    let mut labels = FxHashSet::with_capacity_and_hasher(groups.len(), Default::default());
    let mut mint_limit_ids = FxHashSet::default();
    let mut allocation_ids = FxHashSet::default();

    for group in groups {
        if group.label.is_empty() {
            return Err(ValidationError::EmptyGroupLabel);
        }
        if !labels.insert(group.label.trimmed()) {
            return Err(ValidationError::DuplicateGroupLabel {
                label: group.label.to_string(),
            });
        }

        if let Some(limit) = &group.guards.mint_limit {
            if !mint_limit_ids.insert(limit.id) {
                return Err(ValidationError::DuplicateMintLimitId { id: limit.id });
            }
        }
        if let Some(allocation) = &group.guards.allocation {
            if !allocation_ids.insert(allocation.id) {
                return Err(ValidationError::DuplicateAllocationId { id: allocation.id });
            }
        }

        validate_guard_set(&group.guards)?;
    }

    Ok(())
}

/// Validates a single guard set.
pub fn validate_guard_set(set: &GuardSet) -> Result<(), ValidationError> {
    if let Some(gate) = &set.program_gate {
        if gate.additional.len() > MAX_ADDITIONAL_PROGRAMS {
            return Err(ValidationError::AdditionalListTooLong {
                guard: GuardKind::ProgramGate,
                len: gate.additional.len(),
                max: MAX_ADDITIONAL_PROGRAMS,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::guards::{Allocation, MintLimit, ProgramGate};
    use crate::model::Group;

    fn config(groups: Vec<Group>) -> GuardConfiguration {
        GuardConfiguration {
            default: GuardSet::new(),
            groups: Some(groups),
        }
    }

    #[test]
    fn test_valid_config() {
        let cfg = GuardConfiguration {
            default: GuardSet::new().with(MintLimit { id: 1, limit: 1 }),
            groups: Some(vec![
                Group::new("a", GuardSet::new().with(MintLimit { id: 1, limit: 2 })),
                Group::new("b", GuardSet::new().with(MintLimit { id: 2, limit: 2 })),
            ]),
        };
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_empty_label() {
        let cfg = config(vec![Group::new("\0\0", GuardSet::new())]);
        assert_eq!(validate_config(&cfg), Err(ValidationError::EmptyGroupLabel));
    }

    #[test]
    fn test_duplicate_label_ignores_padding() {
        let cfg = config(vec![
            Group::new("VIP", GuardSet::new()),
            Group::new("VIP\0\0\0", GuardSet::new()),
        ]);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DuplicateGroupLabel { label: "VIP".to_string() })
        );
    }

    #[test]
    fn test_duplicate_mint_limit_id() {
        let cfg = config(vec![
            Group::new("a", GuardSet::new().with(MintLimit { id: 3, limit: 1 })),
            Group::new("b", GuardSet::new().with(MintLimit { id: 3, limit: 9 })),
        ]);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DuplicateMintLimitId { id: 3 })
        );
    }

    #[test]
    fn test_duplicate_allocation_id() {
        let cfg = config(vec![
            Group::new("a", GuardSet::new().with(Allocation { id: 0, limit: 10 })),
            Group::new("b", GuardSet::new().with(Allocation { id: 0, limit: 20 })),
        ]);
        assert_eq!(
            validate_config(&cfg),
            Err(ValidationError::DuplicateAllocationId { id: 0 })
        );
    }

    #[test]
    fn test_program_gate_too_long() {
        let set = GuardSet::new().with(ProgramGate { additional: vec![[0; 32]; 6] });
        assert!(matches!(
            validate_guard_set(&set),
            Err(ValidationError::AdditionalListTooLong { len: 6, max: 5, .. })
        ));
    }
}

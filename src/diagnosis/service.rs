//! Missing-property classification
//!
//! Order of evaluation, first match wins:
//! 1. Cloud engines: empty catalog, then property absent from catalog
//! 2. On-premise engines: property absent from catalog is `Unknown`
//! 3. Tier mismatch, then explicit exclusion, then `Unknown`
//!
//! Account-level limits of a resource key are reported before any
//! per-property reason.

use super::reason::DiagnosisReason;
use crate::catalog::PropertyDescriptor;
use crate::engine::EngineMetadata;

/// Explains why `property` has no value in data produced by `engine`.
///
/// Pure and total: the same inputs always give the same reason and no
/// input makes it fail.
pub fn check(property: &str, engine: &EngineMetadata) -> DiagnosisReason {
    let catalog = engine.properties();

    if engine.is_cloud_backed() {
        if catalog.is_empty() {
            return DiagnosisReason::ProductNotInCloudResource {
                engine_type: engine.engine_type().to_string(),
            };
        }
        if !catalog.contains(property) {
            return DiagnosisReason::PropertyNotInCloudResource {
                data_key: engine.data_key().to_string(),
                available_properties: catalog.names().into_iter().map(String::from).collect(),
            };
        }
    }

    match catalog.get(property) {
        Some(descriptor) => check_descriptor(descriptor, engine),
        None => DiagnosisReason::Unknown,
    }
}

fn check_descriptor(descriptor: &PropertyDescriptor, engine: &EngineMetadata) -> DiagnosisReason {
    if !descriptor.is_in_tier(engine.data_source_tier()) {
        // Catalog construction guarantees at least one tier
        let required_tier = descriptor.required_tier().unwrap_or_default();
        return DiagnosisReason::DataUpgradeRequired {
            required_tier: required_tier.to_string(),
            engine_type: engine.engine_type().to_string(),
        };
    }

    if !descriptor.available {
        return DiagnosisReason::PropertyExcluded;
    }

    // Tier matches and the property is available, yet no value was stored.
    DiagnosisReason::Unknown
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{DataType, PropertyCatalog};

    fn engine(tier: &str, descriptor: PropertyDescriptor) -> EngineMetadata {
        EngineMetadata::builder("testElement")
            .engine_type("TestEngine")
            .data_source_tier(tier)
            .catalog(PropertyCatalog::new([descriptor]).unwrap())
            .build()
            .unwrap()
    }

    fn cloud_engine(names: &[&str]) -> EngineMetadata {
        let catalog = PropertyCatalog::new(
            names
                .iter()
                .map(|n| PropertyDescriptor::new(*n, DataType::String, ["lite"])),
        )
        .unwrap();
        EngineMetadata::builder("device")
            .engine_type("DeviceCloudEngine")
            .cloud()
            .catalog(catalog)
            .build()
            .unwrap()
    }

    #[test]
    fn test_upgrade_required() {
        let engine = engine(
            "lite",
            PropertyDescriptor::new("testProperty", DataType::String, ["premium"]),
        );

        assert_eq!(
            check("testProperty", &engine),
            DiagnosisReason::DataUpgradeRequired {
                required_tier: "premium".into(),
                engine_type: "TestEngine".into(),
            }
        );
    }

    #[test]
    fn test_upgrade_names_first_listed_tier() {
        let engine = engine(
            "lite",
            PropertyDescriptor::new("testProperty", DataType::String, ["premium", "enterprise"]),
        );

        match check("testProperty", &engine) {
            DiagnosisReason::DataUpgradeRequired { required_tier, .. } => {
                assert_eq!(required_tier, "premium")
            }
            other => panic!("unexpected reason {:?}", other),
        }
    }

    #[test]
    fn test_tier_mismatch_reported_before_exclusion() {
        let engine = engine(
            "lite",
            PropertyDescriptor::new("testProperty", DataType::String, ["premium"]).excluded(),
        );

        assert_eq!(check("testProperty", &engine).code(), "DATA_UPGRADE_REQUIRED");
    }

    #[test]
    fn test_excluded() {
        let engine = engine(
            "lite",
            PropertyDescriptor::new("testProperty", DataType::String, ["lite"]).excluded(),
        );

        assert_eq!(check("testProperty", &engine), DiagnosisReason::PropertyExcluded);
    }

    #[test]
    fn test_not_in_engine() {
        let engine = engine(
            "lite",
            PropertyDescriptor::new("testProperty", DataType::String, ["premium"]).excluded(),
        );

        assert_eq!(check("otherProperty", &engine), DiagnosisReason::Unknown);
    }

    #[test]
    fn test_available_and_in_tier_is_unknown() {
        let engine = engine(
            "premium",
            PropertyDescriptor::new("testProperty", DataType::String, ["premium"]),
        );

        assert_eq!(check("testProperty", &engine), DiagnosisReason::Unknown);
    }

    #[test]
    fn test_cloud_empty_catalog() {
        let engine = cloud_engine(&[]);

        for name in ["ismobile", "anything", ""] {
            assert_eq!(
                check(name, &engine),
                DiagnosisReason::ProductNotInCloudResource {
                    engine_type: "DeviceCloudEngine".into(),
                }
            );
        }
    }

    #[test]
    fn test_cloud_property_not_in_resource_lists_sorted_names() {
        let engine = cloud_engine(&["platformname", "browsername", "ismobile"]);

        assert_eq!(
            check("hardwarename", &engine),
            DiagnosisReason::PropertyNotInCloudResource {
                data_key: "device".into(),
                available_properties: vec![
                    "browsername".into(),
                    "ismobile".into(),
                    "platformname".into(),
                ],
            }
        );
    }

    #[test]
    fn test_cloud_known_property_falls_through_to_tier_checks() {
        let catalog = PropertyCatalog::new([
            PropertyDescriptor::new("ismobile", DataType::Bool, ["premium"]),
            PropertyDescriptor::new("browsername", DataType::String, ["lite"]).excluded(),
            PropertyDescriptor::new("platformname", DataType::String, ["lite"]),
        ])
        .unwrap();
        let engine = EngineMetadata::builder("device")
            .engine_type("DeviceCloudEngine")
            .cloud()
            .catalog(catalog)
            .build()
            .unwrap();

        assert_eq!(check("ismobile", &engine).code(), "DATA_UPGRADE_REQUIRED");
        assert_eq!(check("browsername", &engine), DiagnosisReason::PropertyExcluded);
        assert_eq!(check("platformname", &engine), DiagnosisReason::Unknown);
    }

    #[test]
    fn test_check_is_deterministic() {
        let engine = cloud_engine(&["b", "a"]);
        assert_eq!(check("c", &engine), check("c", &engine));
    }
}

//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use vetted_core::audit_detail::{ReportedDetail, ResolvedDetail, VerifiedDetail};
use vetted_core::entities::*;
use vetted_core::enums::*;
use vetted_core::profile::ProjectProfile;
use vetted_core::target::ReportTarget;
use vetted_core::verification::Verification;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn verified() -> Option<Verification> {
    Some(Verification::new("mod-ada", Utc::now()))
}

roundtrip_and_validate!(
    project_roundtrip,
    Project,
    Project {
        id: "prj-a3f8b2c1".into(),
        user_id: "user-1".into(),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    project_submission_roundtrip,
    ProjectSubmission,
    ProjectSubmission {
        id: "psb-a3f8b2c1".into(),
        project_id: "prj-a3f8b2c1".into(),
        user_id: "user-1".into(),
        name: Some("Tokio".into()),
        homepage: None,
        tags: Some("rust, async".into()),
        created_at: Utc::now(),
        verification: verified(),
    }
);

roundtrip_and_validate!(
    link_submission_roundtrip,
    LinkSubmission,
    LinkSubmission {
        id: "lsb-a3f8b2c1".into(),
        project_id: "prj-a3f8b2c1".into(),
        user_id: "user-1".into(),
        tag: LinkTag::CodeOfConduct,
        url: None,
        project_has_tag: false,
        created_at: Utc::now(),
        verification: None,
    }
);

roundtrip_and_validate!(
    representation_submission_roundtrip,
    RepresentationSubmission,
    RepresentationSubmission {
        id: "rsb-a3f8b2c1".into(),
        project_id: "prj-a3f8b2c1".into(),
        user_id: "user-1".into(),
        tag: "queer".into(),
        public_message: Some("Maintainer portfolio: https://example.org".into()),
        private_message: Some("contact: maintainer@example.org".into()),
        created_at: Utc::now(),
        verification: verified(),
    }
);

roundtrip_and_validate!(
    report_roundtrip,
    Report,
    Report {
        id: "rpt-a3f8b2c1".into(),
        target: ReportTarget::RepresentationSubmission("rsb-a3f8b2c1".into()),
        user_id: None,
        message: Some("spam".into()),
        created_at: Utc::now(),
        resolved: false,
    }
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: "aud-a3f8b2c1".into(),
        entity_type: EntityType::LinkSubmission,
        entity_id: "lsb-a3f8b2c1".into(),
        action: AuditAction::Verified,
        actor: Some("mod-ada".into()),
        detail: Some(serde_json::json!({"verified_by": "mod-ada"})),
        created_at: Utc::now(),
    }
);

roundtrip_and_validate!(
    project_profile_roundtrip,
    ProjectProfile,
    ProjectProfile {
        project: Project {
            id: "prj-a3f8b2c1".into(),
            user_id: "user-1".into(),
            created_at: Utc::now(),
        },
        name: None,
        homepage: None,
        tags: None,
    }
);

roundtrip_and_validate!(
    verified_detail_roundtrip,
    VerifiedDetail,
    VerifiedDetail {
        verified_by: "mod-ada".into(),
        verified_at: Utc::now(),
        previous_verified_by: Some("mod-grace".into()),
    }
);

roundtrip_and_validate!(
    reported_detail_roundtrip,
    ReportedDetail,
    ReportedDetail {
        report_id: "rpt-a3f8b2c1".into(),
        anonymous: true,
    }
);

roundtrip_and_validate!(
    resolved_detail_roundtrip,
    ResolvedDetail,
    ResolvedDetail {
        target_type: "project".into(),
        target_id: "prj-a3f8b2c1".into(),
        already_resolved: false,
    }
);

#[test]
fn redacted_drops_private_message_only() {
    let sub = RepresentationSubmission {
        id: "rsb-1".into(),
        project_id: "prj-1".into(),
        user_id: "user-1".into(),
        tag: "trans".into(),
        public_message: Some("public".into()),
        private_message: Some("private".into()),
        created_at: Utc::now(),
        verification: None,
    };
    let public = sub.redacted();
    assert_eq!(public.private_message, None);
    assert_eq!(public.public_message.as_deref(), Some("public"));
    assert_eq!(public.id, sub.id);
}

use serde::de::DeserializeOwned;

/// Parse a snake_case enum value using serde-deserialization.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use vetted_core::enums::{EntityType, LinkTag, SubmissionKind};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let kind: SubmissionKind = parse_enum("representation", "kind").expect("kind should parse");
        assert_eq!(kind, SubmissionKind::Representation);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let tag: LinkTag = parse_enum("code-of-conduct", "tag").expect("tag should parse");
        assert_eq!(tag, LinkTag::CodeOfConduct);
        let et: EntityType =
            parse_enum("link-submission", "target-type").expect("entity type should parse");
        assert_eq!(et, EntityType::LinkSubmission);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<LinkTag>("COC", "tag").expect_err("should fail");
        assert!(err.to_string().contains("invalid tag 'COC'"));
    }
}

//! Typed front-matter record of a rules document

use crate::frontmatter::FrontMatter;
use crate::schema::FieldError;

/// Keys the front matter must define
pub const REQUIRED_KEYS: [&str; 4] = ["description", "globs", "alwaysApply", "version"];

/// Front matter of a rules document with every field present and well-typed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RulesFrontMatter {
    pub description: String,
    pub globs: Vec<String>,
    pub always_apply: bool,
    pub version: i64,
}

impl TryFrom<&FrontMatter> for RulesFrontMatter {
    type Error = String;

    fn try_from(fm: &FrontMatter) -> std::result::Result<Self, Self::Error> {
        if let Some(key) = REQUIRED_KEYS.iter().find(|key| !fm.contains_key(key)) {
            return Err(format!("Missing front matter key: {key}"));
        }

        let description = match fm.get_str("description") {
            Ok(d) if !d.trim().is_empty() => d.to_string(),
            _ => return Err("description must be a non-empty string".to_string()),
        };
        let globs = match fm.get_list("globs") {
            Ok(g) if !g.is_empty() => g.to_vec(),
            _ => return Err("globs must be a non-empty list".to_string()),
        };
        let always_apply = fm
            .get_bool("alwaysApply")
            .map_err(|e| mismatch("alwaysApply must be boolean", &e))?;
        let version = fm
            .get_int("version")
            .map_err(|e| mismatch("version must be integer", &e))?;

        Ok(Self {
            description,
            globs,
            always_apply,
            version,
        })
    }
}

fn mismatch(message: &str, err: &FieldError) -> String {
    format!("{message} ({err})")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frontmatter::parse;

    #[test]
    fn test_valid_record() {
        let fm = parse("description: \"Rules\"\nglobs:\n  - /app/**\nalwaysApply: true\nversion: 2")
            .unwrap();
        let record = RulesFrontMatter::try_from(&fm).unwrap();
        assert_eq!(
            record,
            RulesFrontMatter {
                description: "Rules".to_string(),
                globs: vec!["/app/**".to_string()],
                always_apply: true,
                version: 2,
            }
        );
    }

    #[test]
    fn test_missing_key_reported_in_order() {
        let fm = parse("version: 1").unwrap();
        assert_eq!(
            RulesFrontMatter::try_from(&fm).unwrap_err(),
            "Missing front matter key: description"
        );
    }

    #[test]
    fn test_type_errors() {
        let fm = parse("description: \"  \"\nglobs:\n  - /a/**\nalwaysApply: true\nversion: 1").unwrap();
        assert_eq!(
            RulesFrontMatter::try_from(&fm).unwrap_err(),
            "description must be a non-empty string"
        );

        let fm = parse("description: x\nglobs:\nalwaysApply: true\nversion: 1").unwrap();
        assert_eq!(
            RulesFrontMatter::try_from(&fm).unwrap_err(),
            "globs must be a non-empty list"
        );

        let fm = parse("description: x\nglobs:\n  - /a/**\nalwaysApply: yes\nversion: 1").unwrap();
        assert_eq!(
            RulesFrontMatter::try_from(&fm).unwrap_err(),
            "alwaysApply must be boolean (expected boolean, found string)"
        );

        let fm = parse("description: x\nglobs:\n  - /a/**\nalwaysApply: false\nversion: v1").unwrap();
        assert!(RulesFrontMatter::try_from(&fm).unwrap_err().starts_with("version must be integer"));
    }
}

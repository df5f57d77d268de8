//! Rules document checks

use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use super::locate;
use super::model::RulesFrontMatter;
use crate::config::RulesPolicy;
use crate::config::patterns::Phrases;
use crate::error::fs as fs_error;
use crate::frontmatter;
use crate::report::{CheckOutcome, SuiteReport};

pub const FRONT_MATTER: &str = "rules.front-matter";
pub const HEADINGS: &str = "rules.headings";
pub const PHRASES: &str = "rules.phrases";
pub const NO_SECRETS: &str = "rules.no-secrets";
pub const GLOBS: &str = "rules.globs";
pub const CHECKLIST: &str = "rules.checklist";

const CHECKS: &[(&str, RulesCheck)] = &[
    (FRONT_MATTER, check_front_matter),
    (HEADINGS, check_headings),
    (PHRASES, check_phrases),
    (NO_SECRETS, check_no_secrets),
    (GLOBS, check_globs),
    (CHECKLIST, check_checklist),
];

type CheckResult = std::result::Result<(), String>;
type RulesCheck = fn(&str, &RulesPolicy) -> CheckResult;

static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^(#{2,3})\s+(.*)$").expect("valid regex"));

fn parse_record(content: &str) -> std::result::Result<RulesFrontMatter, String> {
    let fm = frontmatter::parse_document(content).map_err(|e| e.to_string())?;
    RulesFrontMatter::try_from(&fm)
}

pub fn check_front_matter(content: &str, policy: &RulesPolicy) -> CheckResult {
    let record = parse_record(content)?;

    let present: HashSet<&str> = record.globs.iter().map(String::as_str).collect();
    if !policy
        .expected_globs
        .iter()
        .all(|g| present.contains(g.as_str()))
    {
        return Err(format!(
            "globs must include {:?}, got {:?}",
            policy.expected_globs, record.globs
        ));
    }
    if !record.always_apply {
        return Err("alwaysApply must be true".to_string());
    }
    if record.version < policy.min_version {
        return Err(format!("version should be >= {}", policy.min_version));
    }
    if !record.description.contains(policy.description_phrase.as_str()) {
        return Err(format!(
            "description should reference the {}",
            policy.description_phrase
        ));
    }
    Ok(())
}

/// Titles of all level-2 and level-3 headings, in document order
pub fn heading_titles(content: &str) -> Vec<&str> {
    HEADING
        .captures_iter(content)
        .filter_map(|caps| caps.get(2))
        .map(|m| m.as_str().trim())
        .collect()
}

pub fn check_headings(content: &str, policy: &RulesPolicy) -> CheckResult {
    let titles = heading_titles(content);
    let mut indices = Vec::with_capacity(policy.headings.len());
    for expected in &policy.headings {
        let idx = titles
            .iter()
            .position(|t| *t == expected.as_str())
            .ok_or_else(|| format!("Expected heading not found: {expected:?}. Found: {titles:?}"))?;
        indices.push(idx);
    }
    if indices.is_sorted() {
        Ok(())
    } else {
        Err(format!(
            "Headings are out of order: positions {indices:?} for {:?}",
            policy.headings
        ))
    }
}

fn require_all(content: &str, patterns: &Phrases, prefix: &str) -> CheckResult {
    match patterns.first_unmatched(content) {
        Some(source) => Err(format!("{prefix}: {source}")),
        None => Ok(()),
    }
}

pub fn check_phrases(content: &str, policy: &RulesPolicy) -> CheckResult {
    require_all(
        content,
        &policy.required_phrases,
        "Missing required rule phrase/pattern",
    )
}

pub fn check_no_secrets(content: &str, policy: &RulesPolicy) -> CheckResult {
    match policy.forbidden_patterns.first_matched(content) {
        Some(source) => Err(format!("Forbidden credential-like pattern found: {source}")),
        None => Ok(()),
    }
}

pub fn check_globs(content: &str, _policy: &RulesPolicy) -> CheckResult {
    let fm = frontmatter::parse_document(content).map_err(|e| e.to_string())?;
    let globs = fm
        .get_list(frontmatter::LIST_KEY)
        .map_err(|e| format!("globs must be a list ({e})"))?;

    let unique: HashSet<&String> = globs.iter().collect();
    if unique.len() != globs.len() {
        return Err(format!("Duplicate entries in globs: {globs:?}"));
    }
    for glob in globs {
        if !glob.starts_with('/') {
            return Err(format!(
                "Glob should be absolute-like and start with '/': {glob}"
            ));
        }
        if !glob.ends_with("/**") {
            return Err(format!("Glob should end with '/**' to cover subpaths: {glob}"));
        }
    }
    Ok(())
}

pub fn check_checklist(content: &str, policy: &RulesPolicy) -> CheckResult {
    require_all(
        content,
        &policy.checklist,
        "Missing verification checklist item matching",
    )
}

/// Locate, read and check the rules document under `root`
pub fn run_suite(root: &Path, policy: &RulesPolicy, explicit: Option<&Path>) -> SuiteReport {
    let located = locate::locate(root, policy, explicit).and_then(|path| {
        std::fs::read_to_string(&path)
            .map(|content| (path.clone(), content))
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))
    });

    let (path, content) = match located {
        Ok(found) => found,
        Err(e) => {
            tracing::debug!("rules file unavailable: {e}");
            let message = e.to_string();
            return SuiteReport {
                suite: "rules",
                file: None,
                checks: CHECKS
                    .iter()
                    .map(|&(id, _)| CheckOutcome::fail(id, message.clone()))
                    .collect(),
            };
        }
    };

    let checks = CHECKS
        .iter()
        .map(|&(id, check)| CheckOutcome::from_result(id, check(&content, policy)))
        .collect();

    SuiteReport {
        suite: "rules",
        file: Some(path),
        checks,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fixtures::{VALID_RULES_MD, create_temp_dir, create_test_files};
    use serial_test::serial;

    fn policy() -> RulesPolicy {
        RulesPolicy::default()
    }

    fn with_front_matter(front_matter: &str) -> String {
        let (_, body) = VALID_RULES_MD.split_once("\n---\n").unwrap();
        format!("---\n{front_matter}\n---\n{body}")
    }

    #[test]
    fn test_valid_document_passes_every_check() {
        for &(id, check) in CHECKS {
            assert_eq!(check(VALID_RULES_MD, &policy()), Ok(()), "{id}");
        }
    }

    #[test]
    fn test_front_matter_missing_block() {
        let err = check_front_matter("## Polling App Project Rules\n", &policy()).unwrap_err();
        assert!(err.contains("front matter"), "{err}");
    }

    #[test]
    fn test_front_matter_expected_globs() {
        let doc = with_front_matter(
            "description: \"Polling App with QR Code Sharing\"\nglobs:\n  - \"/app/**\"\nalwaysApply: true\nversion: 1",
        );
        let err = check_front_matter(&doc, &policy()).unwrap_err();
        assert!(err.starts_with("globs must include"), "{err}");
    }

    #[test]
    fn test_front_matter_values() {
        let base = "description: \"Polling App with QR Code Sharing\"\nglobs:\n  - /app/**\n  - /components/**\n  - /lib/**";
        let doc = with_front_matter(&format!("{base}\nalwaysApply: false\nversion: 1"));
        assert_eq!(check_front_matter(&doc, &policy()).unwrap_err(), "alwaysApply must be true");

        let doc = with_front_matter(&format!("{base}\nalwaysApply: true\nversion: 0"));
        assert_eq!(check_front_matter(&doc, &policy()).unwrap_err(), "version should be >= 1");

        let doc = with_front_matter(&base.replace("Polling App with QR Code Sharing", "Todo app"))
            .replace("---\n\n", "alwaysApply: true\nversion: 1\n---\n\n");
        assert!(
            check_front_matter(&doc, &policy())
                .unwrap_err()
                .starts_with("description should reference")
        );
    }

    #[test]
    fn test_headings_found_in_order() {
        let content = "## Polling App Project Rules\n### 1. Folder Structure\n#### ignored\n## 2. Forms & UI  \n";
        assert_eq!(
            heading_titles(content),
            vec!["Polling App Project Rules", "1. Folder Structure", "2. Forms & UI"]
        );
    }

    #[test]
    fn test_headings_missing() {
        let content = VALID_RULES_MD.replace("### 3. Supabase Usage", "### 3. Database");
        let err = check_headings(&content, &policy()).unwrap_err();
        assert!(err.starts_with("Expected heading not found: \"3. Supabase Usage\""), "{err}");
    }

    #[test]
    fn test_headings_out_of_order() {
        let content = VALID_RULES_MD
            .replace("### 4. AI-Assisted Patterns", "### PLACEHOLDER")
            .replace("### 5. Verification", "### 4. AI-Assisted Patterns")
            .replace("### PLACEHOLDER", "### 5. Verification");
        let err = check_headings(&content, &policy()).unwrap_err();
        assert!(err.starts_with("Headings are out of order"), "{err}");
    }

    #[test]
    fn test_phrases_missing() {
        let content = VALID_RULES_MD.replace(".env.local", "dotenv");
        assert_eq!(
            check_phrases(&content, &policy()).unwrap_err(),
            r"Missing required rule phrase/pattern: \.env\.local"
        );
    }

    #[test]
    fn test_no_secrets() {
        for leak in [
            "SUPABASE_ANON_KEY = abc",
            "paste the Anon Key here",
            "use the service-role client",
            "https://abcd-123.supabase.co/rest/v1",
        ] {
            let content = format!("{VALID_RULES_MD}\n{leak}\n");
            let err = check_no_secrets(&content, &policy()).unwrap_err();
            assert!(err.starts_with("Forbidden credential-like pattern found"), "{leak}");
        }
    }

    #[test]
    fn test_globs_duplicates_and_format() {
        let doc = with_front_matter("globs:\n  - /app/**\n  - /app/**");
        assert!(check_globs(&doc, &policy()).unwrap_err().starts_with("Duplicate entries"));

        let doc = with_front_matter("globs:\n  - app/**");
        assert!(check_globs(&doc, &policy()).unwrap_err().contains("start with '/'"));

        let doc = with_front_matter("globs:\n  - /app/*.tsx");
        assert!(check_globs(&doc, &policy()).unwrap_err().contains("end with '/**'"));

        let doc = with_front_matter("version: 1");
        assert!(check_globs(&doc, &policy()).unwrap_err().contains("missing"));
    }

    #[test]
    fn test_checklist_missing() {
        let content = VALID_RULES_MD.replace("secure and correct?", "secure?");
        let err = check_checklist(&content, &policy()).unwrap_err();
        assert!(err.starts_with("Missing verification checklist item matching"));
    }

    #[test]
    fn test_phrase_anchors_match_document_ends() {
        let policy = RulesPolicy {
            required_phrases: Phrases::compile([r"^### 1\. Folder Structure$"]).unwrap(),
            ..RulesPolicy::default()
        };
        assert!(
            check_phrases(VALID_RULES_MD, &policy)
                .unwrap_err()
                .ends_with(r"^### 1\. Folder Structure$")
        );

        let policy = RulesPolicy {
            required_phrases: Phrases::compile([r"^---\ndescription:"]).unwrap(),
            ..RulesPolicy::default()
        };
        assert_eq!(check_phrases(VALID_RULES_MD, &policy), Ok(()));
    }

    #[test]
    #[serial]
    fn test_run_suite() {
        let temp = create_temp_dir();
        create_test_files(&temp, &[("docs/RULES.md", VALID_RULES_MD)]);
        let report = run_suite(temp.path(), &policy(), None);
        assert_eq!(report.checks.len(), 6);
        assert_eq!(report.failed(), 0, "{:?}", report.checks);
    }

    #[test]
    #[serial]
    fn test_run_suite_not_located() {
        let temp = create_temp_dir();
        let report = run_suite(temp.path(), &policy(), None);
        assert!(report.file.is_none());
        assert_eq!(report.failed(), 6);
        assert!(
            report.checks[0]
                .message
                .as_deref()
                .unwrap()
                .contains("Could not locate rules markdown file")
        );
    }

    #[test]
    #[serial]
    fn test_run_suite_unclosed_front_matter() {
        let temp = create_temp_dir();
        create_test_files(
            &temp,
            &[("RULES.md", "---\nversion: 1\n## Polling App Project Rules\n")],
        );
        let report = run_suite(temp.path(), &policy(), None);
        assert!(!report.checks[0].passed());
        assert!(!report.checks[4].passed());
        assert!(report.checks[4].message.as_deref().unwrap().contains("front matter"));
    }
}

//! Expectations for the RULES.md checks

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::patterns::{Forbidden, Patterns, Phrases};

/// What a valid rules document must contain
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RulesPolicy {
    /// Environment variable naming the rules file; takes priority over `candidates`
    pub env_override: String,
    /// Paths probed in order, relative to the project root
    pub candidates: Vec<PathBuf>,
    pub expected_globs: Vec<String>,
    pub description_phrase: String,
    pub min_version: i64,
    /// Level-2/3 heading titles that must appear, in this order
    pub headings: Vec<String>,
    /// Regex patterns that must match somewhere in the document
    pub required_phrases: Phrases,
    /// Case-insensitive regex patterns that must not match
    pub forbidden_patterns: Forbidden,
    /// Regex patterns for the verification checklist items
    pub checklist: Phrases,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}

#[allow(clippy::expect_used)]
fn builtin<const CASE_INSENSITIVE: bool>(sources: &[&str]) -> Patterns<CASE_INSENSITIVE> {
    Patterns::compile(sources.iter().copied()).expect("valid regex")
}

impl Default for RulesPolicy {
    fn default() -> Self {
        Self {
            env_override: "RULES_FILE".to_string(),
            candidates: vec![
                PathBuf::from("RULES.md"),
                PathBuf::from("rules.md"),
                PathBuf::from("docs").join("RULES.md"),
                PathBuf::from("docs").join("rules.md"),
                PathBuf::from("docs").join("project-rules.md"),
            ],
            expected_globs: strings(&["/app/**", "/components/**", "/lib/**"]),
            description_phrase: "Polling App with QR Code Sharing".to_string(),
            min_version: 1,
            headings: strings(&[
                "Polling App Project Rules",
                "1. Folder Structure",
                "2. Forms & UI",
                "3. Supabase Usage",
                "4. AI-Assisted Patterns",
                "5. Verification",
            ]),
            required_phrases: builtin(&[
                r"`react-hook-form`",
                r"shadcn/ui",
                r"Server Action",
                r"Supabase",
                r"\.env\.local",
                r"process\.env",
                r"/app/polls/",
                r"/app/api/",
                r"/components/ui/",
                r"/lib/",
            ]),
            forbidden_patterns: builtin(&[
                r"SUPABASE_[A-Z_]*KEY\s*=",
                r"anon\s*key",
                r"service[_\s-]*role",
                r"https://[a-z0-9-]+\.supabase\.co/[a-z0-9/_-]+",
            ]),
            checklist: builtin(&[
                r"Are routes in `/app/polls` and `/app/api`\?",
                r"Are forms using `react-hook-form` and shadcn/ui components\?",
                r"Are Supabase keys and operations secure and correct\?",
                r"Does AI-generated code follow the existing folder structure and server/client component rules\?",
            ]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_patterns_compile() {
        let policy = RulesPolicy::default();
        assert_eq!(policy.required_phrases.sources().count(), 10);
        assert_eq!(policy.forbidden_patterns.sources().count(), 4);
        assert_eq!(policy.checklist.sources().count(), 4);
    }

    #[test]
    fn test_default_candidates_order() {
        let policy = RulesPolicy::default();
        assert_eq!(policy.candidates[0], PathBuf::from("RULES.md"));
        assert_eq!(policy.candidates.len(), 5);
    }
}

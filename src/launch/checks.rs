//! launch.json checks
//!
//! Each check takes the loaded file and the policy and returns either `Ok(())`
//! or a message naming the field at fault.

use std::path::Path;

use url::Url;

use super::locate;
use super::model::{LaunchConfiguration, LaunchDocument};
use crate::config::LaunchPolicy;
use crate::error::fs as fs_error;
use crate::jsonc;
use crate::report::{CheckOutcome, SuiteReport};
use crate::schema::FieldError;

pub const PRESENT: &str = "launch.present";
pub const PARSES: &str = "launch.parses";
pub const TOP_LEVEL: &str = "launch.top-level";
pub const CHROME_LOCALHOST: &str = "launch.chrome-localhost";
pub const REQUIRED_KEYS: &str = "launch.required-keys";
pub const URLS: &str = "launch.urls";

/// Checks that need a parsed document, in report order
const DOCUMENT_CHECKS: &[(&str, DocumentCheck)] = &[
    (TOP_LEVEL, check_top_level),
    (CHROME_LOCALHOST, check_chrome_localhost),
    (REQUIRED_KEYS, check_required_keys),
    (URLS, check_urls),
];

type CheckResult = std::result::Result<(), String>;
type DocumentCheck = fn(&LaunchDocument, &LaunchPolicy) -> CheckResult;

/// A launch.json read from disk
#[derive(Debug)]
pub struct LoadedLaunch {
    pub raw: String,
}

impl LoadedLaunch {
    pub fn read(path: &Path) -> crate::error::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| fs_error::read_failed(path.display().to_string(), e.to_string()))?;
        Ok(Self { raw })
    }

    /// Parse (tolerating `//` comments) into a document
    pub fn document(&self) -> std::result::Result<LaunchDocument, String> {
        let value = jsonc::parse(&self.raw).map_err(|e| e.to_string())?;
        LaunchDocument::from_value(value)
            .map_err(|found| format!("Parsed launch.json must be a JSON object, found {found}."))
    }
}

/// The raw text parses and comment stripping leaves no comment lines behind
pub fn check_parses(
    loaded: &LoadedLaunch,
    document: &std::result::Result<LaunchDocument, String>,
) -> CheckResult {
    document.as_ref().map_err(Clone::clone)?;
    if loaded.raw.contains("//") && jsonc::strip_comments(&loaded.raw).contains("\n//") {
        return Err("Comment stripper should remove line comments.".to_string());
    }
    Ok(())
}

pub fn check_top_level(doc: &LaunchDocument, policy: &LaunchPolicy) -> CheckResult {
    match doc.version() {
        Err(FieldError::Missing) => return Err("Top-level 'version' is required.".to_string()),
        Err(FieldError::Mismatch { .. }) => return Err("'version' must be a string.".to_string()),
        Ok(version) if version != policy.expected_version => {
            return Err(format!(
                "Expected VS Code launch.json version to be '{}', found '{version}'.",
                policy.expected_version
            ));
        }
        Ok(_) => {}
    }

    match doc.configurations() {
        Err(FieldError::Missing) => Err("Top-level 'configurations' is required.".to_string()),
        Err(FieldError::Mismatch { .. }) => Err("'configurations' must be a list.".to_string()),
        Ok(_) => Ok(()),
    }
}

/// Host named in the URL's `//` authority.
///
/// `http:localhost:8080` parses, but without `//` after the scheme it has no
/// authority and so no host.
fn authority_host<'u>(raw_url: &str, url: &'u Url) -> Option<&'u str> {
    let has_authority = raw_url
        .trim_start()
        .split_once(':')
        .is_some_and(|(_, rest)| rest.starts_with("//"));
    url.host_str().filter(|host| has_authority && !host.is_empty())
}

fn configurations(doc: &LaunchDocument) -> std::result::Result<Vec<LaunchConfiguration<'_>>, String> {
    doc.configurations_or_empty()
        .map_err(|_| "'configurations' must be a list.".to_string())
}

/// First Chrome launch configuration whose URL mentions an allowed host
fn find_chrome_config<'a>(
    configs: &[LaunchConfiguration<'a>],
    policy: &LaunchPolicy,
) -> Option<LaunchConfiguration<'a>> {
    configs.iter().copied().find(|c| {
        c.kind() == Ok("chrome")
            && c.request() == Ok("launch")
            && c.url()
                .is_ok_and(|url| policy.allowed_hosts.iter().any(|h| url.contains(h.as_str())))
    })
}

pub fn check_chrome_localhost(doc: &LaunchDocument, policy: &LaunchPolicy) -> CheckResult {
    let configs = configurations(doc)?;
    let chrome = find_chrome_config(&configs, policy).ok_or_else(|| {
        "Must include a Chrome launch configuration targeting localhost.".to_string()
    })?;

    let name = chrome.name().unwrap_or_default();
    if name != policy.expected_name {
        return Err(format!(
            "Unexpected debug configuration name: expected '{}', found '{name}'.",
            policy.expected_name
        ));
    }

    let raw_url = chrome
        .url()
        .map_err(|_| "'url' must be a string.".to_string())?;
    let url = Url::parse(raw_url)
        .map_err(|_| format!("URL must include http/https scheme: {raw_url}"))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("URL must include http/https scheme: {raw_url}"));
    }
    let host = authority_host(raw_url, &url).unwrap_or_default();
    if !policy.allowed_hosts.iter().any(|h| h == host) {
        return Err(format!("URL should target localhost, found host '{host}'."));
    }
    let port = url.port_or_known_default();
    if port != Some(policy.expected_port) {
        return Err(format!(
            "Expected localhost port {} per configuration, found {}.",
            policy.expected_port,
            port.map_or_else(|| "none".to_string(), |p| p.to_string())
        ));
    }

    let web_root = chrome
        .web_root()
        .map_err(|_| "'webRoot' must be a string.".to_string())?;
    if !web_root.contains(policy.web_root_placeholder.as_str()) {
        return Err(format!(
            "'webRoot' should reference {}.",
            policy.web_root_placeholder
        ));
    }

    Ok(())
}

pub fn check_required_keys(doc: &LaunchDocument, _policy: &LaunchPolicy) -> CheckResult {
    for config in configurations(doc)? {
        if config.as_object().is_none() {
            return Err(format!(
                "Configuration at index {} must be an object.",
                config.index
            ));
        }
        let missing = config.missing_required();
        if !missing.is_empty() {
            return Err(format!(
                "Configuration at index {} is missing required keys: {missing:?}",
                config.index
            ));
        }
    }
    Ok(())
}

/// Every launch-type configuration with a `url` carries a well-formed http(s) URL
pub fn check_urls(doc: &LaunchDocument, _policy: &LaunchPolicy) -> CheckResult {
    for config in configurations(doc)? {
        if config.request() != Ok("launch") || !config.has("url") {
            continue;
        }
        let i = config.index;
        let raw_url = config
            .url()
            .map_err(|_| format!("config[{i}].url must be a string"))?;
        let url = Url::parse(raw_url)
            .map_err(|_| format!("config[{i}].url must include http/https scheme"))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!("config[{i}].url must include http/https scheme"));
        }
        if authority_host(raw_url, &url).is_none() {
            return Err(format!("config[{i}].url must include a hostname"));
        }
    }
    Ok(())
}

fn fail_remaining(checks: &mut Vec<CheckOutcome>, ids: &[&'static str], message: &str) {
    checks.extend(ids.iter().map(|&id| CheckOutcome::fail(id, message)));
}

/// Locate, load and check a launch.json under `root`
pub fn run_suite(root: &Path, policy: &LaunchPolicy, explicit: Option<&Path>) -> SuiteReport {
    let mut checks = Vec::new();
    let document_ids: Vec<&'static str> = DOCUMENT_CHECKS.iter().map(|(id, _)| *id).collect();

    let path = match locate::locate(root, policy, explicit) {
        Ok(path) => path,
        Err(e) => {
            tracing::debug!("launch file not located: {e}");
            checks.push(CheckOutcome::fail(
                PRESENT,
                format!(
                    "Expected to find .vscode/launch.json (preferred) or a launch.json in repository. {e}"
                ),
            ));
            let mut rest = vec![PARSES];
            rest.extend(&document_ids);
            fail_remaining(&mut checks, &rest, "launch.json was not located");
            return SuiteReport {
                suite: "launch",
                file: None,
                checks,
            };
        }
    };
    checks.push(CheckOutcome::pass(PRESENT));

    let loaded = match LoadedLaunch::read(&path) {
        Ok(loaded) => loaded,
        Err(e) => {
            let message = e.to_string();
            let mut rest = vec![PARSES];
            rest.extend(&document_ids);
            fail_remaining(&mut checks, &rest, &message);
            return SuiteReport {
                suite: "launch",
                file: Some(path),
                checks,
            };
        }
    };

    let document = loaded.document();
    checks.push(CheckOutcome::from_result(PARSES, check_parses(&loaded, &document)));
    match document {
        Ok(doc) => {
            for &(id, check) in DOCUMENT_CHECKS {
                checks.push(CheckOutcome::from_result(id, check(&doc, policy)));
            }
        }
        Err(message) => {
            tracing::warn!("{}: {message}", path.display());
            fail_remaining(
                &mut checks,
                &document_ids,
                &format!("launch.json could not be parsed: {message}"),
            );
        }
    }

    SuiteReport {
        suite: "launch",
        file: Some(path),
        checks,
    }
}

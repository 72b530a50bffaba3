//! # Workbench Generators
//!
//! File: cli/src/assistant/workbench.rs
//!
//! ## Overview
//!
//! The non-chat tools of SmartSDLC. Each one validates its input the way the
//! dashboard did (blank input is rejected with a hint) and then returns
//! canned output from `samples`:
//!
//! | Tool           | Input            | Output                                      |
//! |----------------|------------------|---------------------------------------------|
//! | Requirements   | document name    | the sample requirements (document unread)   |
//! | Code           | prompt, language | auth sample for auth prompts, else skeleton |
//! | Tests          | code, test kind  | unit suite, or a templated browser suite    |
//! | Bugs           | code             | identified issues and fixed code            |
//! | Docs           | code, doc kind   | API reference, README or inline doc comment |
//!
//! Generated text that quotes user input goes through `core::templating`.
//!
use crate::assistant::samples::{self, Issue, Requirement};
use crate::core::error::{SmartSdlcError, Result};
use crate::core::templating;
use anyhow::anyhow;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Prompt keywords that select the canned authentication code.
const AUTH_KEYWORDS: &[&str] = &["authentication", "login"];

/// Target language for generated code. Also accepted in the `[workbench]` config table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Python,
    Javascript,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum TestKind {
    #[default]
    Unit,
    Integration,
    E2e,
}

impl fmt::Display for TestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TestKind::Unit => write!(f, "unit"),
            TestKind::Integration => write!(f, "integration"),
            TestKind::E2e => write!(f, "e2e"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum DocKind {
    Api,
    Readme,
    /// A doc comment block for the code itself.
    #[default]
    Inline,
}

/// The workbench tools, used to look up delays and user-facing labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Requirements,
    Code,
    Tests,
    Bugs,
    Docs,
}

impl Tool {
    /// Shown while the simulated work is in progress.
    pub fn progress_label(self) -> &'static str {
        match self {
            Tool::Requirements => "Extracting requirements",
            Tool::Code => "Generating code",
            Tool::Tests => "Generating tests",
            Tool::Bugs => "Analyzing code",
            Tool::Docs => "Generating documentation",
        }
    }

    /// Shown once the output has been printed.
    pub fn success_message(self) -> &'static str {
        match self {
            Tool::Requirements => "Requirements extracted successfully!",
            Tool::Code => "Code generated successfully!",
            Tool::Tests => "Tests generated successfully!",
            Tool::Bugs => "Bug analysis completed!",
            Tool::Docs => "Documentation generated successfully!",
        }
    }
}

/// Requirements "extracted" from an uploaded document.
#[derive(Debug, Clone, Serialize)]
pub struct RequirementsReport {
    /// Name of the document. Its contents are never read.
    pub document: String,
    pub requirements: &'static [Requirement],
}

#[derive(Debug, Clone, Serialize)]
pub struct BugReport {
    pub issues: &'static [Issue],
    pub fixed_code: &'static str,
}

/// # Extract Requirements (`extract_requirements`)
///
/// "Extracts" requirements from an uploaded document. The document is never
/// opened; its name only labels the report.
///
/// ## Arguments
///
/// * `document`: Display name of the uploaded document.
///
/// ## Returns
///
/// * `Result<RequirementsReport>`: The sample requirements under the trimmed document name.
/// * `Err`: `SmartSdlcError::EmptyInput` when `document` is blank.
pub fn extract_requirements(document: &str) -> Result<RequirementsReport> {
    let document = require_input(document, "Please upload a document to extract requirements from")?;
    debug!("Extracting requirements for document '{}'", document);
    Ok(RequirementsReport {
        document: document.to_string(),
        requirements: samples::REQUIREMENTS,
    })
}

/// # Generate Code (`generate_code`)
///
/// Prompts mentioning authentication or login (any case) get the canned
/// authentication sample for `language`. Any other prompt gets a runnable
/// skeleton whose header quotes the trimmed prompt.
///
/// ## Arguments
///
/// * `prompt`: What to build, in natural language.
/// * `language`: Target language of the generated code.
///
/// ## Returns
///
/// * `Result<String>`: The generated source code.
/// * `Err`: `SmartSdlcError::EmptyInput` for a blank prompt, or a template error.
pub fn generate_code(prompt: &str, language: Language) -> Result<String> {
    let prompt = require_input(prompt, "Please enter a code generation prompt")?;
    let lowered = prompt.to_lowercase();
    let wants_auth = AUTH_KEYWORDS.iter().any(|kw| lowered.contains(kw));
    debug!(
        "Generating {:?} code (authentication sample: {})",
        language, wants_auth
    );

    match (wants_auth, language) {
        (true, Language::Python) => Ok(samples::PYTHON_AUTHENTICATION.to_string()),
        (true, Language::Javascript) => Ok(samples::JAVASCRIPT_API.to_string()),
        (false, Language::Python) => render_skeleton("python-skeleton", samples::PYTHON_SKELETON, prompt),
        (false, Language::Javascript) => {
            render_skeleton("javascript-skeleton", samples::JAVASCRIPT_SKELETON, prompt)
        }
    }
}

/// # Generate Tests (`generate_tests`)
///
/// ## Arguments
///
/// * `code`: The code under test. Only checked for being non-blank.
/// * `kind`: `Unit` returns the canned `unittest` suite; other kinds return a
///   browser-driven pytest suite headed with the kind.
///
/// ## Returns
///
/// * `Result<String>`: The test suite source.
/// * `Err`: `SmartSdlcError::EmptyInput` when `code` is blank.
pub fn generate_tests(code: &str, kind: TestKind) -> Result<String> {
    require_input(code, "Please enter code to generate tests for")?;
    match kind {
        TestKind::Unit => Ok(samples::UNIT_TEST_SUITE.to_string()),
        other => templating::render_str(
            "generated-test-suite",
            samples::GENERATED_TEST_SUITE,
            &context_of([("test_kind", other.to_string())]),
        ),
    }
}

/// # Analyze Bugs (`analyze_bugs`)
///
/// Reports the identified issues of the bundled buggy sample together with
/// its corrected version, whatever code is passed.
///
/// ## Returns
///
/// * `Result<BugReport>`: Issues (line, severity, fix) and the fixed code.
/// * `Err`: `SmartSdlcError::EmptyInput` when `code` is blank.
pub fn analyze_bugs(code: &str) -> Result<BugReport> {
    require_input(code, "Please enter code to analyze")?;
    Ok(BugReport {
        issues: samples::IDENTIFIED_ISSUES,
        fixed_code: samples::FIXED_CODE,
    })
}

/// # Generate Documentation (`generate_docs`)
///
/// ## Arguments
///
/// * `code`: The code to document. Only checked for being non-blank.
/// * `kind`: API reference, README, or an inline doc comment block.
///
/// ## Returns
///
/// * `Result<&'static str>`: The canned documentation for `kind`.
/// * `Err`: `SmartSdlcError::EmptyInput` when `code` is blank.
pub fn generate_docs(code: &str, kind: DocKind) -> Result<&'static str> {
    require_input(code, "Please enter code to document")?;
    Ok(match kind {
        DocKind::Api => samples::API_DOCS,
        DocKind::Readme => samples::README_DOCS,
        DocKind::Inline => samples::INLINE_DOCS,
    })
}

const REQUIREMENTS_TEMPLATE: &str = "\
Requirements extracted from '{{ document }}':
{% for req in requirements %}
{{ req.id }}  [{{ req.priority }} Priority]
{{ req.title }}
  {{ req.description }}
  ({{ req.kind }})
{% endfor %}";

const BUG_REPORT_TEMPLATE: &str = "\
Identified issues:
{% for bug in issues %}
[{{ bug.severity }} Severity] Line {{ bug.line }}: {{ bug.issue }}
  {{ bug.description }}
  Fix: {{ bug.fix }}
{% endfor %}
Fixed code:

{{ fixed_code }}
";

impl RequirementsReport {
    /// Plain-text rendering for the terminal.
    pub fn render(&self) -> Result<String> {
        templating::render_str("requirements-report", REQUIREMENTS_TEMPLATE, self)
    }
}

impl BugReport {
    /// Plain-text rendering for the terminal.
    pub fn render(&self) -> Result<String> {
        templating::render_str("bug-report", BUG_REPORT_TEMPLATE, self)
    }
}

fn require_input<'a>(input: &'a str, hint: &str) -> Result<&'a str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!(SmartSdlcError::EmptyInput(hint.to_string())));
    }
    Ok(trimmed)
}

fn render_skeleton(name: &str, template: &str, prompt: &str) -> Result<String> {
    templating::render_str(name, template, &context_of([("prompt", prompt.to_string())]))
}

fn context_of<const N: usize>(pairs: [(&str, String); N]) -> std::collections::HashMap<&str, String> {
    pairs.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_prompts_select_canned_code_per_language() {
        let py = generate_code("Build a LOGIN form", Language::Python).unwrap();
        assert_eq!(py, samples::PYTHON_AUTHENTICATION);

        let js = generate_code("user authentication service", Language::Javascript).unwrap();
        assert_eq!(js, samples::JAVASCRIPT_API);
    }

    #[test]
    fn other_prompts_embed_the_prompt() {
        let py = generate_code("  a todo list  ", Language::Python).unwrap();
        assert!(py.starts_with("# Generated Python code based on: \"a todo list\""));
        assert!(py.contains("print(f\"Execution result: {result}\")"));

        let js = generate_code("a todo list", Language::Javascript).unwrap();
        assert!(js.starts_with("// Generated JavaScript code based on: \"a todo list\""));
        assert!(js.ends_with("console.log(`Execution result: ${result}`);"));
    }

    #[test]
    fn blank_prompt_is_rejected_with_hint() {
        let err = generate_code("   ", Language::Python).unwrap_err();
        assert_eq!(err.to_string(), "Please enter a code generation prompt");
        assert!(matches!(
            err.downcast_ref::<SmartSdlcError>(),
            Some(SmartSdlcError::EmptyInput(_))
        ));
    }

    #[test]
    fn unit_tests_are_the_canned_suite() {
        let suite = generate_tests("def f(): pass", TestKind::Unit).unwrap();
        assert_eq!(suite, samples::UNIT_TEST_SUITE);
    }

    #[test]
    fn other_test_kinds_are_named_in_the_header() {
        let suite = generate_tests("def f(): pass", TestKind::E2e).unwrap();
        assert!(suite.starts_with("# Generated e2e tests\nimport pytest"));
        let suite = generate_tests("def f(): pass", TestKind::Integration).unwrap();
        assert!(suite.starts_with("# Generated integration tests"));
    }

    #[test]
    fn tests_need_code() {
        let err = generate_tests("\n", TestKind::Unit).unwrap_err();
        assert_eq!(err.to_string(), "Please enter code to generate tests for");
    }

    #[test]
    fn docs_follow_the_kind() {
        assert_eq!(generate_docs("x", DocKind::Api).unwrap(), samples::API_DOCS);
        assert_eq!(generate_docs("x", DocKind::Readme).unwrap(), samples::README_DOCS);
        assert_eq!(generate_docs("x", DocKind::Inline).unwrap(), samples::INLINE_DOCS);
        assert!(generate_docs(" ", DocKind::Api).is_err());
    }

    #[test]
    fn requirements_report_lists_every_requirement() {
        let report = extract_requirements("specs/payments.pdf").unwrap();
        let text = report.render().unwrap();
        assert!(text.starts_with("Requirements extracted from 'specs/payments.pdf':"));
        assert!(text.contains("REQ-001  [High Priority]"));
        assert!(text.contains("REQ-003  [Medium Priority]"));
        assert!(text.contains("(Performance Requirement)"));
    }

    #[test]
    fn bug_report_lists_issues_then_fixed_code() {
        let report = analyze_bugs(samples::BUGGY_CODE).unwrap();
        assert_eq!(report.issues.len(), 3);
        let text = report.render().unwrap();
        assert!(text.contains("[High Severity] Line 5: Division by zero error"));
        assert!(text.contains("Fix: Add key existence check or use .get() method"));
        let issues_at = text.find("Identified issues:").unwrap();
        let fixed_at = text.find("if not numbers:  # Fix: Check for empty list").unwrap();
        assert!(issues_at < fixed_at);
    }

    #[test]
    fn bug_analysis_needs_code() {
        assert!(analyze_bugs("").is_err());
    }

    #[test]
    fn every_tool_has_labels() {
        for tool in [Tool::Requirements, Tool::Code, Tool::Tests, Tool::Bugs, Tool::Docs] {
            assert!(!tool.progress_label().is_empty());
            assert!(tool.success_message().ends_with('!'));
        }
    }
}

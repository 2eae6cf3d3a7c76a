use devstart::error::{Error, Result};
use devstart::planner::{ContentSource, GenerationPlan, PlanEntry};
use devstart::processor::{ensure_target_dir, materialize};
use devstart::renderer::TemplateRenderer;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Renderer that echoes the template id, optionally failing on one id.
struct EchoRenderer {
    fail_on: Option<&'static str>,
}

impl EchoRenderer {
    fn new() -> Self {
        Self { fail_on: None }
    }

    fn failing_on(template_id: &'static str) -> Self {
        Self { fail_on: Some(template_id) }
    }
}

impl TemplateRenderer for EchoRenderer {
    fn render(&self, template_id: &str, _context: &serde_json::Value) -> Result<String> {
        if self.fail_on == Some(template_id) {
            return Err(Error::UnknownTemplate { template: template_id.to_string() });
        }
        Ok(format!("rendered:{}", template_id))
    }
}

fn template_entry(path: &str, id: &str) -> PlanEntry {
    PlanEntry {
        path: PathBuf::from(path),
        source: ContentSource::Template {
            id: id.to_string(),
            context: serde_json::json!({}),
        },
    }
}

fn sample_plan() -> GenerationPlan {
    GenerationPlan {
        entries: vec![
            template_entry("pyproject.toml", "manifest"),
            PlanEntry {
                path: PathBuf::from("tests/__init__.py"),
                source: ContentSource::Literal(String::new()),
            },
            template_entry("docs/guide.md", "guide"),
        ],
    }
}

#[test]
fn test_ensure_target_dir_creates_missing() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("fresh");

    assert!(ensure_target_dir(&target).is_ok());
    assert!(target.is_dir());
}

#[test]
fn test_ensure_target_dir_accepts_existing_empty() {
    let temp_dir = TempDir::new().unwrap();
    assert!(ensure_target_dir(temp_dir.path()).is_ok());
}

#[test]
fn test_ensure_target_dir_tolerates_git_dir() {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join(".git")).unwrap();

    assert!(ensure_target_dir(temp_dir.path()).is_ok());
}

#[test]
fn test_ensure_target_dir_rejects_non_empty() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.txt"), "existing").unwrap();

    let err = ensure_target_dir(temp_dir.path()).unwrap_err();
    assert!(matches!(err, Error::TargetConflict { .. }));
}

#[test]
fn test_materialize_writes_plan_in_order() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("out");

    let created = materialize(&sample_plan(), &target, &EchoRenderer::new()).unwrap();

    assert_eq!(
        created,
        vec![
            PathBuf::from("pyproject.toml"),
            PathBuf::from("tests/__init__.py"),
            PathBuf::from("docs/guide.md"),
        ]
    );
    assert_eq!(
        fs::read_to_string(target.join("pyproject.toml")).unwrap(),
        "rendered:manifest"
    );
    assert_eq!(fs::read_to_string(target.join("tests/__init__.py")).unwrap(), "");
    assert!(target.join("docs/guide.md").is_file());
}

#[test]
fn test_materialize_stops_on_first_render_failure() {
    let temp_dir = TempDir::new().unwrap();
    let target = temp_dir.path().join("out");

    let err = materialize(&sample_plan(), &target, &EchoRenderer::failing_on("guide"))
        .unwrap_err();

    assert!(matches!(err, Error::UnknownTemplate { template } if template == "guide"));
    // entries before the failure were written, the failing one was not
    assert!(target.join("pyproject.toml").is_file());
    assert!(!target.join("docs").exists());
}

#[test]
fn test_materialize_conflict_leaves_target_untouched() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("keep.txt"), "existing").unwrap();

    let err = materialize(&sample_plan(), temp_dir.path(), &EchoRenderer::new())
        .unwrap_err();
    assert!(matches!(err, Error::TargetConflict { .. }));

    let entries: Vec<_> = fs::read_dir(temp_dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(entries, vec![std::ffi::OsString::from("keep.txt")]);
}

//! Review directory naming and Markdown writers.

use std::path::{Component, Path, PathBuf};

use crate::error::ReviewError;
use crate::review::{ReviewNotes, Role};

pub const PLANNER_FILE_NAME: &str = "planner_review.md";

/// Directory name for a reviewed file: its last three path components joined
/// with `_`, every `.` replaced by `_`.
///
/// `./app/src/main.py` → `app_src_main_py`. Only normal components count, so
/// `.`, `..` and the root never contribute; this intentionally differs from a
/// plain split on the path separator, which would turn `./main.py` into
/// `__main_py`.
pub fn review_dir_name(file_path: &Path) -> String {
    let parts: Vec<String> = file_path
        .components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect();

    let start = parts.len().saturating_sub(3);
    let name = parts[start..].join("_").replace('.', "_");

    if name.is_empty() {
        "review".to_string()
    } else {
        name
    }
}

/// Writes the review files for one reviewed source file.
#[derive(Debug, Clone)]
pub struct ReviewWriter {
    dir: PathBuf,
}

impl ReviewWriter {
    /// Target `{reviews_dir}/{review_dir_name(file_path)}`.
    pub fn new(reviews_dir: &Path, file_path: &Path) -> Self {
        Self {
            dir: reviews_dir.join(review_dir_name(file_path)),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Create the review directory and write one file per role, plus the
    /// planner notes when requested and present. Returns the written paths in
    /// write order.
    pub async fn write(
        &self,
        notes: &ReviewNotes,
        planner_notes: bool,
    ) -> Result<Vec<PathBuf>, ReviewError> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| ReviewError::Output {
                path: self.dir.clone(),
                source,
            })?;

        let mut written = Vec::with_capacity(4);

        for role in Role::ALL {
            let path = self.dir.join(role.file_name());
            write_file(&path, &render(role.title(), [notes.for_role(role)])).await?;
            tracing::info!(role = %role, path = %path.display(), "Review saved");
            written.push(path);
        }

        if planner_notes && !notes.planning.is_empty() {
            let path = self.dir.join(PLANNER_FILE_NAME);
            let body = render("Planner Notes", notes.planning.iter().map(String::as_str));
            write_file(&path, &body).await?;
            tracing::info!(path = %path.display(), "Planner notes saved");
            written.push(path);
        }

        Ok(written)
    }
}

/// `# {title}` followed by each note and a blank line.
fn render<'a>(title: &str, notes: impl IntoIterator<Item = &'a str>) -> String {
    let mut body = format!("# {title}\n\n");
    for note in notes {
        body.push_str(note);
        body.push_str("\n\n");
    }
    body
}

async fn write_file(path: &Path, contents: &str) -> Result<(), ReviewError> {
    tokio::fs::write(path, contents)
        .await
        .map_err(|source| ReviewError::Output {
            path: path.to_path_buf(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn notes() -> ReviewNotes {
        ReviewNotes {
            junior: "Why is this global?".into(),
            senior: "Because of legacy reasons.".into(),
            manager: "Next steps: refactor.".into(),
            planning: vec!["plan A".into(), "plan B".into()],
        }
    }

    #[test]
    fn name_uses_last_three_components() {
        assert_eq!(
            review_dir_name(Path::new("./repo/app/src/main.py")),
            "app_src_main_py"
        );
        assert_eq!(review_dir_name(Path::new("/a/b/c/d/e.rs")), "c_d_e_rs");
    }

    #[test]
    fn name_for_short_paths() {
        assert_eq!(review_dir_name(Path::new("main.py")), "main_py");
        assert_eq!(review_dir_name(Path::new("./main.py")), "main_py");
        assert_eq!(review_dir_name(Path::new("../lib/v1.2.rs")), "lib_v1_2_rs");
    }

    #[test]
    fn name_falls_back_when_no_components() {
        assert_eq!(review_dir_name(Path::new("/")), "review");
    }

    #[tokio::test]
    async fn writes_three_role_files() {
        let tmp = TempDir::new().unwrap();
        let writer = ReviewWriter::new(&tmp.path().join("reviews"), Path::new("src/lib.rs"));

        let written = writer.write(&notes(), false).await.unwrap();

        assert_eq!(written.len(), 3);
        assert_eq!(writer.dir(), tmp.path().join("reviews").join("src_lib_rs"));

        let junior = std::fs::read_to_string(writer.dir().join("junior_review.md")).unwrap();
        assert_eq!(junior, "# Junior Developer Review\n\nWhy is this global?\n\n");
        let senior = std::fs::read_to_string(writer.dir().join("senior_review.md")).unwrap();
        assert_eq!(senior, "# Senior Developer Review\n\nBecause of legacy reasons.\n\n");
        let manager = std::fs::read_to_string(writer.dir().join("manager_review.md")).unwrap();
        assert_eq!(manager, "# Manager Notes\n\nNext steps: refactor.\n\n");

        assert!(!writer.dir().join(PLANNER_FILE_NAME).exists());
    }

    #[tokio::test]
    async fn writes_planner_notes_when_enabled() {
        let tmp = TempDir::new().unwrap();
        let writer = ReviewWriter::new(tmp.path(), Path::new("main.py"));

        let written = writer.write(&notes(), true).await.unwrap();

        assert_eq!(written.len(), 4);
        let planner = std::fs::read_to_string(writer.dir().join(PLANNER_FILE_NAME)).unwrap();
        assert_eq!(planner, "# Planner Notes\n\nplan A\n\nplan B\n\n");
    }

    #[tokio::test]
    async fn skips_planner_file_without_planning_notes() {
        let tmp = TempDir::new().unwrap();
        let writer = ReviewWriter::new(tmp.path(), Path::new("main.py"));
        let mut notes = notes();
        notes.planning.clear();

        let written = writer.write(&notes, true).await.unwrap();
        assert_eq!(written.len(), 3);
    }

    #[tokio::test]
    async fn reports_output_error_when_reviews_root_is_a_file() {
        let tmp = TempDir::new().unwrap();
        let reviews_root = tmp.path().join("reviews");
        std::fs::write(&reviews_root, "not a directory").unwrap();
        let writer = ReviewWriter::new(&reviews_root, Path::new("main.py"));

        let err = writer.write(&notes(), false).await.unwrap_err();

        match err {
            ReviewError::Output { path, .. } => assert_eq!(path, reviews_root.join("main_py")),
            other => panic!("Expected Output error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn overwrites_previous_review() {
        let tmp = TempDir::new().unwrap();
        let writer = ReviewWriter::new(tmp.path(), Path::new("main.py"));
        writer.write(&notes(), false).await.unwrap();

        let mut second = notes();
        second.manager = "Ship it.".into();
        writer.write(&second, false).await.unwrap();

        let manager = std::fs::read_to_string(writer.dir().join("manager_review.md")).unwrap();
        assert_eq!(manager, "# Manager Notes\n\nShip it.\n\n");
    }
}

// Test utility module for docmap integration tests
#![allow(dead_code)]

use indoc::indoc;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A document carrying every required and recommended section.
pub const COMPLETE_DOC: &str = indoc! {"
    # Practice

    ## Tổng quan
    Why this matters.

    ## Checklist
    - [ ] Define owners
    - [x] Publish runbook

    ## References
    - [Well-Architected](https://aws.amazon.com/architecture/well-architected/)
    - [Runbooks](https://example.com/runbooks)

    ## Date
    2024-06-01
"};

/// Required sections present, recommended overview absent.
pub const NO_OVERVIEW_DOC: &str = indoc! {"
    ## references
    - [Docs](https://example.com)

    ## DATE
    2024-06-01

    ## Checklist (optional)
    - [ ] Review
"};

/// Missing the `Date` section.
pub const NO_DATE_DOC: &str = indoc! {"
    ## Tổng quan
    ## References
    ## Checklist
"};

/// Temporary documentation tree.
pub struct DocsFixture {
    dir: TempDir,
}

impl DocsFixture {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// Root of the documentation tree.
    pub fn root(&self) -> PathBuf {
        self.dir.path().join("industry-standard")
    }

    pub fn write(&self, rel: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.root().join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, content).unwrap();
        path
    }

    pub fn mkdir(&self) -> &Self {
        fs::create_dir_all(self.root()).unwrap();
        self
    }

    /// A small tree spanning two pillars, an index file and a stray document.
    pub fn sample() -> Self {
        let fixture = Self::new();
        fixture.write("RESOURCES.md", "# Resources\n- [a](b)\n");
        fixture.write(
            "1-OPS/OPS01-organization/OPS01-BP01-evaluate-customer-needs.md",
            COMPLETE_DOC,
        );
        fixture.write(
            "1-OPS/OPS01-organization/OPS01-BP02-evaluate-internal-needs.md",
            NO_OVERVIEW_DOC,
        );
        fixture.write("1-OPS/OPS02-operating-model/OPS02-BP01-owners.md", NO_DATE_DOC);
        fixture.write("4-SEC/SEC03-permissions/SEC03-BP05-some-practice.md", COMPLETE_DOC);
        fixture.write("SUS/SUS01-region/overview.md", COMPLETE_DOC);
        fixture.write("drafts/scratch.md", "just notes\n");
        fixture
    }
}

pub fn relative(root: &Path, path: &Path) -> String {
    path.strip_prefix(root)
        .unwrap()
        .to_string_lossy()
        .into_owned()
}

use super::vcs::{
    BranchAction, CONVERSION_BRANCH, VersionControl, ensure_conversion_branch, is_conversion_branch,
};
use anyhow::{Result, anyhow};
use std::cell::RefCell;

struct FakeVcs {
    branch: Result<String, String>,
    created: RefCell<Vec<String>>,
    fail_checkout: bool,
}

impl FakeVcs {
    fn on(branch: &str) -> Self {
        FakeVcs {
            branch: Ok(branch.to_string()),
            created: RefCell::new(Vec::new()),
            fail_checkout: false,
        }
    }
}

impl VersionControl for FakeVcs {
    fn current_branch(&self) -> Result<String> {
        self.branch.clone().map_err(|e| anyhow!(e))
    }

    fn checkout_new_branch(&self, name: &str) -> Result<()> {
        if self.fail_checkout {
            return Err(anyhow!("branch exists"));
        }
        self.created.borrow_mut().push(name.to_string());
        Ok(())
    }
}

#[test]
fn test_conversion_branch_names() {
    assert!(is_conversion_branch("ts-to-js"));
    assert!(is_conversion_branch("feature/JS"));
    assert!(is_conversion_branch("migrate-TS"));
    assert!(!is_conversion_branch("main"));
    assert!(!is_conversion_branch("master"));
    assert!(!is_conversion_branch("develop"));
}

#[test]
fn test_creates_branch_off_main() {
    let vcs = FakeVcs::on("main");
    let action = ensure_conversion_branch(&vcs).expect("guard");
    assert_eq!(action, BranchAction::Created(CONVERSION_BRANCH.to_string()));
    assert_eq!(*vcs.created.borrow(), vec![CONVERSION_BRANCH.to_string()]);
}

#[test]
fn test_keeps_conversion_branch() {
    let vcs = FakeVcs::on("drop-ts");
    let action = ensure_conversion_branch(&vcs).expect("guard");
    assert_eq!(action, BranchAction::Kept("drop-ts".to_string()));
    assert!(vcs.created.borrow().is_empty());
}

#[test]
fn test_guard_failures_propagate() {
    let vcs = FakeVcs {
        branch: Err("not a git repository".to_string()),
        created: RefCell::new(Vec::new()),
        fail_checkout: false,
    };
    let err = ensure_conversion_branch(&vcs).expect_err("no repo");
    assert!(format!("{err:#}").contains("not a git repository"));

    let vcs = FakeVcs {
        fail_checkout: true,
        ..FakeVcs::on("main")
    };
    let err = ensure_conversion_branch(&vcs).expect_err("checkout");
    assert!(format!("{err:#}").contains(CONVERSION_BRANCH));
}

use common::TestResult;
use common::sandbox::{Sandbox, sandbox};
use pretty_assertions::assert_eq;
use rstest::rstest;
use svc::errors::Error;

mod common;

#[rstest]
fn new_repository_has_only_master(sandbox: Sandbox) {
    assert_eq!(sandbox.branch_names(), vec!["master"]);
    assert_eq!(sandbox.repository.current_branch().name().as_ref(), "master");
    assert_eq!(sandbox.head_id(), None);
}

#[rstest]
#[case::plain("feature")]
#[case::hierarchical("feature/login")]
#[case::with_digits_and_dashes("fix-42_b")]
fn create_branch_with_valid_name(mut sandbox: Sandbox, #[case] branch_name: &str) -> TestResult {
    sandbox.repository.branch(branch_name)?;

    assert_eq!(sandbox.branch_names(), vec!["master", branch_name]);
    assert_eq!(sandbox.repository.current_branch().name().as_ref(), "master");

    Ok(())
}

#[rstest]
#[case::space("feature branch")]
#[case::empty("")]
#[case::asterisk("feature*branch")]
#[case::dot("v1.0")]
#[case::tab("feature\tbranch")]
fn create_branch_with_invalid_name(mut sandbox: Sandbox, #[case] branch_name: &str) {
    let result = sandbox.repository.branch(branch_name);

    assert!(matches!(result, Err(Error::InvalidName(name)) if name == branch_name));
    assert_eq!(sandbox.branch_names(), vec!["master"]);
}

#[rstest]
fn create_duplicate_branch(mut sandbox: Sandbox) -> TestResult {
    sandbox.repository.branch("feature")?;

    assert!(matches!(
        sandbox.repository.branch("feature"),
        Err(Error::AlreadyExists(name)) if name.as_ref() == "feature"
    ));
    assert!(matches!(
        sandbox.repository.branch("master"),
        Err(Error::AlreadyExists(_))
    ));
    assert_eq!(sandbox.branch_names(), vec!["master", "feature"]);

    Ok(())
}

#[rstest]
fn create_branch_with_uncommitted_changes(mut sandbox: Sandbox) -> TestResult {
    sandbox.write("a.txt", "hello");
    sandbox.repository.add("a.txt")?;

    assert!(matches!(
        sandbox.repository.branch("feature"),
        Err(Error::UncommittedChanges)
    ));
    assert_eq!(sandbox.branch_names(), vec!["master"]);

    Ok(())
}

#[rstest]
fn new_branch_copies_head_and_tracked_files(mut sandbox: Sandbox) -> TestResult {
    sandbox.write("a.txt", "hello");
    sandbox.repository.add("a.txt")?;
    sandbox.repository.commit("first")?;

    sandbox.repository.branch("feature")?;
    sandbox.repository.checkout("feature")?;

    assert_eq!(sandbox.head_id().as_deref(), Some("443094"));
    assert_eq!(sandbox.states(), vec![("a.txt".to_string(), 'N')]);

    Ok(())
}

#[rstest]
fn branches_are_listed_in_creation_order(mut sandbox: Sandbox) -> TestResult {
    sandbox.repository.branch("zeta")?;
    sandbox.repository.branch("alpha")?;
    sandbox.repository.checkout("alpha")?;
    sandbox.repository.branch("mid/level")?;

    assert_eq!(
        sandbox.branch_names(),
        vec!["master", "zeta", "alpha", "mid/level"]
    );

    Ok(())
}

#[rstest]
fn commits_remember_the_branch_they_were_made_on(mut sandbox: Sandbox) -> TestResult {
    sandbox.repository.branch("feature")?;
    sandbox.repository.checkout("feature")?;
    sandbox.write("a.txt", "hello");
    sandbox.repository.add("a.txt")?;

    sandbox.repository.commit("first")?;

    let output = sandbox.repository.show_commit("443094")?;
    assert!(output.starts_with("443094 [feature]: first\n"));

    Ok(())
}

//! ROLLBACK_* environment overrides.
//!
//! A single test per binary: environment variables are process-wide, so
//! keeping them out of `config_test.rs` avoids racing its default checks.

use rollback::config::Settings;
use rollback::domain::is_protected_branch;

#[test]
fn given_env_overrides_when_load_then_env_wins_and_lists_are_split() {
    // Arrange
    std::env::set_var("ROLLBACK_PROTECTED_BRANCHES", "release,prod");
    std::env::set_var("ROLLBACK_TARGET_FILENAME", "canary.yaml");
    std::env::set_var("ROLLBACK_GIT__DATE_FORMAT", "%d.%m.%Y");

    // Act
    let result = Settings::load_from(None);
    std::env::remove_var("ROLLBACK_PROTECTED_BRANCHES");
    std::env::remove_var("ROLLBACK_TARGET_FILENAME");
    std::env::remove_var("ROLLBACK_GIT__DATE_FORMAT");
    let settings = result.unwrap();

    // Assert
    assert_eq!(settings.protected_branches, vec!["release", "prod"]);
    for branch in ["release", "prod", "main"] {
        assert!(
            is_protected_branch(branch, &settings.protected_branches),
            "{branch} should be protected"
        );
    }
    assert!(!is_protected_branch("feature/x", &settings.protected_branches));
    assert_eq!(settings.target_filename, "canary.yaml");
    assert_eq!(settings.git.date_format, "%d.%m.%Y");
}

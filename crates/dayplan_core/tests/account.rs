use dayplan_core::db::open_db_in_memory;
use dayplan_core::{
    AccountError, AccountService, SqliteUserRepository, UserRepository, ValidationError,
};

#[test]
fn register_and_verify_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));

    let user = accounts.register("alice", "s3cret", "care").unwrap();
    assert_eq!(user.username, "alice");
    assert_eq!(user.department, "care");

    let verified = accounts.verify_credentials("alice", "s3cret").unwrap();
    assert_eq!(verified.map(|u| u.uuid), Some(user.uuid));
}

#[test]
fn stored_credential_is_a_salted_hash() {
    let conn = open_db_in_memory().unwrap();
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));

    let user = accounts.register("bob", "hunter2", "").unwrap();
    assert_ne!(user.password_hash, "hunter2");
    assert!(user.password_hash.starts_with("$2"), "expected bcrypt hash");
}

#[test]
fn wrong_password_and_unknown_user_are_indistinguishable() {
    let conn = open_db_in_memory().unwrap();
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));

    accounts.register("carol", "right", "").unwrap();

    assert!(accounts.verify_credentials("carol", "wrong").unwrap().is_none());
    assert!(accounts.verify_credentials("nobody", "right").unwrap().is_none());
}

#[test]
fn duplicate_username_is_rejected_before_any_write() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteUserRepository::new(&conn);
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));

    let original = accounts.register("dave", "first", "night shift").unwrap();

    let err = accounts.register("dave", "second", "day shift").unwrap_err();
    assert!(matches!(err, AccountError::DuplicateUsername(name) if name == "dave"));

    // The pre-existing record is unchanged.
    let stored = repo.find_by_username("dave").unwrap().unwrap();
    assert_eq!(stored.uuid, original.uuid);
    assert_eq!(stored.department, "night shift");
    assert_eq!(stored.password_hash, original.password_hash);
}

#[test]
fn username_policy_rejects_blank_and_ill_formed_names() {
    let conn = open_db_in_memory().unwrap();
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));

    let blank = accounts.register("   ", "pw", "").unwrap_err();
    assert!(matches!(
        blank,
        AccountError::Validation(ValidationError::InvalidUsername(_))
    ));

    let spaced = accounts.register("two words", "pw", "").unwrap_err();
    assert!(matches!(
        spaced,
        AccountError::Validation(ValidationError::InvalidUsername(_))
    ));
}

#[test]
fn empty_password_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let accounts = AccountService::new(SqliteUserRepository::new(&conn));

    let err = accounts.register("erin", "", "").unwrap_err();
    assert!(matches!(
        err,
        AccountError::Validation(ValidationError::EmptyPassword)
    ));
    assert!(accounts.verify_credentials("erin", "").unwrap().is_none());
}

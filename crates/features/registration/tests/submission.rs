use rhub_database::Database;
use rhub_registration::{
    DUPLICATE_MESSAGE, RegistrationDraft, RegistrationError, RegistrationRepository,
};

fn draft(email: &str, phone: &str) -> RegistrationDraft {
    RegistrationDraft {
        title: "Brother".to_owned(),
        first_name: "Ade".to_owned(),
        last_name: "Okoro".to_owned(),
        email: email.to_owned(),
        phone: phone.to_owned(),
        kingschat: "ade".to_owned(),
        zone: "East Region > Alpha".to_owned(),
        group_name: "g1".to_owned(),
        church: "Central".to_owned(),
        physical_attendance: false,
    }
}

async fn repository(db_name: &str) -> RegistrationRepository {
    let db = Database::builder()
        .url("mem://")
        .session("registration_test", db_name)
        .init()
        .await
        .expect("mem db");
    RegistrationRepository::new(db)
}

#[tokio::test]
async fn valid_submission_creates_a_record() {
    let repo = repository("create").await;

    let created =
        repo.create(draft("a@x.com", "555").into_record().expect("valid")).await.expect("insert");

    assert_eq!(created.id.len(), 12);
    assert_eq!(created.email, "a@x.com");
    assert_eq!(created.attendance_type, "online", "unset flag derives online");

    let listed = repo.list().await.expect("list");
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let repo = repository("dup_email").await;

    repo.create(draft("a@x.com", "555").into_record().expect("valid")).await.expect("first");

    let err = repo
        .create(draft("a@x.com", "556").into_record().expect("valid"))
        .await
        .expect_err("same email must conflict");
    assert!(matches!(err, RegistrationError::Conflict { .. }));
    assert_eq!(err.user_message(), DUPLICATE_MESSAGE);

    assert_eq!(repo.list().await.expect("list").len(), 1, "no partial insert on conflict");
}

#[tokio::test]
async fn duplicate_phone_is_a_conflict() {
    let repo = repository("dup_phone").await;

    repo.create(draft("a@x.com", "555").into_record().expect("valid")).await.expect("first");

    let err = repo
        .create(draft("b@x.com", "555").into_record().expect("valid"))
        .await
        .expect_err("same phone must conflict");
    assert!(matches!(err, RegistrationError::Conflict { .. }));
}

#[tokio::test]
async fn email_comparison_uses_the_normalized_form() {
    let repo = repository("normalized").await;

    repo.create(draft("a@x.com", "555").into_record().expect("valid")).await.expect("first");

    // Differently-cased email normalizes to the same stored value.
    let err = repo
        .create(draft("  A@X.COM ", "556").into_record().expect("valid"))
        .await
        .expect_err("case-insensitive duplicate");
    assert!(matches!(err, RegistrationError::Conflict { .. }));
}

#[tokio::test]
async fn listing_is_newest_first_and_idempotent() {
    let repo = repository("ordering").await;

    for (email, phone) in [("a@x.com", "1"), ("b@x.com", "2"), ("c@x.com", "3")] {
        repo.create(draft(email, phone).into_record().expect("valid")).await.expect("insert");
    }

    let first = repo.list().await.expect("list");
    assert_eq!(first.len(), 3);
    assert_eq!(first[0].email, "c@x.com", "newest first");
    assert_eq!(first[2].email, "a@x.com");
    assert!(first.windows(2).all(|w| w[0].created_at >= w[1].created_at));

    let second = repo.list().await.expect("list again");
    let ids = |v: &[rhub_registration::Registration]| {
        v.iter().map(|r| r.id.clone()).collect::<Vec<_>>()
    };
    assert_eq!(ids(&first), ids(&second), "reads are idempotent");
}

#[tokio::test]
async fn delete_semantics() {
    let repo = repository("delete").await;

    let created =
        repo.create(draft("a@x.com", "555").into_record().expect("valid")).await.expect("insert");

    assert!(!repo.delete("missing-id-123").await.expect("delete miss"), "unknown id is a miss");
    assert_eq!(repo.list().await.expect("list").len(), 1, "miss leaves the store unchanged");

    assert!(repo.delete(&created.id).await.expect("delete hit"));
    assert!(repo.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn delete_all_empties_the_store_even_when_empty() {
    let repo = repository("delete_all").await;

    repo.delete_all().await.expect("delete-all on empty store is fine");

    for (email, phone) in [("a@x.com", "1"), ("b@x.com", "2")] {
        repo.create(draft(email, phone).into_record().expect("valid")).await.expect("insert");
    }

    repo.delete_all().await.expect("delete-all");
    assert!(repo.list().await.expect("list").is_empty());
}

#[tokio::test]
async fn scenario_chain_from_the_form() {
    let repo = repository("scenario").await;

    // submit → 201 with attendanceType online (flag unset)
    let created =
        repo.create(draft("a@x.com", "555").into_record().expect("valid")).await.expect("insert");
    assert_eq!(created.attendance_type, "online");

    // same email, different phone → conflict
    let err = repo.create(draft("a@x.com", "999").into_record().expect("valid")).await.unwrap_err();
    assert!(matches!(err, RegistrationError::Conflict { .. }));

    // different email, same phone → conflict
    let err = repo.create(draft("z@x.com", "555").into_record().expect("valid")).await.unwrap_err();
    assert!(matches!(err, RegistrationError::Conflict { .. }));
}

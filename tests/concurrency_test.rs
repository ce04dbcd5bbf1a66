mod common;

use std::time::Duration;

use checkin_backend::{
    database::{pool::connect, run_migrations},
    dto::user_dto::CreateUserPayload,
    error::Error,
    services::{
        hardware_service::HardwareService, scan_service::ScanService, user_service::UserService,
    },
};
use sqlx::SqlitePool;
use tempfile::TempDir;

use common::{seed, USER_COUNT};

const EXTRA_USERS: i64 = 200;

/// Seeded database file behind a multi-connection WAL pool.
async fn file_pool() -> (TempDir, SqlitePool) {
    let dir = tempfile::tempdir().expect("tempdir");
    let url = format!("sqlite://{}", dir.path().join("checkin.db").display());
    let pool = connect(&url, 8, Duration::from_secs(30)).await.expect("pool");
    run_migrations(&pool).await.expect("migrations");
    seed(&pool).await;

    for i in 1..=EXTRA_USERS {
        sqlx::query("INSERT INTO users (name, company, email, phone) VALUES (?, ?, ?, ?)")
            .bind(format!("Walk-in {}", i))
            .bind("Initech")
            .bind(format!("walkin{}@example.com", i))
            .bind(format!("+1-555-9{:04}", i))
            .execute(&pool)
            .await
            .expect("seed walk-in");
    }
    (dir, pool)
}

fn tally<T>(results: Vec<Result<T, Error>>) -> (usize, usize, Vec<String>) {
    let mut ok = 0;
    let mut conflicts = 0;
    let mut unexpected = Vec::new();
    for result in results {
        match result {
            Ok(_) => ok += 1,
            Err(Error::Conflict(_)) => conflicts += 1,
            Err(other) => unexpected.push(other.to_string()),
        }
    }
    (ok, conflicts, unexpected)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn parallel_check_ins_of_distinct_users_all_succeed() {
    let (_dir, pool) = file_pool().await;
    let users = UserService::new(pool.clone());

    let total = USER_COUNT + EXTRA_USERS;
    let handles: Vec<_> = (1..=total)
        .map(|id| {
            let users = users.clone();
            tokio::spawn(async move { users.check_in(id).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let (ok, conflicts, unexpected) = tally(results);
    assert!(unexpected.is_empty(), "unexpected errors: {:?}", unexpected);
    assert_eq!((ok, conflicts), (total as usize, 0));

    let checked_in = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE checked_in = 1")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(checked_in, total);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_check_ins_of_one_user_yield_one_winner() {
    let (_dir, pool) = file_pool().await;
    let users = UserService::new(pool);

    let handles: Vec<_> = (0..20)
        .map(|_| {
            let users = users.clone();
            tokio::spawn(async move { users.check_in(4).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let (ok, conflicts, unexpected) = tally(results);
    assert!(unexpected.is_empty(), "unexpected errors: {:?}", unexpected);
    assert_eq!((ok, conflicts), (1, 19));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_sign_outs_of_one_item_yield_one_holder() {
    let (_dir, pool) = file_pool().await;
    let hardware = HardwareService::new(pool.clone());

    let handles: Vec<_> = (1..=USER_COUNT)
        .chain(1..=8)
        .map(|user_id| {
            let hardware = hardware.clone();
            tokio::spawn(async move { hardware.sign_out(1, user_id).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let (ok, conflicts, unexpected) = tally(results);
    assert!(unexpected.is_empty(), "unexpected errors: {:?}", unexpected);
    assert_eq!((ok, conflicts), (1, 19));

    let holder = sqlx::query_scalar::<_, Option<i64>>(
        "SELECT signed_out_by FROM hardware WHERE id = 1",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert!(holder.is_some());

    let handles: Vec<_> = (0..10)
        .map(|_| {
            let hardware = hardware.clone();
            tokio::spawn(async move { hardware.return_item(1).await })
        })
        .collect();
    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let (ok, conflicts, unexpected) = tally(results);
    assert!(unexpected.is_empty(), "unexpected errors: {:?}", unexpected);
    assert_eq!((ok, conflicts), (1, 9));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_scans_record_each_pair_once() {
    let (_dir, pool) = file_pool().await;
    let scans = ScanService::new(pool.clone());

    let handles: Vec<_> = (1..=USER_COUNT)
        .flat_map(|user_id| [(user_id, 1_i64), (user_id, 1), (user_id, 2)])
        .map(|(user_id, event_id)| {
            let scans = scans.clone();
            tokio::spawn(async move { scans.scan(user_id, event_id).await })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let (ok, conflicts, unexpected) = tally(results);
    assert!(unexpected.is_empty(), "unexpected errors: {:?}", unexpected);
    assert_eq!(ok, (USER_COUNT * 2) as usize);
    assert_eq!(conflicts, USER_COUNT as usize);

    let recorded = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM scan_events")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(recorded, USER_COUNT * 2);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn racing_creates_with_one_email_keep_a_single_user() {
    let (_dir, pool) = file_pool().await;
    let users = UserService::new(pool.clone());

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let users = users.clone();
            tokio::spawn(async move {
                users
                    .create(CreateUserPayload {
                        name: format!("Late Arrival {}", i),
                        company: "Hooli".to_string(),
                        email: "late@example.com".to_string(),
                        phone: format!("+1-555-7{:04}", i),
                        checked_in: None,
                        skills: Vec::new(),
                    })
                    .await
            })
        })
        .collect();

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap());
    }
    let (ok, conflicts, unexpected) = tally(results);
    assert!(unexpected.is_empty(), "unexpected errors: {:?}", unexpected);
    assert_eq!((ok, conflicts), (1, 15));

    let stored = sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM users WHERE email = 'late@example.com'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    assert_eq!(stored, 1);
}

//! Integration tests for the collection-owning view services.
//!
//! These run the board, directory and dashboard services against in-memory
//! gateways to verify fetch degradation and mutation reconciliation.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};

use scamguard_client::models::{
    NewReport, Report, ReportPatch, User, UserRole, UserStatus, VoteKind,
};
use scamguard_common::{AppError, AppResult};
use scamguard_core::{
    DashboardService, ReportBoard, ReportScope, ReportsGateway, UserDirectory, UsersGateway,
};

fn report(id: &str, status: &str) -> Report {
    Report {
        id: id.to_string(),
        title: format!("report {id}"),
        description: "description".to_string(),
        scam_type: Some("phishing".to_string()),
        status: status.to_string(),
        created_at: Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).unwrap(),
        reporter_id: Some("u1".to_string()),
    }
}

fn user(id: &str, role: UserRole, status: UserStatus) -> User {
    User {
        id: id.to_string(),
        name: format!("user {id}"),
        email: format!("{id}@example.com"),
        role,
        status,
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
        last_login: None,
    }
}

/// Gateway serving canned data, optionally failing whole categories of
/// calls.
struct FakeGateway {
    reports: Vec<Report>,
    users: Vec<User>,
    fail_fetches: bool,
    fail_mutations: bool,
    mutation_calls: AtomicUsize,
}

impl FakeGateway {
    fn with_reports(reports: Vec<Report>) -> Self {
        Self {
            reports,
            users: Vec::new(),
            fail_fetches: false,
            fail_mutations: false,
            mutation_calls: AtomicUsize::new(0),
        }
    }

    fn with_users(users: Vec<User>) -> Self {
        Self {
            users,
            ..Self::with_reports(Vec::new())
        }
    }

    fn failing_fetches() -> Self {
        Self {
            fail_fetches: true,
            ..Self::with_reports(Vec::new())
        }
    }

    fn check_mutation(&self) -> AppResult<()> {
        self.mutation_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_mutations {
            return Err(AppError::Api {
                status: 500,
                message: "internal error".to_string(),
            });
        }
        Ok(())
    }

    fn fetch<T: Clone>(&self, records: &[T]) -> AppResult<Vec<T>> {
        if self.fail_fetches {
            return Err(AppError::Transport("connection reset".to_string()));
        }
        Ok(records.to_vec())
    }
}

#[async_trait]
impl ReportsGateway for FakeGateway {
    async fn list_reports(&self) -> AppResult<Vec<Report>> {
        self.fetch(&self.reports)
    }

    async fn my_reports(&self) -> AppResult<Vec<Report>> {
        self.fetch(&self.reports)
    }

    async fn trending_reports(&self) -> AppResult<Vec<Report>> {
        self.fetch(&self.reports)
    }

    async fn create_report(&self, input: &NewReport) -> AppResult<Report> {
        self.check_mutation()?;
        Ok(Report {
            id: "server-assigned".to_string(),
            title: input.title.clone(),
            description: input.description.clone(),
            scam_type: Some(input.scam_type.clone()),
            status: input.status.clone(),
            created_at: Utc.with_ymd_and_hms(2025, 6, 2, 8, 0, 0).unwrap(),
            reporter_id: Some("u1".to_string()),
        })
    }

    async fn update_report_status(&self, _report_id: &str, _status: &str) -> AppResult<()> {
        self.check_mutation()
    }

    async fn edit_report(&self, _report_id: &str, _patch: &ReportPatch) -> AppResult<()> {
        self.check_mutation()
    }

    async fn delete_report(&self, _report_id: &str) -> AppResult<()> {
        self.check_mutation()
    }

    async fn vote_on_report(&self, _report_id: &str, _vote: VoteKind) -> AppResult<()> {
        self.check_mutation()
    }
}

#[async_trait]
impl UsersGateway for FakeGateway {
    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.fetch(&self.users)
    }

    async fn update_user_role(&self, _user_id: &str, _role: UserRole) -> AppResult<()> {
        self.check_mutation()
    }

    async fn update_user_status(&self, _user_id: &str, _status: UserStatus) -> AppResult<()> {
        self.check_mutation()
    }
}

#[tokio::test]
async fn test_board_load_owns_fetched_collection() {
    let gateway = Arc::new(FakeGateway::with_reports(vec![
        report("1", "open"),
        report("2", "closed"),
    ]));
    let mut board = ReportBoard::new(gateway, ReportScope::All);
    assert!(board.is_loading());

    board.load().await;
    assert!(!board.is_loading());
    assert_eq!(board.reports().len(), 2);
    assert_eq!(board.stats().resolved, 1);
}

#[tokio::test]
async fn test_board_load_failure_degrades_to_empty() {
    let gateway = Arc::new(FakeGateway::failing_fetches());
    let mut board = ReportBoard::new(gateway, ReportScope::All);
    board.load().await;

    assert!(!board.is_loading());
    assert!(board.reports().is_empty());
    assert_eq!(board.stats().total, 0);
    assert_eq!(board.stats().success_rate, 0.0);
}

#[tokio::test]
async fn test_status_change_replaces_only_the_matching_record() {
    let gateway = Arc::new(FakeGateway::with_reports(vec![
        report("1", "closed"),
        report("2", "open"),
        report("3", "resolved"),
    ]));
    let mut board = ReportBoard::new(gateway, ReportScope::All);
    board.load().await;

    board.set_status("2", "closed").await.unwrap();

    let reports = board.reports();
    assert_eq!(reports.len(), 3);
    assert_eq!(
        reports.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        ["1", "2", "3"]
    );
    assert_eq!(reports[1].status, "closed");
    assert_eq!(reports[0].status, "closed");
    assert_eq!(reports[2].status, "resolved");
    assert_eq!(board.stats().resolved, 3);
}

#[tokio::test]
async fn test_failed_mutation_leaves_local_state_unchanged() {
    let gateway = Arc::new(FakeGateway {
        fail_mutations: true,
        ..FakeGateway::with_reports(vec![report("1", "open"), report("2", "open")])
    });
    let mut board = ReportBoard::new(gateway.clone(), ReportScope::All);
    board.load().await;
    let before = board.reports().to_vec();

    assert!(board.set_status("1", "closed").await.is_err());
    assert!(board.delete("2").await.is_err());
    assert!(
        board
            .edit(
                "1",
                ReportPatch {
                    title: Some("changed".to_string()),
                    ..ReportPatch::default()
                },
            )
            .await
            .is_err()
    );

    assert_eq!(board.reports(), before.as_slice());
    assert_eq!(gateway.mutation_calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn test_delete_removes_exactly_the_matching_record() {
    let gateway = Arc::new(FakeGateway::with_reports(vec![
        report("1", "open"),
        report("2", "open"),
        report("3", "open"),
    ]));
    let mut board = ReportBoard::new(gateway, ReportScope::Mine);
    board.load().await;

    board.delete("2").await.unwrap();
    assert_eq!(
        board.reports().iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
        ["1", "3"]
    );
}

#[tokio::test]
async fn test_edit_merges_acknowledged_fields() {
    let gateway = Arc::new(FakeGateway::with_reports(vec![report("1", "open")]));
    let mut board = ReportBoard::new(gateway, ReportScope::Mine);
    board.load().await;

    board
        .edit(
            "1",
            ReportPatch {
                description: Some("updated account".to_string()),
                ..ReportPatch::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(board.reports()[0].description, "updated account");
    assert_eq!(board.reports()[0].title, "report 1");
}

#[tokio::test]
async fn test_submit_appends_on_own_board_only() {
    let gateway = Arc::new(FakeGateway::with_reports(Vec::new()));
    let mut mine = ReportBoard::new(gateway.clone(), ReportScope::Mine);
    mine.load().await;
    let created = mine
        .submit(NewReport::new("Title", "Description", "phishing"))
        .await
        .unwrap();
    assert_eq!(created.id, "server-assigned");
    assert_eq!(mine.reports().len(), 1);

    let mut all = ReportBoard::new(gateway, ReportScope::All);
    all.load().await;
    all.submit(NewReport::new("Title", "Description", "phishing"))
        .await
        .unwrap();
    assert!(all.reports().is_empty());
}

#[tokio::test]
async fn test_submit_rejects_invalid_input_before_the_remote_call() {
    let gateway = Arc::new(FakeGateway::with_reports(Vec::new()));
    let mut board = ReportBoard::new(gateway.clone(), ReportScope::Mine);
    board.load().await;

    let result = board.submit(NewReport::new("", "Description", "phishing")).await;
    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(gateway.mutation_calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_directory_relabels_are_independent() {
    let gateway = Arc::new(FakeGateway::with_users(vec![
        user("u1", UserRole::User, UserStatus::Active),
        user("u2", UserRole::User, UserStatus::Active),
    ]));
    let mut directory = UserDirectory::new(gateway);
    directory.load().await;

    directory.set_role("u1", UserRole::Moderator).await.unwrap();
    assert_eq!(directory.users()[0].role, UserRole::Moderator);
    assert_eq!(directory.users()[0].status, UserStatus::Active);

    directory
        .set_status("u1", UserStatus::Suspended)
        .await
        .unwrap();
    assert_eq!(directory.users()[0].role, UserRole::Moderator);
    assert_eq!(directory.users()[0].status, UserStatus::Suspended);

    // The other record is untouched either way.
    assert_eq!(directory.users()[1].role, UserRole::User);
    assert_eq!(directory.users()[1].status, UserStatus::Active);
}

#[tokio::test]
async fn test_directory_failed_relabel_leaves_record_unchanged() {
    let gateway = Arc::new(FakeGateway {
        fail_mutations: true,
        ..FakeGateway::with_users(vec![user("u1", UserRole::User, UserStatus::Active)])
    });
    let mut directory = UserDirectory::new(gateway);
    directory.load().await;

    assert!(directory.set_role("u1", UserRole::Admin).await.is_err());
    assert_eq!(directory.users()[0].role, UserRole::User);
}

#[tokio::test]
async fn test_dashboard_fan_out_degrades_as_a_whole() {
    let gateway = Arc::new(FakeGateway::failing_fetches());
    let service = DashboardService::new(gateway);
    let overview = service.load_overview().await;

    assert_eq!(overview.stats.total, 0);
    assert!(overview.recent.is_empty());
    assert!(overview.trending.is_empty());
}

#[tokio::test]
async fn test_dashboard_overview_combines_fetches() {
    let gateway = Arc::new(FakeGateway::with_reports(vec![
        report("1", "closed"),
        report("2", "open"),
    ]));
    let service = DashboardService::new(gateway);
    let overview = service.load_overview().await;

    assert_eq!(overview.stats.total, 2);
    assert_eq!(overview.stats.resolved, 1);
    assert_eq!(overview.trending.len(), 2);
    assert_eq!(overview.recent.len(), 2);
}

use std::time::Duration;

use talentmatch::{
    api::ApiClient,
    core::{
        models::{
            DashboardStats,
            NewJobDescription,
        },
        tasks::{
            manager::execute,
            ApiOutcome,
            ApiTask,
            MatchingAction,
        },
    },
    TalentMatchError,
};
use tokio::{
    io::{
        AsyncReadExt,
        AsyncWriteExt,
    },
    net::{
        TcpListener,
        TcpStream,
    },
    sync::mpsc,
};

/// One request as the fake service saw it.
#[derive(Debug, Clone)]
struct Captured {
    method: String,
    target: String,
    headers: String,
    body: Vec<u8>,
}

impl Captured {
    fn path(&self) -> &str {
        self.target.split('?').next().unwrap_or_default()
    }

    fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    fn body_json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).unwrap()
    }
}

#[derive(Clone)]
struct Route {
    method: &'static str,
    path: &'static str,
    status: u16,
    body: &'static str,
}

fn ok(method: &'static str, path: &'static str, body: &'static str) -> Route {
    Route { method, path, status: 200, body }
}

fn fail(method: &'static str, path: &'static str, status: u16) -> Route {
    Route { method, path, status, body: r#"{"detail":"boom"}"# }
}

/// Serves canned responses on a loopback port and reports every request it receives.
async fn spawn_service(routes: Vec<Route>) -> (ApiClient, mpsc::UnboundedReceiver<Captured>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let (sender, receiver) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        loop {
            let Ok((stream, _)) = listener.accept().await else {
                return;
            };
            let routes = routes.clone();
            let sender = sender.clone();
            tokio::spawn(async move {
                if let Some(captured) = handle_connection(stream, &routes).await {
                    let _ = sender.send(captured);
                }
            });
        }
    });

    let api = ApiClient::new(&format!("http://{addr}/"), Duration::from_secs(5)).unwrap();
    (api, receiver)
}

async fn handle_connection(mut stream: TcpStream, routes: &[Route]) -> Option<Captured> {
    let mut buffer = Vec::new();
    let mut chunk = [0u8; 4096];

    let header_end = loop {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            return None;
        }
        buffer.extend_from_slice(&chunk[..read]);
        if let Some(pos) = buffer.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos + 4;
        }
    };

    let head = String::from_utf8_lossy(&buffer[..header_end]).into_owned();
    let mut lines = head.lines();
    let mut request_line = lines.next()?.split_whitespace();
    let method = request_line.next()?.to_string();
    let target = request_line.next()?.to_string();

    let content_length = head
        .lines()
        .filter_map(|line| line.split_once(':'))
        .find(|(name, _)| name.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.trim().parse::<usize>().ok())
        .unwrap_or(0);

    while buffer.len() < header_end + content_length {
        let read = stream.read(&mut chunk).await.ok()?;
        if read == 0 {
            break;
        }
        buffer.extend_from_slice(&chunk[..read]);
    }
    let body = buffer[header_end..].to_vec();

    let captured = Captured { method, target, headers: head, body };

    let route = routes.iter().find(|r| r.method == captured.method && r.path == captured.path());
    let (status, payload) = match route {
        Some(route) => (route.status, route.body),
        None => (404, r#"{"detail":"Not Found"}"#),
    };

    let reason = if status < 400 { "OK" } else { "Error" };
    let response = format!(
        "HTTP/1.1 {status} {reason}\r\n\
         Content-Type: application/json\r\n\
         Content-Length: {}\r\n\
         Connection: close\r\n\r\n{payload}",
        payload.len(),
    );
    stream.write_all(response.as_bytes()).await.ok()?;
    stream.shutdown().await.ok()?;

    Some(captured)
}

async fn drain(receiver: &mut mpsc::UnboundedReceiver<Captured>) -> Vec<Captured> {
    // Requests are reported after their response is written, so give the handler a moment.
    tokio::time::sleep(Duration::from_millis(50)).await;
    let mut seen = Vec::new();
    while let Ok(captured) = receiver.try_recv() {
        seen.push(captured);
    }
    seen
}

const JOBS: &str = r#"[
    {"id": 1, "title": "Backend Engineer", "company": "Globex", "summary": "APIs"},
    {"id": 2, "title": "Data Analyst", "company": null}
]"#;

const CANDIDATES: &str = r#"[
    {"id": 10, "name": "Ada", "email": "ada@example.com", "skills": "Rust"},
    {"id": 11, "name": "Grace", "email": "grace@example.com"},
    {"id": 12, "name": "Linus", "email": "linus@example.com"}
]"#;

const JOB_WITH_CANDIDATES: &str = r#"{
    "id": 1,
    "title": "Backend Engineer",
    "company": "Globex",
    "candidates": [
        {"id": 10, "name": "Ada", "email": "ada@example.com", "match_score": 91.2,
         "is_shortlisted": true, "interview_scheduled": true,
         "interview_email": "Dear Ada", "interview_format": "Video",
         "interview_date": "2025-03-10T14:00:00"},
        {"id": 11, "name": "Grace", "email": "grace@example.com", "match_score": 55.0,
         "is_shortlisted": false, "interview_scheduled": null}
    ]
}"#;

#[tokio::test]
async fn test_list_jobs() {
    let (api, mut requests) = spawn_service(vec![ok("GET", "/job-descriptions/", JOBS)]).await;

    let jobs = api.list_jobs().await.unwrap();
    assert_eq!(jobs.len(), 2);
    assert_eq!(jobs[0].company.as_deref(), Some("Globex"));
    assert_eq!(jobs[1].company, None);

    let seen = drain(&mut requests).await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].method, "GET");
    assert_eq!(seen[0].target, "/job-descriptions/");
}

#[tokio::test]
async fn test_single_resources() {
    let (api, mut requests) = spawn_service(vec![
        ok("GET", "/job-descriptions/2", r#"{"id": 2, "title": "Data Analyst"}"#),
        ok("GET", "/candidates/11", r#"{"id": 11, "name": "Grace", "email": "g@example.com"}"#),
    ])
    .await;

    assert_eq!(api.get_job(2).await.unwrap().title, "Data Analyst");
    assert_eq!(api.get_candidate(11).await.unwrap().name, "Grace");

    let paths: Vec<String> =
        drain(&mut requests).await.into_iter().map(|c| c.target).collect();
    assert!(paths.contains(&"/job-descriptions/2".to_string()));
    assert!(paths.contains(&"/candidates/11".to_string()));
}

#[tokio::test]
async fn test_create_job_sends_json_body() {
    let (api, mut requests) = spawn_service(vec![ok(
        "POST",
        "/job-descriptions/",
        r#"{"id": 7, "title": "QA", "company": "Initech"}"#,
    )])
    .await;

    let new_job = NewJobDescription {
        title: "QA".to_string(),
        company: "Initech".to_string(),
        description: "Testing things".to_string(),
        ..Default::default()
    };
    let created = api.create_job(&new_job).await.unwrap();
    assert_eq!(created.id, 7);

    let seen = drain(&mut requests).await;
    let body = seen[0].body_json();
    assert_eq!(body["title"], "QA");
    assert_eq!(body["company"], "Initech");
    assert!(body.get("required_skills").is_none());
}

#[tokio::test]
async fn test_job_with_candidates() {
    let (api, mut requests) =
        spawn_service(vec![ok("GET", "/matching/job/1/candidates", JOB_WITH_CANDIDATES)]).await;

    let job = api.job_with_candidates(1).await.unwrap();
    assert_eq!(job.job.title, "Backend Engineer");
    assert_eq!(job.candidates.len(), 2);
    assert!(job.candidates[0].interview_scheduled);
    assert!(!job.candidates[1].interview_scheduled);
    assert_eq!(job.candidates[0].score_label(), "91% Match");

    let seen = drain(&mut requests).await;
    assert_eq!(seen[0].target, "/matching/job/1/candidates");
}

#[tokio::test]
async fn test_matching_mutations_use_post() {
    let (api, mut requests) = spawn_service(vec![
        ok(
            "POST",
            "/matching/match-all/3",
            r#"[{"job_id": 3, "candidate_id": 10, "match_score": 72.5}]"#,
        ),
        ok(
            "POST",
            "/matching/match-candidate/3/10",
            r#"{"id": 1, "job_id": 3, "candidate_id": 10, "match_score": 72.5}"#,
        ),
        ok("POST", "/matching/shortlist/job/3", "[]"),
    ])
    .await;

    let records = api.match_all(3).await.unwrap();
    assert_eq!(records[0].candidate_id, 10);
    assert_eq!(api.match_candidate(3, 10).await.unwrap().match_score, 72.5);
    assert!(api.shortlist(3).await.unwrap().is_empty());

    let seen = drain(&mut requests).await;
    assert_eq!(seen.len(), 3);
    assert!(seen.iter().all(|c| c.method == "POST"));
}

#[tokio::test]
async fn test_schedule_interviews_sends_company_name() {
    let (api, mut requests) = spawn_service(vec![ok(
        "POST",
        "/matching/schedule-interviews/job/4",
        r#"[{"candidate_id": 10, "interview_date": "2025-03-10"}]"#,
    )])
    .await;

    let scheduled = api.schedule_interviews(4, "Globex").await.unwrap();
    assert_eq!(scheduled.len(), 1);

    let seen = drain(&mut requests).await;
    assert_eq!(seen[0].body_json(), serde_json::json!({ "company_name": "Globex" }));
}

#[tokio::test]
async fn test_counts_are_unwrapped() {
    let (api, _requests) = spawn_service(vec![
        ok("GET", "/matching/stats/shortlisted", r#"{"count": 6}"#),
        ok("GET", "/matching/stats/interviews", r#"{"count": 2}"#),
    ])
    .await;

    assert_eq!(api.shortlisted_count().await.unwrap(), 6);
    assert_eq!(api.interviews_count().await.unwrap(), 2);
}

#[tokio::test]
async fn test_upload_resume_is_multipart() {
    let (api, mut requests) = spawn_service(vec![ok(
        "POST",
        "/candidates/upload-resume",
        r#"{"id": 20, "name": "Ada", "email": "ada@example.com"}"#,
    )])
    .await;

    let candidate = api
        .upload_resume("Ada", "ada@example.com", "ada.pdf", b"%PDF-1.4 resume".to_vec())
        .await
        .unwrap();
    assert_eq!(candidate.id, 20);

    let seen = drain(&mut requests).await;
    let request = &seen[0];
    assert!(request.target.contains("name=Ada"));
    assert!(request.headers.to_lowercase().contains("content-type: multipart/form-data"));

    let body = request.body_text();
    assert!(body.contains(r#"name="resume"; filename="ada.pdf""#));
    assert!(body.contains(r#"name="email""#));
    assert!(body.contains("%PDF-1.4 resume"));
}

#[tokio::test]
async fn test_non_success_status_is_an_error() {
    let (api, _requests) = spawn_service(vec![fail("GET", "/candidates/", 500)]).await;

    let err = api.list_candidates().await.unwrap_err();
    match &err {
        TalentMatchError::Status { status, body, .. } => {
            assert_eq!(status.as_u16(), 500);
            assert!(body.contains("boom"));
        }
        other => panic!("expected a status error, got {other:?}"),
    }
    assert_eq!(err.status().map(|s| s.as_u16()), Some(500));
}

#[tokio::test]
async fn test_malformed_body_is_an_error() {
    let (api, _requests) =
        spawn_service(vec![ok("GET", "/matching/stats/interviews", r#"{"total": 3}"#)]).await;

    let err = api.interviews_count().await.unwrap_err();
    assert!(matches!(err, TalentMatchError::Json(_)));
}

#[tokio::test]
async fn test_unreachable_service_is_an_error() {
    // Bind then drop to get a port nobody is listening on.
    let port = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap().port()
    };
    let api = ApiClient::new(&format!("http://127.0.0.1:{port}"), Duration::from_secs(2)).unwrap();

    let err = api.list_jobs().await.unwrap_err();
    assert!(matches!(err, TalentMatchError::Request(_)));
}

#[tokio::test]
async fn test_dashboard_task_combines_four_calls() {
    let (api, mut requests) = spawn_service(vec![
        ok("GET", "/job-descriptions/", JOBS),
        ok("GET", "/candidates/", CANDIDATES),
        ok("GET", "/matching/stats/shortlisted", r#"{"count": 4}"#),
        ok("GET", "/matching/stats/interviews", r#"{"count": 1}"#),
    ])
    .await;

    match execute(&api, ApiTask::DashboardStats).await {
        ApiOutcome::DashboardStats(Ok(stats)) => assert_eq!(
            stats,
            DashboardStats { jobs: 2, candidates: 3, shortlisted: 4, interviews: 1 }
        ),
        other => panic!("unexpected outcome {other:?}"),
    }
    assert_eq!(drain(&mut requests).await.len(), 4);
}

#[tokio::test]
async fn test_dashboard_task_fails_when_any_call_fails() {
    let (api, _requests) = spawn_service(vec![
        ok("GET", "/job-descriptions/", JOBS),
        ok("GET", "/candidates/", CANDIDATES),
        fail("GET", "/matching/stats/shortlisted", 503),
        ok("GET", "/matching/stats/interviews", r#"{"count": 1}"#),
    ])
    .await;

    let outcome = execute(&api, ApiTask::DashboardStats).await;
    assert!(matches!(outcome, ApiOutcome::DashboardStats(Err(_))));
}

#[tokio::test]
async fn test_action_success_refetches_candidates() {
    let (api, mut requests) = spawn_service(vec![
        ok("POST", "/matching/match-all/1", "[]"),
        ok("GET", "/matching/job/1/candidates", JOB_WITH_CANDIDATES),
    ])
    .await;

    match execute(&api, ApiTask::MatchAll(1)).await {
        ApiOutcome::ActionFinished { action, job_id, result: Ok(candidates) } => {
            assert_eq!(action, MatchingAction::MatchAll);
            assert_eq!(job_id, 1);
            assert_eq!(candidates.len(), 2);
        }
        other => panic!("unexpected outcome {other:?}"),
    }

    let paths: Vec<String> =
        drain(&mut requests).await.into_iter().map(|c| c.path().to_string()).collect();
    assert!(paths.contains(&"/matching/job/1/candidates".to_string()));
}

#[tokio::test]
async fn test_action_failure_skips_refetch() {
    let (api, mut requests) = spawn_service(vec![
        fail("POST", "/matching/shortlist/job/1", 500),
        ok("GET", "/matching/job/1/candidates", JOB_WITH_CANDIDATES),
    ])
    .await;

    let outcome = execute(&api, ApiTask::Shortlist(1)).await;
    assert!(matches!(
        outcome,
        ApiOutcome::ActionFinished { action: MatchingAction::Shortlist, result: Err(_), .. }
    ));

    let seen = drain(&mut requests).await;
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path(), "/matching/shortlist/job/1");
}

#[tokio::test]
async fn test_schedule_task_passes_company() {
    let (api, mut requests) = spawn_service(vec![
        ok("POST", "/matching/schedule-interviews/job/1", "[]"),
        ok("GET", "/matching/job/1/candidates", JOB_WITH_CANDIDATES),
    ])
    .await;

    let task = ApiTask::ScheduleInterviews { job_id: 1, company_name: "Acme Corp".to_string() };
    let outcome = execute(&api, task).await;
    assert!(matches!(outcome, ApiOutcome::ActionFinished { result: Ok(_), .. }));

    let seen = drain(&mut requests).await;
    let schedule = seen.iter().find(|c| c.method == "POST").unwrap();
    assert_eq!(schedule.body_json()["company_name"], "Acme Corp");
}

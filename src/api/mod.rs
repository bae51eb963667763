//! Typed access to the recruiting service's REST API.
//!
//! Every call is a single request: no retries, no caching and no
//! transformation beyond JSON decoding (and unwrapping `count` for the stats
//! endpoints). Failures of any kind come back as `TalentMatchError`.

use std::time::Duration;

use reqwest::{
    multipart::{
        Form,
        Part,
    },
    Client,
    Url,
};
use serde::{
    de::DeserializeOwned,
    Serialize,
};
use tracing::debug;

use crate::core::{
    http::{
        ensure_success,
        http_client,
    },
    models::{
        Candidate,
        CandidateId,
        CountResponse,
        JobDescription,
        JobId,
        JobWithCandidates,
        MatchRecord,
        MatchedCandidate,
        NewCandidate,
        NewJobDescription,
        ScheduledInterview,
    },
    TalentMatchError,
};

pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
}

#[derive(Serialize)]
struct CompanyNameRequest<'a> {
    company_name: &'a str,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, TalentMatchError> {
        let base_url = base_url.trim().trim_end_matches('/').to_string();
        Url::parse(&base_url).map_err(|_| TalentMatchError::InvalidUrl(base_url.clone()))?;

        Ok(Self { base_url, client: http_client(timeout)? })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, TalentMatchError> {
        let url = self.url(path);
        debug!("GET {url}");
        let resp = ensure_success(self.client.get(&url).send().await?).await?;
        decode(resp).await
    }

    async fn post_json<T: DeserializeOwned>(
        &self,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, TalentMatchError> {
        let url = self.url(path);
        debug!("POST {url}");
        let mut request = self.client.post(&url);
        if let Some(body) = body {
            request = request.json(body);
        }
        let resp = ensure_success(request.send().await?).await?;
        decode(resp).await
    }

    // ===== Job descriptions =====

    pub async fn list_jobs(&self) -> Result<Vec<JobDescription>, TalentMatchError> {
        self.get_json("/job-descriptions/").await
    }

    pub async fn get_job(&self, id: JobId) -> Result<JobDescription, TalentMatchError> {
        self.get_json(&format!("/job-descriptions/{id}")).await
    }

    pub async fn create_job(
        &self,
        job: &NewJobDescription,
    ) -> Result<JobDescription, TalentMatchError> {
        self.post_json("/job-descriptions/", Some(job)).await
    }

    // ===== Candidates =====

    pub async fn list_candidates(&self) -> Result<Vec<Candidate>, TalentMatchError> {
        self.get_json("/candidates/").await
    }

    pub async fn get_candidate(&self, id: CandidateId) -> Result<Candidate, TalentMatchError> {
        self.get_json(&format!("/candidates/{id}")).await
    }

    pub async fn create_candidate(
        &self,
        candidate: &NewCandidate,
    ) -> Result<Candidate, TalentMatchError> {
        self.post_json("/candidates/", Some(candidate)).await
    }

    pub async fn upload_resume(
        &self,
        name: &str,
        email: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<Candidate, TalentMatchError> {
        let url = self.url("/candidates/upload-resume");
        debug!("POST {url} (multipart, {} bytes)", contents.len());

        let form = Form::new()
            .text("name", name.to_string())
            .text("email", email.to_string())
            .part("resume", Part::bytes(contents).file_name(file_name.to_string()));

        // The service reads name and email from the query string as well as the form.
        let resp = self
            .client
            .post(&url)
            .query(&[("name", name), ("email", email)])
            .multipart(form)
            .send()
            .await?;

        decode(ensure_success(resp).await?).await
    }

    // ===== Matching =====

    pub async fn match_candidate(
        &self,
        job_id: JobId,
        candidate_id: CandidateId,
    ) -> Result<MatchRecord, TalentMatchError> {
        self.post_json(&format!("/matching/match-candidate/{job_id}/{candidate_id}"), None::<&()>)
            .await
    }

    pub async fn match_all(&self, job_id: JobId) -> Result<Vec<MatchRecord>, TalentMatchError> {
        self.post_json(&format!("/matching/match-all/{job_id}"), None::<&()>).await
    }

    pub async fn job_with_candidates(
        &self,
        job_id: JobId,
    ) -> Result<JobWithCandidates, TalentMatchError> {
        self.get_json(&format!("/matching/job/{job_id}/candidates")).await
    }

    pub async fn shortlist(
        &self,
        job_id: JobId,
    ) -> Result<Vec<MatchedCandidate>, TalentMatchError> {
        self.post_json(&format!("/matching/shortlist/job/{job_id}"), None::<&()>).await
    }

    pub async fn schedule_interviews(
        &self,
        job_id: JobId,
        company_name: &str,
    ) -> Result<Vec<ScheduledInterview>, TalentMatchError> {
        self.post_json(
            &format!("/matching/schedule-interviews/job/{job_id}"),
            Some(&CompanyNameRequest { company_name }),
        )
        .await
    }

    // ===== Stats =====

    pub async fn shortlisted_count(&self) -> Result<u64, TalentMatchError> {
        let response: CountResponse = self.get_json("/matching/stats/shortlisted").await?;
        Ok(response.count)
    }

    pub async fn interviews_count(&self) -> Result<u64, TalentMatchError> {
        let response: CountResponse = self.get_json("/matching/stats/interviews").await?;
        Ok(response.count)
    }
}

async fn decode<T: DeserializeOwned>(resp: reqwest::Response) -> Result<T, TalentMatchError> {
    let bytes = resp.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

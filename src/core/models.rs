use chrono::{
    DateTime,
    NaiveDate,
    NaiveDateTime,
};
use serde::{
    Deserialize,
    Serialize,
};

pub type JobId = i64;
pub type CandidateId = i64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescription {
    pub id: JobId,
    pub title: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub required_skills: Option<String>,
    #[serde(default)]
    pub required_experience: Option<String>,
    #[serde(default)]
    pub required_qualifications: Option<String>,
    #[serde(default)]
    pub responsibilities: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl JobDescription {
    /// Label used in the job picker: "Title - Company".
    pub fn display_label(&self) -> String {
        match present(self.company.as_deref()) {
            Some(company) => format!("{} - {}", self.title, company),
            None => self.title.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewJobDescription {
    pub title: String,
    pub company: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required_qualifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsibilities: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub education: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub certifications: Option<String>,
    #[serde(default)]
    pub resume_text: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub education: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
}

/// A candidate as seen through one job's matches.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchedCandidate {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default)]
    pub match_score: f64,
    #[serde(default)]
    pub is_shortlisted: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub interview_scheduled: bool,
    #[serde(default)]
    pub interview_email: Option<String>,
    #[serde(default)]
    pub interview_format: Option<String>,
    #[serde(default)]
    pub interview_date: Option<String>,
}

impl MatchedCandidate {
    pub fn id(&self) -> CandidateId {
        self.candidate.id
    }

    pub fn tier(&self) -> ScoreTier {
        ScoreTier::from_score(self.match_score)
    }

    /// Badge text, e.g. "85% Match".
    pub fn score_label(&self) -> String {
        format!("{}% Match", self.match_score.round() as i64)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobWithCandidates {
    #[serde(flatten)]
    pub job: JobDescription,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidates: Vec<MatchedCandidate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(default)]
    pub id: Option<i64>,
    pub job_id: JobId,
    pub candidate_id: CandidateId,
    pub match_score: f64,
    #[serde(default, deserialize_with = "null_as_false")]
    pub is_shortlisted: bool,
    #[serde(default, deserialize_with = "null_as_false")]
    pub interview_scheduled: bool,
    #[serde(default)]
    pub interview_date: Option<String>,
    #[serde(default)]
    pub interview_format: Option<String>,
    #[serde(default)]
    pub interview_email: Option<String>,
}

/// Schedule results are free-form per interview; the client never reads into them.
pub type ScheduledInterview = serde_json::Value;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub jobs: usize,
    pub candidates: usize,
    pub shortlisted: u64,
    pub interviews: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Mid,
    Low,
}

impl ScoreTier {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            ScoreTier::High
        } else if score >= 60.0 {
            ScoreTier::Mid
        } else {
            ScoreTier::Low
        }
    }
}

/// Returns the text when it has visible content.
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

pub fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    present(value).unwrap_or(placeholder)
}

/// Renders a server timestamp as a calendar date, falling back to the raw text.
pub fn format_interview_date(raw: &str) -> String {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%b %-d, %Y").to_string();
    }

    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return dt.date().format("%b %-d, %Y").to_string();
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.format("%b %-d, %Y").to_string();
    }

    raw.to_string()
}

fn null_as_false<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_tiers() {
        assert_eq!(ScoreTier::from_score(85.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(80.0), ScoreTier::High);
        assert_eq!(ScoreTier::from_score(65.0), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(60.0), ScoreTier::Mid);
        assert_eq!(ScoreTier::from_score(59.9), ScoreTier::Low);
        assert_eq!(ScoreTier::from_score(40.0), ScoreTier::Low);
    }

    #[test]
    fn test_job_with_candidates_decoding() {
        let json = r#"{
            "id": 3,
            "title": "Backend Engineer",
            "company": "Globex",
            "description": "Build APIs",
            "summary": null,
            "created_at": "2025-03-01T09:30:00",
            "candidates": [
                {
                    "id": 7,
                    "name": "Ada",
                    "email": "ada@example.com",
                    "skills": "Rust, SQL",
                    "match_score": 84.6,
                    "is_shortlisted": true,
                    "interview_scheduled": null,
                    "interview_date": "2025-03-10T14:00:00"
                }
            ]
        }"#;

        let parsed: JobWithCandidates = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.job.id, 3);
        assert_eq!(parsed.job.company.as_deref(), Some("Globex"));
        assert_eq!(parsed.candidates.len(), 1);

        let ada = &parsed.candidates[0];
        assert_eq!(ada.id(), 7);
        assert!(ada.is_shortlisted);
        assert!(!ada.interview_scheduled);
        assert_eq!(ada.candidate.experience, None);
        assert_eq!(ada.score_label(), "85% Match");
        assert_eq!(ada.tier(), ScoreTier::High);
    }

    #[test]
    fn test_missing_candidate_array_is_empty() {
        let json = r#"{ "id": 1, "title": "QA", "company": "Initech", "candidates": null }"#;
        let parsed: JobWithCandidates = serde_json::from_str(json).unwrap();
        assert!(parsed.candidates.is_empty());

        let json = r#"{ "id": 1, "title": "QA" }"#;
        let parsed: JobWithCandidates = serde_json::from_str(json).unwrap();
        assert!(parsed.candidates.is_empty());
        assert_eq!(parsed.job.company, None);
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(or_placeholder(Some("Rust"), "None listed"), "Rust");
        assert_eq!(or_placeholder(Some("   "), "None listed"), "None listed");
        assert_eq!(or_placeholder(Some(""), "None listed"), "None listed");
        assert_eq!(or_placeholder(None, "None listed"), "None listed");
    }

    #[test]
    fn test_display_label() {
        let mut job: JobDescription =
            serde_json::from_str(r#"{ "id": 1, "title": "QA", "company": "Initech" }"#).unwrap();
        assert_eq!(job.display_label(), "QA - Initech");
        job.company = None;
        assert_eq!(job.display_label(), "QA");
    }

    #[test]
    fn test_interview_date_formatting() {
        assert_eq!(format_interview_date("2025-03-10T14:00:00"), "Mar 10, 2025");
        assert_eq!(format_interview_date("2025-03-10T14:00:00.123456"), "Mar 10, 2025");
        assert_eq!(format_interview_date("2025-03-10T14:00:00+02:00"), "Mar 10, 2025");
        assert_eq!(format_interview_date("2025-03-10 14:00:00"), "Mar 10, 2025");
        assert_eq!(format_interview_date("2025-03-10"), "Mar 10, 2025");
        assert_eq!(format_interview_date("next Tuesday"), "next Tuesday");
    }

    #[test]
    fn test_new_job_serialization_skips_absent_fields() {
        let job = NewJobDescription {
            title: "QA".to_string(),
            company: "Initech".to_string(),
            description: "Testing".to_string(),
            required_skills: Some("Selenium".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&job).unwrap();
        assert_eq!(value["required_skills"], "Selenium");
        assert!(value.get("responsibilities").is_none());
    }
}

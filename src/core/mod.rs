pub mod errors;
pub mod http;
pub mod models;
pub mod tasks;

pub use errors::TalentMatchError;
pub use models::{
    Candidate,
    JobDescription,
    MatchedCandidate,
};

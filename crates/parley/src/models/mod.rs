// Core data model: questions, answers, interview state, candidate profile.
// All records are serde-serializable so the session layer can mirror them
// into the state store without a separate persistence schema.

pub mod answer;
pub mod candidate;
pub mod question;

//! Generative-text advisor client
//!
//! Thin client for an opaque text-generation service. A single blocking
//! request is outstanding at a time; a failed request falls through to the
//! next candidate model in the configured order, and exhausting the list is
//! a terminal failure. No other retry is performed.

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::core::models::{Course, User};
use crate::core::{metrics, models::CourseStatus};

/// Environment variable that overrides the configured API key
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Errors raised by the advisor client
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// The prompt was empty or whitespace-only
    #[error("Prompt is required")]
    EmptyPrompt,

    /// No API key is configured
    #[error("Advisor API key is not configured")]
    MissingApiKey,

    /// Every candidate model was tried once and failed
    #[error("Available models exhausted. Try again later")]
    ModelsExhausted {
        /// How many models were attempted
        attempts: usize,
    },
}

/// Text produced by the advisor service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedAdvice {
    /// The generated text
    pub text: String,
    /// The model that produced it
    pub model: String,
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
}

#[derive(Serialize, Deserialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Content,
}

/// Client for the generative-text endpoint
pub struct AdvisorClient {
    endpoint: String,
    api_key: String,
    models: Vec<String>,
    http: reqwest::blocking::Client,
}

impl AdvisorClient {
    /// Build a client from configuration.
    ///
    /// The `GEMINI_API_KEY` environment variable takes precedence over the
    /// configured key.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty())
            .unwrap_or_else(|| config.advisor.api_key.clone());

        Self {
            endpoint: config.advisor.endpoint.trim_end_matches('/').to_string(),
            api_key,
            models: config.advisor.models.clone(),
            http: reqwest::blocking::Client::new(),
        }
    }

    /// Generate text for a prompt, falling back through the model list.
    ///
    /// Each candidate model is tried once in order; the first success wins.
    ///
    /// # Errors
    /// Returns [`AdvisorError::EmptyPrompt`] or
    /// [`AdvisorError::MissingApiKey`] without issuing a request, and
    /// [`AdvisorError::ModelsExhausted`] after every candidate has failed.
    pub fn generate(&self, prompt: &str) -> Result<GeneratedAdvice, AdvisorError> {
        if prompt.trim().is_empty() {
            return Err(AdvisorError::EmptyPrompt);
        }
        if self.api_key.is_empty() {
            return Err(AdvisorError::MissingApiKey);
        }

        for model in &self.models {
            match self.request_generation(model, prompt) {
                Ok(text) => {
                    crate::info!("Advisor response produced by model {model}");
                    return Ok(GeneratedAdvice {
                        text,
                        model: model.clone(),
                    });
                }
                Err(e) => {
                    crate::error!(
                        "Advisor request failed for model {model}: {e}. Trying other models..."
                    );
                }
            }
        }

        Err(AdvisorError::ModelsExhausted {
            attempts: self.models.len(),
        })
    }

    /// Issue one generation request against one model
    fn request_generation(&self, model: &str, prompt: &str) -> Result<String, String> {
        let url = format!("{}/models/{model}:generateContent", self.endpoint);
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .map_err(|e| e.to_string())?;

        let status = response.status();
        if !status.is_success() {
            return Err(format!("HTTP {status}"));
        }

        let parsed: GenerateResponse = response.json().map_err(|e| e.to_string())?;
        parsed
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content.parts.into_iter().next())
            .map(|part| part.text)
            .ok_or_else(|| "Empty response from model".to_string())
    }
}

/// Assemble the academic-advisor prompt from a student's stored data
#[must_use]
pub fn build_advice_prompt(user: &User, courses: &[Course], required_credits: u32) -> String {
    let cgpa = metrics::calculate_cgpa(courses);
    let credits = metrics::total_credits(courses);
    let completed = metrics::total_courses_completed(courses);

    let course_lines: Vec<String> = courses
        .iter()
        .map(|c| {
            let grade = match (c.status, c.grade) {
                (CourseStatus::Completed, Some(grade)) => grade.to_string(),
                _ => "In Progress".to_string(),
            };
            format!(
                "- {}: {}, Grade: {grade}, Units: {}, {} {}",
                c.code, c.title, c.units, c.semester, c.year
            )
        })
        .collect();

    format!(
        "As an academic advisor, analyze this student's academic performance and provide 3-5 specific, actionable insights:\n\
        \n\
        Student: {name}\n\
        Current CGPA: {cgpa:.2} out of 5.0\n\
        Total Credits: {credits} out of {required_credits}\n\
        Completed Courses: {completed}\n\
        \n\
        Course Details:\n\
        {details}\n\
        \n\
        Provide insights in a numbered list format. Focus on:\n\
        1. Strengths and achievements\n\
        2. Areas for improvement\n\
        3. Specific recommendations for course selection\n\
        4. Study strategies based on performance patterns\n\
        5. Progress towards degree completion",
        name = user.name,
        details = course_lines.join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Grade, Semester};
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_user() -> User {
        User {
            id: Uuid::new_v4(),
            name: "Test User".to_string(),
            email: "test@example.com".to_string(),
            password_hash: String::new(),
            created_at: Utc::now(),
        }
    }

    fn sample_course(code: &str, grade: Option<Grade>, status: CourseStatus) -> Course {
        let now = Utc::now();
        Course {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            code: code.to_string(),
            title: format!("{code} title"),
            units: 3,
            grade,
            semester: Semester::First,
            year: 2023,
            status,
            created_at: now,
            updated_at: now,
        }
    }

    fn offline_client(models: Vec<String>) -> AdvisorClient {
        AdvisorClient {
            endpoint: "http://127.0.0.1:9".to_string(),
            api_key: "test-key".to_string(),
            models,
            http: reqwest::blocking::Client::new(),
        }
    }

    #[test]
    fn empty_prompt_is_rejected_before_any_request() {
        let client = offline_client(vec!["model-a".to_string()]);
        assert!(matches!(
            client.generate("   "),
            Err(AdvisorError::EmptyPrompt)
        ));
    }

    #[test]
    fn missing_api_key_is_rejected_before_any_request() {
        let client = AdvisorClient {
            endpoint: "http://127.0.0.1:9".to_string(),
            api_key: String::new(),
            models: vec!["model-a".to_string()],
            http: reqwest::blocking::Client::new(),
        };
        assert!(matches!(
            client.generate("prompt"),
            Err(AdvisorError::MissingApiKey)
        ));
    }

    #[test]
    fn exhausting_unreachable_models_is_terminal() {
        // Port 9 (discard) refuses connections; both candidates fail once each
        let client = offline_client(vec!["model-a".to_string(), "model-b".to_string()]);
        match client.generate("prompt") {
            Err(AdvisorError::ModelsExhausted { attempts }) => assert_eq!(attempts, 2),
            other => panic!("expected ModelsExhausted, got {other:?}"),
        }
    }

    #[test]
    fn empty_model_list_is_exhausted_immediately() {
        let client = offline_client(Vec::new());
        assert!(matches!(
            client.generate("prompt"),
            Err(AdvisorError::ModelsExhausted { attempts: 0 })
        ));
    }

    #[test]
    fn advice_prompt_includes_stats_and_courses() {
        let user = sample_user();
        let courses = vec![
            sample_course("CS101", Some(Grade::A), CourseStatus::Completed),
            sample_course("ENG101", None, CourseStatus::InProgress),
        ];

        let prompt = build_advice_prompt(&user, &courses, 120);
        assert!(prompt.contains("Current CGPA: 5.00 out of 5.0"));
        assert!(prompt.contains("Total Credits: 3 out of 120"));
        assert!(prompt.contains("- CS101: CS101 title, Grade: A"));
        assert!(prompt.contains("Grade: In Progress"));
    }
}

//! The structured resume record the renderer lays out.
//!
//! Records are usually produced by an AI service from free text, so deserialization is
//! lenient: every field except the person's name may be missing, and the JSON may
//! arrive wrapped in a markdown code fence.
//!
//! ```
//! use resume_pdf::ResumeDocument;
//!
//! let doc = ResumeDocument::from_json(r#"{"personalInfo": {"name": "Jane Doe"}}"#).unwrap();
//! assert_eq!(doc.personal_info.name, "Jane Doe");
//! assert!(doc.experience.is_empty());
//! ```

use crate::PDFError;
use serde::{Deserialize, Deserializer, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    #[serde(default, deserialize_with = "text")]
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "list")]
    pub experience: Vec<Experience>,
    #[serde(default, deserialize_with = "list")]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default, deserialize_with = "list")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "list")]
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalInfo {
    pub name: String,
    #[serde(default, deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub location: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub linkedin: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub github: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub portfolio: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "text")]
    pub position: Option<String>,
    #[serde(deserialize_with = "text")]
    pub start_date: Option<String>,
    #[serde(deserialize_with = "text")]
    pub end_date: Option<String>,
    #[serde(deserialize_with = "list")]
    pub responsibilities: Vec<String>,
    #[serde(deserialize_with = "list")]
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "text")]
    pub degree: Option<String>,
    #[serde(deserialize_with = "text")]
    pub field: Option<String>,
    #[serde(deserialize_with = "text")]
    pub institution: Option<String>,
    #[serde(deserialize_with = "text")]
    pub graduation_year: Option<String>,
    #[serde(deserialize_with = "text")]
    pub gpa: Option<String>,
    #[serde(deserialize_with = "text")]
    pub honors: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skills {
    #[serde(deserialize_with = "list")]
    pub technical: Vec<String>,
    #[serde(deserialize_with = "list")]
    pub soft: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub issuer: Option<String>,
    #[serde(deserialize_with = "text")]
    pub date: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "list")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "text")]
    pub url: Option<String>,
}

/// A scalar field as text. Numbers are accepted and written out as they would print,
/// so `"gpa": 3.8` reads the same as `"gpa": "3.8"`
#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
}

impl From<Scalar> for String {
    fn from(scalar: Scalar) -> String {
        match scalar {
            Scalar::Text(text) => text,
            Scalar::Integer(n) => n.to_string(),
            Scalar::Float(n) => n.to_string(),
            Scalar::Bool(b) => b.to_string(),
        }
    }
}

fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(Option::<Scalar>::deserialize(deserializer)?.map(String::from))
}

/// A list field where `null` reads as empty
fn list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// The trimmed value of an optional field, or [None] if it is missing or blank
pub fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// The trimmed, non-blank entries of a list field
pub fn present_items(values: &[String]) -> Vec<&str> {
    values
        .iter()
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .collect()
}

impl ResumeDocument {
    /// Parse a resume from JSON, tolerating a surrounding markdown code fence
    pub fn from_json(json: &str) -> Result<ResumeDocument, PDFError> {
        Ok(serde_json::from_str(extract_json(json))?)
    }

    /// Technical skills, comma separated; used as the PDF keywords
    pub fn keywords(&self) -> Option<String> {
        let skills = self.skills.as_ref()?;
        let technical = present_items(&skills.technical);
        (!technical.is_empty()).then(|| technical.join(", "))
    }
}

impl Experience {
    /// `start - end`, or whichever of the two is present
    pub fn date_range(&self) -> Option<String> {
        match (present(&self.start_date), present(&self.end_date)) {
            (Some(start), Some(end)) => Some(format!("{start} - {end}")),
            (Some(date), None) | (None, Some(date)) => Some(date.to_string()),
            (None, None) => None,
        }
    }

    pub fn is_blank(&self) -> bool {
        present(&self.position).is_none()
            && present(&self.company).is_none()
            && self.date_range().is_none()
            && present_items(&self.responsibilities).is_empty()
            && present_items(&self.achievements).is_empty()
    }
}

impl Education {
    /// `degree in field`, or whichever of the two is present
    pub fn title(&self) -> Option<String> {
        match (present(&self.degree), present(&self.field)) {
            (Some(degree), Some(field)) => Some(format!("{degree} in {field}")),
            (Some(title), None) | (None, Some(title)) => Some(title.to_string()),
            (None, None) => None,
        }
    }

    /// Institution, year, GPA and honors joined with ` | `
    pub fn details(&self) -> Option<String> {
        let gpa = present(&self.gpa).map(|gpa| format!("GPA: {gpa}"));
        let parts: Vec<&str> = [
            present(&self.institution),
            present(&self.graduation_year),
            gpa.as_deref(),
            present(&self.honors),
        ]
        .into_iter()
        .flatten()
        .collect();
        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    pub fn is_blank(&self) -> bool {
        self.title().is_none() && self.details().is_none()
    }
}

impl Skills {
    pub fn is_blank(&self) -> bool {
        present_items(&self.technical).is_empty() && present_items(&self.soft).is_empty()
    }
}

impl Certification {
    /// `issuer | date`, or whichever of the two is present
    pub fn byline(&self) -> Option<String> {
        let parts: Vec<&str> = [present(&self.issuer), present(&self.date)]
            .into_iter()
            .flatten()
            .collect();
        (!parts.is_empty()).then(|| parts.join(" | "))
    }

    pub fn is_blank(&self) -> bool {
        present(&self.name).is_none() && self.byline().is_none()
    }
}

impl Project {
    pub fn is_blank(&self) -> bool {
        present(&self.name).is_none()
            && present(&self.description).is_none()
            && present(&self.url).is_none()
            && present_items(&self.technologies).is_empty()
    }
}

/// Strips a markdown code fence (```` ```json ```` or a bare ```` ``` ````) from around a
/// JSON payload. Text without a fence is returned trimmed.
pub fn extract_json(text: &str) -> &str {
    let mut cleaned = text.trim();

    if let Some(rest) = cleaned.strip_prefix("```") {
        let rest = match rest.get(..4) {
            Some(tag) if tag.eq_ignore_ascii_case("json") => &rest[4..],
            _ => rest,
        };
        cleaned = rest.trim_start();
    }
    if let Some(rest) = cleaned.strip_suffix("```") {
        cleaned = rest;
    }

    cleaned.trim()
}

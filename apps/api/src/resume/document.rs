//! JSON exchange format for resumes — combined documents, per-section
//! documents, and the combined export.

use std::fmt;
use std::str::FromStr;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

use crate::models::resume::{
    Education, Experience, Personal, PersonalShape, Project, ResumeRecord,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    Personal,
    Experience,
    Education,
    Projects,
}

impl Section {
    #[cfg(test)]
    pub const ALL: [Section; 4] = [
        Section::Personal,
        Section::Experience,
        Section::Education,
        Section::Projects,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Section::Personal => "personal",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Projects => "projects",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = DocumentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "personal" | "personal_information" => Ok(Section::Personal),
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            "projects" => Ok(Section::Projects),
            other => Err(DocumentError::UnknownSection(other.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Combined JSON must be an object with section keys")]
    NotAnObject,

    #[error("{0} JSON must be a list of objects")]
    NotAList(Section),

    #[error("Invalid {section} section: {source}")]
    InvalidSection {
        section: Section,
        #[source]
        source: serde_json::Error,
    },

    #[error("No valid sections found in the combined JSON")]
    NoSections,

    #[error("Unknown section '{0}'")]
    UnknownSection(String),
}

/// A parsed document and the sections it actually carried.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImportedResume {
    pub resume: ResumeRecord,
    pub sections: Vec<Section>,
}

fn personal_from_value(value: Value) -> Result<Option<Personal>, DocumentError> {
    let shape: PersonalShape =
        serde_json::from_value(value).map_err(|source| DocumentError::InvalidSection {
            section: Section::Personal,
            source,
        })?;
    Ok(shape.into_personal())
}

fn list_from_value<T: DeserializeOwned>(
    section: Section,
    value: Value,
) -> Result<Vec<T>, DocumentError> {
    if !value.is_array() {
        return Err(DocumentError::NotAList(section));
    }
    serde_json::from_value(value).map_err(|source| DocumentError::InvalidSection { section, source })
}

fn take_section(map: &mut Map<String, Value>, key: &str) -> Option<Value> {
    map.remove(key).filter(|value| !value.is_null())
}

/// Parses a combined document keyed by `personal_information` (or `personal`),
/// `experience`, `education` and `projects`. Absent or null sections are skipped;
/// `personal_information` wins when both personal keys are present.
pub fn parse_combined(raw: &[u8]) -> Result<ImportedResume, DocumentError> {
    let Value::Object(mut map) = serde_json::from_slice::<Value>(raw)? else {
        return Err(DocumentError::NotAnObject);
    };

    let personal =
        take_section(&mut map, "personal_information").or_else(|| take_section(&mut map, "personal"));
    let experience = take_section(&mut map, "experience");
    let education = take_section(&mut map, "education");
    let projects = take_section(&mut map, "projects");

    let mut imported = ImportedResume {
        resume: ResumeRecord::default(),
        sections: Vec::new(),
    };

    if let Some(value) = personal {
        imported.resume.personal = personal_from_value(value)?;
        imported.sections.push(Section::Personal);
    }
    if let Some(value) = experience {
        imported.resume.experience = list_from_value(Section::Experience, value)?;
        imported.sections.push(Section::Experience);
    }
    if let Some(value) = education {
        imported.resume.education = list_from_value(Section::Education, value)?;
        imported.sections.push(Section::Education);
    }
    if let Some(value) = projects {
        imported.resume.projects = list_from_value(Section::Projects, value)?;
        imported.sections.push(Section::Projects);
    }

    if imported.sections.is_empty() {
        return Err(DocumentError::NoSections);
    }
    Ok(imported)
}

/// Parses a single-section document, which must be a JSON list of objects.
pub fn parse_section(section: Section, raw: &[u8]) -> Result<ImportedResume, DocumentError> {
    let value: Value = serde_json::from_slice(raw)?;
    if !value.is_array() {
        return Err(DocumentError::NotAList(section));
    }

    let mut resume = ResumeRecord::default();
    match section {
        Section::Personal => {
            let list: Vec<Personal> = list_from_value(section, value)?;
            resume.personal = list.into_iter().next();
        }
        Section::Experience => resume.experience = list_from_value::<Experience>(section, value)?,
        Section::Education => resume.education = list_from_value::<Education>(section, value)?,
        Section::Projects => resume.projects = list_from_value::<Project>(section, value)?,
    }

    Ok(ImportedResume {
        resume,
        sections: vec![section],
    })
}

impl ResumeRecord {
    /// Replaces the listed sections of `self` with those of `other`.
    pub fn replace_sections(&mut self, mut other: ResumeRecord, sections: &[Section]) {
        for section in sections {
            match section {
                Section::Personal => self.personal = other.personal.take(),
                Section::Experience => self.experience = std::mem::take(&mut other.experience),
                Section::Education => self.education = std::mem::take(&mut other.education),
                Section::Projects => self.projects = std::mem::take(&mut other.projects),
            }
        }
    }
}

#[derive(Serialize)]
struct CombinedDocument<'a> {
    personal_information: Vec<&'a Personal>,
    experience: &'a [Experience],
    education: &'a [Education],
    projects: &'a [Project],
}

/// Pretty-printed combined document; personal is written as a 0- or 1-element list.
pub fn to_combined_json(record: &ResumeRecord) -> Result<String, serde_json::Error> {
    let document = CombinedDocument {
        personal_information: record.personal.iter().collect(),
        experience: &record.experience,
        education: &record.education,
        projects: &record.projects,
    };
    serde_json::to_string_pretty(&document)
}

/// Item counts per section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub personal: usize,
    pub experience: usize,
    pub education: usize,
    pub projects: usize,
}

impl SectionSummary {
    pub fn of(record: &ResumeRecord) -> Self {
        Self {
            personal: usize::from(record.personal.is_some()),
            experience: record.experience.len(),
            education: record.education.len(),
            projects: record.projects.len(),
        }
    }
}

use serde::{Deserialize, Deserializer, Serialize};

/// A spoken language listed in the personal section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Technology {
    pub technology: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub certification: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub website: String,
    pub linkedin: String,
    pub languages: Vec<Language>,
    pub technologies: Vec<Technology>,
    pub certifications: Vec<Certification>,
}

/// A titled bullet under an experience entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Detail {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    #[serde(alias = "company_location")]
    pub location: String,
    pub role: String,
    pub team: String,
    #[serde(alias = "time_duration")]
    pub duration: String,
    pub details: Vec<Detail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub school: String,
    #[serde(alias = "school_location")]
    pub location: String,
    pub degree: String,
    #[serde(alias = "time_period")]
    pub period: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub title: String,
    pub description: String,
}

/// Personal data may be stored as one object or as a list whose first
/// element is used.
#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum PersonalShape {
    Many(Vec<Personal>),
    One(Personal),
}

impl PersonalShape {
    pub(crate) fn into_personal(self) -> Option<Personal> {
        match self {
            PersonalShape::Many(list) => list.into_iter().next(),
            PersonalShape::One(personal) => Some(personal),
        }
    }
}

fn deserialize_personal<'de, D>(deserializer: D) -> Result<Option<Personal>, D::Error>
where
    D: Deserializer<'de>,
{
    let shape = Option::<PersonalShape>::deserialize(deserializer)?;
    Ok(shape.and_then(PersonalShape::into_personal))
}

/// The caller-held resume. Every field is optional on the wire; missing values
/// deserialize to empty strings and empty lists. `personal` also reads the
/// exported `personal_information` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeRecord {
    #[serde(
        alias = "personal_information",
        deserialize_with = "deserialize_personal",
        skip_serializing_if = "Option::is_none"
    )]
    pub personal: Option<Personal>,
    pub experience: Vec<Experience>,
    pub education: Vec<Education>,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_default_record() {
        let record: ResumeRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record, ResumeRecord::default());
        assert!(record.personal.is_none());
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let json = r#"{
            "personal": {"name": "Ada Lovelace"},
            "experience": [{"company": "Analytical Engines"}],
            "projects": [{}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        let personal = record.personal.unwrap();
        assert_eq!(personal.name, "Ada Lovelace");
        assert!(personal.email.is_empty());
        assert!(personal.languages.is_empty());
        assert_eq!(record.experience[0].company, "Analytical Engines");
        assert!(record.experience[0].details.is_empty());
        assert_eq!(record.projects[0], Project::default());
    }

    #[test]
    fn test_personal_accepts_object_or_list() {
        let record: ResumeRecord =
            serde_json::from_str(r#"{"personal_information": [{"name": "Grace"}, {"name": "x"}]}"#)
                .unwrap();
        assert_eq!(record.personal.unwrap().name, "Grace");

        let record: ResumeRecord =
            serde_json::from_str(r#"{"personal_information": {"name": "Grace"}}"#).unwrap();
        assert_eq!(record.personal.unwrap().name, "Grace");
    }

    #[test]
    fn test_personal_null_or_empty_list_is_absent() {
        let record: ResumeRecord = serde_json::from_str(r#"{"personal": null}"#).unwrap();
        assert!(record.personal.is_none());

        let record: ResumeRecord = serde_json::from_str(r#"{"personal": []}"#).unwrap();
        assert!(record.personal.is_none());
    }

    #[test]
    fn test_legacy_field_names_are_accepted() {
        let json = r#"{
            "experience": [{"company_location": "London", "time_duration": "1842-1843"}],
            "education": [{"school_location": "Home", "time_period": "1830s"}]
        }"#;
        let record: ResumeRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.experience[0].location, "London");
        assert_eq!(record.experience[0].duration, "1842-1843");
        assert_eq!(record.education[0].location, "Home");
        assert_eq!(record.education[0].period, "1830s");
    }

    #[test]
    fn test_serializes_canonical_field_names() {
        let record = ResumeRecord {
            experience: vec![Experience {
                location: "Berlin".to_string(),
                duration: "2020-2023".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["experience"][0]["location"], "Berlin");
        assert_eq!(value["experience"][0]["duration"], "2020-2023");
        assert!(value.get("personal").is_none());
    }
}

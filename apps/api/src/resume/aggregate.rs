use crate::models::resume::ResumeRecord;

/// Flattens a resume into one space-joined text blob for keyword scoring.
///
/// Order: name + email, languages, technologies, certifications, then each
/// experience (role + company, then its details), each education
/// (degree + school), each project (title + description). Empty fields still
/// contribute an empty segment; tokenization collapses the extra whitespace.
pub fn aggregate(record: &ResumeRecord) -> String {
    let mut parts: Vec<String> = Vec::new();

    if let Some(personal) = &record.personal {
        parts.push(format!("{} {}", personal.name, personal.email));
        parts.push(join_names(personal.languages.iter().map(|l| l.language.as_str())));
        parts.push(join_names(
            personal.technologies.iter().map(|t| t.technology.as_str()),
        ));
        parts.push(join_names(
            personal.certifications.iter().map(|c| c.certification.as_str()),
        ));
    }

    for exp in &record.experience {
        parts.push(format!("{} {}", exp.role, exp.company));
        for detail in &exp.details {
            parts.push(format!("{} {}", detail.title, detail.description));
        }
    }

    for edu in &record.education {
        parts.push(format!("{} {}", edu.degree, edu.school));
    }

    for project in &record.projects {
        parts.push(format!("{} {}", project.title, project.description));
    }

    parts.join(" ")
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(" ")
}

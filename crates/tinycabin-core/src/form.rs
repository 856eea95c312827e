//! The inquiry form record posted to the form endpoint.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Kinds of work a visitor can ask about.
///
/// Serialized as the display strings the endpoint expects in the
/// `projectTypes` array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProjectType {
    #[serde(rename = "Brand Identity")]
    BrandIdentity,
    #[serde(rename = "Web Design")]
    WebDesign,
    #[serde(rename = "Packaging")]
    Packaging,
    #[serde(rename = "Illustration")]
    Illustration,
    #[serde(rename = "Something Else")]
    SomethingElse,
}

impl ProjectType {
    /// Label shown next to the checkbox
    pub fn label(&self) -> &'static str {
        match self {
            ProjectType::BrandIdentity => "Brand Identity",
            ProjectType::WebDesign => "Web Design",
            ProjectType::Packaging => "Packaging",
            ProjectType::Illustration => "Illustration",
            ProjectType::SomethingElse => "Something Else",
        }
    }

    /// All selectable project types, in display order
    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::BrandIdentity,
            ProjectType::WebDesign,
            ProjectType::Packaging,
            ProjectType::Illustration,
            ProjectType::SomethingElse,
        ]
    }
}

/// The eleven-field contact record.
///
/// Held in memory for the page session and serialized verbatim as the
/// JSON body of the submission POST. `Default` is the empty shape the
/// form is reset to after a successful submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InquiryForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub phone: String,
    pub budget: String,
    pub timeline: String,
    pub project_types: BTreeSet<ProjectType>,
    pub project_outline: String,
    pub inspiration: String,
    pub hear_about: String,
}

impl InquiryForm {
    /// Checkbox semantics: select if absent, deselect if present.
    pub fn toggle_project_type(&mut self, kind: ProjectType) {
        if !self.project_types.remove(&kind) {
            self.project_types.insert(kind);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_camel_case_keys() {
        let mut form = InquiryForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        form.toggle_project_type(ProjectType::WebDesign);

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["name"], "Ada");
        assert_eq!(json["projectOutline"], "");
        assert_eq!(json["hearAbout"], "");
        assert_eq!(json["projectTypes"][0], "Web Design");
    }

    #[test]
    fn toggle_project_type_is_a_checkbox() {
        let mut form = InquiryForm::default();
        form.toggle_project_type(ProjectType::Packaging);
        assert!(form.project_types.contains(&ProjectType::Packaging));
        form.toggle_project_type(ProjectType::Packaging);
        assert!(form.project_types.is_empty());
    }

    #[test]
    fn default_is_the_empty_shape() {
        let form = InquiryForm::default();
        assert!(form.name.is_empty());
        assert!(form.project_types.is_empty());
        assert_eq!(form, InquiryForm::default());
    }
}

//! Enquiry record types and boundary validation.
//!
//! The enquiry form arrives as loosely-typed string fields. Everything is
//! optional at the wire; [`NewEnquiry::try_from`] decides what is actually
//! required and rejects malformed input before it reaches the database.

use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use enquiry_desk_core::{
    AcademicQualification, Email, EmailError, EnquiryId, QualificationError,
};

/// Errors produced while validating an enquiry form.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// The submitted email address did not parse.
    #[error("invalid email address: {0}")]
    InvalidEmail(#[from] EmailError),

    /// The enquiry date was not in `YYYY-MM-DD` form.
    #[error("invalid enquiry date {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    /// The academic qualification value was not recognized.
    #[error(transparent)]
    UnknownQualification(#[from] QualificationError),
}

/// Raw enquiry form fields, exactly as posted.
///
/// Field names mirror the form inputs (camelCase on the wire). Absent and
/// blank fields are equivalent.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryForm {
    pub email: Option<String>,
    pub full_name: Option<String>,
    pub enquiry_date: Option<String>,
    pub contact_no: Option<String>,
    pub residential_area: Option<String>,
    pub referenced_by: Option<String>,
    pub academic_qualification: Option<String>,
    pub ssc: Option<String>,
    pub ssc_percentage: Option<String>,
    pub ssc_year: Option<String>,
    pub hsc_name: Option<String>,
    pub hsc_percentage: Option<String>,
    pub hsc_year: Option<String>,
    pub graduate_name: Option<String>,
    pub graduate_percentage: Option<String>,
    pub graduate_year: Option<String>,
    pub post_graduate_name: Option<String>,
    pub post_graduate_percentage: Option<String>,
    pub post_graduate_year: Option<String>,
    pub other_course: Option<String>,
    pub remarks: Option<String>,
}

/// Institution name, percentage, and year for one qualification level.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EducationRecord {
    pub name: Option<String>,
    pub percentage: Option<String>,
    pub year: Option<String>,
}

impl EducationRecord {
    fn new(name: Option<String>, percentage: Option<String>, year: Option<String>) -> Self {
        Self {
            name,
            percentage,
            year,
        }
    }
}

/// A validated enquiry, ready to be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewEnquiry {
    pub email: Email,
    pub full_name: String,
    pub enquiry_date: NaiveDate,
    pub contact_no: Option<String>,
    pub residential_area: Option<String>,
    pub referenced_by: Option<String>,
    pub academic_qualification: Option<AcademicQualification>,
    pub secondary: EducationRecord,
    pub higher_secondary: EducationRecord,
    pub graduate: EducationRecord,
    pub post_graduate: EducationRecord,
    pub other_course: Option<String>,
    pub remarks: Option<String>,
}

/// A persisted enquiry record.
///
/// Records are immutable once inserted: the system has no update or delete
/// operation for them.
#[derive(Debug, Clone, PartialEq)]
pub struct Enquiry {
    pub id: EnquiryId,
    pub email: Email,
    pub full_name: String,
    pub enquiry_date: NaiveDate,
    pub contact_no: Option<String>,
    pub residential_area: Option<String>,
    pub referenced_by: Option<String>,
    pub academic_qualification: Option<AcademicQualification>,
    pub secondary: EducationRecord,
    pub higher_secondary: EducationRecord,
    pub graduate: EducationRecord,
    pub post_graduate: EducationRecord,
    pub other_course: Option<String>,
    pub remarks: Option<String>,
}

impl TryFrom<EnquiryForm> for NewEnquiry {
    type Error = ValidationError;

    fn try_from(form: EnquiryForm) -> Result<Self, Self::Error> {
        let email = Email::parse(&required(form.email, "email")?)?;
        let full_name = required(form.full_name, "fullName")?;

        let raw_date = required(form.enquiry_date, "enquiryDate")?;
        let enquiry_date = NaiveDate::parse_from_str(&raw_date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(raw_date))?;

        let academic_qualification = trimmed(form.academic_qualification)
            .map(|q| AcademicQualification::parse(&q))
            .transpose()?;

        Ok(Self {
            email,
            full_name,
            enquiry_date,
            contact_no: trimmed(form.contact_no),
            residential_area: trimmed(form.residential_area),
            referenced_by: trimmed(form.referenced_by),
            academic_qualification,
            secondary: EducationRecord::new(
                trimmed(form.ssc),
                trimmed(form.ssc_percentage),
                trimmed(form.ssc_year),
            ),
            higher_secondary: EducationRecord::new(
                trimmed(form.hsc_name),
                trimmed(form.hsc_percentage),
                trimmed(form.hsc_year),
            ),
            graduate: EducationRecord::new(
                trimmed(form.graduate_name),
                trimmed(form.graduate_percentage),
                trimmed(form.graduate_year),
            ),
            post_graduate: EducationRecord::new(
                trimmed(form.post_graduate_name),
                trimmed(form.post_graduate_percentage),
                trimmed(form.post_graduate_year),
            ),
            other_course: trimmed(form.other_course),
            remarks: trimmed(form.remarks),
        })
    }
}

/// Trim a form value; blank becomes `None`.
fn trimmed(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
}

/// Trim a form value and require it to be present.
fn required(value: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    trimmed(value).ok_or(ValidationError::MissingField(field))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn filled_form() -> EnquiryForm {
        EnquiryForm {
            email: Some("a@b.com".to_string()),
            full_name: Some("A B".to_string()),
            enquiry_date: Some("2024-01-05".to_string()),
            contact_no: Some("0123456789".to_string()),
            residential_area: Some("Downtown".to_string()),
            referenced_by: Some("Friend".to_string()),
            academic_qualification: Some("graduate".to_string()),
            ssc: Some("Central High".to_string()),
            ssc_percentage: Some("82".to_string()),
            ssc_year: Some("2016".to_string()),
            hsc_name: Some("City College".to_string()),
            hsc_percentage: Some("75".to_string()),
            hsc_year: Some("2018".to_string()),
            graduate_name: Some("State University".to_string()),
            graduate_percentage: Some("68".to_string()),
            graduate_year: Some("2022".to_string()),
            other_course: Some("Typing".to_string()),
            remarks: Some("Evening batch preferred".to_string()),
            ..EnquiryForm::default()
        }
    }

    #[test]
    fn test_valid_form_parses() {
        let enquiry = NewEnquiry::try_from(filled_form()).unwrap();

        assert_eq!(enquiry.email.as_str(), "a@b.com");
        assert_eq!(enquiry.full_name, "A B");
        assert_eq!(
            enquiry.enquiry_date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
        assert_eq!(
            enquiry.academic_qualification,
            Some(AcademicQualification::Graduate)
        );
        assert_eq!(enquiry.secondary.name.as_deref(), Some("Central High"));
        assert_eq!(enquiry.graduate.year.as_deref(), Some("2022"));
        assert_eq!(enquiry.post_graduate, EducationRecord::default());
    }

    #[test]
    fn test_missing_email_is_rejected() {
        let form = EnquiryForm {
            email: None,
            ..filled_form()
        };
        assert!(matches!(
            NewEnquiry::try_from(form),
            Err(ValidationError::MissingField("email"))
        ));
    }

    #[test]
    fn test_blank_required_field_is_rejected() {
        let form = EnquiryForm {
            full_name: Some("   ".to_string()),
            ..filled_form()
        };
        assert!(matches!(
            NewEnquiry::try_from(form),
            Err(ValidationError::MissingField("fullName"))
        ));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let form = EnquiryForm {
            email: Some("not-an-email".to_string()),
            ..filled_form()
        };
        assert!(matches!(
            NewEnquiry::try_from(form),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_malformed_date_is_rejected() {
        let form = EnquiryForm {
            enquiry_date: Some("05/01/2024".to_string()),
            ..filled_form()
        };
        assert!(matches!(
            NewEnquiry::try_from(form),
            Err(ValidationError::InvalidDate(_))
        ));
    }

    #[test]
    fn test_unknown_qualification_is_rejected() {
        let form = EnquiryForm {
            academic_qualification: Some("doctorate".to_string()),
            ..filled_form()
        };
        assert!(matches!(
            NewEnquiry::try_from(form),
            Err(ValidationError::UnknownQualification(_))
        ));
    }

    #[test]
    fn test_optional_fields_default_to_none() {
        let form = EnquiryForm {
            email: Some("a@b.com".to_string()),
            full_name: Some("A B".to_string()),
            enquiry_date: Some("2024-01-05".to_string()),
            ..EnquiryForm::default()
        };

        let enquiry = NewEnquiry::try_from(form).unwrap();
        assert_eq!(enquiry.contact_no, None);
        assert_eq!(enquiry.academic_qualification, None);
        assert_eq!(enquiry.secondary, EducationRecord::default());
        assert_eq!(enquiry.remarks, None);
    }

    #[test]
    fn test_form_field_names_are_camel_case() {
        let form: EnquiryForm = parse_form_json(
            r#"{"email":"a@b.com","fullName":"A B","enquiryDate":"2024-01-05",
               "sscPercentage":"82","postGraduateName":"Tech Institute",
               "otherCourse":"Typing"}"#,
        );

        assert_eq!(form.email.as_deref(), Some("a@b.com"));
        assert_eq!(form.full_name.as_deref(), Some("A B"));
        assert_eq!(form.ssc_percentage.as_deref(), Some("82"));
        assert_eq!(form.post_graduate_name.as_deref(), Some("Tech Institute"));
        assert_eq!(form.other_course.as_deref(), Some("Typing"));
    }

    fn parse_form_json(json: &str) -> EnquiryForm {
        serde_json::from_str(json).unwrap()
    }
}

//! Enquiry repository for database operations.
//!
//! Queries use sqlx's runtime API with positional binds; the `enquiries`
//! column order is fixed and both statements below preserve it exactly.

use chrono::NaiveDate;
use sqlx::PgPool;

use enquiry_desk_core::{AcademicQualification, Email, EnquiryId};

use super::RepositoryError;
use crate::models::{EducationRecord, Enquiry, NewEnquiry};

/// Insert one enquiry. The column list follows the table's fixed order.
const INSERT_ENQUIRY: &str = r"
    INSERT INTO enquiries (
        email, full_name, enquiry_date, contact_no, residential_area,
        referenced_by, academic_qualification,
        ssc, ssc_percentage, ssc_year,
        hsc_name, hsc_percentage, hsc_year,
        graduate_name, graduate_percentage, graduate_year,
        post_graduate_name, post_graduate_percentage, post_graduate_year,
        other_course, remarks
    )
    VALUES (
        $1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11,
        $12, $13, $14, $15, $16, $17, $18, $19, $20, $21
    )
    RETURNING id
";

/// Fetch every enquiry. No ordering is guaranteed.
const SELECT_ALL_ENQUIRIES: &str = r"
    SELECT id, email, full_name, enquiry_date, contact_no, residential_area,
           referenced_by, academic_qualification,
           ssc, ssc_percentage, ssc_year,
           hsc_name, hsc_percentage, hsc_year,
           graduate_name, graduate_percentage, graduate_year,
           post_graduate_name, post_graduate_percentage, post_graduate_year,
           other_course, remarks
    FROM enquiries
";

/// Internal row type for enquiry queries.
#[derive(Debug, sqlx::FromRow)]
struct EnquiryRow {
    id: i32,
    email: String,
    full_name: String,
    enquiry_date: NaiveDate,
    contact_no: Option<String>,
    residential_area: Option<String>,
    referenced_by: Option<String>,
    academic_qualification: Option<String>,
    ssc: Option<String>,
    ssc_percentage: Option<String>,
    ssc_year: Option<String>,
    hsc_name: Option<String>,
    hsc_percentage: Option<String>,
    hsc_year: Option<String>,
    graduate_name: Option<String>,
    graduate_percentage: Option<String>,
    graduate_year: Option<String>,
    post_graduate_name: Option<String>,
    post_graduate_percentage: Option<String>,
    post_graduate_year: Option<String>,
    other_course: Option<String>,
    remarks: Option<String>,
}

impl TryFrom<EnquiryRow> for Enquiry {
    type Error = RepositoryError;

    fn try_from(row: EnquiryRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        let academic_qualification = row
            .academic_qualification
            .as_deref()
            .map(AcademicQualification::parse)
            .transpose()
            .map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid qualification in database: {e}"))
            })?;

        Ok(Self {
            id: EnquiryId::new(row.id),
            email,
            full_name: row.full_name,
            enquiry_date: row.enquiry_date,
            contact_no: row.contact_no,
            residential_area: row.residential_area,
            referenced_by: row.referenced_by,
            academic_qualification,
            secondary: EducationRecord {
                name: row.ssc,
                percentage: row.ssc_percentage,
                year: row.ssc_year,
            },
            higher_secondary: EducationRecord {
                name: row.hsc_name,
                percentage: row.hsc_percentage,
                year: row.hsc_year,
            },
            graduate: EducationRecord {
                name: row.graduate_name,
                percentage: row.graduate_percentage,
                year: row.graduate_year,
            },
            post_graduate: EducationRecord {
                name: row.post_graduate_name,
                percentage: row.post_graduate_percentage,
                year: row.post_graduate_year,
            },
            other_course: row.other_course,
            remarks: row.remarks,
        })
    }
}

/// Repository for enquiry database operations.
pub struct EnquiryRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EnquiryRepository<'a> {
    /// Create a new enquiry repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new enquiry and return its assigned ID.
    ///
    /// Every submission inserts a fresh row; there is no deduplication.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn insert(&self, enquiry: &NewEnquiry) -> Result<EnquiryId, RepositoryError> {
        let id: i32 = sqlx::query_scalar(INSERT_ENQUIRY)
            .bind(enquiry.email.as_str())
            .bind(&enquiry.full_name)
            .bind(enquiry.enquiry_date)
            .bind(enquiry.contact_no.as_deref())
            .bind(enquiry.residential_area.as_deref())
            .bind(enquiry.referenced_by.as_deref())
            .bind(enquiry.academic_qualification.map(|q| q.as_str()))
            .bind(enquiry.secondary.name.as_deref())
            .bind(enquiry.secondary.percentage.as_deref())
            .bind(enquiry.secondary.year.as_deref())
            .bind(enquiry.higher_secondary.name.as_deref())
            .bind(enquiry.higher_secondary.percentage.as_deref())
            .bind(enquiry.higher_secondary.year.as_deref())
            .bind(enquiry.graduate.name.as_deref())
            .bind(enquiry.graduate.percentage.as_deref())
            .bind(enquiry.graduate.year.as_deref())
            .bind(enquiry.post_graduate.name.as_deref())
            .bind(enquiry.post_graduate.percentage.as_deref())
            .bind(enquiry.post_graduate.year.as_deref())
            .bind(enquiry.other_course.as_deref())
            .bind(enquiry.remarks.as_deref())
            .fetch_one(self.pool)
            .await?;

        Ok(EnquiryId::new(id))
    }

    /// List all enquiries.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if a row is invalid.
    pub async fn list_all(&self) -> Result<Vec<Enquiry>, RepositoryError> {
        let rows: Vec<EnquiryRow> = sqlx::query_as(SELECT_ALL_ENQUIRIES)
            .fetch_all(self.pool)
            .await?;

        rows.into_iter().map(TryInto::try_into).collect()
    }
}

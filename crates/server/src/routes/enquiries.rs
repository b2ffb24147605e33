//! Enquiry listing route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;

use crate::db::EnquiryRepository;
use crate::error::AppError;
use crate::middleware::RequireAdminAuth;
use crate::models::Enquiry;
use crate::state::AppState;

/// One enquiry prepared for display: optional fields blanked and the
/// enquiry date pre-formatted as `YYYY-MM-DD`.
pub struct EnquiryRowView {
    pub id: i32,
    pub email: String,
    pub full_name: String,
    pub enquiry_date: String,
    pub contact_no: String,
    pub residential_area: String,
    pub referenced_by: String,
    pub academic_qualification: String,
    pub ssc: String,
    pub ssc_percentage: String,
    pub ssc_year: String,
    pub hsc_name: String,
    pub hsc_percentage: String,
    pub hsc_year: String,
    pub graduate_name: String,
    pub graduate_percentage: String,
    pub graduate_year: String,
    pub post_graduate_name: String,
    pub post_graduate_percentage: String,
    pub post_graduate_year: String,
    pub other_course: String,
    pub remarks: String,
}

impl From<Enquiry> for EnquiryRowView {
    fn from(e: Enquiry) -> Self {
        Self {
            id: e.id.as_i32(),
            email: e.email.into_inner(),
            full_name: e.full_name,
            enquiry_date: e.enquiry_date.format("%Y-%m-%d").to_string(),
            contact_no: e.contact_no.unwrap_or_default(),
            residential_area: e.residential_area.unwrap_or_default(),
            referenced_by: e.referenced_by.unwrap_or_default(),
            academic_qualification: e
                .academic_qualification
                .map(|q| q.label().to_string())
                .unwrap_or_default(),
            ssc: e.secondary.name.unwrap_or_default(),
            ssc_percentage: e.secondary.percentage.unwrap_or_default(),
            ssc_year: e.secondary.year.unwrap_or_default(),
            hsc_name: e.higher_secondary.name.unwrap_or_default(),
            hsc_percentage: e.higher_secondary.percentage.unwrap_or_default(),
            hsc_year: e.higher_secondary.year.unwrap_or_default(),
            graduate_name: e.graduate.name.unwrap_or_default(),
            graduate_percentage: e.graduate.percentage.unwrap_or_default(),
            graduate_year: e.graduate.year.unwrap_or_default(),
            post_graduate_name: e.post_graduate.name.unwrap_or_default(),
            post_graduate_percentage: e.post_graduate.percentage.unwrap_or_default(),
            post_graduate_year: e.post_graduate.year.unwrap_or_default(),
            other_course: e.other_course.unwrap_or_default(),
            remarks: e.remarks.unwrap_or_default(),
        }
    }
}

/// Enquiry listing page template.
#[derive(Template, WebTemplate)]
#[template(path = "enquiries.html")]
pub struct EnquiriesTemplate {
    pub enquiries: Vec<EnquiryRowView>,
}

/// Render the enquiry listing.
///
/// Requires an authenticated admin session; the extractor rejects
/// unauthenticated requests before any query is issued.
pub async fn list(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
) -> Result<EnquiriesTemplate, AppError> {
    let repo = EnquiryRepository::new(state.pool());
    let enquiries = repo.list_all().await?;

    Ok(EnquiriesTemplate {
        enquiries: enquiries.into_iter().map(Into::into).collect(),
    })
}

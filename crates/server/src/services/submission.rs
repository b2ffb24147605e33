//! Enquiry submission workflow.
//!
//! Coordinates the two side effects of a submission - the row insert and
//! the confirmation email - and reports a single combined outcome. The
//! insert is authoritative: if it fails, nothing else happens. The email
//! is best-effort: a failed send leaves the stored enquiry in place, is
//! reported in the outcome, and is never retried. There is no transaction
//! spanning the two steps.

use std::future::Future;

use enquiry_desk_core::{Email, EnquiryId};

use crate::db::{EnquiryRepository, RepositoryError};
use crate::models::NewEnquiry;
use crate::services::email::{EmailError, EmailService};

/// Persistence seam for the submission workflow.
pub trait EnquiryStore {
    /// Insert the enquiry and return its assigned ID.
    fn insert_enquiry(
        &self,
        enquiry: &NewEnquiry,
    ) -> impl Future<Output = Result<EnquiryId, RepositoryError>> + Send;
}

/// Mail dispatch seam for the submission workflow.
pub trait ConfirmationMailer {
    /// Send one confirmation email to `to`, greeting `full_name`.
    fn send_confirmation(
        &self,
        to: &Email,
        full_name: &str,
    ) -> impl Future<Output = Result<(), EmailError>> + Send;
}

impl EnquiryStore for EnquiryRepository<'_> {
    async fn insert_enquiry(&self, enquiry: &NewEnquiry) -> Result<EnquiryId, RepositoryError> {
        self.insert(enquiry).await
    }
}

impl ConfirmationMailer for EmailService {
    async fn send_confirmation(&self, to: &Email, full_name: &str) -> Result<(), EmailError> {
        self.send_enquiry_confirmation(to, full_name).await
    }
}

/// Combined result of a submission that made it past the insert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Row inserted and confirmation email accepted by the transport.
    Confirmed {
        /// ID of the inserted enquiry.
        id: EnquiryId,
    },
    /// Row inserted but the confirmation email could not be sent.
    ConfirmationFailed {
        /// ID of the inserted enquiry.
        id: EnquiryId,
    },
}

/// Run the submission workflow: insert the enquiry, then attempt the
/// confirmation email.
///
/// # Errors
///
/// Returns the repository error when the insert fails. No email is
/// attempted in that case.
pub async fn submit_enquiry<S, M>(
    store: &S,
    mailer: &M,
    enquiry: &NewEnquiry,
) -> Result<SubmissionOutcome, RepositoryError>
where
    S: EnquiryStore,
    M: ConfirmationMailer,
{
    let id = store.insert_enquiry(enquiry).await?;

    match mailer
        .send_confirmation(&enquiry.email, &enquiry.full_name)
        .await
    {
        Ok(()) => Ok(SubmissionOutcome::Confirmed { id }),
        Err(e) => {
            tracing::warn!(%id, error = %e, "Confirmation email failed");
            Ok(SubmissionOutcome::ConfirmationFailed { id })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    use std::sync::Mutex;

    use chrono::NaiveDate;

    use crate::models::EducationRecord;

    fn sample_enquiry() -> NewEnquiry {
        NewEnquiry {
            email: Email::parse("a@b.com").unwrap(),
            full_name: "A B".to_string(),
            enquiry_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            contact_no: Some("0123456789".to_string()),
            residential_area: None,
            referenced_by: None,
            academic_qualification: None,
            secondary: EducationRecord::default(),
            higher_secondary: EducationRecord::default(),
            graduate: EducationRecord::default(),
            post_graduate: EducationRecord::default(),
            other_course: None,
            remarks: None,
        }
    }

    struct FakeStore {
        rows: Mutex<Vec<NewEnquiry>>,
        fail: bool,
    }

    impl FakeStore {
        fn new() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                rows: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn row_count(&self) -> usize {
            self.rows.lock().unwrap().len()
        }
    }

    impl EnquiryStore for FakeStore {
        async fn insert_enquiry(
            &self,
            enquiry: &NewEnquiry,
        ) -> Result<EnquiryId, RepositoryError> {
            if self.fail {
                return Err(RepositoryError::Database(sqlx::Error::PoolClosed));
            }
            let mut rows = self.rows.lock().unwrap();
            rows.push(enquiry.clone());
            Ok(EnquiryId::new(i32::try_from(rows.len()).unwrap()))
        }
    }

    struct FakeMailer {
        sent: Mutex<Vec<(String, String)>>,
        fail: bool,
    }

    impl FakeMailer {
        fn new() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: false,
            }
        }

        fn failing() -> Self {
            Self {
                sent: Mutex::new(Vec::new()),
                fail: true,
            }
        }

        fn sent_count(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    impl ConfirmationMailer for FakeMailer {
        async fn send_confirmation(&self, to: &Email, full_name: &str) -> Result<(), EmailError> {
            if self.fail {
                return Err(EmailError::InvalidAddress("transport unavailable".into()));
            }
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), full_name.to_owned()));
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_success_inserts_row_and_sends_one_email() {
        let store = FakeStore::new();
        let mailer = FakeMailer::new();

        let outcome = submit_enquiry(&store, &mailer, &sample_enquiry())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::Confirmed {
                id: EnquiryId::new(1)
            }
        );
        assert_eq!(store.row_count(), 1);

        let sent = mailer.sent.lock().unwrap();
        assert_eq!(sent.len(), 1);
        let (to, name) = &sent[0];
        assert_eq!(to, "a@b.com");
        assert_eq!(name, "A B");
    }

    #[tokio::test]
    async fn test_insert_failure_sends_no_email() {
        let store = FakeStore::failing();
        let mailer = FakeMailer::new();

        let result = submit_enquiry(&store, &mailer, &sample_enquiry()).await;

        assert!(result.is_err());
        assert_eq!(mailer.sent_count(), 0);
    }

    #[tokio::test]
    async fn test_mail_failure_keeps_the_inserted_row() {
        let store = FakeStore::new();
        let mailer = FakeMailer::failing();

        let outcome = submit_enquiry(&store, &mailer, &sample_enquiry())
            .await
            .unwrap();

        assert_eq!(
            outcome,
            SubmissionOutcome::ConfirmationFailed {
                id: EnquiryId::new(1)
            }
        );
        assert_eq!(store.row_count(), 1);
    }

    #[tokio::test]
    async fn test_resubmission_creates_a_second_row() {
        let store = FakeStore::new();
        let mailer = FakeMailer::new();
        let enquiry = sample_enquiry();

        let first = submit_enquiry(&store, &mailer, &enquiry).await.unwrap();
        let second = submit_enquiry(&store, &mailer, &enquiry).await.unwrap();

        assert_eq!(
            first,
            SubmissionOutcome::Confirmed {
                id: EnquiryId::new(1)
            }
        );
        assert_eq!(
            second,
            SubmissionOutcome::Confirmed {
                id: EnquiryId::new(2)
            }
        );
        assert_eq!(store.row_count(), 2);
    }
}

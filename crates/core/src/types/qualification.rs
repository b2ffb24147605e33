//! Academic qualification enumeration.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unrecognized qualification value.
#[derive(thiserror::Error, Debug, Clone)]
#[error("unknown academic qualification: {0}")]
pub struct QualificationError(pub String);

/// Highest academic qualification declared on an enquiry form.
///
/// Stored as its kebab-case string form; parsing is lenient about case and
/// separators so `"Post Graduate"`, `"post_graduate"` and `"post-graduate"`
/// all resolve to [`AcademicQualification::PostGraduate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AcademicQualification {
    /// Secondary school certificate (SSC).
    Secondary,
    /// Higher secondary certificate (HSC).
    HigherSecondary,
    Graduate,
    PostGraduate,
    /// Any other course or certification.
    Other,
}

impl AcademicQualification {
    /// Canonical string form, as persisted.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::HigherSecondary => "higher-secondary",
            Self::Graduate => "graduate",
            Self::PostGraduate => "post-graduate",
            Self::Other => "other",
        }
    }

    /// Human-readable label for rendering.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Secondary => "Secondary (SSC)",
            Self::HigherSecondary => "Higher Secondary (HSC)",
            Self::Graduate => "Graduate",
            Self::PostGraduate => "Post Graduate",
            Self::Other => "Other",
        }
    }

    /// Parse a qualification from a form or database value.
    ///
    /// # Errors
    ///
    /// Returns [`QualificationError`] if the value is not recognized.
    pub fn parse(s: &str) -> Result<Self, QualificationError> {
        let normalized: String = s
            .trim()
            .to_lowercase()
            .chars()
            .map(|c| if c == ' ' || c == '_' { '-' } else { c })
            .collect();

        match normalized.as_str() {
            "secondary" | "ssc" => Ok(Self::Secondary),
            "higher-secondary" | "hsc" => Ok(Self::HigherSecondary),
            "graduate" => Ok(Self::Graduate),
            "post-graduate" | "postgraduate" => Ok(Self::PostGraduate),
            "other" => Ok(Self::Other),
            _ => Err(QualificationError(s.to_owned())),
        }
    }
}

impl fmt::Display for AcademicQualification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AcademicQualification {
    type Err = QualificationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

// SQLx support (with postgres feature): stored as TEXT.
#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for AcademicQualification {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <String as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for AcademicQualification {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s = <String as sqlx::Decode<sqlx::Postgres>>::decode(value)?;
        Ok(Self::parse(&s)?)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Encode<'_, sqlx::Postgres> for AcademicQualification {
    fn encode_by_ref(
        &self,
        buf: &mut sqlx::postgres::PgArgumentBuffer,
    ) -> Result<sqlx::encode::IsNull, sqlx::error::BoxDynError> {
        <&str as sqlx::Encode<sqlx::Postgres>>::encode_by_ref(&self.as_str(), buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_values() {
        assert_eq!(
            AcademicQualification::parse("secondary").unwrap(),
            AcademicQualification::Secondary
        );
        assert_eq!(
            AcademicQualification::parse("higher-secondary").unwrap(),
            AcademicQualification::HigherSecondary
        );
        assert_eq!(
            AcademicQualification::parse("graduate").unwrap(),
            AcademicQualification::Graduate
        );
        assert_eq!(
            AcademicQualification::parse("post-graduate").unwrap(),
            AcademicQualification::PostGraduate
        );
        assert_eq!(
            AcademicQualification::parse("other").unwrap(),
            AcademicQualification::Other
        );
    }

    #[test]
    fn test_parse_is_lenient_about_case_and_separators() {
        assert_eq!(
            AcademicQualification::parse("Post Graduate").unwrap(),
            AcademicQualification::PostGraduate
        );
        assert_eq!(
            AcademicQualification::parse("HIGHER_SECONDARY").unwrap(),
            AcademicQualification::HigherSecondary
        );
        assert_eq!(
            AcademicQualification::parse("  SSC ").unwrap(),
            AcademicQualification::Secondary
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = AcademicQualification::parse("doctorate").unwrap_err();
        assert!(err.to_string().contains("doctorate"));
    }

    #[test]
    fn test_roundtrip_through_canonical_form() {
        for q in [
            AcademicQualification::Secondary,
            AcademicQualification::HigherSecondary,
            AcademicQualification::Graduate,
            AcademicQualification::PostGraduate,
            AcademicQualification::Other,
        ] {
            assert_eq!(AcademicQualification::parse(q.as_str()).unwrap(), q);
        }
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        let json = serde_json::to_string(&AcademicQualification::PostGraduate).unwrap();
        assert_eq!(json, "\"post-graduate\"");
    }
}

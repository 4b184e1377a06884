use std::fmt;
use std::str::FromStr;

/// Fallback display name for a picked file that reports no name.
pub const FALLBACK_FILE_NAME: &str = "document.pdf";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadStatus {
    Ready,
    Uploaded,
}

impl UploadStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Ready => "Ready",
            Self::Uploaded => "Uploaded",
        }
    }
}

impl fmt::Display for UploadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown upload status `{0}`")]
pub struct UnknownStatus(pub String);

impl FromStr for UploadStatus {
    type Err = UnknownStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Ready" => Ok(Self::Ready),
            "Uploaded" => Ok(Self::Uploaded),
            other => Err(UnknownStatus(other.to_string())),
        }
    }
}

/// One user-added document. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRecord {
    pub id: String,
    pub file_name: String,
    pub uploaded_at: String,
    pub status: UploadStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_its_own_display() {
        for status in [UploadStatus::Ready, UploadStatus::Uploaded] {
            assert_eq!(status.to_string().parse::<UploadStatus>(), Ok(status));
        }
    }

    #[test]
    fn unknown_status_is_rejected() {
        let err = "Processing".parse::<UploadStatus>().unwrap_err();
        assert_eq!(err, UnknownStatus("Processing".to_string()));
        assert_eq!(err.to_string(), "unknown upload status `Processing`");
    }
}

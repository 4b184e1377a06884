use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use super::models::{UploadRecord, UploadStatus};
use crate::components::Route;

const MISSING_VALUE: &str = "—";

/// Free text carried in a route query argument.
///
/// The router percent-decodes the whole query before splitting it on `&`, so
/// the written form is encoded twice and parsing undoes one layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryText(String);

impl QueryText {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for QueryText {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for QueryText {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for QueryText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let once = urlencoding::encode(&self.0);
        f.write_str(&urlencoding::encode(&once))
    }
}

impl FromStr for QueryText {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let text = urlencoding::decode(raw)
            .map(Cow::into_owned)
            .unwrap_or_else(|_| raw.to_string());
        Ok(Self(text))
    }
}

/// Typed view of the details route's flat string parameters.
///
/// The router only carries strings; this is the one place that converts a
/// record into them and back, including the fallbacks for absent values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsParams {
    pub id: String,
    pub file_name: Option<String>,
    pub uploaded_at: Option<String>,
    pub status: Option<UploadStatus>,
}

impl DetailsParams {
    pub fn from_record(record: &UploadRecord) -> Self {
        Self {
            id: record.id.clone(),
            file_name: Some(record.file_name.clone()),
            uploaded_at: Some(record.uploaded_at.clone()),
            status: Some(record.status),
        }
    }

    /// Empty strings are read as absent. A status the app does not know is
    /// dropped rather than shown verbatim.
    pub fn from_route_fields(id: &str, file_name: &str, uploaded_at: &str, status: &str) -> Self {
        let status = non_empty(status).and_then(|raw| match raw.parse::<UploadStatus>() {
            Ok(status) => Some(status),
            Err(err) => {
                log::warn!("ignoring details route parameter: {err}");
                None
            }
        });

        Self {
            id: id.to_string(),
            file_name: non_empty(file_name),
            uploaded_at: non_empty(uploaded_at),
            status,
        }
    }

    pub fn into_route(self) -> Route {
        Route::Details {
            id: self.id,
            file_name: self.file_name.unwrap_or_default().into(),
            uploaded_at: self.uploaded_at.unwrap_or_default().into(),
            status: self
                .status
                .map(|status| status.to_string())
                .unwrap_or_default()
                .into(),
        }
    }

    pub fn title(&self) -> String {
        match &self.file_name {
            Some(name) => name.clone(),
            None => format!("File {}", self.id).trim().to_string(),
        }
    }

    pub fn uploaded_at_label(&self) -> String {
        self.uploaded_at
            .clone()
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }

    pub fn status_label(&self) -> String {
        self.status
            .map(|status| status.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string())
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> UploadRecord {
        UploadRecord {
            id: "1781000000000".to_string(),
            file_name: "Report.pdf".to_string(),
            uploaded_at: "6/9/2026, 10:13:20 AM".to_string(),
            status: UploadStatus::Ready,
        }
    }

    #[test]
    fn record_survives_the_route() {
        let params = DetailsParams::from_record(&record());
        let Route::Details {
            id,
            file_name,
            uploaded_at,
            status,
        } = params.clone().into_route()
        else {
            panic!("expected details route");
        };

        assert_eq!(status.as_str(), "Ready");
        let parsed = DetailsParams::from_route_fields(
            &id,
            file_name.as_str(),
            uploaded_at.as_str(),
            status.as_str(),
        );
        assert_eq!(parsed, params);
        assert_eq!(parsed.title(), "Report.pdf");
        assert_eq!(parsed.uploaded_at_label(), "6/9/2026, 10:13:20 AM");
        assert_eq!(parsed.status_label(), "Ready");
    }

    #[test]
    fn absent_fields_get_placeholders() {
        let params = DetailsParams::from_route_fields("7", "", "", "");
        assert_eq!(params.title(), "File 7");
        assert_eq!(params.uploaded_at_label(), "—");
        assert_eq!(params.status_label(), "—");

        let anonymous = DetailsParams::from_route_fields("", "", "", "");
        assert_eq!(anonymous.title(), "File");
    }

    #[test]
    fn unknown_status_is_dropped() {
        let params = DetailsParams::from_route_fields("7", "a.pdf", "", "Processing");
        assert_eq!(params.status, None);
        assert_eq!(params.status_label(), "—");
    }

    fn through_url(params: DetailsParams) -> DetailsParams {
        let url = params.into_route().to_string();
        let Ok(Route::Details {
            id,
            file_name,
            uploaded_at,
            status,
        }) = url.parse::<Route>()
        else {
            panic!("{url} did not parse back into a details route");
        };
        DetailsParams::from_route_fields(&id, file_name.as_str(), uploaded_at.as_str(), status.as_str())
    }

    #[test]
    fn reserved_characters_survive_the_url() {
        for name in [
            "A & B.pdf",
            "Q&A #2 = 100%?.pdf",
            "a=b&c=d.pdf",
            "50%25 off.pdf",
            "Ünïcödé 書.pdf",
            "plus+sign.pdf",
        ] {
            let params = DetailsParams {
                file_name: Some(name.to_string()),
                ..DetailsParams::from_record(&record())
            };
            let parsed = through_url(params.clone());
            assert_eq!(parsed, params, "file name {name:?}");
        }
    }

    #[test]
    fn timestamp_and_status_survive_the_url() {
        let params = DetailsParams::from_record(&record());
        let parsed = through_url(params.clone());
        assert_eq!(parsed.uploaded_at_label(), "6/9/2026, 10:13:20 AM");
        assert_eq!(parsed.status, Some(UploadStatus::Ready));
        assert_eq!(parsed, params);
    }

    #[test]
    fn absent_fields_survive_the_url() {
        let params = DetailsParams {
            id: "7".to_string(),
            file_name: None,
            uploaded_at: None,
            status: None,
        };
        let parsed = through_url(params.clone());
        assert_eq!(parsed, params);
        assert_eq!(parsed.title(), "File 7");
    }

    #[test]
    fn query_text_keeps_its_value_in_memory() {
        let text = QueryText::from("A & B.pdf");
        assert_eq!(text.as_str(), "A & B.pdf");
        assert_eq!(text.to_string(), "A%2520%2526%2520B.pdf");
        assert_eq!("A%20%26%20B.pdf".parse::<QueryText>(), Ok(text));
    }
}

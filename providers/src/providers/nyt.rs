use crate::ProviderError;
use crate::util::http_client;
use chrono::NaiveDate;
use crossnorm_core::Payload;

const API_BASE: &str = "https://www.nytimes.com/svc/crosswords/v6/puzzle";

/// Header carrying the subscriber session cookie.
pub const COOKIE_HEADER: &str = "nyt-s";

/// NYT crossword variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NytVariant {
    #[default]
    Daily,
    Mini,
}

impl NytVariant {
    fn path_segment(&self) -> &'static str {
        match self {
            NytVariant::Daily => "daily",
            NytVariant::Mini => "mini",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NytVariant::Daily => "NYT Daily",
            NytVariant::Mini => "NYT Mini",
        }
    }
}

/// Build the puzzle URL for a `YYYY-MM-DD` date.
pub fn puzzle_url(variant: NytVariant, date: &str) -> Result<String, ProviderError> {
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| ProviderError::InvalidDate(date.to_string()))?;

    Ok(format!(
        "{}/{}/{}.json",
        API_BASE,
        variant.path_segment(),
        date.format("%Y-%m-%d")
    ))
}

/// Download the puzzle payload for the given date.
///
/// ## Arguments
/// - `date` - Date string in "YYYY-MM-DD" format
/// - `cookie` - Value of a subscriber's `NYT-S` cookie
pub async fn download(
    variant: NytVariant,
    date: &str,
    cookie: &str,
) -> Result<Payload, ProviderError> {
    let text = download_raw(variant, date, cookie).await?;
    parse_response(&text)
}

/// Download the response body as received, without decoding it.
///
/// The API answers a date it has no puzzle for with an empty body, so an
/// empty body is rejected here. Both this and [`download`] go through this
/// check, and [`parse_response`] only decodes.
pub async fn download_raw(
    variant: NytVariant,
    date: &str,
    cookie: &str,
) -> Result<String, ProviderError> {
    let url = puzzle_url(variant, date)?;
    tracing::info!(%url, variant = variant.name(), "downloading puzzle");

    let res = http_client()
        .get(&url)
        .header(COOKIE_HEADER, cookie)
        .send()
        .await?;

    if !res.status().is_success() {
        return Err(ProviderError::Http {
            url,
            status: res.status(),
        });
    }

    require_body(res.text().await?, date)
}

fn require_body(text: String, date: &str) -> Result<String, ProviderError> {
    if text.trim().is_empty() {
        return Err(ProviderError::EmptyResponse(date.to_string()));
    }
    Ok(text)
}

/// Today's date (local time) in the format the API expects.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

/// Download today's puzzle.
pub async fn download_latest(variant: NytVariant, cookie: &str) -> Result<Payload, ProviderError> {
    download(variant, &today(), cookie).await
}

/// Decode a response body into a payload.
pub fn parse_response(text: &str) -> Result<Payload, ProviderError> {
    Ok(serde_json::from_str(text)?)
}

use crate::error::ExternalError;
use crossnorm_core::Payload;
use std::path::Path;

/// Read a provider payload saved as JSON.
///
/// Decoding goes through [`Payload::from_json_str`], so a file holding the
/// wrong shape fails as a structure error rather than a bare JSON error.
pub fn load_payload<P: AsRef<Path>>(path: P) -> Result<Payload, ExternalError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path)?;
    let payload = Payload::from_json_str(&text)?;
    tracing::debug!(path = %path.display(), "loaded payload");
    Ok(payload)
}

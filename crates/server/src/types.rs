use serde::Deserialize;

/// The body of `POST /moderate`.
///
/// `text` is optional at the type level so that a missing field can be answered
/// with the documented 400 body instead of a generic extractor rejection. The
/// default value stands in for a request that carried no JSON at all.
#[derive(Debug, Default, Deserialize)]
pub struct ModerateRequest {
    #[serde(default)]
    pub text: Option<String>,
}

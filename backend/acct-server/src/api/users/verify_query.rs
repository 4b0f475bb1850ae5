use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct VerifyQuery {
    #[serde(rename = "certificationCode")]
    pub certification_code: Option<String>,
}

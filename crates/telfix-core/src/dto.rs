use serde::{Deserialize, Serialize};

/// One flagged field as produced by the upstream validation stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRecordDto {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedRecordDto {
    #[serde(flatten)]
    pub record: FieldRecordDto,
    pub old_html: Option<String>,
    pub new_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_key_html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_key_html: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportOutputDto {
    pub generated_at: i64,
    pub locale: Option<String>,
    pub entries: Vec<RenderedRecordDto>,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AgreementType {
    Maskiner,
    Bastu,
}

impl AgreementType {
    pub fn label(&self) -> &str {
        match self {
            AgreementType::Maskiner => "Maskiner",
            AgreementType::Bastu => "Bastu & Event",
        }
    }
}

/// Rental agreement document. The uploaded file itself lives outside this
/// service; only its name is kept.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Agreement {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: AgreementType,
    pub file_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AgreementUpload {
    #[serde(rename = "type")]
    pub kind: AgreementType,
    pub file_name: String,
}

pub fn default_agreements() -> Vec<Agreement> {
    vec![
        Agreement {
            id: "1".to_string(),
            title: "Standardavtal maskinuthyrning".to_string(),
            kind: AgreementType::Maskiner,
            file_name: None,
        },
        Agreement {
            id: "2".to_string(),
            title: "Avtal bastuuthyrning".to_string(),
            kind: AgreementType::Bastu,
            file_name: None,
        },
    ]
}

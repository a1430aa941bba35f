use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ContainerSummary {
    pub id: String,
    pub image: String,
    #[serde(default)]
    pub names: Vec<String>,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub state: String,
}

impl ContainerSummary {
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(12)
            .map_or(self.id.len(), |(idx, _)| idx);
        &self.id[..end]
    }

    pub fn display_names(&self) -> String {
        self.names
            .iter()
            .map(|name| name.trim_start_matches('/'))
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct ServerVersion {
    #[serde(rename = "Version")]
    pub version: String,
    #[serde(rename = "ApiVersion", default)]
    pub api_version: String,
    #[serde(rename = "Os", default)]
    pub os: String,
    #[serde(rename = "Arch", default)]
    pub arch: String,
}

/// Authenticated user state persisted by `flyaway login`
#[derive(serde::Deserialize, Debug, Clone)]
pub struct SessionData {
    /// Bearer token sent with every API call
    #[serde(alias = "accessToken")]
    pub access_token: String,
    /// Saved locations, in the order the user registered them
    #[serde(default)]
    pub locations: Vec<Location>,
}

/// A location saved in the user's account
#[derive(serde::Deserialize, Debug, Clone)]
pub struct Location {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

use serde::Deserialize;

/// Fields posted by the contact page.
#[derive(Debug, Default, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub msg: String,
}

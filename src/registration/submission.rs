use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::error::RegistrationError;

/// The registration form exactly as it was posted.
///
/// Every field is optional here; presence is checked when converting into a
/// [`Submission`]. Extra form keys (like the submit button's `_action`) are ignored.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSubmission {
    /// Organization the player belongs to
    pub org: Option<String>,
    /// Character name
    pub name: Option<String>,
    /// In-game ID, numeric but kept as text
    pub id: Option<String>,
    /// Character phone number
    pub phone: Option<String>,
}

impl FromIterator<(String, String)> for RawSubmission {
    /// Build from decoded form pairs. The first occurrence of a key wins, later
    /// repeats and unknown keys are dropped.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut raw = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "org" => &mut raw.org,
                "name" => &mut raw.name,
                "id" => &mut raw.id,
                "phone" => &mut raw.phone,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        raw
    }
}

/// A registration with all four fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub organization: String,
    pub name: String,
    pub id: String,
    pub phone: String,
}

// Empty strings count as missing, surrounding whitespace is left alone.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl TryFrom<RawSubmission> for Submission {
    type Error = RegistrationError;

    fn try_from(raw: RawSubmission) -> Result<Self, Self::Error> {
        let org = present(raw.org);
        let name = present(raw.name);
        let id = present(raw.id);
        let phone = present(raw.phone);

        match (org, name, id, phone) {
            (Some(organization), Some(name), Some(id), Some(phone)) => Ok(Self {
                organization,
                name,
                id,
                phone,
            }),
            (org, name, id, phone) => {
                let missing = [
                    ("org", org.is_none()),
                    ("name", name.is_none()),
                    ("id", id.is_none()),
                    ("phone", phone.is_none()),
                ]
                .into_iter()
                .filter_map(|(field, is_missing)| is_missing.then_some(field))
                .collect();

                Err(RegistrationError::ValidationFailed { missing })
            }
        }
    }
}

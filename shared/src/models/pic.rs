//! PIC (person in charge) Model

use serde::{Deserialize, Serialize};

/// A salesperson record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pic {
    pub id: i64,
    pub name: String,
}

/// Reference to a PIC on a sale row.
///
/// The source data is polymorphic: usually a numeric id into the PIC table,
/// but free text when the transaction was entered without a matching
/// salesperson. JSON numbers deserialize as [`PicRef::Id`], strings as
/// [`PicRef::Label`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PicRef {
    Id(i64),
    Label(String),
}

impl PicRef {
    /// Parse a raw CSV cell: digit-only values become ids, anything else a label.
    pub fn from_raw(raw: &str) -> Self {
        match raw.trim().parse::<i64>() {
            Ok(id) => PicRef::Id(id),
            Err(_) => PicRef::Label(raw.trim().to_string()),
        }
    }

    /// The id to look up in the PIC table, if this reference carries one.
    pub fn id(&self) -> Option<i64> {
        match self {
            PicRef::Id(id) => Some(*id),
            PicRef::Label(_) => None,
        }
    }
}

impl std::fmt::Display for PicRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PicRef::Id(id) => write!(f, "{}", id),
            PicRef::Label(label) => write!(f, "{}", label),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_raw_numeric() {
        assert_eq!(PicRef::from_raw("121"), PicRef::Id(121));
    }

    #[test]
    fn test_from_raw_label() {
        assert_eq!(PicRef::from_raw("Raka"), PicRef::Label("Raka".to_string()));
    }

    #[test]
    fn test_untagged_serde() {
        let id: PicRef = serde_json::from_str("3").unwrap();
        assert_eq!(id, PicRef::Id(3));
        let label: PicRef = serde_json::from_str("\"Raka\"").unwrap();
        assert_eq!(label, PicRef::Label("Raka".to_string()));
    }

    #[test]
    fn test_display_falls_back_to_raw_value() {
        assert_eq!(PicRef::Id(121).to_string(), "121");
        assert_eq!(PicRef::Label("Raka".into()).to_string(), "Raka");
    }
}

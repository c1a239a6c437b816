use serde::{Deserialize, Serialize};

use crate::errors::TranslatorError;

/// Product type as exposed over the message channel. Encoded as its enum index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum PlatformProductType {
    Inapp,
    Subs,
}

impl From<PlatformProductType> for i64 {
    fn from(value: PlatformProductType) -> Self {
        match value {
            PlatformProductType::Inapp => 0,
            PlatformProductType::Subs => 1,
        }
    }
}

impl TryFrom<i64> for PlatformProductType {
    type Error = TranslatorError;

    fn try_from(index: i64) -> Result<Self, Self::Error> {
        match index {
            0 => Ok(PlatformProductType::Inapp),
            1 => Ok(PlatformProductType::Subs),
            other => Err(TranslatorError::UnknownProductType(other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_round_trip() {
        for t in [PlatformProductType::Inapp, PlatformProductType::Subs] {
            assert_eq!(PlatformProductType::try_from(i64::from(t)), Ok(t));
        }
    }

    #[test]
    fn unknown_index_is_rejected() {
        let err = PlatformProductType::try_from(7).unwrap_err();
        assert_eq!(err.code(), "UNKNOWN_TYPE");
        assert_eq!(err.to_string(), "Unknown product type: 7");
    }

    #[test]
    fn unknown_index_fails_deserialization() {
        let err = serde_json::from_str::<PlatformProductType>("2").unwrap_err();
        assert!(err.to_string().contains("Unknown product type: 2"));
    }
}

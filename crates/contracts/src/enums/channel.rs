use serde::{Deserialize, Serialize};

/// Tracked marketing channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Channel {
    LinkedIn,
    YouTube,
    Website,
}

impl Channel {
    /// Channel code used in API paths and config keys
    pub fn code(&self) -> &'static str {
        match self {
            Channel::LinkedIn => "linkedin",
            Channel::YouTube => "youtube",
            Channel::Website => "website",
        }
    }

    /// Human-readable name for the UI
    pub fn display_name(&self) -> &'static str {
        match self {
            Channel::LinkedIn => "LinkedIn",
            Channel::YouTube => "YouTube",
            Channel::Website => "Website",
        }
    }

    /// All channels in the fixed dashboard order
    pub fn all() -> [Channel; 3] {
        [Channel::LinkedIn, Channel::YouTube, Channel::Website]
    }

    /// Parse from the API path code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "linkedin" => Some(Channel::LinkedIn),
            "youtube" => Some(Channel::YouTube),
            "website" => Some(Channel::Website),
            _ => None,
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip() {
        for channel in Channel::all() {
            assert_eq!(Channel::from_code(channel.code()), Some(channel));
        }
        assert_eq!(Channel::from_code("twitter"), None);
    }
}

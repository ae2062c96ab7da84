use serde::Serialize;

/// One access point as reported by a single block of a radio scan.
///
/// `bssid` is kept exactly as captured; no case or separator normalisation happens
/// anywhere in the pipeline. An empty `ssid` is a hidden network, not a missing value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessPoint {
    pub bssid: String,
    pub ssid: String,
    pub last_seen: Option<String>,
    pub frequency: Option<u32>,
}

impl AccessPoint {
    pub fn new(bssid: impl Into<String>) -> Self {
        Self {
            bssid: bssid.into(),
            ssid: String::new(),
            last_seen: None,
            frequency: None,
        }
    }

    pub fn with_ssid(mut self, ssid: impl Into<String>) -> Self {
        self.ssid = ssid.into();
        self
    }

    pub fn is_hidden(&self) -> bool {
        self.ssid.is_empty()
    }
}

use serde::{Deserialize, Serialize};

/// Knobs of the generated Java code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmitterConfig {
    /// Pause before every generated action, in milliseconds
    pub settle_delay_ms: u64,

    /// `WebDriverWait` timeout of the base class, in seconds
    pub wait_timeout_secs: u64,

    /// Remote WebDriver endpoint used by the test harness
    pub remote_driver_url: String,

    /// `@Tag` put on every generated test method
    pub test_tag: String,

    /// Package of the test harness; defaults to the project package
    pub test_package: Option<String>,

    /// Name in the copyright line; defaults to the project author, then the
    /// project name
    pub copyright_holder: Option<String>,
}

impl Default for EmitterConfig {
    fn default() -> Self {
        Self {
            settle_delay_ms: 600,
            wait_timeout_secs: 6,
            remote_driver_url: "http://127.0.0.1:9515".to_string(),
            test_tag: "SmokeTest".to_string(),
            test_package: None,
            copyright_holder: None,
        }
    }
}

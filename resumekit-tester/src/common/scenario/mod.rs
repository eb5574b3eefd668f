use anyhow::Result;
use thirtyfour::prelude::*;

use crate::browser::TestBridge;
use crate::common::util::test_url;

pub mod catalog;
pub mod profile;
pub mod signup;
pub mod smoke;
pub mod theme;

#[derive(Debug, Clone)]
pub struct ScenarioCtx<'a> {
    pub base_url: String,
    pub signup_path: String,
    pub profile_path: String,
    pub bridge: TestBridge<'a>,
    pub verbose: bool,
}

impl ScenarioCtx<'_> {
    pub fn page(&self, path: &str) -> String {
        test_url(&self.base_url, path)
    }
}

/// A core-level check, run once per iteration with the iteration index
pub type LogicCheck = fn(usize) -> Result<()>;

// Logic test scenario
#[derive(Debug, Clone)]
pub struct TestScenario {
    pub name: String,
    pub check: LogicCheck,
}

impl TestScenario {
    #[must_use]
    pub fn new(name: impl Into<String>, check: LogicCheck) -> Self {
        Self {
            name: name.into(),
            check,
        }
    }
}

// Browser test scenario
#[async_trait::async_trait]
pub trait BrowserScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()>;

    /// False when the scenario only checks the core crate
    fn has_browser_run(&self) -> bool {
        true
    }
}

// Combined scenario that can run both logic and browser tests
pub trait CombinedScenario: BrowserScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario>;
}

/// Scenario exercised only against the core crate
#[derive(Clone)]
pub struct LogicOnlyScenario {
    name: &'static str,
    check: LogicCheck,
}

impl LogicOnlyScenario {
    pub const fn new(name: &'static str, check: LogicCheck) -> Self {
        Self { name, check }
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }
}

#[async_trait::async_trait]
impl BrowserScenario for LogicOnlyScenario {
    async fn run_browser(&self, _driver: &WebDriver, _ctx: &ScenarioCtx<'_>) -> Result<()> {
        anyhow::bail!("{} has no browser run; use --mode logic", self.name)
    }

    fn has_browser_run(&self) -> bool {
        false
    }
}

impl CombinedScenario for LogicOnlyScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new(self.name, self.check))
    }
}

/// Every scenario key, in the order `all` expands to
pub const SCENARIO_KEYS: [&str; 7] = [
    "smoke",
    "theme-rotation",
    "signup-rules",
    "profile-edit",
    "password-reveal",
    "picture-preview",
    "site-config",
];

pub fn get_scenario(name: &str) -> Option<Box<dyn CombinedScenario + Send + Sync>> {
    match name.to_lowercase().as_str() {
        "smoke" => Some(Box::new(smoke::SmokeScenario)),
        "theme-rotation" | "theme" => Some(Box::new(theme::ThemeRotationScenario)),
        "signup-rules" | "signup" => Some(Box::new(signup::SignupRulesScenario)),
        "profile-edit" | "profile" => Some(Box::new(profile::ProfileEditScenario)),
        "password-reveal" | "reveal" => catalog::find_catalog_scenario("Password Reveal Sessions")
            .map(|scenario| Box::new(scenario) as _),
        "picture-preview" | "preview" => catalog::find_catalog_scenario("Picture Preview Tokens")
            .map(|scenario| Box::new(scenario) as _),
        "site-config" | "config" => catalog::find_catalog_scenario("Site Config Overrides")
            .map(|scenario| Box::new(scenario) as _),
        _ => None,
    }
}

pub fn list_scenarios() -> Vec<(&'static str, &'static str)> {
    vec![
        ("smoke", "Smoke Test"),
        ("theme-rotation", "Theme Rotation and Persistence"),
        ("signup-rules", "Signup Validation Rules"),
        ("profile-edit", "Profile Edit Toggle"),
        ("password-reveal", "Password Reveal Sessions"),
        ("picture-preview", "Picture Preview Tokens"),
        ("site-config", "Site Config Overrides"),
    ]
}

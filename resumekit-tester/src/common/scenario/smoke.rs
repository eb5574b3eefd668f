use anyhow::Result;
use resumekit_core::{PASSWORD_RULES, SiteConfig, THEMES, Theme};
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct SmokeScenario;

fn smoke_check(_iteration: usize) -> Result<()> {
    SiteConfig::default().validate()?;
    anyhow::ensure!(THEMES.len() == 3, "three themes expected");
    anyhow::ensure!(
        THEMES[0] == Theme::default(),
        "rotation must start at the default theme"
    );
    anyhow::ensure!(PASSWORD_RULES.len() == 5, "five password rules expected");
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SmokeScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.page("/")).await?;
        ctx.bridge.ensure_available().await?;

        let state = ctx.bridge.state().await?;
        if ctx.verbose {
            println!("  📊 Landing state: {state:?}");
        }
        let theme = state
            .theme
            .ok_or_else(|| anyhow::anyhow!("root element has no data-theme"))?;
        theme.parse::<Theme>()?;
        Ok(())
    }
}

impl CombinedScenario for SmokeScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Smoke Test", smoke_check))
    }
}

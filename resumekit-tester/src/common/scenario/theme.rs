use anyhow::{Context, Result};
use resumekit_core::{MemoryStore, THEME_KEY, THEMES, Theme, ThemeController};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct ThemeRotationScenario;

fn rotation_check(iteration: usize) -> Result<()> {
    let toggles = iteration + 1;
    for start in THEMES {
        let mut controller =
            ThemeController::new(MemoryStore::with_entry(THEME_KEY, start.as_str()));
        anyhow::ensure!(controller.init_theme() == start, "saved {start} not restored");
        for _ in 0..toggles {
            controller.toggle_theme();
        }
        let expected = THEMES[(start.index() + toggles) % THEMES.len()];
        anyhow::ensure!(
            controller.current() == expected,
            "{toggles} toggles from {start} gave {}, expected {expected}",
            controller.current()
        );
        anyhow::ensure!(
            controller.store().peek(THEME_KEY) == Some(expected.as_str()),
            "persisted theme out of sync after {toggles} toggles from {start}"
        );
    }

    let mut fresh = ThemeController::new(MemoryStore::with_entry(THEME_KEY, "sepia"));
    anyhow::ensure!(
        fresh.init_theme() == Theme::Light,
        "unknown saved theme must fall back to light"
    );
    Ok(())
}

async fn current_theme(ctx: &ScenarioCtx<'_>) -> Result<Theme> {
    let state = ctx.bridge.state().await?;
    let value = state.theme.context("root element has no data-theme")?;
    Ok(value.parse()?)
}

#[async_trait::async_trait]
impl BrowserScenario for ThemeRotationScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.page("/")).await?;
        ctx.bridge.ensure_available().await?;

        let start = current_theme(ctx).await?;
        let button = driver.find(By::Id("themeToggle")).await?;
        let mut expected = start;
        for _ in 0..THEMES.len() + 1 {
            button.click().await?;
            expected = expected.next();
            let seen = current_theme(ctx).await?;
            anyhow::ensure!(seen == expected, "theme {seen} after click, expected {expected}");
            if ctx.verbose {
                println!("  🎨 Theme now {seen}");
            }
        }

        driver.refresh().await?;
        ctx.bridge.ensure_available().await?;
        let restored = ctx
            .bridge
            .wait_for(Duration::from_secs(2), |state| state.theme.is_some())
            .await?;
        anyhow::ensure!(
            restored.theme.as_deref() == Some(expected.as_str()),
            "reload restored {:?}, expected {expected}",
            restored.theme
        );
        Ok(())
    }
}

impl CombinedScenario for ThemeRotationScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Theme Rotation and Persistence", rotation_check))
    }
}

use anyhow::Result;
use resumekit_core::{EditMode, FieldAccess, FormEditToggle, is_toggled_field};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct ProfileEditScenario;

/// Click pattern taken from the bits of `iteration`: set bits press edit,
/// clear bits press save.
fn edit_check(iteration: usize) -> Result<()> {
    let mut toggle = FormEditToggle::new();
    anyhow::ensure!(toggle.mode() == EditMode::ReadOnly, "form must start read-only");

    for bit in 0..8 {
        let press_edit = (iteration >> bit) & 1 == 1;
        let before = toggle.mode();
        let applied = if press_edit { toggle.edit() } else { toggle.save() };
        let expected_change = (press_edit && before == EditMode::ReadOnly)
            || (!press_edit && before == EditMode::Editable);
        anyhow::ensure!(
            applied.is_some() == expected_change,
            "click {bit} ({}) from {before:?} changed state unexpectedly",
            if press_edit { "edit" } else { "save" }
        );
        let access = toggle.access();
        anyhow::ensure!(
            access == FieldAccess::for_mode(toggle.mode()),
            "partial state after click {bit}: {access:?}"
        );
        anyhow::ensure!(
            access.edit_disabled != access.save_disabled,
            "edit and save must never share a state"
        );
    }

    anyhow::ensure!(
        !is_toggled_field("profileUpload", "profileUpload"),
        "upload field must stay outside the toggle"
    );
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for ProfileEditScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        driver.goto(&ctx.page(&ctx.profile_path)).await?;
        ctx.bridge.ensure_available().await?;

        let initial = ctx.bridge.state().await?;
        anyhow::ensure!(
            initial.editable == Some(false),
            "profile form should load read-only, bridge says {:?}",
            initial.editable
        );

        driver.find(By::Id("edit-btn")).await?.click().await?;
        ctx.bridge
            .wait_for(Duration::from_secs(1), |state| state.editable == Some(true))
            .await?;
        let upload = driver.find(By::Id("profileUpload")).await?;
        anyhow::ensure!(
            upload.attr("disabled").await?.is_none(),
            "upload field must stay enabled"
        );

        let popups_before = ctx.bridge.state().await?.popups;
        driver.find(By::Id("save-btn")).await?.click().await?;
        let saved = ctx
            .bridge
            .wait_for(Duration::from_secs(1), |state| state.editable == Some(false))
            .await?;
        anyhow::ensure!(
            saved.popups > popups_before,
            "save should confirm with a popup"
        );
        if ctx.verbose {
            println!("  ✏️  Edit and save round trip ok: {saved:?}");
        }
        Ok(())
    }
}

impl CombinedScenario for ProfileEditScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Profile Edit Toggle", edit_check))
    }
}

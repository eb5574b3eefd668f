use anyhow::Result;
use resumekit_core::{SignupFields, validate_signup};
use std::time::Duration;
use thirtyfour::prelude::*;

use super::{BrowserScenario, CombinedScenario, ScenarioCtx, TestScenario};

pub struct SignupRulesScenario;

/// (name, email, password, confirm, expected popup)
const CASES: [(&str, &str, &str, &str, Option<&str>); 9] = [
    ("Ann", "a@b.c", "Abcdef1!", "Abcdef1!", None),
    (
        "Al",
        "",
        "",
        "x",
        Some("Name should contain minimum of 3 characters"),
    ),
    (
        "Ann",
        "a@b",
        "Abcdef1!",
        "Abcdef1!",
        Some("Email should contain minimum of 4 characters"),
    ),
    (
        "Ann",
        "a@b.c",
        "Ab1!",
        "Ab1!",
        Some("Password should contain minimum of 7 characters"),
    ),
    (
        "Ann",
        "a@b.c",
        "abcdef1!",
        "abcdef1!",
        Some("Password needs an uppercase letter"),
    ),
    (
        "Ann",
        "a@b.c",
        "ABCDEF1!",
        "ABCDEF1!",
        Some("Password needs a lowercase letter"),
    ),
    (
        "Ann",
        "a@b.c",
        "Abcdefg!",
        "Abcdefg!",
        Some("Password needs a digit"),
    ),
    (
        "Ann",
        "a@b.c",
        "Abcdefg1",
        "Abcdefg1",
        Some("Password needs a special character"),
    ),
    (
        "Ann",
        "a@b.c",
        "Abcdef1!",
        "Abcdef1?",
        Some("Passwords must match"),
    ),
];

fn rules_check(_iteration: usize) -> Result<()> {
    for (name, email, password, confirm, expected) in CASES {
        let fields = SignupFields {
            name,
            email,
            password,
            confirm,
        };
        let got = validate_signup(&fields).err().map(|failure| failure.message());
        anyhow::ensure!(
            got == expected,
            "signup ({name:?}, {email:?}, {password:?}) reported {got:?}, expected {expected:?}"
        );
    }
    Ok(())
}

async fn fill(driver: &WebDriver, id: &str, value: &str) -> Result<()> {
    let field = driver.find(By::Id(id)).await?;
    field.clear().await?;
    field.send_keys(value).await?;
    Ok(())
}

#[async_trait::async_trait]
impl BrowserScenario for SignupRulesScenario {
    async fn run_browser(&self, driver: &WebDriver, ctx: &ScenarioCtx<'_>) -> Result<()> {
        let url = ctx.page(&ctx.signup_path);
        driver.goto(&url).await?;
        ctx.bridge.ensure_available().await?;

        fill(driver, "name", "Ann").await?;
        fill(driver, "email", "a@b.c").await?;
        fill(driver, "password1", "abcdef1!").await?;
        fill(driver, "password2", "abcdef1!").await?;

        let before = ctx.bridge.state().await?.popups;
        ctx.bridge.request_submit("signup-form").await?;
        let after = ctx
            .bridge
            .wait_for(Duration::from_secs(1), |state| state.popups > before)
            .await?;
        anyhow::ensure!(
            after.popups == before + 1,
            "expected exactly one popup, saw {}",
            after.popups - before
        );

        let popup = driver.find(By::ClassName("flash-popup")).await?;
        let text = popup.text().await?;
        anyhow::ensure!(
            text == "Password needs an uppercase letter",
            "unexpected popup text {text:?}"
        );

        let current = driver.current_url().await?;
        anyhow::ensure!(
            current.path().ends_with(ctx.signup_path.trim_end_matches('/')),
            "rejected signup navigated away to {current}"
        );
        if ctx.verbose {
            println!("  📝 Weak password rejected with: {text}");
        }
        Ok(())
    }
}

impl CombinedScenario for SignupRulesScenario {
    fn as_logic_scenario(&self) -> Option<TestScenario> {
        Some(TestScenario::new("Signup Validation Rules", rules_check))
    }
}

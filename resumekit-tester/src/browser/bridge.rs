use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use thirtyfour::prelude::*;

/// Global the web crate installs when a page is opened with `?test=1`
pub const BRIDGE_GLOBAL: &str = "__resumekitTest";

/// What `window.__resumekitTest.state()` reports
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct PageState {
    pub theme: Option<String>,
    pub popups: u32,
    pub editable: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct TestBridge<'a> {
    driver: &'a WebDriver,
}

impl<'a> TestBridge<'a> {
    pub const fn new(driver: &'a WebDriver) -> Self {
        Self { driver }
    }

    pub async fn ensure_available(&self) -> Result<()> {
        let result = self
            .driver
            .execute(&format!("return !!window.{BRIDGE_GLOBAL}"), vec![])
            .await?;
        if !result.json().as_bool().unwrap_or(false) {
            bail!("{BRIDGE_GLOBAL} is not available. Did you pass ?test=1 and load the wasm bundle?");
        }
        Ok(())
    }

    pub async fn state(&self) -> Result<PageState> {
        let result = self
            .driver
            .execute(&format!("return window.{BRIDGE_GLOBAL}.state()"), vec![])
            .await?;
        serde_json::from_value(result.json().clone()).context("parsing PageState")
    }

    /// Poll `state()` until `check` holds or `timeout` elapses.
    pub async fn wait_for<F>(&self, timeout: Duration, mut check: F) -> Result<PageState>
    where
        F: FnMut(&PageState) -> bool + Send,
    {
        let step = Duration::from_millis(50);
        let mut waited = Duration::ZERO;
        loop {
            let state = self.state().await?;
            if check(&state) {
                return Ok(state);
            }
            if waited >= timeout {
                bail!("page state did not settle within {timeout:?}: {state:?}");
            }
            tokio::time::sleep(step).await;
            waited += step;
        }
    }

    /// Submit a form through the page so its submit listeners run.
    pub async fn request_submit(&self, form_id: &str) -> Result<()> {
        self.driver
            .execute(
                "document.getElementById(arguments[0]).requestSubmit()",
                vec![form_id.into()],
            )
            .await?;
        Ok(())
    }
}

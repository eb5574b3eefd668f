use anyhow::{Result, anyhow};
use resumekit_core::{
    ConfigError, PasswordReveal, PreviewTracker, RevealTransition, SiteConfig,
};

use super::LogicOnlyScenario;

pub fn catalog_scenarios() -> Vec<LogicOnlyScenario> {
    vec![
        LogicOnlyScenario::new("Password Reveal Sessions", reveal_sessions_check),
        LogicOnlyScenario::new("Picture Preview Tokens", preview_tokens_check),
        LogicOnlyScenario::new("Site Config Overrides", site_config_check),
    ]
}

pub fn find_catalog_scenario(name: &str) -> Option<LogicOnlyScenario> {
    catalog_scenarios()
        .into_iter()
        .find(|scenario| scenario.name() == name)
}

/// `iteration + 1` rapid clicks, then every scheduled timer fires late.
fn reveal_sessions_check(iteration: usize) -> Result<()> {
    let clicks = iteration + 1;
    let mut reveal = PasswordReveal::new();
    let mut scheduled = Vec::new();
    for _ in 0..clicks {
        if let RevealTransition::Revealed(session) = reveal.toggle() {
            scheduled.push(session);
        }
    }

    let Some((&latest, stale)) = scheduled.split_last() else {
        return Err(anyhow!("first click must reveal"));
    };
    let unmasked = clicks % 2 == 1;
    anyhow::ensure!(
        reveal.is_masked() != unmasked,
        "{clicks} clicks left the field in {:?}",
        reveal.state()
    );

    for &session in stale {
        anyhow::ensure!(
            !reveal.timer_fired(session),
            "stale timer {} flipped the field",
            session.id()
        );
    }
    anyhow::ensure!(
        reveal.timer_fired(latest) == unmasked,
        "latest timer handling wrong after {clicks} clicks"
    );
    anyhow::ensure!(reveal.is_masked(), "field must end masked");
    Ok(())
}

/// `iteration + 2` selections completing newest-first; only the newest shows.
fn preview_tokens_check(iteration: usize) -> Result<()> {
    let mut tracker = PreviewTracker::new();
    let tokens: Vec<_> = (0..iteration + 2).map(|_| tracker.select()).collect();

    let mut shown = Vec::new();
    for token in tokens.iter().rev() {
        if tracker.complete(*token) {
            shown.push(token.value());
        }
    }
    let newest = tokens.last().map(|t| t.value());
    anyhow::ensure!(
        shown.len() == 1 && shown.first().copied() == newest,
        "expected only the newest selection to show, got {shown:?}"
    );

    let pending = tracker.select();
    tracker.reset();
    anyhow::ensure!(!tracker.complete(pending), "reset must void reads in flight");
    anyhow::ensure!(!tracker.has_preview(), "reset must clear the preview");
    Ok(())
}

fn site_config_check(_iteration: usize) -> Result<()> {
    let config = SiteConfig::from_json(r#"{ "delays": { "popup_ms": 1500 } }"#)?;
    anyhow::ensure!(config.delays.popup_ms == 1500, "override not applied");
    anyhow::ensure!(
        config.delays.reveal_ms == SiteConfig::default().delays.reveal_ms,
        "untouched delays must keep defaults"
    );

    match SiteConfig::from_json(r#"{ "delays": { "reveal_ms": 0 } }"#) {
        Err(ConfigError::ZeroDelay { .. }) => {}
        other => return Err(anyhow!("zero delay accepted: {other:?}")),
    }

    let fallback = SiteConfig::from_json_or_default(Some("{ not json"));
    anyhow::ensure!(fallback == SiteConfig::default(), "bad JSON must fall back");
    Ok(())
}

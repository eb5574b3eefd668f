use resumekit_core::SiteConfig;
use web_sys::Document;

/// Id of the optional `<script type="application/json">` override block
pub const CONFIG_ELEMENT_ID: &str = "resumekit-config";

/// Load the page configuration, falling back to defaults when the override
/// block is missing or invalid.
#[must_use]
pub fn load(doc: &Document) -> SiteConfig {
    let raw = doc
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    SiteConfig::from_json_or_default(raw.as_deref())
}

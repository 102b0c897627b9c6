use anyhow::Context;
use prism_core::BeamConfig;

/// Resolve the beam configuration from the optional JSON found on the canvas.
///
/// Anything unusable is logged and replaced by the defaults so the scene
/// always comes up.
pub fn beam_config_from_json(raw: Option<&str>) -> BeamConfig {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return BeamConfig::default();
    };
    match parse_beam_config(raw) {
        Ok(cfg) => {
            log::info!("[config] using beam overrides: {:?}", cfg);
            cfg
        }
        Err(e) => {
            log::warn!("[config] {:#}; falling back to defaults", e);
            BeamConfig::default()
        }
    }
}

pub fn parse_beam_config(raw: &str) -> anyhow::Result<BeamConfig> {
    let cfg: BeamConfig = serde_json::from_str(raw).context("beam config is not valid JSON")?;
    cfg.validate().context("beam config rejected")?;
    Ok(cfg)
}

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ConfigError;
use crate::types::PanelState;

const CSS_UNITS: &[&str] = &["px", "rem", "em", "%", "vh", "vw", "ch", "pt"];

/// Which side of the summary label the caret is drawn on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconPosition {
    #[default]
    Leading,
    Trailing,
}

impl FromStr for IconPosition {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "leading" => Ok(IconPosition::Leading),
            "trailing" => Ok(IconPosition::Trailing),
            _ => Err(ConfigError::UnknownIconPosition(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconStyle {
    pub position: IconPosition,
    /// Rotation applied to the caret while its panel is open.
    pub rotation_deg: u16,
}

impl Default for IconStyle {
    fn default() -> Self {
        Self {
            position: IconPosition::Leading,
            rotation_deg: 90,
        }
    }
}

impl IconStyle {
    pub fn leading(rotation_deg: u16) -> Self {
        Self {
            position: IconPosition::Leading,
            rotation_deg,
        }
    }

    pub fn trailing(rotation_deg: u16) -> Self {
        Self {
            position: IconPosition::Trailing,
            rotation_deg,
        }
    }

    /// CSS `transform` value for the caret in the given panel state.
    pub fn transform(&self, state: PanelState) -> String {
        let degrees = if state.is_open() { self.rotation_deg } else { 0 };
        format!("rotate({}deg)", degrees)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rotation_deg >= 360 {
            return Err(ConfigError::InvalidRotation(self.rotation_deg));
        }
        Ok(())
    }
}

/// Behaviour and presentation settings of one accordion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AccordionConfig {
    /// Opening one panel closes every other panel.
    pub exclusive_open: bool,
    /// CSS length between panels.
    pub gap: String,
    pub icon: IconStyle,
}

impl Default for AccordionConfig {
    fn default() -> Self {
        Self {
            exclusive_open: false,
            gap: "0".to_string(),
            icon: IconStyle::default(),
        }
    }
}

impl AccordionConfig {
    /// Default config with the one-open-at-a-time policy enabled.
    pub fn exclusive() -> Self {
        Self {
            exclusive_open: true,
            ..Self::default()
        }
    }

    pub fn with_exclusive_open(mut self, exclusive_open: bool) -> Self {
        self.exclusive_open = exclusive_open;
        self
    }

    pub fn with_gap(mut self, gap: impl Into<String>) -> Self {
        self.gap = gap.into();
        self
    }

    pub fn with_icon(mut self, icon: IconStyle) -> Self {
        self.icon = icon;
        self
    }

    /// Parses and validates a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_css_length(&self.gap)?;
        self.icon.validate()
    }
}

/// Accepts `0` or a non-negative number followed by a known CSS unit.
pub fn validate_css_length(value: &str) -> Result<(), ConfigError> {
    let value = value.trim();
    if value == "0" {
        return Ok(());
    }

    let split = value
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(value.len());
    let (number, unit) = value.split_at(split);

    let number_ok = !number.is_empty() && number.parse::<f64>().is_ok();
    if number_ok && CSS_UNITS.contains(&unit) {
        Ok(())
    } else {
        Err(ConfigError::InvalidLength(value.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = AccordionConfig::default();

        assert!(!config.exclusive_open);
        assert_eq!(config.gap, "0");
        assert_eq!(config.icon.position, IconPosition::Leading);
        assert_eq!(config.icon.rotation_deg, 90);
    }

    #[test]
    fn test_config_builders() {
        let config = AccordionConfig::exclusive()
            .with_gap("16px")
            .with_icon(IconStyle::trailing(180));

        assert!(config.exclusive_open);
        assert_eq!(config.gap, "16px");
        assert_eq!(config.icon, IconStyle::trailing(180));
        assert!(!config.with_exclusive_open(false).exclusive_open);
    }

    #[test]
    fn test_config_from_json() {
        let config = AccordionConfig::from_json(
            r#"{"exclusive_open": true, "gap": "8px", "icon": {"position": "trailing"}}"#,
        )
        .unwrap();

        assert!(config.exclusive_open);
        assert_eq!(config.gap, "8px");
        assert_eq!(config.icon.position, IconPosition::Trailing);
        assert_eq!(config.icon.rotation_deg, 90);
    }

    #[test]
    fn test_config_from_empty_json_uses_defaults() {
        let config = AccordionConfig::from_json("{}").unwrap();
        assert_eq!(config, AccordionConfig::default());
    }

    #[test]
    fn test_config_from_json_rejects_bad_input() {
        assert!(matches!(
            AccordionConfig::from_json("not json"),
            Err(ConfigError::Json(_))
        ));
        assert!(matches!(
            AccordionConfig::from_json(r#"{"gap": "wide"}"#),
            Err(ConfigError::InvalidLength(_))
        ));
        assert!(matches!(
            AccordionConfig::from_json(r#"{"icon": {"rotation_deg": 360}}"#),
            Err(ConfigError::InvalidRotation(360))
        ));
    }

    #[test]
    fn test_validate_css_length() {
        assert!(validate_css_length("0").is_ok());
        assert!(validate_css_length("8px").is_ok());
        assert!(validate_css_length("0.5rem").is_ok());
        assert!(validate_css_length("100%").is_ok());
        assert!(validate_css_length("").is_err());
        assert!(validate_css_length("px").is_err());
        assert!(validate_css_length("8").is_err());
        assert!(validate_css_length("8furlongs").is_err());
        assert!(validate_css_length("1.2.3px").is_err());
    }

    #[test]
    fn test_icon_position_from_str() {
        assert_eq!("leading".parse::<IconPosition>().unwrap(), IconPosition::Leading);
        assert_eq!("TRAILING".parse::<IconPosition>().unwrap(), IconPosition::Trailing);
        assert!(matches!(
            "above".parse::<IconPosition>(),
            Err(ConfigError::UnknownIconPosition(_))
        ));
    }

    #[test]
    fn test_icon_transform() {
        let icon = IconStyle::leading(90);
        assert_eq!(icon.transform(PanelState::Open), "rotate(90deg)");
        assert_eq!(icon.transform(PanelState::Closed), "rotate(0deg)");
        assert_eq!(
            IconStyle::trailing(180).transform(PanelState::Open),
            "rotate(180deg)"
        );
    }
}

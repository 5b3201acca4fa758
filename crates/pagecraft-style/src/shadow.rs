//! Shadow presets

use pagecraft_model::ShadowLevel;

/// Box shadow of a preset level tinted with an `r,g,b` triplet
pub fn shadow_value(level: ShadowLevel, rgb: &str) -> String {
	match level {
		ShadowLevel::None => "none".to_string(),
		ShadowLevel::Sm => format!("0 2px 8px rgba({},0.2)", rgb),
		ShadowLevel::Md => format!("0 4px 15px rgba({},0.3)", rgb),
		ShadowLevel::Lg => format!("0 8px 25px rgba({},0.35)", rgb),
		ShadowLevel::Xl => format!("0 12px 35px rgba({},0.4)", rgb),
	}
}

/// Hover shadow: the base table shifted up one level, saturating at `xl`
pub fn hover_shadow_value(level: ShadowLevel, rgb: &str) -> String {
	shadow_value(level.intensified(), rgb)
}

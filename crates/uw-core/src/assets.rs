use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle into the host's material table.
///
/// The simulation never resolves handles; it only reports which ones the
/// host should apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MaterialHandle(pub u32);

impl fmt::Display for MaterialHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mat#{}", self.0)
    }
}

/// Opaque handle to a scene object whose visibility the host controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeHandle(pub u32);

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node#{}", self.0)
    }
}

/// One complete material/activation set for the clock scene.
///
/// A preset is always applied as a whole: every hand material, the
/// backlight variant, and both light-object activation flags change
/// together on a toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LightingPreset {
    /// Material applied to the hour hand.
    pub hour_hand: MaterialHandle,
    /// Material applied to the minute hand.
    pub minute_hand: MaterialHandle,
    /// Material applied to the second hand.
    pub second_hand: MaterialHandle,
    /// Material applied to the dial backlight.
    pub backlight: MaterialHandle,
    /// Whether the spotlight object is active under this preset.
    pub spotlight_active: bool,
    /// Whether the ambient small-lights object is active under this preset.
    pub small_lights_active: bool,
}

/// The paired day and night presets the lighting toggle switches between.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PresetPair {
    /// Preset applied while the scene is lit for daytime.
    pub day: LightingPreset,
    /// Preset applied while the scene is dark.
    pub night: LightingPreset,
}

impl PresetPair {
    /// Select the preset for a lighting state (`true` = day).
    pub fn select(&self, lights_on: bool) -> &LightingPreset {
        if lights_on { &self.day } else { &self.night }
    }
}

impl Default for PresetPair {
    /// The stock asset-table layout: a lit material group plus active
    /// light objects for day, an unlit group with everything off for
    /// night.
    fn default() -> Self {
        Self {
            day: LightingPreset {
                hour_hand: MaterialHandle(7),
                minute_hand: MaterialHandle(1),
                second_hand: MaterialHandle(2),
                backlight: MaterialHandle(5),
                spotlight_active: true,
                small_lights_active: true,
            },
            night: LightingPreset {
                hour_hand: MaterialHandle(6),
                minute_hand: MaterialHandle(0),
                second_hand: MaterialHandle(3),
                backlight: MaterialHandle(4),
                spotlight_active: false,
                small_lights_active: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_maps_state_to_preset() {
        let pair = PresetPair::default();
        assert_eq!(pair.select(true), &pair.day);
        assert_eq!(pair.select(false), &pair.night);
    }

    #[test]
    fn default_presets_are_disjoint_material_groups() {
        let pair = PresetPair::default();
        let day = [
            pair.day.hour_hand,
            pair.day.minute_hand,
            pair.day.second_hand,
            pair.day.backlight,
        ];
        let night = [
            pair.night.hour_hand,
            pair.night.minute_hand,
            pair.night.second_hand,
            pair.night.backlight,
        ];
        for handle in day {
            assert!(!night.contains(&handle));
        }
    }

    #[test]
    fn default_day_preset_activates_lights() {
        let pair = PresetPair::default();
        assert!(pair.day.spotlight_active);
        assert!(pair.day.small_lights_active);
        assert!(!pair.night.spotlight_active);
        assert!(!pair.night.small_lights_active);
    }
}

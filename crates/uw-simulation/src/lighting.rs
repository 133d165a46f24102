use uw_core::assets::{LightingPreset, PresetPair};

/// Day/night lighting state and the preset pair it switches between.
///
/// `lights_on = true` selects the day preset. The flag changes only on
/// explicit triggers — a host toggle command or the one-shot startup
/// alignment — never as a continuous function of the sun angle.
#[derive(Debug, Clone)]
pub struct LightingState {
    lights_on: bool,
    presets: PresetPair,
}

impl LightingState {
    /// Create a lighting state with an initial flag value.
    pub fn new(presets: PresetPair, lights_on: bool) -> Self {
        Self { lights_on, presets }
    }

    /// Current day/night flag (`true` = day preset active).
    pub fn lights_on(&self) -> bool {
        self.lights_on
    }

    /// The complete material/activation set for the current state.
    pub fn active_preset(&self) -> &LightingPreset {
        self.presets.select(self.lights_on)
    }

    /// Flip the state and return the preset the host must now apply.
    /// The returned set is complete; it is never applied piecemeal.
    pub fn toggle(&mut self) -> &LightingPreset {
        self.lights_on = !self.lights_on;
        self.active_preset()
    }

    /// Align the state to a computed night flag. Returns `true` if the
    /// state had to flip. Used only by the startup check.
    pub fn align_to_night(&mut self, night: bool) -> bool {
        let want_on = !night;
        if self.lights_on == want_on {
            return false;
        }
        self.toggle();
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day_start() -> LightingState {
        LightingState::new(PresetPair::default(), true)
    }

    #[test]
    fn toggle_switches_preset() {
        let mut lighting = day_start();
        let pair = PresetPair::default();
        assert_eq!(lighting.active_preset(), &pair.day);
        assert_eq!(lighting.toggle(), &pair.night);
        assert!(!lighting.lights_on());
    }

    #[test]
    fn toggling_twice_restores_initial_configuration() {
        let mut lighting = day_start();
        let initial = *lighting.active_preset();
        lighting.toggle();
        lighting.toggle();
        assert_eq!(lighting.active_preset(), &initial);
        assert!(lighting.lights_on());
    }

    #[test]
    fn align_flips_only_on_mismatch() {
        let mut lighting = day_start();
        assert!(!lighting.align_to_night(false));
        assert!(lighting.lights_on());

        assert!(lighting.align_to_night(true));
        assert!(!lighting.lights_on());

        // Already night: nothing to do
        assert!(!lighting.align_to_night(true));
        assert!(!lighting.lights_on());
    }

    #[test]
    fn align_corrects_a_night_start_during_daytime() {
        let mut lighting = LightingState::new(PresetPair::default(), false);
        assert!(lighting.align_to_night(false));
        assert!(lighting.lights_on());
    }
}

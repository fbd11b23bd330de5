//! Cosmetic effect aging. Effects exist only for the presentation
//! boundary; expired ones are dropped in place.

use catlane_core::components::Effect;

/// Age all effects by `dt_ms` and drop those past their duration.
pub fn run(effects: &mut Vec<Effect>, dt_ms: f64) {
    for effect in effects.iter_mut() {
        effect.elapsed_ms += dt_ms;
    }
    effects.retain(|effect| !effect.is_expired());
}

use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::Config;

/// Flips to `true` shortly after mount so CSS width transitions on progress
/// bars play from zero.
#[hook]
pub fn use_animate_in() -> bool {
    let ready = use_state(|| false);

    {
        let ready = ready.clone();
        use_effect_with((), move |_| {
            let timeout = Timeout::new(Config::PROGRESS_ANIMATION_DELAY_MS, move || {
                ready.set(true);
            });
            move || drop(timeout)
        });
    }

    *ready
}

/// Width to render for a bar: zero until the animation has been triggered.
pub fn animated_width(percent: f64, ready: bool) -> String {
    let width = if ready { percent.clamp(0.0, 100.0) } else { 0.0 };
    format!("width: {width:.1}%;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_animated_width() {
        assert_eq!(animated_width(64.25, false), "width: 0.0%;");
        assert_eq!(animated_width(64.26, true), "width: 64.3%;");
        assert_eq!(animated_width(140.0, true), "width: 100.0%;");
    }
}

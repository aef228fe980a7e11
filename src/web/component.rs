use yew::prelude::*;

use crate::config::EffectsConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct PresentationEffectsProps {
    #[prop_or_default]
    pub config: Option<EffectsConfig>,
}

/// Drop into a yew-rendered page to wire the effects once it has mounted.
#[function_component(PresentationEffects)]
pub fn presentation_effects(props: &PresentationEffectsProps) -> Html {
    let config = props.config.clone().unwrap_or_default();
    use_effect_with_deps(
        move |_| {
            if let Err(e) = super::boot(config) {
                log::warn!("Page effects not installed: {}", e);
            }
            || ()
        },
        (),
    );

    html! {}
}

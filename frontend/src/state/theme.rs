use leptos::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_class(&self) -> &'static str {
        match self {
            Theme::Light => "",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Clone, Copy)]
pub struct ThemeState {
    theme: RwSignal<Theme>,
}

impl ThemeState {
    pub fn new() -> Self {
        Self {
            theme: create_rw_signal(Theme::default()),
        }
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
        self.apply_to_dom();
    }

    pub fn current(&self) -> Signal<Theme> {
        self.theme.into()
    }

    fn apply_to_dom(&self) {
        let Some(root) = crate::utils::window()
            .and_then(|w| w.document())
            .and_then(|d| d.document_element())
        else {
            return;
        };
        let dark = self.theme.get_untracked() == Theme::Dark;
        if let Err(err) = root.class_list().toggle_with_force("dark", dark) {
            log::warn!("failed to apply theme class: {:?}", err);
        }
    }
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_theme() -> ThemeState {
    match use_context::<ThemeState>() {
        Some(state) => state,
        None => {
            let state = ThemeState::new();
            provide_context(state);
            state
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn toggle_flips_between_light_and_dark() {
        with_runtime(|| {
            let state = use_theme();
            assert_eq!(state.current().get(), Theme::Light);
            state.toggle();
            assert_eq!(state.current().get(), Theme::Dark);
            state.toggle();
            assert_eq!(state.current().get(), Theme::Light);
        });
    }
}

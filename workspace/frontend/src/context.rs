use common::i18n::{Language, UiText};
use web_sys::window;
use yew::prelude::*;

const LANGUAGE_KEY: &str = "nregadarpan_language";

/// Global UI state passed down the component tree. Holds the selected
/// language; the selected district is page-level state on the dashboard.
#[derive(Clone, PartialEq)]
pub struct AppContext {
    pub language: Language,
    pub set_language: Callback<Language>,
}

impl AppContext {
    pub fn text(&self) -> &'static UiText {
        self.language.text()
    }

    pub fn toggle_language(&self) {
        self.set_language.emit(self.language.toggled());
    }
}

#[hook]
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppProvider must wrap the component tree")
}

fn stored_language() -> Language {
    let stored = window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(LANGUAGE_KEY).ok().flatten());

    match stored.as_deref() {
        Some("hi") => Language::Hindi,
        _ => Language::English,
    }
}

fn store_language(language: Language) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let tag = match language {
            Language::English => "en",
            Language::Hindi => "hi",
        };
        let _ = storage.set_item(LANGUAGE_KEY, tag);
    }
}

#[derive(Properties, PartialEq)]
pub struct AppProviderProps {
    pub children: Children,
}

#[function_component(AppProvider)]
pub fn app_provider(props: &AppProviderProps) -> Html {
    let language = use_state(stored_language);

    let set_language = {
        let language = language.clone();
        Callback::from(move |next: Language| {
            log::debug!("Switching language to {:?}", next);
            store_language(next);
            language.set(next);
        })
    };

    let context = AppContext {
        language: *language,
        set_language,
    };

    html! {
        <ContextProvider<AppContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AppContext>>
    }
}

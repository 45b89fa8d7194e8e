//! Thin DOM glue around the intro modal, greeting and wishes list.

use greeting_common::{format_wish, ElementIds};
use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlAudioElement, HtmlElement, HtmlInputElement, Window};

pub struct Page {
    window: Window,
    document: Document,
    ids: ElementIds,
}

impl Page {
    pub fn new(ids: ElementIds) -> Result<Self, JsValue> {
        let window = web_sys::window().ok_or("no global `window` exists")?;
        let document = window
            .document()
            .ok_or("should have a document on window")?;
        Ok(Self {
            window,
            document,
            ids,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn ids(&self) -> &ElementIds {
        &self.ids
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    }

    pub fn name_input(&self) -> Option<HtmlInputElement> {
        self.document
            .get_element_by_id(&self.ids.name_input)
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
    }

    pub fn name_value(&self) -> String {
        self.name_input().map(|input| input.value()).unwrap_or_default()
    }

    pub fn focus_name_input(&self) {
        if let Some(input) = self.name_input() {
            let _ = input.focus();
        }
    }

    pub fn music_player(&self) -> Option<HtmlAudioElement> {
        self.document
            .get_element_by_id(&self.ids.music_player)
            .and_then(|el| el.dyn_into::<HtmlAudioElement>().ok())
    }

    /// Hide the name modal and reveal the main page.
    pub fn show_main(&self) -> Result<(), JsValue> {
        if let Some(modal) = self.html_element(&self.ids.name_modal) {
            modal.style().set_property("display", "none")?;
        }
        let main = self
            .html_element(&self.ids.main_page)
            .ok_or(format!("element '{}' not found", self.ids.main_page))?;
        main.style().set_property("display", "flex")
    }

    /// Whether the main page is currently displayed.
    pub fn main_visible(&self) -> bool {
        self.html_element(&self.ids.main_page)
            .map(|main| {
                main.style()
                    .get_property_value("display")
                    .map(|display| display != "none")
                    .unwrap_or(false)
            })
            .unwrap_or(false)
    }

    pub fn set_greeting(&self, text: &str) {
        if let Some(greeting) = self.html_element(&self.ids.greeting) {
            greeting.set_text_content(Some(text));
        }
    }

    /// Replace the wishes list with one paragraph per wish.
    pub fn render_wishes(&self, wishes: &[String]) -> Result<(), JsValue> {
        let Some(container) = self.document.get_element_by_id(&self.ids.wishes_container) else {
            return Ok(());
        };
        container.set_inner_html("");
        for wish in wishes {
            let p = self.document.create_element("p")?;
            p.set_text_content(Some(&format_wish(wish)));
            container.append_child(&p)?;
        }
        Ok(())
    }

    pub fn alert(&self, message: &str) {
        let _ = self.window.alert_with_message(message);
    }
}

//! Browser tests, run with `wasm-pack test --headless --chrome greeting-client`.

#![cfg(target_arch = "wasm32")]

use greeting_client::Celebration;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

const PAGE: &str = r#"
<div id="fireworks"></div>
<div id="nameModal">
  <input id="nameInput">
  <button id="submitBtn">Go</button>
</div>
<div id="mainPage" style="display: none">
  <h1 id="greeting"></h1>
  <div id="wishesContainer"></div>
</div>
"#;

fn mount() -> Document {
    let window = web_sys::window().unwrap();
    // alert() would block the headless runner
    js_sys::Reflect::set(&window, &"alert".into(), &js_sys::Function::new_no_args("")).unwrap();
    let document = window.document().unwrap();
    document.body().unwrap().set_inner_html(PAGE);
    document
}

fn display_of(document: &Document, id: &str) -> String {
    document
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
        .style()
        .get_property_value("display")
        .unwrap()
}

fn set_name(document: &Document, value: &str) {
    document
        .get_element_by_id("nameInput")
        .unwrap()
        .dyn_into::<HtmlInputElement>()
        .unwrap()
        .set_value(value);
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

fn wish_lines(document: &Document) -> Vec<String> {
    let container = document.get_element_by_id("wishesContainer").unwrap();
    let mut lines = Vec::new();
    let mut child = container.first_element_child();
    while let Some(el) = child {
        assert_eq!(el.tag_name(), "P");
        lines.push(el.text_content().unwrap_or_default());
        child = el.next_element_sibling();
    }
    lines
}

#[wasm_bindgen_test]
fn burst_starts_animation() {
    mount();
    let celebration = Celebration::new(JsValue::UNDEFINED).unwrap();
    assert!(!celebration.is_animating());
    celebration.burst_at(100.0, 100.0);
    assert_eq!(celebration.particle_count(), 30);
    assert!(celebration.is_animating());
}

#[wasm_bindgen_test]
fn celebrate_fires_five_bursts() {
    mount();
    let celebration = Celebration::new(JsValue::UNDEFINED).unwrap();
    celebration.celebrate();
    assert_eq!(celebration.particle_count(), 250);
}

#[wasm_bindgen_test]
fn blank_name_stays_on_intro() {
    let document = mount();
    let celebration = Celebration::new(JsValue::UNDEFINED).unwrap();
    set_name(&document, "   ");
    celebration.submit_name().unwrap();
    assert_eq!(display_of(&document, "mainPage"), "none");
    assert_ne!(display_of(&document, "nameModal"), "none");
    assert_eq!(celebration.particle_count(), 0);
}

#[wasm_bindgen_test]
fn name_reveals_main_page() {
    let document = mount();
    let celebration = Celebration::new(JsValue::UNDEFINED).unwrap();
    set_name(&document, "  Lan ");
    celebration.submit_name().unwrap();
    assert_eq!(display_of(&document, "mainPage"), "flex");
    assert_eq!(display_of(&document, "nameModal"), "none");
    let greeting = document
        .get_element_by_id("greeting")
        .unwrap()
        .text_content()
        .unwrap();
    assert!(!greeting.is_empty());
}

#[wasm_bindgen_test]
fn options_override_counts() {
    mount();
    let options = js_sys::JSON::parse(r#"{"pointerParticles": 5}"#).unwrap();
    let celebration = Celebration::new(options).unwrap();
    celebration.burst_at(1.0, 1.0);
    assert_eq!(celebration.particle_count(), 5);
}

#[wasm_bindgen_test]
async fn missing_wishes_file_shows_builtin_wishes() {
    let document = mount();
    let options = js_sys::JSON::parse(r#"{"wishesUrl": "does-not-exist.json"}"#).unwrap();
    let _celebration = Celebration::new(options).unwrap();

    let mut lines = wish_lines(&document);
    for _ in 0..100 {
        if !lines.is_empty() {
            break;
        }
        sleep(20).await;
        lines = wish_lines(&document);
    }
    assert_eq!(lines.len(), 3);
    assert!(lines.iter().all(|line| line.starts_with("✨ ")));
}

#[wasm_bindgen_test]
async fn staggered_show_stops_after_five_launches() {
    mount();
    let options = js_sys::JSON::parse(r#"{"staggerIntervalMs": 5}"#).unwrap();
    let celebration = Celebration::new(options).unwrap();
    celebration.auto_fireworks().unwrap();

    // every spark lives at least 34 frames, longer than both waits
    sleep(150).await;
    assert_eq!(celebration.particle_count(), 5 * 60);
    sleep(150).await;
    assert_eq!(celebration.particle_count(), 5 * 60);
}

#[wasm_bindgen_test]
fn dropped_controller_detaches_listeners() {
    let document = mount();
    let window = web_sys::window().unwrap();
    js_sys::Reflect::set(&window, &"listenerErrors".into(), &0.into()).unwrap();
    let onerror = js_sys::Function::new_no_args("window.listenerErrors += 1;");
    window.set_onerror(Some(&onerror));

    let celebration = Celebration::new(JsValue::UNDEFINED).unwrap();
    drop(celebration);
    // a freed callback would throw and be reported through onerror
    window
        .dispatch_event(&web_sys::Event::new("resize").unwrap())
        .unwrap();
    document
        .dispatch_event(&web_sys::Event::new("click").unwrap())
        .unwrap();
    window.set_onerror(None);

    let errors = js_sys::Reflect::get(&window, &"listenerErrors".into()).unwrap();
    assert_eq!(errors.as_f64(), Some(0.0));
}

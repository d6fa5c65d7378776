use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use gloo_timers::future::sleep;
use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

use campground::components::comment_form::CommentForm;

wasm_bindgen_test_configure!(run_in_browser);

type Recorded = Rc<RefCell<Vec<(i32, u8, String, String)>>>;

// Mounts a CommentForm into a fresh container and records every
// post_comment invocation.
fn mount_form(campsite_id: i32) -> (Recorded, web_sys::Element) {
    let document = web_sys::window().unwrap().document().unwrap();
    let container = document.create_element("div").unwrap();
    document.body().unwrap().append_child(&container).unwrap();

    let calls: Recorded = Rc::new(RefCell::new(Vec::new()));
    let recorder = calls.clone();
    let post_comment = Callback::new(move |args: (i32, u8, String, String)| {
        recorder.borrow_mut().push(args);
    });

    let parent: web_sys::HtmlElement = container.clone().unchecked_into();
    mount_to(parent, move || {
        view! { <CommentForm campsite_id=campsite_id post_comment=post_comment/> }
    });

    (calls, container)
}

fn click(container: &web_sys::Element, selector: &str) {
    let el = container.query_selector(selector).unwrap().unwrap();
    el.unchecked_into::<web_sys::HtmlElement>().click();
}

fn set_input(container: &web_sys::Element, selector: &str, value: &str) {
    let el = container.query_selector(selector).unwrap().unwrap();
    let input: web_sys::HtmlInputElement = el.unchecked_into();
    input.set_value(value);
    let event = web_sys::Event::new("input").unwrap();
    input.dispatch_event(&event).unwrap();
}

fn set_textarea(container: &web_sys::Element, selector: &str, value: &str) {
    let el = container.query_selector(selector).unwrap().unwrap();
    let textarea: web_sys::HtmlTextAreaElement = el.unchecked_into();
    textarea.set_value(value);
    let event = web_sys::Event::new("input").unwrap();
    textarea.dispatch_event(&event).unwrap();
}

fn set_select(container: &web_sys::Element, selector: &str, value: &str) {
    let el = container.query_selector(selector).unwrap().unwrap();
    let select: web_sys::HtmlSelectElement = el.unchecked_into();
    select.set_value(value);
    let event = web_sys::Event::new("change").unwrap();
    select.dispatch_event(&event).unwrap();
}

fn blur(container: &web_sys::Element, selector: &str) {
    let el = container.query_selector(selector).unwrap().unwrap();
    let event = web_sys::FocusEvent::new("blur").unwrap();
    el.dispatch_event(&event).unwrap();
}

fn submit(container: &web_sys::Element) {
    let form = container.query_selector("form").unwrap().unwrap();
    let event = web_sys::Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}

fn modal_is_open(container: &web_sys::Element) -> bool {
    container
        .query_selector(".modal-overlay")
        .unwrap()
        .is_some()
}

#[wasm_bindgen_test]
async fn short_author_is_rejected_with_message() {
    let (calls, container) = mount_form(1);
    sleep(Duration::from_millis(50)).await;

    click(&container, "button");
    sleep(Duration::from_millis(50)).await;
    assert!(modal_is_open(&container));

    set_input(&container, "#author", "A");
    blur(&container, "#author");
    sleep(Duration::from_millis(50)).await;

    let message = container
        .query_selector(".text-danger")
        .unwrap()
        .expect("validation message should be visible after blur");
    assert_eq!(message.text_content().unwrap(), "Must be at least 2 characters");

    submit(&container);
    sleep(Duration::from_millis(50)).await;

    assert!(calls.borrow().is_empty(), "invalid draft must not be posted");
    assert!(modal_is_open(&container), "rejected submit keeps the modal open");

    container.remove();
}

#[wasm_bindgen_test]
async fn long_author_is_rejected_with_message() {
    let (calls, container) = mount_form(1);
    sleep(Duration::from_millis(50)).await;

    click(&container, "button");
    sleep(Duration::from_millis(50)).await;

    set_input(&container, "#author", "abcdefghijklmnop"); // 16 chars
    blur(&container, "#author");
    sleep(Duration::from_millis(50)).await;

    let message = container
        .query_selector(".text-danger")
        .unwrap()
        .expect("validation message should be visible after blur");
    assert_eq!(message.text_content().unwrap(), "Must be 15 characters or less");

    submit(&container);
    sleep(Duration::from_millis(50)).await;
    assert!(calls.borrow().is_empty());

    container.remove();
}

#[wasm_bindgen_test]
async fn message_waits_until_the_field_is_touched() {
    let (_calls, container) = mount_form(1);
    sleep(Duration::from_millis(50)).await;

    click(&container, "button");
    sleep(Duration::from_millis(50)).await;

    // Author starts invalid (empty) but untouched: no message yet.
    assert!(container.query_selector(".text-danger").unwrap().is_none());

    // A rejected submit counts as touching the field.
    submit(&container);
    sleep(Duration::from_millis(50)).await;
    assert!(container.query_selector(".text-danger").unwrap().is_some());

    container.remove();
}

#[wasm_bindgen_test]
async fn valid_draft_posts_once_and_closes_the_modal() {
    let (calls, container) = mount_form(7);
    sleep(Duration::from_millis(50)).await;

    click(&container, "button");
    sleep(Duration::from_millis(50)).await;

    set_select(&container, "#rating", "4");
    set_input(&container, "#author", "Dev");
    set_textarea(&container, "#text", "Great tent pads.");
    submit(&container);
    sleep(Duration::from_millis(50)).await;

    assert_eq!(
        *calls.borrow(),
        vec![(7, 4, "Dev".to_string(), "Great tent pads.".to_string())]
    );
    assert!(!modal_is_open(&container), "submit returns the modal to closed");

    container.remove();
}

#[wasm_bindgen_test]
async fn cancel_discards_the_draft_without_posting() {
    let (calls, container) = mount_form(1);
    sleep(Duration::from_millis(50)).await;

    click(&container, "button");
    sleep(Duration::from_millis(50)).await;

    set_input(&container, "#author", "Mara");
    set_textarea(&container, "#text", "never sent");
    click(&container, ".modal-close");
    sleep(Duration::from_millis(50)).await;

    assert!(!modal_is_open(&container));
    assert!(calls.borrow().is_empty(), "cancel must not invoke post_comment");

    container.remove();
}

use crate::app::{self, Notices, Shared};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Keys only reach the active scene; the dispatcher decides what each means.
pub fn handle_keydown(ev: &web::KeyboardEvent, shared: &Rc<Shared>) {
    let key = ev.key();
    let was_room_open = shared.dispatcher.borrow().room().is_some();
    let mut notices = Notices::default();
    let consumed = shared
        .dispatcher
        .borrow_mut()
        .key_down(&key, &mut notices);
    if consumed {
        ev.prevent_default();
    }
    app::after_key(shared, was_room_open);
    shared.flush(notices);
}

pub fn handle_keyup(ev: &web::KeyboardEvent, shared: &Shared) {
    if shared.dispatcher.borrow_mut().key_up(&ev.key()) {
        ev.prevent_default();
    }
}

pub fn wire_global_keys(shared: &Rc<Shared>) {
    let Some(window) = web::window() else {
        return;
    };

    let s = shared.clone();
    let keydown = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keydown(&ev, &s);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());
    keydown.forget();

    let s = shared.clone();
    let keyup = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        handle_keyup(&ev, &s);
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("keyup", keyup.as_ref().unchecked_ref());
    keyup.forget();

    // Losing focus never delivers keyup; release everything so no key sticks.
    let s = shared.clone();
    let blur = Closure::wrap(Box::new(move || {
        s.dispatcher.borrow_mut().blur();
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("blur", blur.as_ref().unchecked_ref());
    blur.forget();
}

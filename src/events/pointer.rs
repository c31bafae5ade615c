use crate::app::{Notices, Shared};
use crate::dom;
use crate::input::TouchPoint;
use smallvec::SmallVec;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type Touches = SmallVec<[TouchPoint; 2]>;

pub fn wire_input_handlers(shared: &Rc<Shared>) {
    wire_pointerdown(shared);
    wire_pointermove(shared);
    wire_pointerup(shared);
    wire_pointercancel(shared);
    wire_wheel(shared);
    wire_touch(shared);
    wire_resize(shared);
}

// Touch contacts arrive through the touch handlers; their pointer events are skipped.
#[inline]
fn is_touch(ev: &web::PointerEvent) -> bool {
    ev.pointer_type() == "touch"
}

fn listen<E, F>(target: &web::EventTarget, kind: &str, mut handler: F)
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: web::Event| {
        if let Ok(ev) = ev.dyn_into::<E>() {
            handler(ev);
        }
    }) as Box<dyn FnMut(web::Event)>);
    _ = target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref());
    closure.forget();
}

fn wire_pointerdown(shared: &Rc<Shared>) {
    let s = shared.clone();
    listen(&shared.container, "pointerdown", move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        let pos = dom::local_point(&s.container, ev.client_x() as f64, ev.client_y() as f64);
        s.dispatcher.borrow_mut().pointer_down(pos);
        _ = s.container.set_pointer_capture(ev.pointer_id());
        ev.prevent_default();
    });
}

fn wire_pointermove(shared: &Rc<Shared>) {
    let s = shared.clone();
    listen(&shared.container, "pointermove", move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        let pos = dom::local_point(&s.container, ev.client_x() as f64, ev.client_y() as f64);
        s.dispatcher.borrow_mut().pointer_move(pos);
    });
}

fn wire_pointerup(shared: &Rc<Shared>) {
    let s = shared.clone();
    listen(&shared.container, "pointerup", move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        let pos = dom::local_point(&s.container, ev.client_x() as f64, ev.client_y() as f64);
        let mut notices = Notices::default();
        let picked = s.dispatcher.borrow_mut().pointer_up(pos, &mut notices);
        if let Some(i) = picked {
            log::info!("[click] picked object {}", i);
        }
        _ = s.container.release_pointer_capture(ev.pointer_id());
        s.flush(notices);
    });
}

fn wire_pointercancel(shared: &Rc<Shared>) {
    let s = shared.clone();
    listen(&shared.container, "pointercancel", move |ev: web::PointerEvent| {
        if is_touch(&ev) {
            return;
        }
        s.dispatcher.borrow_mut().pointer_cancel();
    });
}

fn wire_wheel(shared: &Rc<Shared>) {
    let s = shared.clone();
    listen(&shared.container, "wheel", move |ev: web::WheelEvent| {
        s.dispatcher.borrow_mut().wheel(ev.delta_y() as f32);
        ev.prevent_default();
    });
}

fn touches_of(container: &web::HtmlElement, list: &web::TouchList) -> Touches {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|t| TouchPoint {
            id: t.identifier(),
            position: dom::local_point(container, t.client_x() as f64, t.client_y() as f64),
        })
        .collect()
}

fn wire_touch(shared: &Rc<Shared>) {
    let s = shared.clone();
    listen(&shared.container, "touchstart", move |ev: web::TouchEvent| {
        let touches = touches_of(&s.container, &ev.touches());
        s.dispatcher.borrow_mut().touch_start(&touches);
        ev.prevent_default();
    });

    let s = shared.clone();
    listen(&shared.container, "touchmove", move |ev: web::TouchEvent| {
        let touches = touches_of(&s.container, &ev.touches());
        s.dispatcher.borrow_mut().touch_move(&touches);
        ev.prevent_default();
    });

    for kind in ["touchend", "touchcancel"] {
        let s = shared.clone();
        listen(&shared.container, kind, move |ev: web::TouchEvent| {
            let remaining = touches_of(&s.container, &ev.touches());
            let mut notices = Notices::default();
            s.dispatcher.borrow_mut().touch_end(&remaining, &mut notices);
            s.flush(notices);
        });
    }
}

fn wire_resize(shared: &Rc<Shared>) {
    let Some(window) = web::window() else {
        return;
    };
    let s = shared.clone();
    listen(&window, "resize", move |_: web::Event| {
        s.sync_viewport();
    });
}

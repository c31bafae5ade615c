use crate::app::Shared;
use crate::dom::StyleSink;
use instant::Instant;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One requestAnimationFrame callback: let the scheduler decide whether the
/// active scene ticks, then push transforms to the DOM.
fn frame(shared: &Shared) {
    let ran = shared.dispatcher.borrow_mut().frame(Instant::now());
    if ran {
        let dispatcher = shared.dispatcher.borrow();
        dispatcher.apply_transforms(&mut StyleSink {
            container: &shared.container,
        });
    }
    if shared.dispatcher.borrow().is_running() {
        request_frame(shared);
    } else {
        shared.loop_active.set(false);
        log::info!("[frame] loop ended");
    }
}

fn request_frame(shared: &Shared) {
    let raf = shared.raf.borrow();
    if let (Some(w), Some(cb)) = (web::window(), raf.as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Start the rAF loop unless one is already pending. The loop ends on its
/// own once the scheduler is stopped.
pub fn start_loop(shared: &Rc<Shared>) {
    if !shared.dispatcher.borrow().is_running() || shared.loop_active.replace(true) {
        return;
    }
    if shared.raf.borrow().is_none() {
        let weak = Rc::downgrade(shared);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(shared) = weak.upgrade() {
                frame(&shared);
            }
        }) as Box<dyn FnMut()>);
        *shared.raf.borrow_mut() = Some(closure);
    }
    request_frame(shared);
}

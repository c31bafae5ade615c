use crate::config::ShowcaseConfig;
use crate::dispatch::{InteractionDispatcher, SelectionListener};
use crate::scene::{ItemRecord, SceneObject};
use crate::{dom, events, frame, overlay};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys as web;

pub(crate) type Dispatcher = InteractionDispatcher<web::HtmlElement>;

/// Selection events collected while the dispatcher is borrowed and delivered
/// to JS afterwards, so callbacks may call back into `Showcase`.
#[derive(Debug)]
pub(crate) enum Notice {
    Select(String),
    Deselect,
    RoomPick(String),
}

#[derive(Default)]
pub(crate) struct Notices(pub Vec<Notice>);

impl SelectionListener<web::HtmlElement> for Notices {
    fn on_select(&mut self, object: &SceneObject<web::HtmlElement>) {
        self.0.push(Notice::Select(object.record.id.clone()));
    }

    fn on_deselect(&mut self) {
        self.0.push(Notice::Deselect);
    }

    fn on_room_pick(&mut self, object: &SceneObject<web::HtmlElement>) {
        self.0.push(Notice::RoomPick(object.record.id.clone()));
    }
}

#[derive(Default)]
struct Callbacks {
    on_select: Option<js_sys::Function>,
    on_deselect: Option<js_sys::Function>,
    on_room_pick: Option<js_sys::Function>,
}

pub(crate) struct Shared {
    pub container: web::HtmlElement,
    pub dispatcher: RefCell<Dispatcher>,
    pub room_container: RefCell<Option<web::HtmlElement>>,
    pub loop_active: Cell<bool>,
    pub raf: RefCell<Option<Closure<dyn FnMut()>>>,
    callbacks: RefCell<Callbacks>,
}

impl Shared {
    /// Deliver collected notices to the registered JS callbacks.
    pub fn flush(&self, notices: Notices) {
        for notice in notices.0 {
            let (callback, arg) = {
                let cbs = self.callbacks.borrow();
                match notice {
                    Notice::Select(id) => (cbs.on_select.clone(), JsValue::from_str(&id)),
                    Notice::Deselect => (cbs.on_deselect.clone(), JsValue::UNDEFINED),
                    Notice::RoomPick(id) => (cbs.on_room_pick.clone(), JsValue::from_str(&id)),
                }
            };
            if let Some(f) = callback {
                if let Err(e) = f.call1(&JsValue::NULL, &arg) {
                    log::error!("[select] callback error: {:?}", e);
                }
            }
        }
    }

    pub fn sync_viewport(&self) {
        let (w, h) = dom::element_size(&self.container);
        self.dispatcher.borrow_mut().set_viewport(w, h);
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("orbit-showcase starting");
    Ok(())
}

/// Browser handle for one showcase mounted in an existing container.
///
/// Item elements are created by the page; each must carry
/// `data-item-id="<id>"` inside the container.
#[wasm_bindgen]
pub struct Showcase {
    shared: Rc<Shared>,
}

#[wasm_bindgen]
impl Showcase {
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        items_json: &str,
        config_json: Option<String>,
        reduced_motion: bool,
    ) -> Result<Showcase, JsValue> {
        build(container_id, items_json, config_json.as_deref(), reduced_motion)
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))
    }

    pub fn start(&self) {
        self.shared.dispatcher.borrow_mut().start();
        frame::start_loop(&self.shared);
    }

    /// Safe to call repeatedly, including from inside a selection callback.
    pub fn stop(&self) {
        self.shared.dispatcher.borrow_mut().stop();
    }

    pub fn on_select(&self, callback: js_sys::Function) {
        self.shared.callbacks.borrow_mut().on_select = Some(callback);
    }

    pub fn on_deselect(&self, callback: js_sys::Function) {
        self.shared.callbacks.borrow_mut().on_deselect = Some(callback);
    }

    pub fn on_room_pick(&self, callback: js_sys::Function) {
        self.shared.callbacks.borrow_mut().on_room_pick = Some(callback);
    }

    /// Open the detail room whose exhibit elements live in `room_container_id`.
    /// That element must sit inside the showcase container so pointer and
    /// touch events reach the room.
    pub fn open_room(&self, room_container_id: &str, items_json: &str) -> Result<(), JsValue> {
        open_room(&self.shared, room_container_id, items_json)
            .map_err(|e| JsValue::from_str(&format!("{:#}", e)))?;
        frame::start_loop(&self.shared);
        Ok(())
    }

    pub fn close_room(&self) {
        let mut notices = Notices::default();
        let closed = self.shared.dispatcher.borrow_mut().close_room(&mut notices);
        if closed.is_some() {
            hide_room_container(&self.shared);
            frame::start_loop(&self.shared);
        }
        self.shared.flush(notices);
    }

    pub fn resize(&self) {
        self.shared.sync_viewport();
    }
}

fn build(
    container_id: &str,
    items_json: &str,
    config_json: Option<&str>,
    reduced_motion: bool,
) -> anyhow::Result<Showcase> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let container = dom::element_by_id(&document, container_id)?;
    let config = match config_json {
        Some(text) => ShowcaseConfig::from_json(text)?,
        None => ShowcaseConfig::default(),
    };
    let records = ItemRecord::list_from_json(items_json)?;
    let items = dom::bind_items(&container, records)?;
    log::info!("[scene] mounting {} items", items.len());

    let dispatcher = InteractionDispatcher::new(config, items, reduced_motion);
    let shared = Rc::new(Shared {
        container,
        dispatcher: RefCell::new(dispatcher),
        room_container: RefCell::new(None),
        loop_active: Cell::new(false),
        raf: RefCell::new(None),
        callbacks: RefCell::new(Callbacks::default()),
    });
    shared.sync_viewport();
    events::wire_input_handlers(&shared);
    events::wire_global_keys(&shared);
    Ok(Showcase { shared })
}

fn open_room(shared: &Rc<Shared>, room_container_id: &str, items_json: &str) -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let room_el = dom::element_by_id(&document, room_container_id)?;
    let records = ItemRecord::list_from_json(items_json)?;
    let items = dom::bind_items(&room_el, records)?;
    hide_room_container(shared);
    shared.dispatcher.borrow_mut().open_room(items);
    overlay::show(&room_el);
    *shared.room_container.borrow_mut() = Some(room_el);
    Ok(())
}

fn hide_room_container(shared: &Shared) {
    if let Some(el) = shared.room_container.borrow_mut().take() {
        overlay::hide(&el);
    }
}

/// Close-room path for key handlers, which hold no `Showcase`.
pub(crate) fn after_key(shared: &Rc<Shared>, was_room_open: bool) {
    let room_open = shared.dispatcher.borrow().room().is_some();
    if was_room_open && !room_open {
        hide_room_container(shared);
        frame::start_loop(shared);
    }
}

use crate::projector::Projected;
use crate::scene::{ItemRecord, RenderSink};
use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

pub fn element_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not an HTML element: {:?}", id, e))
}

/// Pair each record with its page-created element (`data-item-id`).
pub fn bind_items(
    container: &web::HtmlElement,
    records: Vec<ItemRecord>,
) -> anyhow::Result<Vec<(ItemRecord, web::HtmlElement)>> {
    records
        .into_iter()
        .map(|record| {
            let selector = format!("[data-item-id=\"{}\"]", record.id);
            let el = container
                .query_selector(&selector)
                .map_err(|e| anyhow::anyhow!("bad selector {}: {:?}", selector, e))?
                .ok_or_else(|| anyhow::anyhow!("no element for item {}", record.id))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("item {} is not an HTML element: {:?}", record.id, e))?;
            Ok((record, el))
        })
        .collect()
}

#[inline]
pub fn element_size(el: &web::HtmlElement) -> (f32, f32) {
    let rect = el.get_bounding_client_rect();
    (rect.width() as f32, rect.height() as f32)
}

/// Client coordinates to pixels relative to `el`'s top-left corner.
#[inline]
pub fn local_point(el: &web::HtmlElement, client_x: f64, client_y: f64) -> Vec2 {
    let rect = el.get_bounding_client_rect();
    Vec2::new(
        (client_x - rect.left()) as f32,
        (client_y - rect.top()) as f32,
    )
}

/// Writes transforms straight into inline styles.
pub struct StyleSink<'a> {
    pub container: &'a web::HtmlElement,
}

impl RenderSink<web::HtmlElement> for StyleSink<'_> {
    fn apply(&mut self, handle: &web::HtmlElement, projected: &Projected) {
        let style = handle.style();
        let p = projected.position;
        let transform = format!(
            "translate(-50%, -50%) translate3d({:.2}px, {:.2}px, {:.2}px) scale({:.3})",
            p.x, p.y, p.z, projected.scale
        );
        _ = style.set_property("transform", &transform);
        _ = style.set_property("z-index", &projected.depth_order.to_string());
        _ = style.set_property(
            "visibility",
            if projected.visible { "visible" } else { "hidden" },
        );
    }

    fn set_zoom(&mut self, zoom: f32) {
        _ = self
            .container
            .style()
            .set_property("--scene-zoom", &format!("{:.3}", zoom));
    }

    fn set_highlight(&mut self, handle: &web::HtmlElement, hovered: bool, selected: bool) {
        let cl = handle.class_list();
        _ = cl.toggle_with_force("hovered", hovered);
        _ = cl.toggle_with_force("selected", selected);
    }
}

use web_sys as web;

#[inline]
pub fn show(el: &web::HtmlElement) {
    _ = el.class_list().remove_1("hidden");
    // fallback for environments without the CSS class
    _ = el.style().remove_property("display");
}

#[inline]
pub fn hide(el: &web::HtmlElement) {
    _ = el.class_list().add_1("hidden");
    _ = el.style().set_property("display", "none");
}

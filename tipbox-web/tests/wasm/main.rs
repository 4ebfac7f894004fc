#![cfg(target_arch = "wasm32")]

use tipbox_web::dom;

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

mod dom_tests;
mod sandbox_tests;

/// Fresh, empty mount point with the given id.
fn mount_root(id: &str) -> web_sys::Element {
    let doc = dom::document().expect("document");
    if let Some(root) = doc.get_element_by_id(id) {
        root.set_inner_html("");
        return root;
    }
    let root = doc.create_element("div").expect("create root");
    root.set_id(id);
    doc.body()
        .expect("document body")
        .append_child(&root)
        .expect("append root");
    root
}

fn text_of(selector: &str) -> String {
    dom::document()
        .expect("document")
        .query_selector(selector)
        .expect("valid selector")
        .and_then(|el| el.text_content())
        .unwrap_or_default()
}

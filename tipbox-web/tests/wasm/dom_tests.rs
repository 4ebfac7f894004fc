use crate::mount_root;
use std::cell::Cell;
use std::rc::Rc;
use tipbox_core::{ANCHOR_OFFSET_PX, Position};
use tipbox_web::dom;
use wasm_bindgen_test::*;

#[wasm_bindgen_test]
fn measured_trigger_anchors_above_its_center() {
    let root = mount_root("measure-root");
    root.set_attribute(
        "style",
        "position:absolute;left:40px;top:120px;width:80px;height:20px",
    )
    .expect("style trigger");
    let geometry = dom::measure(&root).expect("geometry");
    assert!((geometry.rect.width - 80.0).abs() < 0.5);
    let anchor = geometry.anchor(Position::Top);
    let expected_x = geometry.rect.left + geometry.scroll.x + 40.0;
    let expected_y = geometry.rect.top + geometry.scroll.y - ANCHOR_OFFSET_PX;
    assert!((anchor.x - expected_x).abs() < 0.5, "{anchor:?}");
    assert!((anchor.y - expected_y).abs() < 1e-6, "{anchor:?}");
    root.remove();
}

#[wasm_bindgen_test]
async fn pending_timeout_fires_once_elapsed() {
    let fired = Rc::new(Cell::new(0));
    let _timer = {
        let fired = Rc::clone(&fired);
        dom::Timeout::schedule(10, move || fired.set(fired.get() + 1)).expect("schedule")
    };
    dom::sleep_ms(60).await.expect("sleep");
    assert_eq!(fired.get(), 1);
}

#[wasm_bindgen_test]
async fn dropped_timeout_is_cleared() {
    let fired = Rc::new(Cell::new(false));
    let timer = {
        let fired = Rc::clone(&fired);
        dom::Timeout::schedule(10, move || fired.set(true)).expect("schedule")
    };
    drop(timer);
    dom::sleep_ms(60).await.expect("sleep");
    assert!(!fired.get(), "cleared timer must not run");
}

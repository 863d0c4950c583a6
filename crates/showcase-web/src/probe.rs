//! Browser heap probe for the metrics readout

use bevy::prelude::*;
use showcase_scene::{HeapUsage, ShowcaseSystems};

pub struct ProbePlugin;

impl Plugin for ProbePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sample_heap.before(ShowcaseSystems::Tick));
    }
}

fn sample_heap(mut heap: ResMut<HeapUsage>) {
    let used = used_js_heap();
    if heap.0 != used {
        heap.0 = used;
    }
}

/// `performance.memory.usedJSHeapSize`; non-standard, Chromium only
#[cfg(target_arch = "wasm32")]
fn used_js_heap() -> Option<u64> {
    use wasm_bindgen::JsValue;

    let performance = web_sys::window()?.performance()?;
    let memory = js_sys::Reflect::get(&performance, &JsValue::from_str("memory")).ok()?;
    if memory.is_undefined() || memory.is_null() {
        return None;
    }
    let used = js_sys::Reflect::get(&memory, &JsValue::from_str("usedJSHeapSize")).ok()?;
    used.as_f64().filter(|bytes| *bytes >= 0.0).map(|bytes| bytes as u64)
}

#[cfg(not(target_arch = "wasm32"))]
fn used_js_heap() -> Option<u64> {
    None
}

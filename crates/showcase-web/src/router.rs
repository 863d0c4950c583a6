//! URL hash bridge between the browser and the showcase router

use bevy::prelude::*;
use std::sync::{Arc, Mutex};

use showcase_core::Event;
use showcase_scene::{ShowcaseState, ShowcaseSystems};

pub struct HashRouterPlugin;

/// Hashes reported by the browser, drained once per frame
#[derive(Resource, Default, Clone)]
pub struct PendingHashes(pub Arc<Mutex<Vec<String>>>);

impl PendingHashes {
    pub fn push(&self, hash: String) {
        if let Ok(mut queue) = self.0.lock() {
            queue.push(hash);
        }
    }

    pub fn drain(&self) -> Vec<String> {
        if let Ok(mut queue) = self.0.lock() {
            std::mem::take(&mut *queue)
        } else {
            Vec::new()
        }
    }
}

impl Plugin for HashRouterPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PendingHashes>()
            .add_systems(Startup, listen_for_hash_changes)
            .add_systems(Update, (
                process_hash_changes.in_set(ShowcaseSystems::Input),
                write_hash.after(ShowcaseSystems::Apply),
            ));
    }
}

fn listen_for_hash_changes(pending: Res<PendingHashes>) {
    if let Err(e) = install_listener(&pending) {
        tracing::error!("Hash routing unavailable: {:#}", e);
    }
}

/// Queue the initial hash and every later `hashchange`
#[cfg(target_arch = "wasm32")]
fn install_listener(pending: &PendingHashes) -> anyhow::Result<()> {
    use anyhow::anyhow;
    use wasm_bindgen::prelude::*;

    let window = web_sys::window().ok_or_else(|| anyhow!("no window"))?;
    let initial = window
        .location()
        .hash()
        .map_err(|e| anyhow!("failed to read location hash: {:?}", e))?;
    tracing::info!(hash = %initial, "Initial route");
    pending.push(initial);

    let pending_clone = pending.clone();
    let listener_window = window.clone();
    let onhashchange = Closure::wrap(Box::new(move |_: web_sys::Event| {
        match listener_window.location().hash() {
            Ok(hash) => pending_clone.push(hash),
            Err(e) => tracing::warn!("Failed to read location hash: {:?}", e),
        }
    }) as Box<dyn FnMut(web_sys::Event)>);
    window
        .add_event_listener_with_callback("hashchange", onhashchange.as_ref().unchecked_ref())
        .map_err(|e| anyhow!("failed to register hashchange listener: {:?}", e))?;
    onhashchange.forget();

    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn install_listener(_pending: &PendingHashes) -> anyhow::Result<()> {
    tracing::info!("Hash routing not available in native mode");
    Ok(())
}

fn process_hash_changes(pending: Res<PendingHashes>, mut showcase: ResMut<ShowcaseState>) {
    for hash in pending.drain() {
        match showcase.0.handle(Event::HashChanged(hash.clone())) {
            Some(transition) => tracing::debug!(hash = %hash, ?transition, "Route applied"),
            None => tracing::debug!(hash = %hash, "Route ignored"),
        }
    }
}

/// Mirror control-driven transitions in the URL
fn write_hash(mut showcase: ResMut<ShowcaseState>) {
    let Some(hash) = showcase.0.take_hash_update() else {
        return;
    };

    match set_hash(&hash) {
        Ok(()) => showcase.0.confirm_hash_written(&hash),
        Err(e) => tracing::warn!("Failed to update URL hash: {:#}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn set_hash(hash: &str) -> anyhow::Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    window
        .location()
        .set_hash(hash)
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}

#[cfg(not(target_arch = "wasm32"))]
fn set_hash(hash: &str) -> anyhow::Result<()> {
    tracing::debug!(hash, "URL hash update (native, ignored)");
    Ok(())
}

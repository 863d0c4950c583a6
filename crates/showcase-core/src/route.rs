//! URL hash routing
//!
//! Two routes are recognized: `#/gallery` and `#/framework/<name>`. Anything
//! else parses to [`Route::Unknown`] and is ignored. Framework names are
//! percent-encoded in the hash, the way the browser reports `location.hash`.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use tracing::debug;

use crate::framework::FrameworkRegistry;
use crate::state::{StateMachine, Transition};

const GALLERY_HASH: &str = "#/gallery";
const FRAMEWORK_PREFIX: &str = "framework/";

/// Fragment percent-encode set, plus `#` and `%` so names survive decoding
const NAME_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'#')
    .add(b'%');

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Gallery,
    /// Decoded framework name from the hash (not yet matched)
    Framework(String),
    Unknown,
}

impl Route {
    /// Parse a hash fragment, with or without the leading `#`
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let Some(path) = path.strip_prefix('/') else {
            return Route::Unknown;
        };

        if path == "gallery" {
            return Route::Gallery;
        }

        let Some(encoded) = path.strip_prefix(FRAMEWORK_PREFIX) else {
            return Route::Unknown;
        };
        if encoded.is_empty() || encoded.contains('/') {
            return Route::Unknown;
        }
        match percent_decode_str(encoded).decode_utf8() {
            Ok(name) => Route::Framework(name.into_owned()),
            Err(_) => Route::Unknown,
        }
    }

    /// The hash that produces this route
    pub fn to_hash(&self) -> Option<String> {
        match self {
            Route::Gallery => Some(GALLERY_HASH.to_string()),
            Route::Framework(name) => Some(format!(
                "#/{}{}",
                FRAMEWORK_PREFIX,
                utf8_percent_encode(name, NAME_ENCODE_SET)
            )),
            Route::Unknown => None,
        }
    }
}

/// Keeps the URL hash and the state machine in step
#[derive(Debug, Clone, Default)]
pub struct Router {
    current_hash: String,
}

impl Router {
    pub fn new() -> Self {
        Self::default()
    }

    /// Last hash seen, or confirmed written
    pub fn current_hash(&self) -> &str {
        &self.current_hash
    }

    /// Handle a hash-change notification; at most one transition results
    pub fn route(
        &mut self,
        hash: &str,
        machine: &StateMachine,
        registry: &FrameworkRegistry,
    ) -> Option<Transition> {
        self.current_hash = hash.to_string();

        match Route::parse(hash) {
            Route::Gallery => machine.request_gallery(),
            Route::Framework(name) => {
                let Some((index, _)) = registry.find(&name) else {
                    debug!(name = %name, "Ignoring route to unknown framework");
                    return None;
                };
                machine.request_detail(index)
            }
            Route::Unknown => {
                debug!(hash = %hash, "Ignoring unrecognized route");
                None
            }
        }
    }

    /// Hash to write so the URL reflects `route`, or `None` if it already does
    ///
    /// Nothing is recorded until the write is confirmed with [`Router::commit`].
    pub fn sync(&self, route: &Route) -> Option<String> {
        let hash = route.to_hash()?;
        (hash != self.current_hash).then_some(hash)
    }

    /// Record a hash the frontend has written to the URL
    pub fn commit(&mut self, hash: &str) {
        self.current_hash = hash.to_string();
    }
}

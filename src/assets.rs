//! Texture name resolution.
//!
//! Textures themselves live outside the kernel — the host decodes images and
//! uploads them however it likes, then hands the kernel opaque
//! [`TextureHandle`]s under game-facing names. [`TextureStore`] is the
//! mapping between the two, with one hard guarantee: resolution never fails.
//! An unknown name resolves to the reserved error handle (with a warning), so
//! a missing asset shows up as a placeholder on screen instead of aborting
//! the frame.

use std::collections::HashMap;

use log::warn;

/// Opaque id of a texture owned by the host's renderer. The kernel only
/// stores and forwards these; it never dereferences them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// The reserved placeholder handle. Hosts should upload a loud
    /// "missing texture" image under this id.
    pub const ERROR: Self = Self(0);
}

/// Maps texture names to host-provided handles.
pub struct TextureStore {
    by_name: HashMap<String, TextureHandle>,
    error: TextureHandle,
}

impl TextureStore {
    /// A store whose fallback is [`TextureHandle::ERROR`].
    pub fn new() -> Self {
        Self::with_error(TextureHandle::ERROR)
    }

    /// A store with a custom fallback handle.
    pub fn with_error(error: TextureHandle) -> Self {
        Self {
            by_name: HashMap::new(),
            error,
        }
    }

    /// Register (or re-point) a name at a handle.
    pub fn insert(&mut self, name: impl Into<String>, handle: TextureHandle) {
        self.by_name.insert(name.into(), handle);
    }

    /// Forget a name. Returns the handle it pointed at, if any.
    pub fn remove(&mut self, name: &str) -> Option<TextureHandle> {
        self.by_name.remove(name)
    }

    /// Resolve a name to a handle. Unknown names resolve to the error handle
    /// with a warning — never a failure.
    pub fn resolve(&self, name: &str) -> TextureHandle {
        match self.by_name.get(name) {
            Some(&handle) => handle,
            None => {
                warn!("unknown texture '{name}', substituting the error texture");
                self.error
            }
        }
    }

    /// The fallback handle returned for unknown names.
    pub fn error_handle(&self) -> TextureHandle {
        self.error
    }

    /// Number of registered names.
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl Default for TextureStore {
    fn default() -> Self {
        Self::new()
    }
}

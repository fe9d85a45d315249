#![forbid(unsafe_code)]

//! Browser host for the vigil background.
//!
//! Mounts the animation on an existing `<canvas>`: the canvas is sized to the
//! window, frames come from `requestAnimationFrame` and window resizes are
//! applied immediately. The page's stylesheet is expected to position the
//! canvas behind the rest of the content.
//!
//! ```js
//! import init, { mount } from "./vigil_web.js";
//! await init();
//! const background = mount(document.getElementById("background"));
//! // later
//! background?.dispose();
//! ```

#[cfg(target_arch = "wasm32")]
mod wasm;

#[cfg(target_arch = "wasm32")]
pub use wasm::{BackgroundHandle, mount};

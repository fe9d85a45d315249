use std::{cell::RefCell, f64::consts::TAU, rc::Rc};

use tracing::warn;
use vigil_background::{FrameRequest, Host, Mount, SceneSettings};
use vigil_core::{Paint, Point, Rgba, Size, Surface};
use wasm_bindgen::{JsCast, prelude::*};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, Window};

/// Canvas 2D context as a drawing surface.
struct CanvasSurface {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl CanvasSurface {
    fn apply_fill(&self, paint: &Paint<'_>) {
        match *paint {
            Paint::Solid(color) => self.ctx.set_fill_style_str(&color.to_string()),
            Paint::Linear { from, to, stops } => {
                let gradient = self.ctx.create_linear_gradient(from.x, from.y, to.x, to.y);
                for stop in stops {
                    let _ = gradient.add_color_stop(stop.offset as f32, &stop.color.to_string());
                }
                self.ctx.set_fill_style_canvas_gradient(&gradient);
            }
            Paint::Radial {
                center,
                radius,
                stops,
            } => match self
                .ctx
                .create_radial_gradient(center.x, center.y, 0.0, center.x, center.y, radius)
            {
                Ok(gradient) => {
                    for stop in stops {
                        let _ =
                            gradient.add_color_stop(stop.offset as f32, &stop.color.to_string());
                    }
                    self.ctx.set_fill_style_canvas_gradient(&gradient);
                }
                // Negative radius: draw nothing rather than the previous style.
                Err(_) => self
                    .ctx
                    .set_fill_style_str(&Rgba::new(0, 0, 0, 0.0).to_string()),
            },
        }
    }

    fn circle_path(&self, center: Point, radius: f64) -> bool {
        self.ctx.begin_path();
        self.ctx
            .arc(center.x, center.y, radius.max(0.0), 0.0, TAU)
            .is_ok()
    }
}

impl Surface for CanvasSurface {
    fn size(&self) -> Size {
        Size::new(self.canvas.width() as f64, self.canvas.height() as f64)
    }

    fn global_alpha(&self) -> f64 {
        self.ctx.global_alpha()
    }

    fn set_global_alpha(&mut self, alpha: f64) {
        self.ctx.set_global_alpha(alpha);
    }

    fn fill_rect(&mut self, origin: Point, size: Size, paint: &Paint<'_>) {
        self.apply_fill(paint);
        self.ctx
            .fill_rect(origin.x, origin.y, size.width, size.height);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint<'_>) {
        self.apply_fill(paint);
        if self.circle_path(center, radius) {
            self.ctx.fill();
        }
    }

    fn stroke_circle(&mut self, center: Point, radius: f64, line_width: f64, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        if self.circle_path(center, radius) {
            self.ctx.stroke();
        }
    }

    fn stroke_line(&mut self, from: Point, to: Point, line_width: f64, color: Rgba) {
        self.ctx.set_stroke_style_str(&color.to_string());
        self.ctx.set_line_width(line_width);
        self.ctx.begin_path();
        self.ctx.move_to(from.x, from.y);
        self.ctx.line_to(to.x, to.y);
        self.ctx.stroke();
    }
}

/// The browser window and canvas, plus the JS callbacks that feed the mount.
struct WebHost {
    window: Window,
    canvas: HtmlCanvasElement,
    on_frame: Option<Closure<dyn FnMut(f64)>>,
    on_resize: Option<Closure<dyn FnMut()>>,
}

impl Host for WebHost {
    type Surface = CanvasSurface;

    fn viewport(&self) -> Size {
        let dimension = |value: Result<JsValue, JsValue>| {
            value.ok().and_then(|v| v.as_f64()).unwrap_or(0.0)
        };
        Size::new(
            dimension(self.window.inner_width()),
            dimension(self.window.inner_height()),
        )
    }

    fn acquire_surface(&mut self) -> Option<CanvasSurface> {
        let ctx = self
            .canvas
            .get_context("2d")
            .ok()
            .flatten()?
            .dyn_into::<CanvasRenderingContext2d>()
            .ok()?;
        Some(CanvasSurface {
            canvas: self.canvas.clone(),
            ctx,
        })
    }

    fn resize_surface(&mut self, surface: &mut CanvasSurface, size: Size) {
        surface.canvas.set_width(size.width as u32);
        surface.canvas.set_height(size.height as u32);
    }

    fn request_frame(&mut self) -> Option<FrameRequest> {
        let callback = self.on_frame.as_ref()?;
        self.window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .ok()
            .map(|id| FrameRequest(id as u64))
    }

    fn cancel_frame(&mut self, request: FrameRequest) {
        let _ = self.window.cancel_animation_frame(request.0 as i32);
    }

    fn listen_resize(&mut self) {
        if let Some(callback) = &self.on_resize {
            let _ = self
                .window
                .add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        }
    }

    fn unlisten_resize(&mut self) {
        if let Some(callback) = &self.on_resize {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
        }
    }
}

/// A running background. Call `dispose` when the canvas leaves the page.
#[wasm_bindgen]
pub struct BackgroundHandle {
    mount: Rc<RefCell<Mount<WebHost>>>,
}

#[wasm_bindgen]
impl BackgroundHandle {
    /// Stop the animation loop and the resize listener. Safe to call twice.
    pub fn dispose(&self) {
        self.mount.borrow_mut().dispose();
    }
}

/// Start the background on `canvas`.
///
/// Returns `undefined` and does nothing when the canvas has no 2D context.
#[wasm_bindgen]
pub fn mount(canvas: HtmlCanvasElement) -> Option<BackgroundHandle> {
    let Some(window) = web_sys::window() else {
        warn!("no window, background disabled");
        return None;
    };
    let host = WebHost {
        window,
        canvas,
        on_frame: None,
        on_resize: None,
    };
    // 2^53 keeps every bit of the random double.
    let seed = (js_sys::Math::random() * 9_007_199_254_740_992.0) as u64;
    let mount = Rc::new(RefCell::new(Mount::activate(
        host,
        &SceneSettings::default(),
        seed,
    )?));

    // Callbacks hold weak references so dropping the handle frees the mount.
    let weak = Rc::downgrade(&mount);
    let on_frame = Closure::<dyn FnMut(f64)>::new(move |_timestamp: f64| {
        if let Some(mount) = weak.upgrade() {
            mount.borrow_mut().on_frame();
        }
    });
    let weak = Rc::downgrade(&mount);
    let on_resize = Closure::<dyn FnMut()>::new(move || {
        if let Some(mount) = weak.upgrade() {
            mount.borrow_mut().on_resize();
        }
    });

    {
        let mut mount = mount.borrow_mut();
        let host = mount.host_mut();
        host.on_frame = Some(on_frame);
        host.on_resize = Some(on_resize);
        mount.start();
    }

    Some(BackgroundHandle { mount })
}

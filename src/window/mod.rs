use std::time::Instant;
use orom_miniquad::*;

pub mod keyboard;
pub mod ticker;

pub use keyboard::{KeyCode, KeyMods, KeyboardState};
use ticker::{FixedTicker, TICK_DURATION};
use crate::rendering::Rgba;
use crate::rendering::blittable::{BufferProvider, BufferProviderMut, SizedSurface};

/// Everything a [`ContextHandler`] may touch during a tick or a frame: the framebuffer
/// and the keyboard.
pub struct BlitContext {
    buffer_width: usize,
    buffer_height: usize,
    buffer_pixels: Vec<Rgba>,
    keyboard: KeyboardState
}

impl SizedSurface for BlitContext {
    fn get_width(&self) -> usize {
        self.buffer_width
    }

    fn get_height(&self) -> usize {
        self.buffer_height
    }
}

impl BufferProvider<Rgba> for BlitContext {
    fn get_buffer(&self) -> &[Rgba] { &self.buffer_pixels }
}

impl BufferProviderMut<Rgba> for BlitContext {
    fn get_buffer_mut(&mut self) -> &mut [Rgba] { &mut self.buffer_pixels }
}

impl BlitContext {
    /// Creates a context without a window. The stage uses it for the real thing, tools and
    /// tests use it to drive handlers headlessly.
    pub fn new(window_mode: WindowMode) -> Self {
        let (buffer_width, buffer_height) = window_mode.get_buffer_dimensions();
        Self {
            buffer_width,
            buffer_height,
            buffer_pixels: vec![Rgba::BLACK; buffer_width * buffer_height],
            keyboard: KeyboardState::default()
        }
    }

    pub fn clear(&mut self, color: Rgba) {
        for pixel in self.buffer_pixels.iter_mut() {
            *pixel = color;
        }
    }

    pub fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }
}

pub trait ContextHandler {
    fn get_window_title(&self) -> &'static str;
    fn get_window_mode(&self) -> WindowMode;
    fn on_key_down(&mut self, _ctx: &mut BlitContext, _key_code: KeyCode, _key_mods: KeyMods){}
    fn on_key_up(&mut self, _ctx: &mut BlitContext, _key_code: KeyCode, _key_mods: KeyMods){}
    fn init(&mut self, ctx: &mut BlitContext);
    /// Advances the logic by one fixed tick of `dt` seconds.
    fn update(&mut self, ctx: &mut BlitContext, dt: f32);
    /// Renders the current state into the framebuffer, once per presented frame.
    fn draw(&mut self, ctx: &mut BlitContext);
}

pub struct Stage<CtxHandler: ContextHandler> {
    pipeline: Pipeline,
    bindings: Bindings,
    buffer_texture: Texture,
    buffer_aspect: f32,
    context_data: BlitContext,
    handler: CtxHandler,
    ticker: FixedTicker,
    last_instant: Instant
}

impl<CtxHandler: ContextHandler> Stage<CtxHandler> {
    pub fn new(ctx: &mut Context, handler: CtxHandler) -> Stage<CtxHandler> {
        let window_mode = handler.get_window_mode();
        let (buffer_width, buffer_height) = window_mode.get_buffer_dimensions();

        let mut context_data = BlitContext::new(window_mode);
        let mut handler = handler;
        handler.init(&mut context_data);

        #[rustfmt::skip]
        let verts: &[f32] = &[
            /* pos         uv */
            -1.0, -1.0,    0.0, 1.0,
             1.0,  1.0,    1.0, 0.0,
            -1.0,  1.0,    0.0, 0.0,
             1.0, -1.0,    1.0, 1.0,
        ];

        let vertex_buffer = Buffer::immutable(
            ctx,
            BufferType::VertexBuffer,
            &verts
        );

        let index_buffer = Buffer::immutable(
            ctx,
            BufferType::IndexBuffer,
            &[0u16, 1, 2, 0, 3, 1]
        );

        let buffer_texture = Texture::from_data_and_format(
            ctx,
            bytemuck::cast_slice(&context_data.buffer_pixels),
            TextureParams {
                format: TextureFormat::RGBA8,
                wrap: TextureWrap::Clamp,
                filter: FilterMode::Nearest,
                width: buffer_width as _,
                height: buffer_height as _,
                depth: 1
            },
            TextureKind::Texture2D
        );

        let bindings = Bindings {
            vertex_buffers: vec![vertex_buffer],
            index_buffer,
            images: vec![buffer_texture]
        };

        let shader = Shader::new(
            ctx,
            screen_shader::VERTEX,
            screen_shader::FRAGMENT,
            screen_shader::meta()
        ).unwrap();

        let pipeline = Pipeline::new(
            ctx,
            &[BufferLayout::default()],
            &[
                VertexAttribute::new("pos", VertexFormat::Float2),
                VertexAttribute::new("uv", VertexFormat::Float2),
            ],
            shader
        );

        log::info!("framebuffer {}x{} ready", buffer_width, buffer_height);

        Self {
            pipeline,
            bindings,
            buffer_texture,
            buffer_aspect: buffer_width as f32 / buffer_height as f32,
            context_data,
            handler,
            ticker: FixedTicker::default(),
            last_instant: Instant::now()
        }
    }

    /// Scale of the quad which keeps the framebuffer aspect ratio inside the window.
    fn letterbox_scale(&self, screen_width: f32, screen_height: f32) -> (f32, f32) {
        let screen_aspect = screen_width / screen_height;
        if screen_aspect > self.buffer_aspect {
            (self.buffer_aspect / screen_aspect, 1.0)
        } else {
            (1.0, screen_aspect / self.buffer_aspect)
        }
    }
}

impl<CtxHandler: ContextHandler> EventHandler for Stage<CtxHandler> {
    fn update(&mut self, _ctx: &mut Context) {
        let elapsed = self.last_instant.elapsed().as_secs_f32();
        self.last_instant = Instant::now();
        for _ in 0..self.ticker.advance(elapsed) {
            self.handler.update(&mut self.context_data, TICK_DURATION);
            self.context_data.keyboard.end_tick();
        }
    }

    fn draw(&mut self, ctx: &mut Context) {
        self.handler.draw(&mut self.context_data);
        self.buffer_texture.update(ctx, bytemuck::cast_slice(&self.context_data.buffer_pixels));

        let (screen_width, screen_height) = ctx.screen_size();
        let (scale_x, scale_y) = self.letterbox_scale(screen_width, screen_height);

        ctx.begin_default_pass(PassAction::clear_color(0.0, 0.0, 0.0, 1.0));
        ctx.apply_pipeline(&self.pipeline);
        ctx.apply_bindings(&self.bindings);
        ctx.apply_uniforms(&screen_shader::Uniforms { scale: (scale_x, scale_y) });
        ctx.draw(0, 6, 1);
        ctx.end_render_pass();

        ctx.commit_frame();
    }

    fn key_down_event(
        &mut self,
        _ctx: &mut Context,
        keycode: orom_miniquad::KeyCode,
        keymods: orom_miniquad::KeyMods,
        repeat: bool,
    ) {
        let key_mods = KeyMods::from(keymods);
        if let Ok(key_code) = KeyCode::try_from(keycode) {
            self.context_data.keyboard.press(key_code, repeat);
            self.handler.on_key_down(&mut self.context_data, key_code, key_mods);
        }
    }

    fn key_up_event(
        &mut self,
        _ctx: &mut Context,
        keycode: orom_miniquad::KeyCode,
        keymods: orom_miniquad::KeyMods
    ) {
        let key_mods = KeyMods::from(keymods);
        if let Ok(key_code) = KeyCode::try_from(keycode) {
            self.context_data.keyboard.release(key_code);
            self.handler.on_key_up(&mut self.context_data, key_code, key_mods);
        }
    }
}

mod screen_shader {
    use orom_miniquad::*;

    pub const VERTEX:&str = r#"#version 100
        attribute vec2 pos;
        attribute vec2 uv;

        varying lowp vec2 texcoord;
        uniform vec2 scale;

        void main() {
            gl_Position = vec4(pos * scale, 0.0, 1.0);
            texcoord = uv;
        }
    "#;

    pub const FRAGMENT:&str = r#"#version 100
        varying lowp vec2 texcoord;

        uniform sampler2D tex;

        void main() {
            gl_FragColor = vec4(texture2D(tex, texcoord).rgb, 1.0);
        }
    "#;

    pub fn meta() -> ShaderMeta {
        ShaderMeta {
            images: vec!["tex".to_string()],
            uniforms: UniformBlockLayout {
                uniforms: vec![UniformDesc::new("scale", UniformType::Float2)]
            }
        }
    }

    #[repr(C)]
    pub struct Uniforms {
        pub scale: (f32, f32)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowMode {
    Svga
}

impl WindowMode {
    pub fn get_buffer_dimensions(&self) -> (usize, usize) {
        match self {
            WindowMode::Svga => (800, 600),
        }
    }
}

pub fn start<CtxHandler: 'static + ContextHandler>(handler: CtxHandler) {
    let (window_width, window_height) = handler.get_window_mode().get_buffer_dimensions();
    let conf = conf::Conf {
        window_title: handler.get_window_title().to_string(),
        window_width: window_width as _,
        window_height: window_height as _,
        high_dpi: false,
        fullscreen: false,
        sample_count: 1,
        window_resizable: false
    };

    orom_miniquad::start(conf, |mut ctx| {
        UserData::owning(Stage::new(&mut ctx, handler), ctx)
    });
}

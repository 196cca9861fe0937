use tatter::{Engine, EngineConfig, PointerButton, PointerState, Vec2};
use wasm_bindgen::prelude::*;

/// Canvas shell around the cloth engine: forwards pointer events in, pulls
/// line segments out. All physics lives in the `tatter` crate.
#[wasm_bindgen]
pub struct ClothDemo {
    engine: Engine<f32>,
    pointer: PointerState<f32>,
}

#[wasm_bindgen]
impl ClothDemo {
    /// Size the cloth to the canvas: one cell per 7 horizontal pixels,
    /// spacing one pixel under that so the mesh hangs with a little slack.
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_width: f32, canvas_height: f32) -> Result<ClothDemo, JsError> {
        let factor = 7.0_f32;
        let config = EngineConfig::new()
            .with_viewport(canvas_width, canvas_height)
            .with_cloth_size((canvas_width / factor) as usize, 50)
            .with_spacing(factor - 1.0);
        let engine = Engine::new(config).map_err(|e| JsError::new(&e.to_string()))?;
        Ok(ClothDemo {
            engine,
            pointer: PointerState::released(),
        })
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, secondary: bool) {
        let button = if secondary {
            PointerButton::Secondary
        } else {
            PointerButton::Primary
        };
        self.pointer.press(button, Vec2::new(x, y));
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y));
    }

    pub fn pointer_up(&mut self) {
        self.pointer.release();
    }

    /// Advance one animation frame.
    pub fn step(&mut self) {
        self.engine.step_unobserved(&self.pointer);
    }

    /// Flattened `[x1, y1, x2, y2]` per live constraint, for a single
    /// beginPath/stroke pass on the canvas.
    pub fn segments(&self) -> Vec<f32> {
        let cloth = self.engine.cloth();
        let mut out = Vec::with_capacity(cloth.constraint_count() * 4);
        for (a, b) in cloth.segments() {
            out.push(a.x);
            out.push(a.y);
            out.push(b.x);
            out.push(b.y);
        }
        out
    }

    // Slider wiring: tuning values apply live, topology values rebuild the
    // cloth (matching Engine::reconfigure semantics).

    pub fn set_gravity(&mut self, gravity: f32) -> Result<(), JsError> {
        self.reconfigure(self.engine.config().clone().with_gravity(gravity))
    }

    pub fn set_iterations(&mut self, iterations: usize) -> Result<(), JsError> {
        self.reconfigure(self.engine.config().clone().with_iterations(iterations))
    }

    pub fn set_cut_size(&mut self, radius: f32) -> Result<(), JsError> {
        self.reconfigure(self.engine.config().clone().with_cut_size(radius))
    }

    pub fn set_spacing(&mut self, spacing: f32) -> Result<(), JsError> {
        self.reconfigure(self.engine.config().clone().with_spacing(spacing))
    }

    pub fn set_cloth_size(&mut self, width: usize, height: usize) -> Result<(), JsError> {
        self.reconfigure(self.engine.config().clone().with_cloth_size(width, height))
    }

    pub fn reset(&mut self) {
        self.engine.reset();
    }
}

impl ClothDemo {
    fn reconfigure(&mut self, config: EngineConfig<f32>) -> Result<(), JsError> {
        self.engine
            .reconfigure(config)
            .map_err(|e| JsError::new(&e.to_string()))
    }
}

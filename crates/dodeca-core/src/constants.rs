// Tuning constants shared by the core logic and the native frontend.

// Object rotation (degrees per frame while a rotate key is held)
pub const ROTATE_STEP_DEG: f32 = 3.0;

// Camera movement
pub const CAMERA_MOVE_STEP: f32 = 0.1; // world units per frame
pub const CAMERA_PITCH_STEP_DEG: f32 = 3.0;
pub const CAMERA_YAW_STEP_DEG: f32 = 5.0;
pub const CAMERA_PITCH_LIMIT_DEG: f32 = 90.0;

// Scroll-to-scale
pub const SCROLL_SCALE_STEP: f32 = 0.02; // scale change per scroll line
pub const SCROLL_PIXELS_PER_LINE: f32 = 20.0; // trackpad pixel deltas -> line units

// Defaults applied at startup
pub const DEFAULT_SCALE: f32 = 0.4;
pub const DEFAULT_CAMERA_POSITION: [f32; 3] = [0.0, 0.0, -3.0];

// Projection
pub const FOVY_DEG: f32 = 70.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 100.0;
pub const MODEL_TILT_X_DEG: f32 = -55.0; // fixed presentation tilt, not user-controlled

// Colors
pub const FILL_COLOR: [f32; 3] = [100.0 / 255.0, 0.0, 33.3 / 255.0];
pub const EDGE_COLOR: [f32; 3] = [0.0, 0.0, 0.0];
pub const CLEAR_COLOR: [f64; 3] = [0.0, 0.2, 0.2];

// Window
pub const WINDOW_TITLE: &str = "Enter to spin";
pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;

// Shader sources, relative to the working directory
pub const VERTEX_SHADER_PATH: &str = "shaders/vertex.wgsl";
pub const FRAGMENT_SHADER_PATH: &str = "shaders/fragment.wgsl";

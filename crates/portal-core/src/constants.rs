// Scene tuning shared by the core logic and the web front-end.

// Firefly field
pub const FIREFLY_COUNT: usize = 30;
pub const FIREFLY_X_RANGE: [f32; 2] = [-2.0, 2.0]; // world units
pub const FIREFLY_Y_RANGE: [f32; 2] = [0.0, 1.5];
pub const FIREFLY_Z_RANGE: [f32; 2] = [-2.0, 2.0];
pub const FIREFLY_BASE_SIZE: f32 = 100.0; // point size before attenuation

// Uniform names shared with the shader sources
pub const U_TIME: &str = "uTime";
pub const U_PIXEL_RATIO: &str = "uPixelRatio";
pub const U_SIZE: &str = "uSize";

// Overlay markers: world-space anchor positions keyed by the class name of
// the DOM element each one drives.
pub const ANCHOR_POINTS: [(&str, [f32; 3]); 3] = [
    ("point-01", [0.7, 1.5, 0.0]),
    ("point-02", [-0.7, 0.5, 2.0]),
    ("point-03", [0.0, 0.7, -1.5]),
];

// Cap the device pixel ratio so dense displays do not blow up the firefly
// point sizes or the canvas backing store.
pub const MAX_PIXEL_RATIO: f64 = 2.0;

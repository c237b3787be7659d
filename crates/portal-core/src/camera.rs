use glam::{Mat4, Vec2, Vec3, Vec4};

/// Simple right-handed camera description with perspective projection.
///
/// Read-only from the scene core's perspective; the host mutates it on user
/// input and keeps `aspect` in step with the viewport.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }

    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    /// Project a world-space point into normalized device coordinates.
    ///
    /// On-screen points land in [-1, 1] per axis; values outside mean the
    /// point is off-screen. The point is taken by value, so stored scene
    /// geometry is never mutated by projecting it.
    pub fn project_to_ndc(&self, world: Vec3) -> Vec2 {
        let clip = self.projection_matrix() * self.view_matrix() * Vec4::from((world, 1.0));
        // points on the eye plane would divide by zero
        let w = if clip.w.abs() < f32::EPSILON {
            f32::EPSILON
        } else {
            clip.w
        };
        Vec2::new(clip.x / w, clip.y / w)
    }
}

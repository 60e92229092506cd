use crate::frame::FramePlan;
use std::fmt::Write;

/// Renderer-agnostic interface. All backends consume a [`FramePlan`].
///
/// A renderer reads the plan and produces output. It never feeds back into
/// the camera or the scene.
pub trait Renderer {
    /// The output type produced by this renderer.
    type Output;

    /// Render one frame: set the plan's uniforms, then issue its draws in order.
    fn render(&self, plan: &FramePlan) -> Self::Output;
}

/// Text renderer for headless runs and tests.
///
/// Produces a human-readable listing of the frame: camera, light, then one
/// line per draw in submission order.
#[derive(Debug, Default)]
pub struct DebugTextRenderer;

impl DebugTextRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl Renderer for DebugTextRenderer {
    type Output = String;

    fn render(&self, plan: &FramePlan) -> String {
        let u = &plan.uniforms;
        let mut out = String::new();
        let _ = writeln!(out, "=== Frame ({} draws) ===", plan.draws.len());
        let _ = writeln!(
            out,
            "Camera: pos=({:.2}, {:.2}, {:.2})",
            u.view_position.x, u.view_position.y, u.view_position.z
        );
        let _ = writeln!(
            out,
            "Light: {} pos=({:.1}, {:.1}, {:.1})",
            if u.light.enabled { "on" } else { "off" },
            u.light.position.x,
            u.light.position.y,
            u.light.position.z
        );

        for (i, draw) in plan.draws.iter().enumerate() {
            let p = draw.model.w_axis;
            let _ = writeln!(
                out,
                "  [{i}] {} at ({:.2}, {:.2}, {:.2}) tint=({:.2}, {:.2}, {:.2})",
                draw.mesh.name(),
                p.x,
                p.y,
                p.z,
                draw.tint.x,
                draw.tint.y,
                draw.tint.z
            );
        }

        out
    }
}

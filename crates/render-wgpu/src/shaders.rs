/// WGSL shader for the textured, tinted Phong point-light pass.
///
/// Frame uniforms are packed as vec4s; `light_position.w` carries the
/// on/off flag and `material.w` the shininess.
pub const SCENE_SHADER: &str = r#"
struct Frame {
    view_proj: mat4x4<f32>,
    view_position: vec4<f32>,
    light_position: vec4<f32>,
    light_ambient: vec4<f32>,
    light_diffuse: vec4<f32>,
    light_specular: vec4<f32>,
    material: vec4<f32>,
};

@group(0) @binding(0)
var<uniform> frame: Frame;
@group(0) @binding(1)
var diffuse_texture: texture_2d<f32>;
@group(0) @binding(2)
var diffuse_sampler: sampler;

struct VertexInput {
    @location(0) position: vec3<f32>,
    @location(1) normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
};

struct InstanceInput {
    @location(3) model_0: vec4<f32>,
    @location(4) model_1: vec4<f32>,
    @location(5) model_2: vec4<f32>,
    @location(6) model_3: vec4<f32>,
    @location(7) tint: vec4<f32>,
};

struct VertexOutput {
    @builtin(position) clip_position: vec4<f32>,
    @location(0) world_position: vec3<f32>,
    @location(1) world_normal: vec3<f32>,
    @location(2) uv: vec2<f32>,
    @location(3) tint: vec3<f32>,
};

@vertex
fn vs_main(vertex: VertexInput, instance: InstanceInput) -> VertexOutput {
    let model = mat4x4<f32>(
        instance.model_0,
        instance.model_1,
        instance.model_2,
        instance.model_3,
    );
    let world_pos = model * vec4<f32>(vertex.position, 1.0);

    var out: VertexOutput;
    out.clip_position = frame.view_proj * world_pos;
    out.world_position = world_pos.xyz;
    // Models are rigid (rotation + translation), so the model matrix
    // transforms normals directly.
    out.world_normal = normalize((model * vec4<f32>(vertex.normal, 0.0)).xyz);
    out.uv = vertex.uv;
    out.tint = instance.tint.rgb;
    return out;
}

@fragment
fn fs_main(in: VertexOutput) -> @location(0) vec4<f32> {
    let albedo = textureSample(diffuse_texture, diffuse_sampler, in.uv).rgb * in.tint;
    let ambient = frame.light_ambient.rgb * albedo;
    if (frame.light_position.w < 0.5) {
        return vec4<f32>(ambient, 1.0);
    }

    let normal = normalize(in.world_normal);
    let to_light = normalize(frame.light_position.xyz - in.world_position);
    let diffuse = frame.light_diffuse.rgb * max(dot(normal, to_light), 0.0) * albedo;

    let to_eye = normalize(frame.view_position.xyz - in.world_position);
    let reflected = reflect(-to_light, normal);
    let spec = pow(max(dot(to_eye, reflected), 0.0), frame.material.w);
    let specular = frame.light_specular.rgb * spec * frame.material.rgb;

    return vec4<f32>(ambient + diffuse + specular, 1.0);
}
"#;

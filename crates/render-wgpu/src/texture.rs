/// Side length of the generated texture in texels.
pub const CHECKER_SIZE: u32 = 64;
const CHECKER_CELLS: u32 = 8;

const LIGHT: [u8; 4] = [230, 230, 230, 255];
const DARK: [u8; 4] = [150, 150, 160, 255];

/// RGBA8 checkerboard, row-major, `CHECKER_SIZE`² texels.
pub fn checker_rgba() -> Vec<u8> {
    let cell = CHECKER_SIZE / CHECKER_CELLS;
    let mut data = Vec::with_capacity((CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
    for y in 0..CHECKER_SIZE {
        for x in 0..CHECKER_SIZE {
            let texel = if (x / cell + y / cell) % 2 == 0 { LIGHT } else { DARK };
            data.extend_from_slice(&texel);
        }
    }
    data
}

/// Upload the checkerboard and build its view and a repeating sampler.
pub fn create_checker(
    device: &wgpu::Device,
    queue: &wgpu::Queue,
) -> (wgpu::TextureView, wgpu::Sampler) {
    use wgpu::util::DeviceExt;

    let texture = device.create_texture_with_data(
        queue,
        &wgpu::TextureDescriptor {
            label: Some("checker_texture"),
            size: wgpu::Extent3d {
                width: CHECKER_SIZE,
                height: CHECKER_SIZE,
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8UnormSrgb,
            usage: wgpu::TextureUsages::TEXTURE_BINDING,
            view_formats: &[],
        },
        wgpu::util::TextureDataOrder::LayerMajor,
        &checker_rgba(),
    );

    let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("checker_sampler"),
        address_mode_u: wgpu::AddressMode::Repeat,
        address_mode_v: wgpu::AddressMode::Repeat,
        address_mode_w: wgpu::AddressMode::Repeat,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Nearest,
        ..Default::default()
    });

    (texture.create_view(&Default::default()), sampler)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texel(data: &[u8], x: u32, y: u32) -> [u8; 4] {
        let i = ((y * CHECKER_SIZE + x) * 4) as usize;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn checker_has_expected_size() {
        assert_eq!(checker_rgba().len(), (CHECKER_SIZE * CHECKER_SIZE * 4) as usize);
    }

    #[test]
    fn checker_alternates_per_cell() {
        let data = checker_rgba();
        assert_eq!(texel(&data, 0, 0), LIGHT);
        assert_eq!(texel(&data, 7, 7), LIGHT);
        assert_eq!(texel(&data, 8, 0), DARK);
        assert_eq!(texel(&data, 8, 8), LIGHT);
        assert_eq!(texel(&data, 63, 0), DARK);
    }
}
